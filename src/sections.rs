pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SectionId {
    #[default]
    Profile,
    About,
    Experience,
    Projects,
    Certificates,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        Self::Profile,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Certificates,
        Self::Testimonials,
        Self::Contact,
    ];

    pub const NAV: [SectionId; 6] = [
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Certificates,
        Self::Testimonials,
        Self::Contact,
    ];

    pub const FOOTER: [SectionId; 5] = [
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Certificates,
        Self::Contact,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Certificates => "Certificates",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }
}

/// One intersection report for an observed element.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionVisibility {
    pub target_id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionVisibility {
    pub fn new(target_id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting,
            ratio,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    active: SectionId,
    threshold: f64,
}

impl SectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            active: SectionId::default(),
            threshold,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == id
    }

    /// Applies a batch of reports in order; the last crossing wins.
    /// Returns `true` when the active section changed.
    pub fn observe_batch<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = SectionVisibility>,
    {
        let before = self.active;

        for entry in entries {
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }

            if let Some(id) = SectionId::from_str(&entry.target_id) {
                self.active = id;
            }
        }

        self.active != before
    }

    /// Manual selection for hosts without a viewport.
    pub fn select(&mut self, id: SectionId) -> bool {
        let changed = self.active != id;
        self.active = id;
        changed
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_updates_active_section_and_later_crossing_supersedes() {
        let mut tracker = SectionTracker::default();

        assert!(tracker.observe_batch([SectionVisibility::new("projects", true, 0.6)]));
        assert_eq!(tracker.active(), SectionId::Projects);

        assert!(tracker.observe_batch([SectionVisibility::new("contact", true, 0.5)]));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn last_crossing_in_a_batch_wins() {
        let mut tracker = SectionTracker::default();

        tracker.observe_batch([
            SectionVisibility::new("about", true, 0.9),
            SectionVisibility::new("experience", true, 0.55),
        ]);

        assert_eq!(tracker.active(), SectionId::Experience);
    }

    #[test]
    fn entries_below_threshold_or_leaving_are_ignored() {
        let mut tracker = SectionTracker::default();

        let changed = tracker.observe_batch([
            SectionVisibility::new("about", true, 0.49),
            SectionVisibility::new("projects", false, 0.7),
        ]);

        assert!(!changed);
        assert_eq!(tracker.active(), SectionId::Profile);
    }

    #[test]
    fn unknown_targets_leave_highlight_stale() {
        let mut tracker = SectionTracker::default();
        tracker.select(SectionId::Certificates);

        assert!(!tracker.observe_batch([SectionVisibility::new("sidebar", true, 1.0)]));
        assert_eq!(tracker.active(), SectionId::Certificates);
    }

    #[test]
    fn section_ids_round_trip_and_nav_skips_profile() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_str(id.as_str()), Some(id));
        }

        assert!(!SectionId::NAV.contains(&SectionId::Profile));
        assert!(!SectionId::FOOTER.contains(&SectionId::Testimonials));
        assert_eq!(SectionId::Contact.anchor(), "#contact");
    }
}
