use serde::Deserialize;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Experienced,
    #[serde(other)]
    Other,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Experienced => "Experienced",
            Self::Other => "Proficient",
        }
    }

    /// Width of the skill bar.
    pub fn percentage(self) -> u8 {
        match self {
            Self::Beginner => 30,
            Self::Intermediate => 60,
            Self::Experienced => 90,
            Self::Other => 75,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub preview: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub position: String,
    pub text: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub linkedin_display: String,
    pub github: String,
    pub twitter: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub greeting: String,
    pub photo: String,
    pub cv_href: String,
    pub cv_file_name: String,
    pub links: SocialLinks,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct About {
    pub photo: String,
    pub years_badge: String,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub bio: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub blurb: String,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Everything the static sections render. Loaded once at start-up.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub about: About,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactDetails,
}

impl SiteContent {
    pub fn embedded() -> Result<Self, serde_json::Error> {
        serde_json::from_str(EMBEDDED_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().expect("embedded content should parse");

        assert_eq!(content.profile.full_name(), "Bonny Modipa");
        assert_eq!(content.skill_groups.len(), 2);
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.certificates.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.contact.mailto(), "mailto:bonnysithole76@gmail.com");
    }

    #[test]
    fn skill_levels_map_to_bar_widths() {
        assert_eq!(SkillLevel::Beginner.percentage(), 30);
        assert_eq!(SkillLevel::Intermediate.percentage(), 60);
        assert_eq!(SkillLevel::Experienced.percentage(), 90);
        assert_eq!(SkillLevel::Other.percentage(), 75);
    }

    #[test]
    fn unknown_skill_level_falls_back() {
        let skill: Skill =
            serde_json::from_str(r#"{ "name": "Rust", "level": "Expert" }"#).expect("valid skill");

        assert_eq!(skill.level, SkillLevel::Other);
    }
}
