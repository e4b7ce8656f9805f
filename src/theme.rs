#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    BlueDark,
    Black,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Light, Self::BlueDark, Self::Black];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::BlueDark => "blue-dark",
            Self::Black => "black",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "blue-dark" => Some(Self::BlueDark),
            "black" => Some(Self::Black),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light theme",
            Self::BlueDark => "Blue dark theme",
            Self::Black => "Black theme",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::BlueDark => "▣",
            Self::Black => "☾",
        }
    }

    pub fn styles(self) -> StyleSet {
        match self {
            Self::Light => StyleSet {
                background: "bg-gray-100",
                text: "text-gray-800",
                card_bg: "bg-white",
                card_border: "border-gray-200",
                heading: "text-gray-900",
                subheading: "text-gray-700",
                accent: "text-[#191970]",
                accent_bg: "bg-[#191970]",
                button_text: "text-white",
                button_bg: "bg-[#191970] hover:bg-[#0c0c47]",
                input_bg: "bg-white border-gray-300",
                nav_bg: "bg-white",
                footer_bg: "bg-gray-200",
                muted: "text-gray-500",
            },
            Self::BlueDark => StyleSet {
                background: "bg-[#0c1e3e]",
                text: "text-gray-200",
                card_bg: "bg-[#162a4a]",
                card_border: "border-[#1e3a64]",
                heading: "text-white",
                subheading: "text-gray-300",
                accent: "text-[#4169E1]",
                accent_bg: "bg-[#4169E1]",
                button_text: "text-white",
                button_bg: "bg-[#4169E1] hover:bg-[#3a5ecc]",
                input_bg: "bg-[#1e3a64] border-[#2a4a7a]",
                nav_bg: "bg-[#0c1e3e]/80 backdrop-blur-sm",
                footer_bg: "bg-[#0a1835]",
                muted: "text-gray-400",
            },
            Self::Black => StyleSet {
                background: "bg-black",
                text: "text-gray-300",
                card_bg: "bg-gray-900",
                card_border: "border-gray-800",
                heading: "text-white",
                subheading: "text-gray-400",
                accent: "text-[#2a4cad]",
                accent_bg: "bg-[#2a4cad]",
                button_text: "text-white",
                button_bg: "bg-[#2a4cad] hover:bg-[#1e3a8a]",
                input_bg: "bg-gray-900 border-gray-800",
                nav_bg: "bg-black/80 backdrop-blur-sm",
                footer_bg: "bg-black",
                muted: "text-gray-400",
            },
        }
    }
}

/// Concrete class lists for each semantic style role of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSet {
    pub background: &'static str,
    pub text: &'static str,
    pub card_bg: &'static str,
    pub card_border: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub accent: &'static str,
    pub accent_bg: &'static str,
    pub button_text: &'static str,
    pub button_bg: &'static str,
    pub input_bg: &'static str,
    pub nav_bg: &'static str,
    pub footer_bg: &'static str,
    pub muted: &'static str,
}

impl StyleSet {
    pub fn roles(&self) -> [(&'static str, &'static str); 14] {
        [
            ("background", self.background),
            ("text", self.text),
            ("card_bg", self.card_bg),
            ("card_border", self.card_border),
            ("heading", self.heading),
            ("subheading", self.subheading),
            ("accent", self.accent),
            ("accent_bg", self.accent_bg),
            ("button_text", self.button_text),
            ("button_bg", self.button_bg),
            ("input_bg", self.input_bg),
            ("nav_bg", self.nav_bg),
            ("footer_bg", self.footer_bg),
            ("muted", self.muted),
        ]
    }
}

/// Owns the active theme and the style set derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeManager {
    theme: Theme,
    styles: StyleSet,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            styles: theme.styles(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn styles(&self) -> StyleSet {
        self.styles
    }

    /// Returns `false` when `theme` is already active.
    pub fn set_theme(&mut self, theme: Theme) -> bool {
        if theme == self.theme {
            return false;
        }

        self.theme = theme;
        self.styles = theme.styles();
        true
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_fills_every_style_role() {
        for theme in Theme::ALL {
            for (role, value) in theme.styles().roles() {
                assert!(
                    !value.trim().is_empty(),
                    "{} leaves role {role} empty",
                    theme.as_str()
                );
            }
        }
    }

    #[test]
    fn fresh_manager_starts_on_blue_dark() {
        let manager = ThemeManager::default();

        assert_eq!(manager.theme(), Theme::BlueDark);
        assert_eq!(manager.styles(), Theme::BlueDark.styles());
    }

    #[test]
    fn set_theme_replaces_styles_synchronously() {
        let mut manager = ThemeManager::default();

        assert!(manager.set_theme(Theme::Light));
        assert_eq!(manager.theme(), Theme::Light);
        assert_eq!(manager.styles().background, "bg-gray-100");
    }

    #[test]
    fn set_theme_to_current_value_is_idempotent() {
        let mut manager = ThemeManager::new(Theme::Black);
        let before = manager.clone();

        assert!(!manager.set_theme(Theme::Black));
        assert_eq!(manager, before);
    }

    #[test]
    fn theme_names_parse_back() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("dark"), None);
    }
}
