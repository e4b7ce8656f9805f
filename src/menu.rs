#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    LinkActivated,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn link_activated(&mut self) {
        self.open = false;
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::Toggle => self.toggle(),
            MenuAction::LinkActivated => self.link_activated(),
        }
    }

    pub fn button_label(self) -> &'static str {
        if self.open {
            "Close navigation menu"
        } else {
            "Open navigation menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_toggles_alternate() {
        let mut menu = MobileMenu::default();
        let mut seen = Vec::new();

        for _ in 0..3 {
            menu.apply(MenuAction::Toggle);
            seen.push(menu.is_open());
        }

        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn link_activation_closes_regardless_of_parity() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.apply(MenuAction::LinkActivated);
        assert!(!menu.is_open());

        menu.apply(MenuAction::LinkActivated);
        assert!(!menu.is_open());
    }
}
