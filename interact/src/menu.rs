// off-canvas menu state
//
// the toggle button carries aria-expanded and a label matching the action it
// will perform, and the panel gets `is-open` while expanded

// the menu collapses into the header bar at and above this width
pub const DESKTOP_QUERY: &str = "(min-width: 56rem)";

pub const OPEN_CLASS: &str = "is-open";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // returns whether the key was handled
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            return true;
        }
        false
    }

    // the desktop layout has no off-canvas panel, so crossing into it always
    // collapses the menu
    pub fn on_breakpoint(&mut self, desktop: bool) {
        if desktop {
            self.open = false;
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    pub fn aria_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open { OPEN_CLASS } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_aria_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.aria_label(), "Open menu");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_label(), "Close menu");
        assert_eq!(menu.panel_class(), "is-open");
    }

    #[test]
    fn escape_only_closes_open_menu() {
        let mut menu = MenuState::default();
        assert!(!menu.on_key("Escape"));

        menu.toggle();
        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn desktop_breakpoint_collapses() {
        let mut menu = MenuState::default();
        menu.toggle();

        menu.on_breakpoint(false);
        assert!(menu.is_open());

        menu.on_breakpoint(true);
        assert!(!menu.is_open());
    }
}
