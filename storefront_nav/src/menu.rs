/// Icon text while the menu is open.
pub const ICON_OPEN: &str = "close";
/// Icon text while the menu is closed.
pub const ICON_CLOSED: &str = "menu";

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the panel is shown.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return whether the menu is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Apply a viewport resize: widths above `breakpoint` force the menu shut.
    /// Returns whether anything changed.
    pub fn resize(&mut self, width: f64, breakpoint: f64) -> bool {
        if width > breakpoint { self.close() } else { false }
    }

    /// Text for the hamburger icon.
    pub fn icon(self) -> &'static str {
        if self.open { ICON_OPEN } else { ICON_CLOSED }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_icon() {
        let mut menu = MenuState::default();
        assert_eq!(menu.icon(), "menu");

        assert!(menu.toggle());
        assert_eq!(menu.icon(), "close");

        assert!(!menu.toggle());
        assert_eq!(menu.icon(), "menu");
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();

        assert!(menu.close());
        assert!(!menu.close());
        assert!(!menu.is_open());
    }

    #[test]
    fn wide_resize_closes_open_menu() {
        let mut menu = MenuState::default();
        menu.toggle();

        assert!(!menu.resize(768.0, 768.0));
        assert!(menu.is_open());

        assert!(menu.resize(1024.0, 768.0));
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), "menu");
    }

    #[test]
    fn resize_while_closed_is_noop() {
        let mut menu = MenuState::default();
        assert!(!menu.resize(1920.0, 768.0));
        assert!(!menu.resize(320.0, 768.0));
        assert!(!menu.is_open());
    }
}
