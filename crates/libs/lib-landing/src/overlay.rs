//! Overlay flags
//!
//! The terminal overlay and the mobile navigation drawer are toggled
//! independently of the intro state. Both are freely re-enterable.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub terminal_open: bool,
    pub drawer_open: bool,
}

impl OverlayState {
    /// "> INFILTRATE SYSTEM" control.
    pub fn open_terminal(&mut self) {
        self.terminal_open = true;
    }

    /// Close callback handed to the terminal overlay.
    pub fn close_terminal(&mut self) {
        self.terminal_open = false;
    }

    /// Hamburger button.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_cycles() {
        let mut overlay = OverlayState::default();
        for _ in 0..3 {
            overlay.open_terminal();
            assert!(overlay.terminal_open);
            overlay.open_terminal();
            assert!(overlay.terminal_open);
            overlay.close_terminal();
            assert!(!overlay.terminal_open);
        }
        assert_eq!(overlay, OverlayState::default());
    }

    #[test]
    fn test_drawer_toggle_is_independent() {
        let mut overlay = OverlayState::default();
        overlay.open_terminal();
        overlay.toggle_drawer();
        assert!(overlay.drawer_open);
        overlay.toggle_drawer();
        assert!(!overlay.drawer_open);
        overlay.toggle_drawer();
        overlay.close_drawer();
        assert!(!overlay.drawer_open);
        assert!(overlay.terminal_open);
    }
}
