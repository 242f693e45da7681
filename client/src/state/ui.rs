//! Local UI chrome state (mobile navigation drawer).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth state so opening the
//! drawer never re-runs route guards.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the sidebar drawer on narrow screens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_open: bool,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Close the drawer after navigating.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
