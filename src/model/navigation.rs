//! Navigation Model
//!
//! This sub-model contains the current screen inside each stack and the
//! profile menu selection. Which stack is mounted is never stored; it is
//! derived from the session on every frame.

use super::types::{AuthScreen, MainScreen};

/// Navigation state (screen per stack, menu selection)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Current screen of the Auth stack
    pub auth_screen: AuthScreen,

    /// Current screen of the Main stack
    pub main_screen: MainScreen,

    /// Selected entry in the profile menu
    pub menu_selection: usize,
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            auth_screen: AuthScreen::Welcome,
            main_screen: MainScreen::Home,
            menu_selection: 0,
        }
    }

    /// Forget Main stack position (after sign-out)
    pub fn reset_main(&mut self) {
        self.main_screen = MainScreen::Home;
        self.menu_selection = 0;
    }

    /// Forget Auth stack position (after sign-in)
    pub fn reset_auth(&mut self) {
        self.auth_screen = AuthScreen::Welcome;
    }

    pub fn select_next_menu(&mut self, menu_len: usize) {
        if menu_len > 0 {
            self.menu_selection = (self.menu_selection + 1).min(menu_len - 1);
        }
    }

    pub fn select_prev_menu(&mut self) {
        self.menu_selection = self.menu_selection.saturating_sub(1);
    }
}
