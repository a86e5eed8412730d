//! UI state transition logic
//!
//! Pure functions for toast timing, spinner animation and back navigation.

use crate::model::{AuthScreen, MainScreen};

/// How long a toast stays up
pub const TOAST_DURATION_MS: u128 = 1500;

/// Braille spinner, one frame per tick
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Spinner glyph for a tick count
///
/// # Examples
/// ```
/// use dasper::logic::ui::spinner_frame;
///
/// assert_eq!(spinner_frame(0), "⠋");
/// assert_eq!(spinner_frame(10), "⠋");
/// ```
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Screen Esc goes back to in the Auth stack (`None` at the root)
pub fn auth_back(screen: AuthScreen) -> Option<AuthScreen> {
    match screen {
        AuthScreen::Welcome => None,
        AuthScreen::SignIn | AuthScreen::Register => Some(AuthScreen::Welcome),
    }
}

/// Screen Esc goes back to in the Main stack (`None` at the root)
pub fn main_back(screen: MainScreen) -> Option<MainScreen> {
    match screen {
        MainScreen::Home => None,
        MainScreen::Profile => Some(MainScreen::Home),
        MainScreen::EditProfile => Some(MainScreen::Profile),
    }
}
