//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, forms, dialogs, and visual state.

use std::time::Instant;

use super::types::{ConfirmAction, FormState};
use crate::ColorScheme;

/// UI preferences, forms and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Palette (dark mode preference)
    pub color_scheme: ColorScheme,

    // ============================================
    // FORMS
    // ============================================
    pub sign_in_form: FormState,

    pub register_form: FormState,

    /// Present while the Edit Profile screen is open
    pub profile_form: Option<FormState>,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Pending y/n confirmation
    pub confirm_action: Option<ConfirmAction>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Label of the operation the spinner overlay is waiting on
    pub busy: Option<String>,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Advances once per spinner frame
    pub spinner_tick: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self {
            color_scheme,
            sign_in_form: FormState::sign_in(),
            register_form: FormState::register(),
            profile_form: None,
            confirm_action: None,
            toast_message: None,
            busy: None,
            spinner_tick: 0,
            should_quit: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.confirm_action.is_some()
    }

    pub fn close_all_modals(&mut self) {
        self.confirm_action = None;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => {
                crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
            }
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn set_busy(&mut self, label: &str) {
        self.busy = Some(label.to_string());
    }

    pub fn clear_busy(&mut self) {
        self.busy = None;
    }

    /// Drop everything typed into the Auth stack forms
    pub fn reset_auth_forms(&mut self) {
        self.sign_in_form = FormState::sign_in();
        self.register_form = FormState::register();
    }
}
