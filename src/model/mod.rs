//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **SessionState**: snapshot of the authentication status
//! - **NavigationModel**: current screen per stack, menu selection
//! - **UiModel**: color scheme, forms, dialogs, toast, spinner
//! - **BackendModel**: resolved endpoint and connection state
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod backend;
pub mod navigation;
pub mod session;
pub mod types;
pub mod ui;

pub use backend::BackendModel;
pub use navigation::NavigationModel;
pub use session::{SessionState, UserProfile};
pub use types::*;
pub use ui::UiModel;

use crate::ColorScheme;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Last session state published by the authentication service
    pub session: SessionState,

    /// Screen positions inside each stack
    pub navigation: NavigationModel,

    /// UI preferences and popups
    pub ui: UiModel,

    /// Endpoint and connection state
    pub backend: BackendModel,
}

impl Model {
    pub fn new(color_scheme: ColorScheme) -> Self {
        Self {
            session: SessionState::Unknown,
            navigation: NavigationModel::new(),
            ui: UiModel::new(color_scheme),
            backend: BackendModel::new(),
        }
    }

    /// Stack the navigator mounts for the current session
    pub fn stack(&self) -> StackId {
        crate::logic::navigation::select_stack(&self.session)
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(ColorScheme::Dark);
        assert_eq!(model.session, SessionState::Unknown);
        assert_eq!(model.stack(), StackId::AuthStack);
        assert!(model.current_user().is_none());
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(ColorScheme::Light);
        let _cloned = model.clone();
    }

    #[test]
    fn test_stack_follows_session() {
        let mut model = Model::new(ColorScheme::Dark);
        let user: UserProfile = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        model.session = SessionState::Authenticated(user);
        assert_eq!(model.stack(), StackId::MainStack);
        model.session = SessionState::Unauthenticated;
        assert_eq!(model.stack(), StackId::AuthStack);
    }
}
