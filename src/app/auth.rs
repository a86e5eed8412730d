//! Authentication orchestration methods
//!
//! Validates the sign-in and register forms locally, then hands the request
//! to the worker. The session change that follows is picked up by the
//! session watcher, not here.

use crate::App;
use dasper::logic::forms::{validate_register, validate_sign_in};
use dasper::services::ApiRequest;

impl App {
    pub(crate) fn submit_sign_in(&mut self) {
        match validate_sign_in(&self.model.ui.sign_in_form) {
            Ok((email, password)) => {
                self.model.ui.sign_in_form.error = None;
                self.model.ui.set_busy("Signing in");
                self.send_request(ApiRequest::SignIn { email, password });
            }
            Err(message) => self.model.ui.sign_in_form.error = Some(message),
        }
    }

    pub(crate) fn submit_register(&mut self) {
        match validate_register(&self.model.ui.register_form) {
            Ok(request) => {
                self.model.ui.register_form.error = None;
                self.model.ui.set_busy("Creating account");
                self.send_request(ApiRequest::Register(request));
            }
            Err(message) => self.model.ui.register_form.error = Some(message),
        }
    }

    /// Runs after the user answered `y` to the sign-out dialog
    pub(crate) fn sign_out(&mut self) {
        tracing::info!("Sign out requested");
        self.model.ui.set_busy("Signing out");
        self.send_request(ApiRequest::SignOut);
    }
}
