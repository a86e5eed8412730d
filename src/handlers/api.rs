//! API Response Handler
//!
//! Handles responses from the request worker. Session transitions are not
//! applied here: the auth service publishes them and the session watcher
//! picks them up. This handler owns the busy overlay, form errors, toasts and
//! the connection indicator.

use anyhow::Error;

use crate::App;
use dasper::logic::errors::{classify_error, format_error_message, user_message, ErrorType};
use dasper::logic::formatting::display_name;
use dasper::model::backend::ConnectionState;
use dasper::model::MainScreen;
use dasper::services::{ApiRequest, ApiResponse};

/// Whether an error means the server could not be reached at all
fn is_connectivity_error(error_type: &ErrorType) -> bool {
    matches!(
        error_type,
        ErrorType::ConnectionRefused | ErrorType::Timeout | ErrorType::NetworkError
    )
}

/// Update the connection indicator from the outcome of any backend call
fn record_connectivity(app: &mut App, error: Option<&Error>) {
    let Some(base_url) = app
        .model
        .backend
        .connection_state
        .base_url()
        .map(str::to_string)
    else {
        return;
    };

    match error {
        None => {
            if !app.model.backend.is_connected() {
                tracing::info!(%base_url, "Backend reachable again");
            }
            app.model.backend.connection_state = ConnectionState::Connected { base_url };
        }
        Some(e) => {
            let error_type = classify_error(e);
            if is_connectivity_error(&error_type) {
                tracing::warn!(error = %format_error_message(e), "Backend unreachable");
                app.model.backend.connection_state = ConnectionState::Degraded {
                    base_url,
                    error_type,
                    message: user_message(e),
                };
            } else {
                // The server answered, just not with success
                app.model.backend.connection_state = ConnectionState::Connected { base_url };
            }
        }
    }
}

/// Handle API response from background service
///
/// Response types:
/// - SessionRestored: startup restore settled
/// - SignInResult / RegisterResult: auth form submissions
/// - ProfileUpdated: edit profile form or a preference toggle
/// - SignedOut: local sign-out finished
/// - HealthResult: periodic or manual health check
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::SessionRestored { state } => {
            app.model.ui.clear_busy();
            tracing::debug!(state = state.as_str(), "Session restore settled");
        }

        ApiResponse::SignInResult { user } => {
            app.model.ui.clear_busy();
            app.model.ui.sign_in_form.clear_secrets();
            match user {
                Ok(user) => {
                    record_connectivity(app, None);
                    app.model.show_toast(format!("Welcome back, {}", display_name(&user)));
                }
                Err(e) => {
                    record_connectivity(app, Some(&e));
                    app.model.ui.sign_in_form.error = Some(user_message(&e));
                }
            }
        }

        ApiResponse::RegisterResult { user } => {
            app.model.ui.clear_busy();
            app.model.ui.register_form.clear_secrets();
            match user {
                Ok(user) => {
                    record_connectivity(app, None);
                    app.model.show_toast(format!("Welcome, {}", display_name(&user)));
                }
                Err(e) => {
                    record_connectivity(app, Some(&e));
                    app.model.ui.register_form.error = Some(user_message(&e));
                }
            }
        }

        ApiResponse::ProfileUpdated { user } => {
            app.model.ui.clear_busy();
            match user {
                Ok(_) => {
                    record_connectivity(app, None);
                    if app.model.navigation.main_screen == MainScreen::EditProfile {
                        app.close_edit_profile();
                    }
                    app.model.show_toast("Profile updated".to_string());
                }
                Err(e) => {
                    record_connectivity(app, Some(&e));
                    let message = user_message(&e);

                    if classify_error(&e) == ErrorType::Unauthorized {
                        tracing::info!("Token rejected during profile update, signing out");
                        app.model.show_toast(format!("Error: {}", message));
                        app.send_request(ApiRequest::SignOut);
                        return;
                    }

                    match app.model.ui.profile_form.as_mut() {
                        Some(form) => form.error = Some(message),
                        None => app.model.show_toast(format!("Error: {}", message)),
                    }
                }
            }
        }

        ApiResponse::SignedOut => {
            app.model.ui.clear_busy();
            app.model.show_toast("Signed out".to_string());
        }

        ApiResponse::HealthResult { health } => match health {
            Ok(health) => {
                record_connectivity(app, None);
                if !health.is_ok() {
                    tracing::warn!(status = %health.status, "Backend reports degraded health");
                }
                app.model.backend.health = Some(health);
            }
            Err(e) => {
                record_connectivity(app, Some(&e));
                app.model.backend.health = None;
            }
        },
    }
}
