//! Startup orchestration methods
//!
//! Picks up the sequencer's one-shot outcome, connects the request worker to
//! the resolved endpoint (or the first candidate when resolution failed) and
//! kicks off session restore.

use std::sync::Arc;
use tokio::sync::oneshot::error::TryRecvError;

use crate::App;
use dasper::api::DasperClient;
use dasper::logic::errors::ErrorType;
use dasper::model::backend::ConnectionState;
use dasper::services::{
    spawn_api_service, ApiRequest, AuthService, EndpointResolutionError, Splash, StartupOutcome,
    StartupPhase,
};

impl App {
    /// Non-blocking check for the startup outcome
    pub(crate) fn poll_startup(&mut self) {
        let Some(rx) = self.startup_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.startup_rx = None;
                self.on_startup_ready(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                // Sequencer task died; run with the first candidate rather than hang on the splash
                self.startup_rx = None;
                tracing::error!("Startup task ended without an outcome");
                self.splash_fallback();
            }
        }
    }

    fn splash_fallback(&mut self) {
        self.splash.hide();
        self.on_startup_ready(StartupOutcome {
            endpoint: None,
            resolution_error: None,
            elapsed: std::time::Duration::ZERO,
        });
    }

    pub(crate) fn on_startup_ready(&mut self, outcome: StartupOutcome) {
        self.startup_phase = StartupPhase::Ready;

        let base_url = match &outcome.endpoint {
            Some(endpoint) => {
                self.model.backend.connection_state = ConnectionState::Connected {
                    base_url: endpoint.base_url.clone(),
                };
                self.model.backend.health = endpoint.health.clone();
                endpoint.base_url.clone()
            }
            None => {
                let base_url = self
                    .config
                    .endpoint_candidates()
                    .into_iter()
                    .next()
                    .unwrap_or_default();
                let message = match outcome.resolution_error {
                    Some(EndpointResolutionError::NoCandidates) => "No server configured",
                    _ => "Server unreachable",
                }
                .to_string();
                self.model.backend.connection_state = ConnectionState::Degraded {
                    base_url: base_url.clone(),
                    error_type: ErrorType::NetworkError,
                    message,
                };
                base_url
            }
        };

        tracing::info!(
            %base_url,
            connected = self.model.backend.is_connected(),
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "Startup complete"
        );

        let client = match DasperClient::new(base_url, self.config.request_timeout()) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build HTTP client");
                self.model.show_toast(format!("Error: {}", e));
                return;
            }
        };

        let auth = Arc::new(AuthService::new(
            client,
            Arc::clone(&self.store),
            Arc::clone(&self.session),
        ));
        let (api_tx, api_rx) = spawn_api_service(auth);
        self.api_tx = Some(api_tx);
        self.api_rx = Some(api_rx);

        self.model.ui.set_busy("Restoring session");
        self.send_request(ApiRequest::RestoreSession);
    }

    /// Hand a request to the worker, or explain why it cannot run yet
    pub(crate) fn send_request(&mut self, request: ApiRequest) {
        let sent = self
            .api_tx
            .as_ref()
            .map(|tx| tx.send(request).is_ok())
            .unwrap_or(false);

        if !sent {
            self.model.ui.clear_busy();
            self.model.show_toast("Error: Not connected yet".to_string());
        }
    }
}
