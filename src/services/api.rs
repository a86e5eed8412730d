use anyhow::Result;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use super::auth::AuthService;
use crate::api::{HealthStatus, ProfileUpdate, RegisterRequest, UserProfile};
use crate::model::SessionState;

/// Unique identifier for deduplicating in-flight requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    RestoreSession,
    SignIn,
    Register,
    UpdateProfile,
    SignOut,
    Health,
}

/// Requests the UI hands to the background worker
#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Turn the stored token (if any) into a session
    RestoreSession,

    SignIn { email: String, password: String },

    Register(RegisterRequest),

    UpdateProfile(ProfileUpdate),

    SignOut,

    /// Re-check backend health (connection indicator)
    CheckHealth,
}

impl ApiRequest {
    /// Generate a key for deduplication: one of each kind in flight at a time
    pub(crate) fn key(&self) -> RequestKey {
        match self {
            ApiRequest::RestoreSession => RequestKey::RestoreSession,
            ApiRequest::SignIn { .. } => RequestKey::SignIn,
            ApiRequest::Register(_) => RequestKey::Register,
            ApiRequest::UpdateProfile(_) => RequestKey::UpdateProfile,
            ApiRequest::SignOut => RequestKey::SignOut,
            ApiRequest::CheckHealth => RequestKey::Health,
        }
    }
}

/// Worker responses, one per accepted request
#[derive(Debug)]
pub enum ApiResponse {
    SessionRestored { state: SessionState },

    SignInResult { user: Result<UserProfile> },

    RegisterResult { user: Result<UserProfile> },

    ProfileUpdated { user: Result<UserProfile> },

    SignedOut,

    HealthResult { health: Result<HealthStatus> },
}

/// Keys of requests currently running, shared with the request tasks
///
/// A task releases its key before sending its response, so a caller that
/// resubmits as soon as it sees the response is never deduplicated.
#[derive(Clone, Default)]
pub(crate) struct InFlight(Arc<Mutex<HashSet<RequestKey>>>);

impl InFlight {
    /// Returns false when a request of this kind is already running
    fn claim(&self, key: &RequestKey) -> bool {
        self.lock().insert(key.clone())
    }

    fn release(&self, key: &RequestKey) {
        self.lock().remove(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<RequestKey>> {
        // The set stays consistent even if a holder panicked
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Worker that runs authentication calls off the UI loop
pub struct ApiService {
    auth: Arc<AuthService>,
    in_flight: InFlight,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub(crate) fn new(
        auth: Arc<AuthService>,
        response_tx: mpsc::UnboundedSender<ApiResponse>,
    ) -> Self {
        Self {
            auth,
            in_flight: InFlight::default(),
            response_tx,
        }
    }

    /// Start a request unless one of the same kind is still running
    fn dispatch(&self, request: ApiRequest) {
        let key = request.key();
        if !self.in_flight.claim(&key) {
            tracing::debug!(?key, "Dropping duplicate in-flight request");
            return;
        }

        let auth = Arc::clone(&self.auth);
        let response_tx = self.response_tx.clone();
        let in_flight = self.in_flight.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(&auth, request).await;
            in_flight.release(&key);
            if response_tx.send(response).is_err() {
                tracing::debug!(?key, "Response dropped, UI side is gone");
            }
        });
    }

    async fn execute_request(auth: &AuthService, request: ApiRequest) -> ApiResponse {
        match request {
            ApiRequest::RestoreSession => ApiResponse::SessionRestored {
                state: auth.restore_session().await,
            },

            ApiRequest::SignIn { email, password } => ApiResponse::SignInResult {
                user: auth.sign_in(&email, &password).await,
            },

            ApiRequest::Register(request) => ApiResponse::RegisterResult {
                user: auth.register(&request).await,
            },

            ApiRequest::UpdateProfile(update) => ApiResponse::ProfileUpdated {
                user: auth.update_profile(&update).await,
            },

            ApiRequest::SignOut => {
                auth.sign_out();
                ApiResponse::SignedOut
            }

            ApiRequest::CheckHealth => ApiResponse::HealthResult {
                health: auth.health().await,
            },
        }
    }
}

/// Spawn the API service worker
pub fn spawn_api_service(
    auth: Arc<AuthService>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let service = ApiService::new(auth, response_tx);

        // Ends when the UI side drops its sender
        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        tracing::debug!("API service stopped");
    });

    (request_tx, response_rx)
}
