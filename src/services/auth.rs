//! Authentication service
//!
//! The only writer of the session holder. Talks to `/api/auth/*`, keeps the
//! bearer token in memory and in the session store, and publishes every
//! sign-in, sign-out and restore as a new `SessionState`.
//!
//! Restoring fails closed: anything short of a profile fetched with the
//! stored token leaves the session `Unauthenticated`.

use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex, PoisonError};

use super::session::SessionHolder;
use crate::api::{DasperClient, HealthStatus, ProfileUpdate, RegisterRequest, UserProfile};
use crate::logic::errors::{classify_error, ErrorType};
use crate::logic::forms::normalize_email;
use crate::model::SessionState;
use crate::session_store::{SessionReadError, SharedSessionStore, StoredSession};

pub struct AuthService {
    client: DasperClient,
    store: SharedSessionStore,
    session: Arc<SessionHolder>,
    token: Mutex<Option<String>>,
}

impl AuthService {
    pub fn new(client: DasperClient, store: SharedSessionStore, session: Arc<SessionHolder>) -> Self {
        Self {
            client,
            store,
            session,
            token: Mutex::new(None),
        }
    }

    pub fn session(&self) -> &Arc<SessionHolder> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn read_stored_session(&self) -> Result<Option<StoredSession>, SessionReadError> {
        let store = self.store.lock().map_err(|_| SessionReadError::Poisoned)?;
        store.load_session()
    }

    fn persist(&self, token: &str, user: &UserProfile) {
        let result = match self.store.lock() {
            Ok(store) => store.save_session(token, user),
            Err(_) => Err(anyhow!("session store lock poisoned")),
        };
        if let Err(e) = result {
            // The session still works for this run, it just won't survive a restart
            tracing::warn!(error = %e, "Failed to persist session");
        }
    }

    fn forget_stored(&self) {
        let result = match self.store.lock() {
            Ok(store) => store.clear_session(),
            Err(_) => Err(anyhow!("session store lock poisoned")),
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }

    fn publish_authenticated(&self, token: String, user: UserProfile) {
        self.persist(&token, &user);
        self.set_token(Some(token));
        self.session.set(SessionState::Authenticated(user));
    }

    /// Turn a stored token back into a session, or settle on `Unauthenticated`
    pub async fn restore_session(&self) -> SessionState {
        let stored = match self.read_stored_session() {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::info!("No stored session");
                self.session.set(SessionState::Unauthenticated);
                return SessionState::Unauthenticated;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored session, signing out");
                self.session.set(SessionState::Unauthenticated);
                return SessionState::Unauthenticated;
            }
        };

        match self.client.get_profile(&stored.access_token).await {
            Ok(user) => {
                tracing::info!(email = %user.email, "Session restored");
                self.publish_authenticated(stored.access_token, user);
            }
            Err(e) => {
                if classify_error(&e) == ErrorType::Unauthorized {
                    tracing::info!("Stored session rejected by backend, clearing it");
                    self.forget_stored();
                } else {
                    // Keep the token: the backend may just be unreachable right now
                    tracing::warn!(error = %e, "Session restore failed");
                }
                self.session.set(SessionState::Unauthenticated);
            }
        }

        self.session.current()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        let auth = self.client.login(&normalize_email(email), password).await?;
        tracing::info!(email = %auth.user.email, "Signed in");
        self.publish_authenticated(auth.access_token, auth.user.clone());
        Ok(auth.user)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        let request = RegisterRequest {
            email: normalize_email(&request.email),
            ..request.clone()
        };
        let auth = self.client.register(&request).await?;
        tracing::info!(email = %auth.user.email, "Registered");
        self.publish_authenticated(auth.access_token, auth.user.clone());
        Ok(auth.user)
    }

    /// Discard the session locally; the backend keeps no logout state
    pub fn sign_out(&self) {
        self.set_token(None);
        self.forget_stored();
        self.session.set(SessionState::Unauthenticated);
        tracing::info!("Signed out");
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let token = match (self.current_token(), self.session.is_authenticated()) {
            (Some(token), true) => token,
            _ => return Err(anyhow!("Not signed in")),
        };

        self.client.update_profile(&token, update).await?;
        let user = self.client.get_profile(&token).await?;

        // A sign-out that landed while the request was in flight wins
        if self.current_token().as_deref() != Some(token.as_str()) {
            return Err(anyhow!("Signed out before the update finished"));
        }

        self.publish_authenticated(token, user.clone());
        Ok(user)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        self.client.health().await
    }
}
