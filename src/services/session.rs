//! Session holder
//!
//! Owns the process-wide `SessionState` and notifies subscribers on every
//! change. It is created once at startup and passed (as `Arc`) to whoever
//! needs to read or, in the authentication service's case, write it.

use tokio::sync::watch;

use crate::model::SessionState;

pub struct SessionHolder {
    tx: watch::Sender<SessionState>,
}

impl SessionHolder {
    /// New holder in the `Unknown` state
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::Unknown);
        Self { tx }
    }

    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Publish a new state; subscribers see it even with no one listening now
    pub fn set(&self, state: SessionState) {
        tracing::debug!(state = state.as_str(), "Session state changed");
        self.tx.send_replace(state);
    }
}

impl Default for SessionHolder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserProfile;

    #[test]
    fn test_starts_unknown() {
        let holder = SessionHolder::new();
        assert_eq!(holder.current(), SessionState::Unknown);
        assert!(!holder.is_authenticated());
    }

    #[test]
    fn test_set_without_subscribers() {
        let holder = SessionHolder::new();
        holder.set(SessionState::Unauthenticated);
        assert_eq!(holder.current(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_subscriber_notified() {
        let holder = SessionHolder::new();
        let mut rx = holder.subscribe();
        assert!(!rx.has_changed().unwrap());

        let user: UserProfile = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        holder.set(SessionState::Authenticated(user));

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_authenticated());
        assert!(!rx.has_changed().unwrap());
    }
}
