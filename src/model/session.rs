//! Session Model
//!
//! Authentication status of the current user. Only the authentication
//! service changes it; everything else reads a snapshot.

pub use crate::api::UserProfile;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    /// Startup, resolution pending
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SessionState::Unknown => "unknown",
            SessionState::Unauthenticated => "signed out",
            SessionState::Authenticated(_) => "signed in",
        }
    }
}
