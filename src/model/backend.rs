//! Backend Model
//!
//! Which backend endpoint the client talks to and whether it answered.

use crate::api::HealthStatus;
use crate::logic::errors::ErrorType;

/// Connection state for the DASPER backend
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// Startup: endpoint candidates are being probed
    Resolving,
    /// A candidate answered the health check
    Connected { base_url: String },
    /// No candidate answered (or a later call failed); requests still go to `base_url`
    Degraded {
        base_url: String,
        error_type: ErrorType,
        message: String,
    },
}

impl ConnectionState {
    pub fn base_url(&self) -> Option<&str> {
        match self {
            ConnectionState::Resolving => None,
            ConnectionState::Connected { base_url } => Some(base_url),
            ConnectionState::Degraded { base_url, .. } => Some(base_url),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BackendModel {
    pub connection_state: ConnectionState,

    /// Last health report from the backend
    pub health: Option<HealthStatus>,
}

impl Default for BackendModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendModel {
    pub fn new() -> Self {
        Self {
            connection_state: ConnectionState::Resolving,
            health: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.connection_state, ConnectionState::Connected { .. })
    }
}
