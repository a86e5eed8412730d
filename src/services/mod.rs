//! External Services
//!
//! This module contains services that interact with external systems or run
//! in the background:
//! - api: Request worker running authentication calls off the UI loop
//! - auth: Authentication service (the only session writer)
//! - endpoint: Backend endpoint resolution by health probe
//! - session: Session state holder with change notification
//! - splash: Splash visibility handle
//! - startup: Startup sequencer (resolution joined with minimum splash time)

pub mod api;
pub mod auth;
pub mod endpoint;
pub mod session;
pub mod splash;
pub mod startup;

// Re-export commonly used types for convenience
pub use api::{spawn_api_service, ApiRequest, ApiResponse};
pub use auth::AuthService;
pub use endpoint::{EndpointConfig, EndpointResolutionError, EndpointResolver, HealthProbeResolver};
pub use session::SessionHolder;
pub use splash::{Splash, SplashHandle};
pub use startup::{spawn_startup, StartupOutcome, StartupPhase, StartupSequencer};
