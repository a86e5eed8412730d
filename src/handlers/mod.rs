//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: Responses from the request worker
//! - session: Session changes published by the auth service
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and process one event.

pub mod api;
pub mod keyboard;
pub mod session;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use session::handle_session_change;
