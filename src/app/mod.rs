//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's model module)
//! - Services (request worker, session store)
//! - Logic (pure business logic: forms, menu, navigation)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod auth;
pub(crate) mod profile;
pub(crate) mod startup;
