//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and user-facing messages
//! - formatting: Profile display helpers
//! - forms: Form validation and request building
//! - menu: Profile menu entries and toggle updates
//! - navigation: Session-gated stack selection
//! - ui: Toast timing, spinner frames, back navigation

pub mod errors;
pub mod formatting;
pub mod forms;
pub mod menu;
pub mod navigation;
pub mod ui;
