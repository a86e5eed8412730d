//! DASPER terminal client library
//!
//! Exposes the session model, pure logic, services and backend client so the
//! binary and the integration tests share one implementation.

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;
pub mod session_store;
pub mod utils;

/// Palette selection, driven by the user's dark mode preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
}

impl ColorScheme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }
}
