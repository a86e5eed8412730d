// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - theme: Dark and light palettes
// - layout: Calculates screen layout (header, content, legend, status)
// - render: Main orchestration function that picks splash or the mounted stack
// - splash: Startup splash with spinner
// - auth: Welcome, sign in and register screens
// - main_stack: Home, profile menu and edit profile screens
// - forms: Shared text form widget
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (endpoint, session)
// - dialogs: Confirmation dialog and busy overlay
// - toast: Renders toast notifications (brief pop-up messages)

pub mod auth;
pub mod dialogs;
pub mod forms;
pub mod layout;
pub mod legend;
pub mod main_stack;
pub mod render;
pub mod splash;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
