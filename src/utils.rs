/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("dasper-debug.log");
    path
}

/// Get the session database path, preferring the platform cache dir
pub fn get_session_db_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache_dir) => cache_dir.join("dasper").join("session.db"),
        None => {
            let mut path = std::env::temp_dir();
            path.push("dasper-cache");
            path.push("session.db");
            path
        }
    }
}
