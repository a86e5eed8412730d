//! Splash visibility
//!
//! Clones of a `SplashHandle` share one flag. The startup sequencer hides it,
//! the renderer reads it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Something that can take the splash screen down
pub trait Splash: Send + Sync {
    /// Idempotent; calling it again after the first time does nothing
    fn hide(&self);
}

#[derive(Clone, Debug)]
pub struct SplashHandle {
    visible: Arc<AtomicBool>,
}

impl SplashHandle {
    /// Visible splash
    pub fn new() -> Self {
        Self {
            visible: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }
}

impl Default for SplashHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Splash for SplashHandle {
    fn hide(&self) {
        if self.visible.swap(false, Ordering::AcqRel) {
            tracing::debug!("Splash hidden");
        }
    }
}
