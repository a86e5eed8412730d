//! Startup sequencing
//!
//! Keeps the splash up until endpoint resolution has settled AND a minimum
//! display time has passed, whichever comes later, then hides the splash and
//! reports ready once. Resolution failure does not stop startup.

use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

use super::endpoint::{EndpointConfig, EndpointResolutionError, EndpointResolver};
use super::splash::Splash;

/// Default minimum time the splash stays visible
pub const DEFAULT_MIN_SPLASH: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupPhase {
    Pending,
    Ready,
}

/// Result of a completed startup
#[derive(Debug)]
pub struct StartupOutcome {
    /// `None` when resolution failed; the app runs degraded
    pub endpoint: Option<EndpointConfig>,
    pub resolution_error: Option<EndpointResolutionError>,
    pub elapsed: Duration,
}

pub struct StartupSequencer<R, S> {
    resolver: R,
    splash: S,
    min_duration: Duration,
}

impl<R, S> StartupSequencer<R, S>
where
    R: EndpointResolver,
    S: Splash,
{
    pub fn new(resolver: R, splash: S, min_duration: Duration) -> Self {
        Self {
            resolver,
            splash,
            min_duration,
        }
    }

    /// Run the sequence. Consumes the sequencer: `Ready` is terminal.
    pub async fn run(self) -> StartupOutcome {
        let started = Instant::now();

        let (resolution, ()) = tokio::join!(
            self.resolver.resolve(),
            tokio::time::sleep(self.min_duration)
        );

        let (endpoint, resolution_error) = match resolution {
            Ok(endpoint) => (Some(endpoint), None),
            Err(e) => {
                tracing::warn!(error = %e, "Endpoint resolution failed, continuing startup");
                (None, Some(e))
            }
        };

        self.splash.hide();

        let elapsed = started.elapsed();
        tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "Startup ready");

        StartupOutcome {
            endpoint,
            resolution_error,
            elapsed,
        }
    }
}

/// Run the sequencer on its own task; the receiver fires exactly once
///
/// If the receiver is dropped before completion the final send is a no-op.
pub fn spawn_startup<R, S>(sequencer: StartupSequencer<R, S>) -> oneshot::Receiver<StartupOutcome>
where
    R: EndpointResolver + 'static,
    S: Splash + 'static,
{
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = sequencer.run().await;
        if tx.send(outcome).is_err() {
            tracing::debug!("Startup finished after its receiver was dropped");
        }
    });
    rx
}
