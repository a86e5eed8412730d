//! Backend endpoint resolution
//!
//! Probes the configured candidate URLs with `GET /api/health` and settles on
//! the first one that reports `"status": "ok"`. A successful resolution is
//! cached, so resolving again is free and returns the same endpoint.

use std::future::Future;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::api::{DasperClient, HealthStatus};
use crate::config::Config;

/// The backend the client settled on
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub health: Option<HealthStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub url: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EndpointResolutionError {
    #[error("no backend endpoints configured")]
    NoCandidates,
    #[error("no backend endpoint answered: {}", summarize(.attempts))]
    Unreachable { attempts: Vec<ProbeFailure> },
}

fn summarize(attempts: &[ProbeFailure]) -> String {
    attempts
        .iter()
        .map(|a| format!("{} ({})", a.url, a.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Finds the backend to talk to. Must be safe to call more than once.
pub trait EndpointResolver: Send + Sync {
    fn resolve(
        &self,
    ) -> impl Future<Output = Result<EndpointConfig, EndpointResolutionError>> + Send;
}

pub struct HealthProbeResolver {
    candidates: Vec<String>,
    probe_timeout: Duration,
    resolved: OnceCell<EndpointConfig>,
}

impl HealthProbeResolver {
    pub fn new(candidates: Vec<String>, probe_timeout: Duration) -> Self {
        Self {
            candidates,
            probe_timeout,
            resolved: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint_candidates(), config.probe_timeout())
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    async fn probe(&self, url: &str) -> anyhow::Result<HealthStatus> {
        let client = DasperClient::new(url, self.probe_timeout)?;
        let health = client.health().await?;
        if !health.is_ok() {
            anyhow::bail!("health status '{}'", health.status);
        }
        Ok(health)
    }

    async fn probe_all(&self) -> Result<EndpointConfig, EndpointResolutionError> {
        if self.candidates.is_empty() {
            return Err(EndpointResolutionError::NoCandidates);
        }

        let mut attempts = Vec::new();
        for url in &self.candidates {
            match self.probe(url).await {
                Ok(health) => {
                    tracing::info!(url = %url, mongodb = health.mongodb, "Backend endpoint resolved");
                    return Ok(EndpointConfig {
                        base_url: url.clone(),
                        health: Some(health),
                    });
                }
                Err(e) => {
                    let reason = crate::logic::errors::format_error_message(&e);
                    tracing::debug!(url = %url, reason = %reason, "Endpoint probe failed");
                    attempts.push(ProbeFailure {
                        url: url.clone(),
                        reason,
                    });
                }
            }
        }

        Err(EndpointResolutionError::Unreachable { attempts })
    }
}

impl EndpointResolver for HealthProbeResolver {
    async fn resolve(&self) -> Result<EndpointConfig, EndpointResolutionError> {
        self.resolved
            .get_or_try_init(|| self.probe_all())
            .await
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_candidates() {
        let resolver = HealthProbeResolver::new(vec![], Duration::from_millis(100));
        assert!(matches!(
            resolver.resolve().await,
            Err(EndpointResolutionError::NoCandidates)
        ));
    }

    #[test]
    fn test_from_config_uses_cleaned_candidates() {
        let mut config = Config::default();
        config.prepend_endpoint("http://192.168.18.146:5000/");
        let resolver = HealthProbeResolver::from_config(&config);
        assert_eq!(
            resolver.candidates(),
            &[
                "http://192.168.18.146:5000".to_string(),
                "http://localhost:5000".to_string()
            ]
        );
    }

    #[test]
    fn test_unreachable_message_lists_attempts() {
        let err = EndpointResolutionError::Unreachable {
            attempts: vec![
                ProbeFailure {
                    url: "http://a".to_string(),
                    reason: "connection refused".to_string(),
                },
                ProbeFailure {
                    url: "http://b".to_string(),
                    reason: "timed out".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "no backend endpoint answered: http://a (connection refused), http://b (timed out)"
        );
    }
}
