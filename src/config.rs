use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable whose value is probed before the configured endpoints
pub const API_URL_ENV: &str = "DASPER_API_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
    #[serde(default = "default_min_splash_ms")]
    pub min_splash_ms: u64,
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default)]
    pub session_db: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
            min_splash_ms: default_min_splash_ms(),
            probe_timeout_secs: default_probe_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            dark_mode: default_dark_mode(),
            session_db: None,
        }
    }
}

fn default_endpoints() -> Vec<String> {
    vec!["http://localhost:5000".to_string()]
}

fn default_min_splash_ms() -> u64 {
    3000
}

fn default_probe_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_dark_mode() -> bool {
    true
}

impl Config {
    pub fn min_splash(&self) -> Duration {
        Duration::from_millis(self.min_splash_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured session database, or the platform cache location
    pub fn session_db_path(&self) -> PathBuf {
        self.session_db
            .clone()
            .unwrap_or_else(crate::utils::get_session_db_path)
    }

    /// Put an endpoint in front of the configured candidates
    pub fn prepend_endpoint(&mut self, url: &str) {
        self.endpoints.insert(0, url.to_string());
    }

    /// Ordered, deduplicated endpoint candidates with trailing slashes removed
    pub fn endpoint_candidates(&self) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();
        for raw in &self.endpoints {
            let url = raw.trim().trim_end_matches('/');
            if url.is_empty() || candidates.iter().any(|c| c == url) {
                continue;
            }
            candidates.push(url.to_string());
        }
        candidates
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Config =
            serde_yaml::from_str(source).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load config from a file, or defaults when no file was found
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml(&source)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/dasper/config.yaml`
/// then `./config.yaml` are tried, and `None` means "use defaults".
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("dasper").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
