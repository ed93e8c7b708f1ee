//! Endpoint configuration (code > env > defaults).

use std::time::Duration;

/// Default backend origin, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where and how the controller talks to the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the analysis backend, without a trailing slash.
    pub base_url: String,
    /// Transport-level timeout for each request. No additional timeout or
    /// cancellation is layered on top.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load from environment variables (`IRIS_BASE_URL`,
    /// `IRIS_TIMEOUT_SECS`), falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("IRIS_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(secs) = std::env::var("IRIS_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
