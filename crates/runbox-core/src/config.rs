//! Runner configuration.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://emkc.org/api/v2/piston";

/// Remote compile-phase timeout forwarded in every execute payload, in ms.
pub const COMPILE_TIMEOUT_MS: i64 = 10_000;
/// Remote run-phase timeout forwarded in every execute payload, in ms.
pub const RUN_TIMEOUT_MS: i64 = 3_000;
/// Memory limits are forwarded unset; -1 means unbounded on the service side.
pub const MEMORY_LIMIT_UNBOUNDED: i64 = -1;

/// Configuration for talking to the execution service.
///
/// The remote compile/run limits are request parameters, enforced by the
/// service; `http_timeout` is the only client-side limit.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Base URL of the Piston-compatible API.
    pub base_url: String,
    /// Client-side timeout for each HTTP call.
    pub http_timeout: Duration,
    /// Compile-phase timeout requested from the service, in milliseconds.
    pub compile_timeout_ms: i64,
    /// Run-phase timeout requested from the service, in milliseconds.
    pub run_timeout_ms: i64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(30),
            compile_timeout_ms: COMPILE_TIMEOUT_MS,
            run_timeout_ms: RUN_TIMEOUT_MS,
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration, with the base URL overridable through the
    /// `RUNBOX_API_URL` environment variable. No other environment
    /// configuration exists.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("RUNBOX_API_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }

    /// Set the API base URL. A trailing slash is stripped so endpoint paths
    /// concatenate cleanly.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn execute_url(&self) -> String {
        format!("{}/execute", self.base_url)
    }

    pub fn runtimes_url(&self) -> String {
        format!("{}/runtimes", self.base_url)
    }
}
