//! FPL client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream client configuration.
///
/// The delay fields exist so tests can run the retry loop with zero sleeps;
/// production uses the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FplConfig {
    /// Base URL of the FPL API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total attempts per call, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed delay before retrying a network-level failure
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Per-attempt backoff step after a 429 (attempt index x step)
    #[serde(default = "default_rate_limit_step_ms")]
    pub rate_limit_step_ms: u64,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://fantasy.premierleague.com/api".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    2_000
}

fn default_rate_limit_step_ms() -> u64 {
    3_000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for FplConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            rate_limit_step_ms: default_rate_limit_step_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FplConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Backoff before retrying after the `attempt`th (1-based) 429 response.
    pub fn rate_limit_backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.rate_limit_step_ms * u64::from(attempt))
    }
}
