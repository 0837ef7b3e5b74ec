//! Gist publisher configuration.

use serde::{Deserialize, Serialize};

/// Document store configuration.
///
/// `gist_id` and `token` have no usable defaults; startup validation rejects
/// a config where either is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistConfig {
    /// GitHub API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Target gist id
    #[serde(default)]
    pub gist_id: String,
    /// Access token with gist scope
    #[serde(default)]
    pub token: String,
    /// File name inside the gist holding the snapshot
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Gist description set on every upsert
    #[serde(default = "default_description")]
    pub description: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_file_name() -> String {
    "league.json".to_string()
}

fn default_description() -> String {
    "FPL mini-league snapshot (auto-updated)".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            gist_id: String::new(),
            token: String::new(),
            file_name: default_file_name(),
            description: default_description(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
