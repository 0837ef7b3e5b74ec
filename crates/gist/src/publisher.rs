//! Gist upsert publisher.

use crate::config::GistConfig;
use async_trait::async_trait;
use fpl_core::{Error, Result, Snapshot};
use serde_json::json;
use tracing::{debug, info};

/// Where the finished snapshot goes.
///
/// One fixed document slot, wholly overwritten each run. Mocked in tests to
/// capture the published document.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Upserts the snapshot and returns its public content URL.
    async fn publish(&self, snapshot: &Snapshot) -> Result<String>;
}

/// Publishes the snapshot into a single GitHub gist via PATCH.
///
/// No retry here: a failed publish fails the run and the outer scheduler
/// retries the whole run later.
pub struct GistPublisher {
    http: reqwest::Client,
    config: GistConfig,
}

impl GistPublisher {
    pub fn new(config: GistConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fplsnap/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        info!(gist_id = %config.gist_id, file = %config.file_name, "Created gist publisher");

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GistConfig {
        &self.config
    }
}

#[async_trait]
impl SnapshotStore for GistPublisher {
    async fn publish(&self, snapshot: &Snapshot) -> Result<String> {
        let content = serde_json::to_string_pretty(snapshot)?;
        let bytes = content.len();

        let mut files = serde_json::Map::new();
        files.insert(self.config.file_name.clone(), json!({ "content": content }));
        let body = json!({
            "description": self.config.description,
            "files": files,
        });

        let url = format!(
            "{}/gists/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.gist_id
        );

        debug!(url = %url, bytes, "Upserting snapshot");

        let resp = self
            .http
            .patch(&url)
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::transport("gist upsert", e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::publish(status.as_u16(), body));
        }

        let parsed: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::transport("gist upsert", e.to_string()))?;

        let raw_url = parsed["files"][self.config.file_name.as_str()]["raw_url"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        info!(bytes, raw_url = %raw_url, "Snapshot published");
        Ok(raw_url)
    }
}
