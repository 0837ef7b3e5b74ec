//! FPL API client with bounded retry.

use crate::config::FplConfig;
use crate::models::{BootstrapStatic, EntryHistory, EntryPicks, LeagueStandings};
use async_trait::async_trait;
use fpl_core::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// The four upstream read operations the pipeline needs.
///
/// This is the seam for tests: the real [`FplClient`] talks HTTP, mocks
/// script per-entry outcomes.
#[async_trait]
pub trait FplApi: Send + Sync {
    async fn league_standings(&self, league_id: u64) -> Result<LeagueStandings>;
    async fn bootstrap_static(&self) -> Result<BootstrapStatic>;
    async fn entry_history(&self, entry_id: u64) -> Result<EntryHistory>;
    async fn entry_picks(&self, entry_id: u64, gw: u32) -> Result<EntryPicks>;
}

/// HTTP client for the FPL API.
///
/// Each call runs an independent bounded retry loop: 429 responses back off
/// by `attempt x rate_limit_step` before retrying, network-level failures by
/// a fixed delay, and any other non-2xx status fails immediately. Once the
/// attempt budget is spent the last error propagates.
pub struct FplClient {
    http: reqwest::Client,
    config: FplConfig,
}

impl FplClient {
    /// Creates a new client with the fixed header set the API expects.
    pub fn new(config: FplConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FplConfig {
        &self.config
    }

    /// Fetches `path` relative to the base URL and deserializes the body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);
        let mut last_err: Option<Error> = None;

        for attempt in 1..=self.config.max_attempts {
            debug!(path, attempt, "GET");

            match self.http.get(&url).send().await {
                Ok(resp) => {
                    let status = resp.status();

                    if status.is_success() {
                        return resp
                            .json::<T>()
                            .await
                            .map_err(|e| Error::transport(path, e.to_string()));
                    }

                    let body = resp.text().await.unwrap_or_default();

                    if status.as_u16() == 429 {
                        let backoff = self.config.rate_limit_backoff(attempt);
                        last_err = Some(Error::http(429, path, body));
                        if attempt < self.config.max_attempts {
                            warn!(path, attempt, backoff_ms = backoff.as_millis() as u64,
                                "rate limited, backing off");
                            tokio::time::sleep(backoff).await;
                        }
                        continue;
                    }

                    // Any other non-2xx is not worth retrying.
                    return Err(Error::http(status.as_u16(), path, body));
                }
                Err(e) => {
                    last_err = Some(Error::transport(path, e.to_string()));
                    if attempt < self.config.max_attempts {
                        warn!(path, attempt, error = %e, "request failed, retrying");
                        tokio::time::sleep(self.config.retry_delay()).await;
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| Error::internal(format!("no attempts made for {path}"))))
    }
}

#[async_trait]
impl FplApi for FplClient {
    async fn league_standings(&self, league_id: u64) -> Result<LeagueStandings> {
        self.get_json(&format!("leagues-classic/{league_id}/standings/"))
            .await
    }

    async fn bootstrap_static(&self) -> Result<BootstrapStatic> {
        self.get_json("bootstrap-static/").await
    }

    async fn entry_history(&self, entry_id: u64) -> Result<EntryHistory> {
        self.get_json(&format!("entry/{entry_id}/history/")).await
    }

    async fn entry_picks(&self, entry_id: u64, gw: u32) -> Result<EntryPicks> {
        self.get_json(&format!("entry/{entry_id}/event/{gw}/picks/"))
            .await
    }
}

/// The FPL API rejects requests that do not look like they come from the
/// site itself, so every request carries a browser-shaped header set.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0",
        ),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://fantasy.premierleague.com/"),
    );
    headers.insert(
        ORIGIN,
        HeaderValue::from_static("https://fantasy.premierleague.com"),
    );
    headers
}
