//! FPL mini-league snapshot publisher.
//!
//! One run: pull league standings and static data from the FPL API, fan out
//! over the members for season history and current-gameweek picks, merge
//! everything into a single snapshot document, and upsert it into a GitHub
//! gist for the UI to read.

use anyhow::{Context, Result};
use tracing::info;

use fpl_api::{FplClient, FplConfig};
use gist_store::{GistConfig, GistPublisher};
use telemetry::init_tracing_from_env;

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    /// Classic league to snapshot
    #[serde(default)]
    league_id: u64,

    #[serde(default)]
    fpl: FplConfig,

    #[serde(default)]
    gist: GistConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            league_id: 0,
            fpl: FplConfig::default(),
            gist: GistConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting fplsnap v{}", env!("CARGO_PKG_VERSION"));

    // Load and validate configuration before any network call
    let config = load_config()?;
    validate_config(&config)?;

    let client = FplClient::new(config.fpl.clone()).context("Failed to create FPL client")?;
    let publisher =
        GistPublisher::new(config.gist.clone()).context("Failed to create gist publisher")?;

    let batch = fpl_api::BatchConfig::default();
    let report = pipeline::run(config.league_id, &batch, &client, &publisher)
        .await
        .context("Snapshot run failed")?;

    info!(
        members = report.members,
        url = %report.content_url,
        "Snapshot published"
    );

    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("FPLSNAP")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // The three well-known flat variables win over everything else.
    if let Ok(league_id) = std::env::var("FPL_LEAGUE_ID") {
        config.league_id = league_id
            .trim()
            .parse()
            .context("FPL_LEAGUE_ID is not a number")?;
    }
    if let Ok(gist_id) = std::env::var("GIST_ID") {
        config.gist.gist_id = gist_id.trim().to_string();
    }
    if let Ok(token) = std::env::var("GITHUB_TOKEN") {
        config.gist.token = token.trim().to_string();
    }

    Ok(config)
}

/// Fail fast on missing required inputs, before any network call.
fn validate_config(config: &Config) -> Result<()> {
    if config.league_id == 0 {
        anyhow::bail!("league id is required (set FPL_LEAGUE_ID)");
    }
    if config.gist.gist_id.is_empty() {
        anyhow::bail!("gist id is required (set GIST_ID)");
    }
    if config.gist.token.is_empty() {
        anyhow::bail!("access token is required (set GITHUB_TOKEN)");
    }
    Ok(())
}
