//! Service configuration management
//!
//! Rules and scoring weights are policy: the defaults are the standard game
//! and a league can override any of them through a TOML file or environment
//! variables.

use anyhow::{Context, Result};
use league_rules::RulesConfig;
use scoring_engine::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// League-level settings
    pub league: LeagueSettings,

    /// Rules policy (squad caps, formation, budget, transfers, chips)
    pub rules: RulesConfig,

    /// Scoring weight table
    pub weights: ScoringWeights,

    /// Upstream feed endpoints
    pub feeds: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// League-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    /// League display name
    pub name: String,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self { name: "Fantasy League".to_string() }
    }
}

/// Upstream feed endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Roster feed base URL
    pub roster_url: String,

    /// Stat feed base URL
    pub stats_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Run a roster sync when the service starts
    pub sync_on_start: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            roster_url: "http://localhost:8600".to_string(),
            stats_url: "http://localhost:8600".to_string(),
            timeout_secs: 30,
            sync_on_start: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration: defaults, then the optional TOML file named by
/// FANTASY_CONFIG, then environment variable overrides
pub fn load_config() -> Result<ServiceConfig> {
    let mut config = match std::env::var("FANTASY_CONFIG") {
        Ok(path) => load_from_file(Path::new(&path))?,
        Err(_) => ServiceConfig::default(),
    };

    load_from_env(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {path:?}"))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config file: {path:?}"))
}

/// Apply environment variable overrides
fn load_from_env(config: &mut ServiceConfig) {
    if let Ok(level) = std::env::var("FANTASY_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("FANTASY_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Ok(url) = std::env::var("FANTASY_ROSTER_URL") {
        config.feeds.roster_url = url;
    }

    if let Ok(url) = std::env::var("FANTASY_STATS_URL") {
        config.feeds.stats_url = url;
    }

    if let Ok(sync) = std::env::var("FANTASY_SYNC_ON_START") {
        config.feeds.sync_on_start = sync.parse().unwrap_or(false);
    }
}

/// Validate configuration
fn validate_config(config: &ServiceConfig) -> Result<()> {
    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => anyhow::bail!("Invalid log level: {}", config.logging.level),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" => {}
        _ => anyhow::bail!("Invalid log format: {}", config.logging.format),
    }

    if config.rules.formation.total_slots() != config.rules.starter_count {
        anyhow::bail!(
            "Formation covers {} slots but starter_count is {}",
            config.rules.formation.total_slots(),
            config.rules.starter_count
        );
    }

    if config.rules.starter_count >= config.rules.squad_size {
        anyhow::bail!(
            "starter_count {} must leave room for a bench within squad_size {}",
            config.rules.starter_count,
            config.rules.squad_size
        );
    }

    Ok(())
}
