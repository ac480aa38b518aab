//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.party-planner/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Full collection URL. Wins over the three parts below.
    pub url: Option<String>,
    pub base_url: Option<String>,
    pub cohort: Option<String>,
    pub resource: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
pub const DEFAULT_COHORT: &str = "2507-ftb-ct-web-pt-a";
pub const DEFAULT_RESOURCE: &str = "events";

pub const API_URL_ENV: &str = "PARTY_PLANNER_API_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Collection endpoint; single events live at `{endpoint}/{id}`.
    pub endpoint: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.party-planner/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".party-planner").join("config.toml"))
}

/// Load config from `~/.party-planner/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PlannerConfig::default()`.
pub fn load_config() -> Result<PlannerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PlannerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PlannerConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PlannerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Party Planner Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# url = "https://example.com/api/my-cohort/events"   # Full endpoint, or PARTY_PLANNER_API_URL
# base_url = "https://fsa-crud-2aa9294fe819.herokuapp.com/api"
# cohort = "2507-ftb-ct-web-pt-a"
# resource = "events"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_url` is from the `--api-url` flag (None = not specified).
pub fn resolve(config: &PlannerConfig, cli_api_url: Option<&str>) -> ResolvedConfig {
    resolve_with(config, std::env::var(API_URL_ENV).ok(), cli_api_url)
}

/// Same as [`resolve`], with the `PARTY_PLANNER_API_URL` value passed in.
pub fn resolve_with(
    config: &PlannerConfig,
    env_api_url: Option<String>,
    cli_api_url: Option<&str>,
) -> ResolvedConfig {
    let endpoint = cli_api_url
        .map(|s| s.to_string())
        .or(env_api_url)
        .or_else(|| config.api.url.clone())
        .unwrap_or_else(|| {
            join_endpoint(
                config.api.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
                config.api.cohort.as_deref().unwrap_or(DEFAULT_COHORT),
                config.api.resource.as_deref().unwrap_or(DEFAULT_RESOURCE),
            )
        });

    ResolvedConfig {
        endpoint: endpoint.trim_end_matches('/').to_string(),
    }
}

/// `base/cohort/resource`, skipping empty parts and doubled slashes.
fn join_endpoint(base: &str, cohort: &str, resource: &str) -> String {
    let mut endpoint = base.trim_end_matches('/').to_string();
    for part in [cohort, resource] {
        let part = part.trim_matches('/');
        if !part.is_empty() {
            endpoint.push('/');
            endpoint.push_str(part);
        }
    }
    endpoint
}
