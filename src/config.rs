//! # Configuration
//!
//! Centralizes the few runtime settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.checkmenu/config.toml` unless `--config` points
//! elsewhere. The file is optional and never written.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub request: RequestConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct EndpointsConfig {
    pub base_url: Option<String>,
    /// Ordered list of paths; button `i` posts to `paths[i]`.
    pub paths: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestConfig {
    pub timeout_secs: Option<u64>,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PATHS: [&str; 3] = ["/endpoint1", "/endpoint2", "/endpoint3"];
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Absolute URLs, one per button target.
    pub endpoints: Vec<String>,
    pub timeout: Duration,
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

/// Returns the path to `~/.checkmenu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".checkmenu").join("config.toml"))
}

/// Load config from `explicit` or, failing that, the default location.
///
/// A missing file yields `MenuConfig::default()`. A file that exists but
/// is malformed returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<MenuConfig, ConfigError> {
    let path = match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenuConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(MenuConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<MenuConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MenuConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup, so tests never touch
/// the process environment.
pub fn resolve_with_env(
    config: &MenuConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("CHECKMENU_BASE_URL"))
        .or_else(|| config.endpoints.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let paths = config
        .endpoints
        .paths
        .clone()
        .unwrap_or_else(|| DEFAULT_PATHS.iter().map(|p| p.to_string()).collect());

    // Timeout: CLI → env → config → default. Unparseable env values are ignored.
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            env("CHECKMENU_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse() {
                Ok(secs) => Some(secs),
                Err(e) => {
                    warn!("Ignoring CHECKMENU_TIMEOUT_SECS={:?}: {}", raw, e);
                    None
                }
            })
        })
        .or(config.request.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        endpoints: paths.iter().map(|p| join_url(&base_url, p)).collect(),
        timeout: Duration::from_secs(timeout_secs),
    }
}

/// Joins a base URL and a path with exactly one slash between them.
/// Paths that are already absolute URLs are returned as-is.
fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
