//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.versepick/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::lookup::ResolveOptions;
use crate::lookup::bible_api::{DEFAULT_BASE_URL, DEFAULT_TRANSLATION};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VersepickConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Also insert single-verse lookups, not only ranges.
    pub deliver_single_verses: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LookupConfig {
    pub base_url: Option<String>,
    pub translation: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the bundled one.
    pub path: Option<PathBuf>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub catalog: Option<PathBuf>,
    pub translation: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub translation: String,
    pub timeout: Duration,
    pub deliver_single_verses: bool,
    /// None = bundled catalog.
    pub catalog_path: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            timeout: self.timeout,
            deliver_single_verses: self.deliver_single_verses,
        }
    }
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

/// Returns the path to `~/.versepick/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".versepick").join("config.toml"))
}

/// Load config from `~/.versepick/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VersepickConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VersepickConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VersepickConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VersepickConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<VersepickConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: VersepickConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Versepick Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deliver_single_verses = false      # Also insert single verses, not only ranges

# [lookup]
# base_url = "https://bible-api.com" # Or set VERSEPICK_BASE_URL
# translation = "web"                # Or set VERSEPICK_TRANSLATION
# timeout_secs = 10

# [catalog]
# path = "/path/to/bible.json"       # Or set VERSEPICK_CATALOG; bundled if unset
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &VersepickConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("VERSEPICK_BASE_URL").ok())
        .or_else(|| config.lookup.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Translation: CLI → env → config → default
    let translation = cli
        .translation
        .clone()
        .or_else(|| std::env::var("VERSEPICK_TRANSLATION").ok())
        .or_else(|| config.lookup.translation.clone())
        .unwrap_or_else(|| DEFAULT_TRANSLATION.to_string());

    // Catalog: CLI → env → config → bundled
    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| std::env::var("VERSEPICK_CATALOG").ok().map(PathBuf::from))
        .or_else(|| config.catalog.path.clone());

    let timeout_secs = cli
        .timeout_secs
        .or(config.lookup.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    ResolvedConfig {
        base_url,
        translation,
        timeout: Duration::from_secs(timeout_secs),
        deliver_single_verses: config.general.deliver_single_verses.unwrap_or(false),
        catalog_path,
    }
}
