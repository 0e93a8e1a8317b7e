//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.easydrag/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::move_config::{DragAnimation, MoveConfig};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EasyDragConfig {
    #[serde(default)]
    pub drag: DragSection,
    #[serde(default)]
    pub shelf: ShelfSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DragSection {
    pub dragged_opacity: Option<f64>,
    pub scale_effect: Option<f64>,
    pub animation: Option<DragAnimation>,
    pub enable_haptics: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShelfSection {
    /// Path of the shelf data file. Relative paths resolve against `~/.easydrag/`.
    pub data_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const CONFIG_DIR_NAME: &str = ".easydrag";
pub const DEFAULT_DATA_FILE: &str = "shelf.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub move_config: MoveConfig,
    pub data_path: PathBuf,
}

/// Settings that came from the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub animation: Option<DragAnimation>,
    pub no_haptics: bool,
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

/// Returns `~/.easydrag/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
}

/// Returns the path to `~/.easydrag/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.easydrag/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EasyDragConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EasyDragConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EasyDragConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`], for an explicit path.
pub fn load_config_from(path: &Path) -> Result<EasyDragConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(EasyDragConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: EasyDragConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# easydrag configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [drag]
# dragged_opacity = 0.7              # 0.0 – 1.0
# scale_effect = 1.0
# animation = "smooth"               # "smooth", "bouncy", "spring", "none"
# enable_haptics = true              # Or set EASYDRAG_HAPTICS=0

# [shelf]
# data_file = "shelf.json"           # Relative to ~/.easydrag/, or EASYDRAG_DATA_FILE
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
pub fn resolve(config: &EasyDragConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &EasyDragConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let drag = &config.drag;
    let defaults = MoveConfig::default();

    // Haptics: CLI off-switch → env → config → default
    let enable_haptics = if cli.no_haptics {
        false
    } else {
        env("EASYDRAG_HAPTICS")
            .and_then(|v| parse_bool(&v))
            .or(drag.enable_haptics)
            .unwrap_or(defaults.enable_haptics)
    };

    // Animation: CLI → config → default
    let animation = cli
        .animation
        .or(drag.animation)
        .unwrap_or(defaults.animation);

    let move_config = MoveConfig::new(
        drag.dragged_opacity.unwrap_or(defaults.dragged_opacity()),
        drag.scale_effect.unwrap_or(defaults.scale_effect()),
        animation,
        enable_haptics,
    );

    // Data file: CLI → env → config → default
    let data_path = cli
        .data_file
        .clone()
        .or_else(|| env("EASYDRAG_DATA_FILE").map(PathBuf::from))
        .or_else(|| config.shelf.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
    let data_path = anchor_to_config_dir(data_path);

    ResolvedConfig {
        move_config,
        data_path,
    }
}

/// Relative data paths live under `~/.easydrag/`; absolute ones are kept.
fn anchor_to_config_dir(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("Ignoring unrecognized boolean value '{}'", other);
            None
        }
    }
}
