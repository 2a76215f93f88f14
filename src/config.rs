//! Application configuration
//!
//! Loaded from `tictactoe.toml`, searched in this order:
//! 1. Path in the `TICTACTOE_CONFIG` environment variable
//! 2. Current directory (`tictactoe.toml`)
//! 3. Parent directory (`../tictactoe.toml`)
//!
//! Missing or broken files fall back to the built-in defaults. Environment
//! overrides are applied last:
//! - `TICTACTOE_LOG_LEVEL` replaces `logging.level`
//! - `TICTACTOE_MODE` replaces `game.default_mode`
//!
//! ```toml
//! [window]
//! width = 600
//! height = 650
//!
//! [game]
//! default_mode = "minimax-vs-human"
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::ui::GameMode;

/// Standard locations to search for the config file
pub const CONFIG_SEARCH_PATHS: &[&str] = &["tictactoe.toml", "../tictactoe.toml"];

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Board width in pixels; the board is square
    pub width: f32,
    /// Board plus the status bar underneath
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 650.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Mode highlighted in the main menu at startup
    pub default_mode: GameMode,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or
    /// "tictactoe=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Load the configuration, falling back to defaults on any problem.
pub fn load_config() -> AppConfig {
    if let Ok(path) = std::env::var("TICTACTOE_CONFIG") {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from TICTACTOE_CONFIG: {}", path.display());
            return load_or_default(&path);
        }
        warn!(
            "TICTACTOE_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_or_default(path);
        }
    }

    debug!("No tictactoe.toml found, using built-in defaults");
    apply_env_overrides(AppConfig::default())
}

fn load_or_default(path: &Path) -> AppConfig {
    match load_from_path(path) {
        Ok(config) => apply_env_overrides(config),
        Err(e) => {
            warn!("{e}, using defaults");
            apply_env_overrides(AppConfig::default())
        }
    }
}

/// Read and parse one config file. No environment overrides.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(content: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Apply `TICTACTOE_*` environment overrides
pub fn apply_env_overrides(config: AppConfig) -> AppConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(mut config: AppConfig, var: impl Fn(&str) -> Option<String>) -> AppConfig {
    if let Some(level) = var("TICTACTOE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(mode) = var("TICTACTOE_MODE") {
        match mode.parse() {
            Ok(mode) => config.game.default_mode = mode,
            Err(e) => warn!("Ignoring TICTACTOE_MODE: {e}"),
        }
    }
    config
}
