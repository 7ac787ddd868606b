// SPDX-License-Identifier: MIT
//
// dresscode.toml: design settings, a default primary color and the log
// level.
//
//   [design]
//   button_text_color = "auto"   # auto | dark | light
//   border_radius = 8
//   mode = "light"               # light | dark
//
//   [colors]
//   primary = "#3B82F6"          # hex or preset id
//
//   [logging]
//   level = "warn"               # trace | debug | info | warn | error
//
// Every section and key is optional. DRESSCODE_LOG overrides the level.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dc_color::normalize_hex;
use dc_theme::presets::preset_by_id;
use dc_theme::settings::DesignSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// File looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "dresscode.toml";

/// Environment variable that overrides `[logging] level`.
pub const LOG_ENV: &str = "DRESSCODE_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("[colors] primary {0:?} is neither a hex color nor a preset id")]
    InvalidColor(String),

    #[error("invalid log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

// ─── Sections ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorsConfig {
    /// Hex color or preset id used when a command is given no color.
    pub primary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub design: DesignSettings,
    pub colors: ColorsConfig,
    pub logging: LoggingConfig,
}

// ─── Loading ────────────────────────────────────────────────────────────────

impl Config {
    /// Load from `explicit` if given, else `./dresscode.toml` if it exists,
    /// else defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that can't be read, any file that doesn't parse, or
    /// values that fail validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::parse(&text, &path)
    }

    /// Parse and validate TOML text. `origin` is only used in errors.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML or unknown keys, or a
    /// validation error for bad values.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(primary) = &self.colors.primary {
            if preset_by_id(primary).is_none() && normalize_hex(primary).is_none() {
                return Err(ConfigError::InvalidColor(primary.clone()));
            }
        }
        parse_log_level(&self.logging.level)?;
        Ok(())
    }

    /// The log level after applying the `DRESSCODE_LOG` override.
    ///
    /// # Errors
    ///
    /// An unrecognized level in the environment or the file.
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        resolve_log_level(&self.logging.level, std::env::var(LOG_ENV).ok().as_deref())
    }
}

/// `env_override` wins over `configured` when present and non-empty.
pub fn resolve_log_level(configured: &str, env_override: Option<&str>) -> Result<Level, ConfigError> {
    match env_override.map(str::trim).filter(|s| !s.is_empty()) {
        Some(level) => parse_log_level(level),
        None => parse_log_level(configured),
    }
}

fn parse_log_level(level: &str) -> Result<Level, ConfigError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(level.to_string())),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
