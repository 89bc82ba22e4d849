//! Console game configuration.
//!
//! Only presentation and logging are configurable. Search depth and side
//! assignment are fixed by the engine.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a console game, usually read from `minichess.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown for the human (White) player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the AI (Black) player.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Print the score line after every half-move.
    #[serde(default = "default_show_scoreboard")]
    show_scoreboard: bool,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_ai_name() -> String {
    "AI".to_string()
}

fn default_show_scoreboard() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_name: default_human_name(),
            ai_name: default_ai_name(),
            show_scoreboard: default_show_scoreboard(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with custom player names and default
    /// everything else.
    pub fn with_names(human_name: impl Into<String>, ai_name: impl Into<String>) -> Self {
        Self {
            human_name: human_name.into(),
            ai_name: ai_name.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human_name, ai = %config.ai_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
