//! Configuration management module
//!
//! Handles loading, saving, and validation of game, UI and logging
//! settings.

use crate::{Result, TriviaError, APP_NAME, CONFIG_FILE, DEFAULT_QUESTIONS_PER_GAME, LOG_FILE};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration stored in `trivia.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Rules of a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of questions asked per session (capped by the bank size)
    pub questions_per_game: usize,
    /// Win only after every question is answered correctly
    pub require_all_correct: bool,
    /// Fixed shuffle seed for reproducible games
    pub seed: Option<u64>,
    /// Custom question bank (.json or .toml)
    pub question_file: Option<PathBuf>,
}

/// Terminal front-end settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of off, error, warn, info, debug, trace
    pub level: String,
    /// Log file; defaults to the user data directory
    pub file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_per_game: DEFAULT_QUESTIONS_PER_GAME,
            require_all_correct: true,
            seed: None,
            question_file: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

const MIN_TICK_RATE_MS: u64 = 10;
const MAX_TICK_RATE_MS: u64 = 5000;

impl TriviaConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.game.questions_per_game == 0 {
            return Err(TriviaError::ConfigError(
                "questions_per_game must be greater than 0".to_string(),
            ));
        }

        if let Some(path) = &self.game.question_file {
            if !path.is_file() {
                return Err(TriviaError::ConfigError(format!(
                    "Question file does not exist: {}",
                    path.display()
                )));
            }
        }

        if self.ui.tick_rate_ms < MIN_TICK_RATE_MS || self.ui.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(TriviaError::ConfigError(format!(
                "tick_rate_ms must be between {} and {}",
                MIN_TICK_RATE_MS, MAX_TICK_RATE_MS
            )));
        }

        self.log.level_filter()?;

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TriviaError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            TriviaError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Validate and write configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TriviaError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = self.to_toml()?;

        fs::write(path, content).map_err(|e| {
            TriviaError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/trivia/trivia.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            TriviaError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LogConfig {
    /// Parse the configured level name
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level.parse::<LevelFilter>().map_err(|_| {
            TriviaError::ConfigError(format!("Unknown log level: {}", self.level))
        })
    }

    /// Log file location: configured path, else $DATA_LOCAL/trivia/trivia.log,
    /// else the working directory
    pub fn resolve_path(&self) -> PathBuf {
        if let Some(path) = &self.file {
            return path.clone();
        }

        dirs::data_local_dir()
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE))
    }

    /// Create the log file, and its directory if needed, truncating old output
    pub fn open_file(&self) -> Result<File> {
        let path = self.resolve_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                TriviaError::ConfigError(format!(
                    "Failed to create log directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        File::create(&path).map_err(|e| {
            TriviaError::ConfigError(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
