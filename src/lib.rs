//! Trivia - terminal trivia game
//!
//! A shuffled multiple-choice quiz with title, question, outcome and
//! info screens, driven by a small game state machine and rendered
//! with a ratatui front end.

use std::fmt;

pub mod app;
pub mod config;
pub mod game;
pub mod models;

// Common error types
#[derive(Debug)]
pub enum TriviaError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Question file could not be read or parsed
    QuestionBankError(String),
    /// A question violates its construction rules
    InvalidQuestion(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for TriviaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriviaError::IoError(err) => write!(f, "I/O error: {}", err),
            TriviaError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TriviaError::QuestionBankError(msg) => write!(f, "Question bank error: {}", msg),
            TriviaError::InvalidQuestion(msg) => write!(f, "Invalid question: {}", msg),
            TriviaError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for TriviaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TriviaError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TriviaError {
    fn from(err: std::io::Error) -> Self {
        TriviaError::IoError(err)
    }
}

impl From<serde_json::Error> for TriviaError {
    fn from(err: serde_json::Error) -> Self {
        TriviaError::QuestionBankError(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for TriviaError {
    fn from(err: toml::de::Error) -> Self {
        TriviaError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for TriviaError {
    fn from(err: toml::ser::Error) -> Self {
        TriviaError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for trivia operations
pub type Result<T> = std::result::Result<T, TriviaError>;

/// Error handling utilities
pub mod error {
    use super::TriviaError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &TriviaError) -> String {
        match error {
            TriviaError::IoError(err) if err.kind() == std::io::ErrorKind::NotFound => {
                format!("File not found: {}. Check the path and try again.", err)
            }
            TriviaError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            TriviaError::QuestionBankError(msg) => format!(
                "Could not load questions: {}. Use a .json or .toml file with a `questions` list.",
                msg
            ),
            TriviaError::InvalidQuestion(msg) => format!(
                "Invalid question: {}. Every answer must be one of the listed options.",
                msg
            ),
            TriviaError::TuiError(_) => {
                "Terminal error. Make sure you are running in an interactive terminal.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "trivia";
pub const CONFIG_FILE: &str = "trivia.toml";
pub const LOG_FILE: &str = "trivia.log";
pub const DEFAULT_QUESTIONS_PER_GAME: usize = 3;
