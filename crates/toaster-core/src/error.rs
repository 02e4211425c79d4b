//! Error types for Toaster.
//!
//! Presentation itself never fails; these cover the ambient edges
//! (runtime discovery and settings loading).

use thiserror::Error;

/// Errors raised while setting up a toast manager.
#[derive(Debug, Error)]
pub enum ToastError {
    /// No tokio runtime to schedule dismiss timers on.
    #[error("Tokio runtime unavailable")]
    RuntimeUnavailable,
}

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
