//! Error types for Lapacho.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Lapacho operations.
pub type Result<T> = std::result::Result<T, LapachoError>;

/// Errors that can occur in Lapacho.
#[derive(Debug, Error)]
pub enum LapachoError {
    /// Unsupported content locale.
    #[error("Unknown locale: {locale} (expected one of: en, es)")]
    UnknownLocale { locale: String },

    /// Embedded deck content failed to deserialize.
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A form was submitted with invalid fields.
    #[error("Form has {count} invalid field(s)")]
    InvalidForm { count: usize },
}

impl LapachoError {
    /// Create an UnknownLocale error.
    pub fn unknown_locale(locale: impl Into<String>) -> Self {
        Self::UnknownLocale {
            locale: locale.into(),
        }
    }

    /// Create an InvalidForm error.
    pub fn invalid_form(count: usize) -> Self {
        Self::InvalidForm { count }
    }
}
