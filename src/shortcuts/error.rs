//! Shortcut error types

use thiserror::Error;

/// Errors that can occur when working with shortcut lists
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// No shortcut with the requested id exists in the list
    #[error("No shortcut with id '{0}' in the list")]
    UnknownId(String),

    /// Shortcut list could not be parsed
    #[error("Failed to parse shortcut list: {0}")]
    ParseError(#[from] serde_json::Error),

    /// IO error reading shortcut data
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for shortcut operations
pub type Result<T> = std::result::Result<T, ShortcutError>;
