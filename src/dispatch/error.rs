//! Dispatch error types

use thiserror::Error;

/// Errors that can occur while dispatching shortcut actions
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Clipboard collaborator reported a failure
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Link opener collaborator reported a failure
    #[error("Failed to open link: {0}")]
    OpenLink(String),

    /// A directory listing was requested for a shortcut without a path.
    /// This is a caller contract violation, not a recoverable condition.
    #[error("Shortcut '{0}' has no path to list")]
    MissingPath(String),
}

/// Result type for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;
