//! Assaydeck - a terminal shortcut panel for assay data in iRODS
//!
//! This library composes and drives a shortcut card for a biomedical assay:
//! labeled links into the iRODS sample data store and its WebDAV mirror,
//! plus an extensible slot for plugin-registered shortcut types. Side
//! effects (clipboard, browser, modal, notification) go through injected
//! collaborators so hosts and tests can swap them out.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod output;
pub mod panel;
pub mod shortcuts;
pub mod tui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum DeckError {
    /// Shortcut list error
    #[error("Shortcut error: {0}")]
    ShortcutError(#[from] shortcuts::ShortcutError),
    /// Action dispatch error
    #[error("Dispatch error: {0}")]
    DispatchError(#[from] dispatch::DispatchError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Context or shortcut JSON could not be parsed
    #[error("Invalid JSON input: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
