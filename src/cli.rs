//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for assaydeck using the `clap`
//! crate. The context and shortcut list are always supplied as JSON files,
//! matching the payloads the host application serves.
//!
//! # Commands
//!
//! - **show**: Interactive shortcut panel (default)
//! - **resolve**: Print the composed shortcut rows
//! - **copy**: Copy a shortcut's iRODS path (or WebDAV link) to the clipboard
//! - **open**: Open a shortcut's WebDAV link in the browser

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terminal shortcut panel for assay data collections in iRODS
#[derive(Parser, Debug)]
#[command(name = "assaydeck", version, about)]
pub struct Cli {
    /// Path to the execution context JSON file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub context: Option<PathBuf>,

    /// Path to the shortcut list JSON file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub shortcuts: Option<PathBuf>,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the interactive shortcut panel (default)
    #[command(alias = "s")]
    Show,

    /// Print the composed shortcut rows without entering the TUI
    #[command(alias = "r")]
    Resolve {
        /// Emit rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Copy a shortcut's path to the clipboard
    #[command(alias = "c")]
    Copy {
        /// Id of the shortcut to copy
        id: String,

        /// Copy the derived WebDAV link instead of the raw iRODS path
        #[arg(long)]
        dav: bool,
    },

    /// Open a shortcut's WebDAV link in the browser
    #[command(alias = "o")]
    Open {
        /// Id of the shortcut to open
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The effective command, defaulting to `Show`
    #[must_use]
    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Show)
    }
}
