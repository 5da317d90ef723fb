//! Assaydeck CLI application entry point
//!
//! Renders an interactive shortcut panel for an assay's iRODS data
//! collections, or performs single shortcut actions straight from the
//! command line.
//!
//! # Usage
//!
//! ```bash
//! # Interactive panel (default command)
//! assaydeck --context context.json --shortcuts shortcuts.json
//!
//! # Print the composed rows
//! assaydeck resolve -c context.json -s shortcuts.json
//! assaydeck resolve --json -c context.json -s shortcuts.json
//!
//! # Copy a shortcut's iRODS path or WebDAV link to the clipboard
//! assaydeck copy misc_files -s shortcuts.json
//! assaydeck copy misc_files --dav -c context.json -s shortcuts.json
//!
//! # Open a shortcut's WebDAV link in the browser
//! assaydeck open results_reports -c context.json -s shortcuts.json
//! ```
//!
//! # Configuration
//!
//! A WebDAV base URL fallback and the quiet flag can be set in
//! `<config_dir>/assaydeck/config.toml`.

use assaydeck::{
    DeckError,
    cli::{Cli, Commands},
    config::AppConfig,
    context::ExecutionContext,
    dispatch::{ActionDispatcher, CopyTarget, SystemClipboard, SystemOpener},
    output::{OutputWriter, QuietWriter, StdoutWriter},
    panel::compose,
    shortcuts::{self, ShortcutDescriptor},
    tui,
};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

type Result<T> = std::result::Result<T, DeckError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let output: Box<dyn OutputWriter> = if quiet {
        Box::new(QuietWriter)
    } else {
        Box::new(StdoutWriter::new())
    };

    let context = config.apply_webdav_fallback(load_context(cli)?);
    let shortcuts = load_shortcuts(cli)?;

    match cli.command() {
        Commands::Show => tui::run(context, &shortcuts),
        Commands::Resolve { json } => resolve(&context, &shortcuts, *json, output.as_ref()),
        Commands::Copy { id, dav } => copy(&context, &shortcuts, id, *dav, output),
        Commands::Open { id } => open_link(&context, &shortcuts, id, output.as_ref()),
    }
}

/// Load the execution context, defaulting to an empty one
fn load_context(cli: &Cli) -> Result<ExecutionContext> {
    match &cli.context {
        Some(path) => Ok(ExecutionContext::from_json(&fs::read_to_string(path)?)?),
        None => Ok(ExecutionContext::default()),
    }
}

/// Load the shortcut list; required for every command
fn load_shortcuts(cli: &Cli) -> Result<Vec<ShortcutDescriptor>> {
    let path: &Path = cli.shortcuts.as_deref().ok_or_else(|| {
        DeckError::InvalidInput("No shortcut list given (use --shortcuts FILE)".to_string())
    })?;
    Ok(shortcuts::parse_list(&fs::read_to_string(path)?)?)
}

/// Print the composed rows as a table or JSON
fn resolve(
    context: &ExecutionContext,
    shortcuts: &[ShortcutDescriptor],
    json: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    // The modal is a TUI capability; resolve reports the panel's own view
    let rows = compose(context, shortcuts, true);

    if json {
        let entries: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.descriptor.id,
                    "label": row.view.label,
                    "path": row.descriptor.path,
                    "icon": row.view.icon.class_name(),
                    "enabled": row.interactive(),
                    "dav_url": context.dav_url(&row.descriptor.path),
                    "actions": row.actions().iter().map(|a| a.name()).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for row in &rows {
        let label = if row.interactive() {
            row.view.label.normal()
        } else {
            format!("{} (disabled)", row.view.label).dimmed()
        };
        println!(
            "{} {}  {}",
            row.view.icon.glyph(),
            label,
            row.descriptor.path.dimmed()
        );
        if let Some(dav_url) = context.dav_url(&row.descriptor.path) {
            output.info(&format!("  webdav: {dav_url}"));
        }
    }
    Ok(())
}

/// Copy a shortcut's path or WebDAV link to the clipboard
fn copy(
    context: &ExecutionContext,
    shortcuts: &[ShortcutDescriptor],
    id: &str,
    dav: bool,
    output: Box<dyn OutputWriter>,
) -> Result<()> {
    let shortcut = shortcuts::find_by_id(shortcuts, id)?.clone();
    if !shortcut.enabled {
        return Err(DeckError::InvalidInput(format!(
            "Shortcut '{id}' is disabled"
        )));
    }
    let target = if dav {
        if context.dav_url(&shortcut.path).is_none() {
            return Err(DeckError::InvalidInput(
                "WebDAV is not available for this context".to_string(),
            ));
        }
        CopyTarget::DavLink
    } else {
        CopyTarget::IrodsPath
    };

    let mut dispatcher = ActionDispatcher::new(context.clone())
        .with_clipboard(Box::new(SystemClipboard::new()?))
        .with_notify(Box::new(move |message: &str| output.success(message)));
    dispatcher.copy_path(&shortcut, target)?;
    Ok(())
}

/// Open a shortcut's WebDAV link in the browser
fn open_link(
    context: &ExecutionContext,
    shortcuts: &[ShortcutDescriptor],
    id: &str,
    output: &dyn OutputWriter,
) -> Result<()> {
    let shortcut = shortcuts::find_by_id(shortcuts, id)?.clone();
    if !shortcut.enabled {
        return Err(DeckError::InvalidInput(format!(
            "Shortcut '{id}' is disabled"
        )));
    }
    let Some(dav_url) = context.dav_url(&shortcut.path) else {
        return Err(DeckError::InvalidInput(
            "WebDAV is not available for this context".to_string(),
        ));
    };

    let mut dispatcher =
        ActionDispatcher::new(context.clone()).with_opener(Box::new(SystemOpener::new()));
    dispatcher.open_link(&shortcut)?;
    output.info(&format!("Opened {dav_url}"));
    Ok(())
}
