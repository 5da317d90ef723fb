//! Output abstraction
//!
//! Status messages with severity levels, decoupled from the output
//! mechanism so the CLI (stdout) and the TUI (status line) can share the
//! notification path.

use colored::Colorize;

/// Trait for output operations
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes colored output to stdout/stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }
}

/// Writer that swallows everything (quiet mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct QuietWriter;

impl OutputWriter for QuietWriter {
    fn write(&self, _message: &str) {}
    fn error(&self, message: &str) {
        // Errors still surface in quiet mode
        eprintln!("{} {}", "✗".red(), message);
    }
    fn success(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}
