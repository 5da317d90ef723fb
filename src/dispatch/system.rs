//! System-backed collaborator implementations
//!
//! Production implementations of the collaborator traits: the OS clipboard
//! via `arboard` and external link activation via `open`.

use super::error::{DispatchError, Result};
use super::traits::{ClipboardWriter, LinkOpener};

/// Clipboard writer backed by the system clipboard
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    /// Open a handle to the system clipboard
    ///
    /// # Errors
    /// Returns `DispatchError::Clipboard` if no clipboard is available
    /// (e.g. headless session without a display server).
    pub fn new() -> Result<Self> {
        match arboard::Clipboard::new() {
            Ok(clipboard) => Ok(Self { clipboard }),
            Err(e) => Err(DispatchError::Clipboard(format!(
                "Clipboard unavailable: {e}"
            ))),
        }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| DispatchError::Clipboard(e.to_string()))
    }
}

/// Link opener that hands URLs to the default system handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Create a new system opener
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LinkOpener for SystemOpener {
    fn open_url(&mut self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| DispatchError::OpenLink(format!("{url}: {e}")))
    }
}
