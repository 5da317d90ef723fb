//! Collaborator seams for action dispatch
//!
//! Each side effect the panel can trigger goes through one of these
//! capability traits. The host injects concrete implementations; every
//! collaborator is optional, and an absent collaborator silently suppresses
//! the dependent behavior instead of breaking the panel.

use super::error::Result;

/// Writes text to the system clipboard
///
/// Must be present for any copy action to do anything observable.
/// Failures are the implementation's own to surface; the dispatcher
/// propagates them without interpretation.
pub trait ClipboardWriter {
    /// Write text to the clipboard
    ///
    /// # Errors
    /// Returns an error if the clipboard is unavailable or rejects the write.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Requests external navigation to a URL
///
/// Fire-and-forget from the panel's viewpoint; the implementation decides
/// what "opening" means (browser, handler, recording double).
pub trait LinkOpener {
    /// Open the given URL externally
    ///
    /// # Errors
    /// Returns an error if the URL cannot be handed off.
    fn open_url(&mut self, url: &str) -> Result<()>;
}

/// Displays titled content in an overlay dialog
///
/// `set_title` must be called before `show_modal` so the dialog never
/// becomes visible with a stale title.
pub trait ModalController {
    /// Set the dialog title
    fn set_title(&mut self, title: &str);

    /// Show the dialog with a directory listing for the given path
    fn show_modal(&mut self, path: &str);
}

/// Optional callback invoked once per successful copy action
pub type NotifyCallback = Box<dyn Fn(&str) + Send>;
