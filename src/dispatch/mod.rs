//! Action dispatch for shortcut rows
//!
//! The dispatcher implements the interactive behaviors of the panel: copy a
//! path or WebDAV link to the clipboard (with caller notification), open a
//! WebDAV link externally, and show a directory listing in the host's modal.
//! Every behavior delegates to an injected collaborator and every operation
//! is a no-op for non-interactive shortcuts.
//!
//! Dispatch is synchronous fire-and-forget: the dispatcher does not await or
//! sequence collaborator completion, and collaborator failures pass through
//! untouched.

pub mod error;
pub mod mock;
pub mod system;
pub mod traits;

pub use error::{DispatchError, Result};
pub use system::{SystemClipboard, SystemOpener};
pub use traits::{ClipboardWriter, LinkOpener, ModalController, NotifyCallback};

use crate::context::ExecutionContext;
use crate::shortcuts::{ShortcutAction, ShortcutDescriptor};

/// Which text a copy action places on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// The raw iRODS path
    IrodsPath,
    /// The derived WebDAV URL
    DavLink,
}

/// Executes shortcut actions against injected collaborators
///
/// All collaborators are optional. An absent clipboard, opener or notify
/// callback silently suppresses the dependent behavior; the modal controller
/// is supplied per call since the host owns its lifecycle.
pub struct ActionDispatcher {
    context: ExecutionContext,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    opener: Option<Box<dyn LinkOpener>>,
    notify: Option<NotifyCallback>,
}

impl ActionDispatcher {
    /// Create a dispatcher with no collaborators attached
    #[must_use]
    pub fn new(context: ExecutionContext) -> Self {
        Self {
            context,
            clipboard: None,
            opener: None,
            notify: None,
        }
    }

    /// Attach a clipboard collaborator
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardWriter>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Attach a link opener collaborator
    #[must_use]
    pub fn with_opener(mut self, opener: Box<dyn LinkOpener>) -> Self {
        self.opener = Some(opener);
        self
    }

    /// Attach a notify callback, invoked once per successful copy
    #[must_use]
    pub fn with_notify(mut self, notify: NotifyCallback) -> Self {
        self.notify = Some(notify);
        self
    }

    /// The context this dispatcher derives links from
    #[must_use]
    pub const fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// Copy the shortcut's path or WebDAV link to the clipboard
    ///
    /// No-op for disabled shortcuts, when no clipboard collaborator is
    /// attached, or when a dav link is requested but not derivable. On a
    /// successful write the notify callback (if any) is invoked once.
    ///
    /// # Errors
    /// Propagates the clipboard collaborator's failure unchanged.
    pub fn copy_path(&mut self, shortcut: &ShortcutDescriptor, target: CopyTarget) -> Result<()> {
        if !shortcut.enabled {
            return Ok(());
        }
        let (text, message) = match target {
            CopyTarget::IrodsPath => (shortcut.path.clone(), "Copied iRODS path to clipboard"),
            CopyTarget::DavLink => match self.context.dav_url(&shortcut.path) {
                Some(url) => (url, "Copied WebDAV link to clipboard"),
                None => return Ok(()),
            },
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            return Ok(());
        };
        clipboard.write(&text)?;
        if let Some(notify) = &self.notify {
            notify(message);
        }
        Ok(())
    }

    /// Open the shortcut's WebDAV link externally
    ///
    /// No-op for disabled shortcuts, when no opener is attached, or when no
    /// WebDAV link can be derived.
    ///
    /// # Errors
    /// Propagates the opener collaborator's failure unchanged.
    pub fn open_link(&mut self, shortcut: &ShortcutDescriptor) -> Result<()> {
        if !shortcut.enabled {
            return Ok(());
        }
        let Some(url) = self.context.dav_url(&shortcut.path) else {
            return Ok(());
        };
        let Some(opener) = self.opener.as_mut() else {
            return Ok(());
        };
        opener.open_url(&url)
    }

    /// Show the shortcut's directory listing in the given modal
    ///
    /// Sets the title strictly before showing the modal, so the dialog never
    /// becomes visible with a stale title. No-op for disabled shortcuts and
    /// when `modal` is `None` (directory listing is an optional capability
    /// of the host page).
    ///
    /// # Errors
    /// Returns `DispatchError::MissingPath` when called with a pathless
    /// shortcut while a modal is present; that is a caller bug, not data to
    /// degrade on.
    pub fn list_directory(
        &self,
        shortcut: &ShortcutDescriptor,
        modal: Option<&mut dyn ModalController>,
    ) -> Result<()> {
        if !shortcut.enabled {
            return Ok(());
        }
        let Some(modal) = modal else {
            return Ok(());
        };
        if shortcut.path.is_empty() {
            return Err(DispatchError::MissingPath(shortcut.id.clone()));
        }
        modal.set_title(&shortcut.label);
        modal.show_modal(&shortcut.path);
        Ok(())
    }

    /// Dispatch any shortcut action to the matching operation
    ///
    /// # Errors
    /// Propagates the underlying operation's error.
    pub fn dispatch(
        &mut self,
        shortcut: &ShortcutDescriptor,
        action: ShortcutAction,
        modal: Option<&mut dyn ModalController>,
    ) -> Result<()> {
        match action {
            ShortcutAction::CopyPath => self.copy_path(shortcut, CopyTarget::IrodsPath),
            ShortcutAction::CopyDavLink => self.copy_path(shortcut, CopyTarget::DavLink),
            ShortcutAction::OpenDavLink => self.open_link(shortcut),
            ShortcutAction::ListDirectory => self.list_directory(shortcut, modal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{CallLog, MockClipboard, MockModal, MockOpener, recording_notify};
    use super::*;

    fn webdav_context() -> ExecutionContext {
        ExecutionContext {
            irods_status: true,
            irods_webdav_enabled: true,
            irods_webdav_url: Some("https://davrods.example.org".to_string()),
            ..ExecutionContext::default()
        }
    }

    fn misc_shortcut() -> ShortcutDescriptor {
        ShortcutDescriptor::new("misc_files", "Misc Files", "/zone/misc")
    }

    #[test]
    fn test_copy_path_invokes_clipboard_then_notify() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_clipboard(Box::new(MockClipboard::new(log.clone())))
            .with_notify(recording_notify(log.clone()));

        dispatcher
            .copy_path(&misc_shortcut(), CopyTarget::IrodsPath)
            .unwrap();

        assert_eq!(
            log.calls(),
            vec![
                "clipboard:/zone/misc".to_string(),
                "notify:Copied iRODS path to clipboard".to_string(),
            ]
        );
    }

    #[test]
    fn test_copy_dav_link_writes_derived_url() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_clipboard(Box::new(MockClipboard::new(log.clone())));

        dispatcher
            .copy_path(&misc_shortcut(), CopyTarget::DavLink)
            .unwrap();

        assert_eq!(
            log.calls(),
            vec!["clipboard:https://davrods.example.org/zone/misc".to_string()]
        );
    }

    #[test]
    fn test_copy_without_notify_is_tolerated() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_clipboard(Box::new(MockClipboard::new(log.clone())));

        dispatcher
            .copy_path(&misc_shortcut(), CopyTarget::IrodsPath)
            .unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_copy_without_clipboard_is_noop() {
        let log = CallLog::new();
        let mut dispatcher =
            ActionDispatcher::new(webdav_context()).with_notify(recording_notify(log.clone()));

        dispatcher
            .copy_path(&misc_shortcut(), CopyTarget::IrodsPath)
            .unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_copy_disabled_shortcut_is_noop() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_clipboard(Box::new(MockClipboard::new(log.clone())))
            .with_notify(recording_notify(log.clone()));

        dispatcher
            .copy_path(&misc_shortcut().disabled(), CopyTarget::IrodsPath)
            .unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_copy_failure_skips_notify() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_clipboard(Box::new(MockClipboard::failing(log.clone())))
            .with_notify(recording_notify(log.clone()));

        let result = dispatcher.copy_path(&misc_shortcut(), CopyTarget::IrodsPath);
        assert!(matches!(result, Err(DispatchError::Clipboard(_))));
        assert!(log.is_empty());
    }

    #[test]
    fn test_copy_dav_link_without_webdav_is_noop() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(ExecutionContext::default())
            .with_clipboard(Box::new(MockClipboard::new(log.clone())));

        dispatcher
            .copy_path(&misc_shortcut(), CopyTarget::DavLink)
            .unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_open_link_uses_derived_url() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_opener(Box::new(MockOpener::new(log.clone())));

        dispatcher.open_link(&misc_shortcut()).unwrap();
        assert_eq!(
            log.calls(),
            vec!["open:https://davrods.example.org/zone/misc".to_string()]
        );
    }

    #[test]
    fn test_open_link_disabled_is_noop() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_opener(Box::new(MockOpener::new(log.clone())));

        dispatcher.open_link(&misc_shortcut().disabled()).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_list_directory_sets_title_before_show() {
        let log = CallLog::new();
        let dispatcher = ActionDispatcher::new(webdav_context());
        let mut modal = MockModal::new(log.clone());

        dispatcher
            .list_directory(&misc_shortcut(), Some(&mut modal))
            .unwrap();

        assert_eq!(
            log.calls(),
            vec![
                "set_title:Misc Files".to_string(),
                "show_modal:/zone/misc".to_string(),
            ]
        );
    }

    #[test]
    fn test_list_directory_without_modal_is_noop() {
        let dispatcher = ActionDispatcher::new(webdav_context());
        assert!(dispatcher.list_directory(&misc_shortcut(), None).is_ok());
    }

    #[test]
    fn test_list_directory_missing_path_is_error() {
        let log = CallLog::new();
        let dispatcher = ActionDispatcher::new(webdav_context());
        let mut modal = MockModal::new(log.clone());
        let mut shortcut = misc_shortcut();
        shortcut.path = String::new();

        let result = dispatcher.list_directory(&shortcut, Some(&mut modal));
        assert!(matches!(result, Err(DispatchError::MissingPath(_))));
        assert!(log.is_empty());
    }

    #[test]
    fn test_list_directory_disabled_is_noop() {
        let log = CallLog::new();
        let dispatcher = ActionDispatcher::new(webdav_context());
        let mut modal = MockModal::new(log.clone());

        dispatcher
            .list_directory(&misc_shortcut().disabled(), Some(&mut modal))
            .unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_dispatch_routes_all_actions() {
        let log = CallLog::new();
        let mut dispatcher = ActionDispatcher::new(webdav_context())
            .with_clipboard(Box::new(MockClipboard::new(log.clone())))
            .with_opener(Box::new(MockOpener::new(log.clone())));
        let mut modal = MockModal::new(log.clone());
        let shortcut = misc_shortcut();

        dispatcher
            .dispatch(&shortcut, ShortcutAction::CopyPath, None)
            .unwrap();
        dispatcher
            .dispatch(&shortcut, ShortcutAction::CopyDavLink, None)
            .unwrap();
        dispatcher
            .dispatch(&shortcut, ShortcutAction::OpenDavLink, None)
            .unwrap();
        dispatcher
            .dispatch(&shortcut, ShortcutAction::ListDirectory, Some(&mut modal))
            .unwrap();

        assert_eq!(log.len(), 5); // two copies, one open, set_title + show_modal
    }
}
