//! Mock collaborators for testing
//!
//! Recording doubles for the collaborator traits. All mocks sharing a
//! `CallLog` append to the same ordered log, so tests can verify both call
//! counts and call ordering across collaborators without user interaction
//! or a live clipboard.

use super::error::{DispatchError, Result};
use super::traits::{ClipboardWriter, LinkOpener, ModalController, NotifyCallback};
use std::sync::{Arc, Mutex};

/// Shared, ordered record of collaborator calls
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the log
    pub fn record(&self, entry: impl Into<String>) {
        self.calls
            .lock()
            .expect("call log lock poisoned")
            .push(entry.into());
    }

    /// Snapshot of all recorded calls, in order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }

    /// Number of recorded calls
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().expect("call log lock poisoned").len()
    }

    /// Whether no calls were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mock clipboard that records writes, optionally simulating failure
#[derive(Debug, Clone)]
pub struct MockClipboard {
    log: CallLog,
    should_fail: bool,
}

impl MockClipboard {
    /// Create a mock clipboard recording into the given log
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            should_fail: false,
        }
    }

    /// Create a mock clipboard whose writes always fail
    #[must_use]
    pub fn failing(log: CallLog) -> Self {
        Self {
            log,
            should_fail: true,
        }
    }
}

impl ClipboardWriter for MockClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.should_fail {
            return Err(DispatchError::Clipboard("simulated failure".to_string()));
        }
        self.log.record(format!("clipboard:{text}"));
        Ok(())
    }
}

/// Mock link opener that records requested URLs
#[derive(Debug, Clone)]
pub struct MockOpener {
    log: CallLog,
}

impl MockOpener {
    /// Create a mock opener recording into the given log
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl LinkOpener for MockOpener {
    fn open_url(&mut self, url: &str) -> Result<()> {
        self.log.record(format!("open:{url}"));
        Ok(())
    }
}

/// Mock modal controller that records title/show calls
#[derive(Debug, Clone)]
pub struct MockModal {
    log: CallLog,
    /// Last title set, if any
    pub title: Option<String>,
    /// Last path shown, if any
    pub path: Option<String>,
}

impl MockModal {
    /// Create a mock modal recording into the given log
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            title: None,
            path: None,
        }
    }
}

impl ModalController for MockModal {
    fn set_title(&mut self, title: &str) {
        self.log.record(format!("set_title:{title}"));
        self.title = Some(title.to_string());
    }

    fn show_modal(&mut self, path: &str) {
        self.log.record(format!("show_modal:{path}"));
        self.path = Some(path.to_string());
    }
}

/// Notify callback that records messages into the given log
#[must_use]
pub fn recording_notify(log: CallLog) -> NotifyCallback {
    Box::new(move |message: &str| log.record(format!("notify:{message}")))
}
