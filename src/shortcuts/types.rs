//! Core shortcut types: descriptors, kinds, icons and actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the results/reports collection shortcut
pub const RESULTS_COLL_ID: &str = "results_reports";
/// Identifier of the misc files collection shortcut
pub const MISC_FILES_COLL_ID: &str = "misc_files";
/// Identifier prefix for track hub shortcuts (`track_hub_0`, `track_hub_1`, ..)
pub const TRACK_HUB_ID_PREFIX: &str = "track_hub_";

fn default_enabled() -> bool {
    true
}

/// A single shortcut entry as supplied by the host
///
/// Shortcut lists arrive as JSON from the host page or from assay plugins,
/// so the shape is deliberately permissive: only `id`, `label` and `path`
/// are required, everything else has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutDescriptor {
    /// Unique identifier within the list
    pub id: String,
    /// Display label
    pub label: String,
    /// Absolute iRODS path the shortcut points at
    pub path: String,
    /// Whether the shortcut is interactive (default true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Optional tooltip text
    #[serde(default)]
    pub title: Option<String>,
    /// Whether the entry was registered by an assay plugin
    #[serde(default, rename = "assay_plugin")]
    pub plugin_origin: bool,
}

impl ShortcutDescriptor {
    /// Create a descriptor with default flags (enabled, not plugin-origin)
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            enabled: true,
            title: None,
            plugin_origin: false,
        }
    }

    /// Mark the descriptor as disabled
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Mark the descriptor as registered by an assay plugin
    #[must_use]
    pub fn from_plugin(mut self) -> Self {
        self.plugin_origin = true;
        self
    }

    /// Resolve the shortcut kind from the descriptor
    ///
    /// Plugin-origin entries are always `Extension`, regardless of id.
    #[must_use]
    pub fn kind(&self) -> ShortcutKind {
        if self.plugin_origin {
            ShortcutKind::Extension
        } else {
            ShortcutKind::from_id(&self.id)
        }
    }

    /// Whether the descriptor carries the minimum data needed to act on it
    ///
    /// A well-formed descriptor has a non-empty label and a non-empty
    /// absolute path. Malformed entries still render, but with no actions.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.label.is_empty() && self.path.starts_with('/')
    }
}

/// Kind of a shortcut, resolved by static identifier matching
///
/// Anything outside the recognized set is treated as a plugin-registered
/// extension and rendered with the generic extension icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKind {
    /// Results and reports collection
    ResultsReports,
    /// Miscellaneous files collection
    MiscFiles,
    /// Genome browser track hub collection
    TrackHub,
    /// Unrecognized id, assumed to come from an external plugin
    Extension,
}

impl ShortcutKind {
    /// Resolve a kind from a shortcut id
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            RESULTS_COLL_ID => Self::ResultsReports,
            MISC_FILES_COLL_ID => Self::MiscFiles,
            _ if id.starts_with(TRACK_HUB_ID_PREFIX) => Self::TrackHub,
            _ => Self::Extension,
        }
    }

    /// Icon associated with this kind
    #[must_use]
    pub const fn icon(&self) -> Icon {
        match self {
            Self::ResultsReports => Icon::FolderTable,
            Self::MiscFiles => Icon::Folder,
            Self::TrackHub => Icon::Road,
            Self::Extension => Icon::Puzzle,
        }
    }

    /// Actions available for this kind
    ///
    /// Known kinds get the full set. Extensions only get basic path copy;
    /// deeper behavior is the plugin's own responsibility.
    #[must_use]
    pub const fn actions(&self) -> &'static [ShortcutAction] {
        match self {
            Self::ResultsReports | Self::MiscFiles | Self::TrackHub => &[
                ShortcutAction::CopyPath,
                ShortcutAction::CopyDavLink,
                ShortcutAction::OpenDavLink,
                ShortcutAction::ListDirectory,
            ],
            Self::Extension => &[ShortcutAction::CopyPath],
        }
    }
}

/// Icon shown in the shortcut row badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Tabular results collection
    FolderTable,
    /// Plain file collection
    Folder,
    /// Track hub
    Road,
    /// Extension / plugin shortcut
    Puzzle,
}

impl Icon {
    /// Stable icon class name, usable as a style hook
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::FolderTable => "folder-table",
            Self::Folder => "folder",
            Self::Road => "road",
            Self::Puzzle => "puzzle",
        }
    }

    /// Terminal glyph for the row badge
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::FolderTable => "▦",
            Self::Folder => "▣",
            Self::Road => "◆",
            Self::Puzzle => "◘",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name())
    }
}

/// An action a shortcut row can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Copy the raw iRODS path to the clipboard
    CopyPath,
    /// Copy the derived WebDAV URL to the clipboard
    CopyDavLink,
    /// Open the derived WebDAV URL externally
    OpenDavLink,
    /// Show the directory listing in the modal
    ListDirectory,
}

impl ShortcutAction {
    /// Whether this action needs a WebDAV URL to be derivable
    #[must_use]
    pub const fn requires_dav(&self) -> bool {
        matches!(self, Self::CopyDavLink | Self::OpenDavLink)
    }

    /// Whether this action needs a modal controller to be present
    #[must_use]
    pub const fn requires_modal(&self) -> bool {
        matches!(self, Self::ListDirectory)
    }

    /// Stable machine-readable action name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CopyPath => "copy_path",
            Self::CopyDavLink => "copy_dav_link",
            Self::OpenDavLink => "open_dav_link",
            Self::ListDirectory => "list_directory",
        }
    }

    /// Returns a human-readable description of the action.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CopyPath => "Copy iRODS path",
            Self::CopyDavLink => "Copy WebDAV link",
            Self::OpenDavLink => "Open WebDAV link in browser",
            Self::ListDirectory => "List directory contents",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_known_ids() {
        assert_eq!(
            ShortcutKind::from_id("results_reports"),
            ShortcutKind::ResultsReports
        );
        assert_eq!(ShortcutKind::from_id("misc_files"), ShortcutKind::MiscFiles);
        assert_eq!(ShortcutKind::from_id("track_hub_0"), ShortcutKind::TrackHub);
        assert_eq!(ShortcutKind::from_id("track_hub_12"), ShortcutKind::TrackHub);
    }

    #[test]
    fn test_kind_from_unknown_id_is_extension() {
        assert_eq!(
            ShortcutKind::from_id("plugin_shortcut"),
            ShortcutKind::Extension
        );
        assert_eq!(ShortcutKind::from_id(""), ShortcutKind::Extension);
    }

    #[test]
    fn test_plugin_origin_overrides_id_match() {
        let sc = ShortcutDescriptor::new("results_reports", "From plugin", "/zone/x").from_plugin();
        assert_eq!(sc.kind(), ShortcutKind::Extension);
    }

    #[test]
    fn test_extension_actions_reduced() {
        assert_eq!(
            ShortcutKind::Extension.actions(),
            &[ShortcutAction::CopyPath]
        );
        assert_eq!(ShortcutKind::MiscFiles.actions().len(), 4);
    }

    #[test]
    fn test_descriptor_well_formed() {
        assert!(ShortcutDescriptor::new("a", "A", "/zone/a").is_well_formed());
        assert!(!ShortcutDescriptor::new("a", "", "/zone/a").is_well_formed());
        assert!(!ShortcutDescriptor::new("a", "A", "relative/path").is_well_formed());
        assert!(!ShortcutDescriptor::new("a", "A", "").is_well_formed());
    }

    #[test]
    fn test_descriptor_deserialize_defaults() {
        let sc: ShortcutDescriptor = serde_json::from_str(
            r#"{"id": "misc_files", "label": "Misc Files", "path": "/zone/misc"}"#,
        )
        .unwrap();
        assert!(sc.enabled);
        assert!(!sc.plugin_origin);
        assert!(sc.title.is_none());
    }

    #[test]
    fn test_descriptor_deserialize_plugin_flag() {
        let sc: ShortcutDescriptor = serde_json::from_str(
            r#"{"id": "x", "label": "X", "path": "/zone/x", "assay_plugin": true, "enabled": false}"#,
        )
        .unwrap();
        assert!(sc.plugin_origin);
        assert!(!sc.enabled);
        assert_eq!(sc.kind(), ShortcutKind::Extension);
    }
}
