//! Shortcut descriptor model and normalization
//!
//! Shortcut lists describe labeled links into the iRODS sample data store.
//! This module owns the descriptor shape as supplied by the host, the static
//! set of recognized shortcut kinds, and the normalization step that resolves
//! each entry to an icon, interactivity flag and action set for rendering.
//!
//! Entries whose id is not in the recognized set are treated as plugin
//! shortcuts and rendered with the generic extension icon.

pub mod error;
pub mod normalize;
pub mod types;

pub use error::{Result, ShortcutError};
pub use normalize::{NormalizedShortcut, normalize};
pub use types::{
    Icon, MISC_FILES_COLL_ID, RESULTS_COLL_ID, ShortcutAction, ShortcutDescriptor, ShortcutKind,
    TRACK_HUB_ID_PREFIX,
};

/// Load a shortcut list from a JSON string
///
/// # Errors
/// Returns `ShortcutError::ParseError` if the JSON is not a shortcut list.
pub fn parse_list(json: &str) -> Result<Vec<ShortcutDescriptor>> {
    Ok(serde_json::from_str(json)?)
}

/// Find a shortcut by id
///
/// Duplicate ids are not defended against; the first match wins.
///
/// # Errors
/// Returns `ShortcutError::UnknownId` if no entry matches.
pub fn find_by_id<'a>(
    shortcuts: &'a [ShortcutDescriptor],
    id: &str,
) -> Result<&'a ShortcutDescriptor> {
    shortcuts
        .iter()
        .find(|sc| sc.id == id)
        .ok_or_else(|| ShortcutError::UnknownId(id.to_string()))
}
