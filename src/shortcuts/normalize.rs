//! Descriptor normalization (pure business logic)
//!
//! Turns raw shortcut descriptors into a resolved view: display label, icon,
//! interactivity and the action set the row exposes. Normalization never
//! fails; malformed entries degrade to a row with no actions, since shortcut
//! lists may originate from heterogeneous plugin sources.

use crate::shortcuts::types::{Icon, ShortcutAction, ShortcutDescriptor, ShortcutKind};

/// A descriptor resolved for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedShortcut {
    /// Display label
    pub label: String,
    /// Resolved kind
    pub kind: ShortcutKind,
    /// Icon for the row badge
    pub icon: Icon,
    /// Whether the row responds to activation
    pub interactive: bool,
    /// Actions the row exposes, in display order
    pub actions: Vec<ShortcutAction>,
    /// Tooltip text, if any
    pub title: Option<String>,
}

/// Normalize a descriptor into its rendered form
///
/// Resolution rule: a recognized id gets that kind's default icon and the
/// full action set; anything else gets the extension icon and basic path
/// copy only. `interactive` follows the descriptor's enabled flag.
///
/// Malformed descriptors (empty label, empty or relative path) produce a
/// non-actionable row rather than an error.
#[must_use]
pub fn normalize(descriptor: &ShortcutDescriptor) -> NormalizedShortcut {
    let kind = descriptor.kind();
    let actions = if descriptor.is_well_formed() {
        kind.actions().to_vec()
    } else {
        Vec::new()
    };
    let title = descriptor.title.clone().or_else(|| {
        descriptor
            .plugin_origin
            .then(|| "Defined in assay plugin".to_string())
    });

    NormalizedShortcut {
        label: descriptor.label.clone(),
        kind,
        icon: kind.icon(),
        interactive: descriptor.enabled,
        actions,
        title,
    }
}
