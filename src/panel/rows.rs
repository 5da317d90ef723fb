//! Row composition for the shortcut card (pure business logic)
//!
//! Composes normalized descriptors into renderable rows: one row per
//! descriptor, in list order, with a primary action affordance and the
//! remaining actions in a secondary "more actions" menu. Actions whose
//! prerequisites are missing (no WebDAV, no modal controller) are filtered
//! out rather than rendered as broken controls.

use crate::context::ExecutionContext;
use crate::shortcuts::{NormalizedShortcut, ShortcutAction, ShortcutDescriptor, normalize};

/// A single renderable shortcut row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRow {
    /// The descriptor this row was composed from
    pub descriptor: ShortcutDescriptor,
    /// Resolved display data
    pub view: NormalizedShortcut,
    /// Primary action affordance, if the row has any applicable action
    pub primary: Option<ShortcutAction>,
    /// Remaining actions, exposed through the "more actions" menu
    pub menu: Vec<ShortcutAction>,
}

impl ShortcutRow {
    /// Whether the row responds to activation
    #[must_use]
    pub const fn interactive(&self) -> bool {
        self.view.interactive
    }

    /// All applicable actions, primary first
    #[must_use]
    pub fn actions(&self) -> Vec<ShortcutAction> {
        self.primary.into_iter().chain(self.menu.iter().copied()).collect()
    }
}

/// Compose shortcut rows from a descriptor list
///
/// Every descriptor yields exactly one row, in input order. Dav-dependent
/// actions are dropped when the context cannot derive WebDAV links, and the
/// directory listing action is dropped when the host supplies no modal
/// controller.
#[must_use]
pub fn compose(
    context: &ExecutionContext,
    shortcuts: &[ShortcutDescriptor],
    has_modal: bool,
) -> Vec<ShortcutRow> {
    shortcuts
        .iter()
        .map(|descriptor| {
            let view = normalize(descriptor);
            let mut applicable: Vec<ShortcutAction> = view
                .actions
                .iter()
                .copied()
                .filter(|action| !(action.requires_dav() && !context.dav_available()))
                .filter(|action| !(action.requires_modal() && !has_modal))
                .collect();
            let primary = if applicable.is_empty() {
                None
            } else {
                Some(applicable.remove(0))
            };
            ShortcutRow {
                descriptor: descriptor.clone(),
                view,
                primary,
                menu: applicable,
            }
        })
        .collect()
}
