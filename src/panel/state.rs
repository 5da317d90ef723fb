//! Panel state: selection, action menu and activation
//!
//! Holds the composed rows plus the transient UI state (cursor, open action
//! menu). Activation is the single path from user interaction into the
//! action dispatcher, and it refuses to dispatch anything for rows that are
//! not interactive.

use crate::dispatch::{ActionDispatcher, ModalController, Result};
use crate::panel::rows::{ShortcutRow, compose};
use crate::shortcuts::{ShortcutAction, ShortcutDescriptor};

/// State of the open "more actions" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    /// Row the menu belongs to
    pub row: usize,
    /// Highlighted menu entry
    pub cursor: usize,
}

/// State of the shortcut panel
pub struct PanelState {
    rows: Vec<ShortcutRow>,
    has_modal: bool,
    /// Row under the cursor
    pub cursor: usize,
    /// Open action menu, if any
    pub menu: Option<MenuState>,
}

impl PanelState {
    /// Compose panel state from a descriptor list
    #[must_use]
    pub fn new(
        dispatcher: &ActionDispatcher,
        shortcuts: &[ShortcutDescriptor],
        has_modal: bool,
    ) -> Self {
        Self {
            rows: compose(dispatcher.context(), shortcuts, has_modal),
            has_modal,
            cursor: 0,
            menu: None,
        }
    }

    /// The composed rows, in render order
    #[must_use]
    pub fn rows(&self) -> &[ShortcutRow] {
        &self.rows
    }

    /// The row under the cursor
    #[must_use]
    pub fn current_row(&self) -> Option<&ShortcutRow> {
        self.rows.get(self.cursor)
    }

    /// Replace the descriptor list and recompose all rows
    ///
    /// Rows are derived fresh from the new list; nothing from the previous
    /// list survives. The cursor is clamped and any open menu closed.
    pub fn set_shortcuts(&mut self, dispatcher: &ActionDispatcher, shortcuts: &[ShortcutDescriptor]) {
        self.rows = compose(dispatcher.context(), shortcuts, self.has_modal);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.menu = None;
    }

    /// Move the cursor down, saturating at the last row
    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor up, saturating at the first row
    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Open the "more actions" menu for the current row
    ///
    /// Non-interactive rows and rows without menu entries keep the menu
    /// closed.
    pub fn open_menu(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if row.interactive() && !row.menu.is_empty() {
            self.menu = Some(MenuState {
                row: self.cursor,
                cursor: 0,
            });
        }
    }

    /// Close the action menu
    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Move the menu highlight down
    pub fn menu_next(&mut self) {
        if let Some(menu) = &mut self.menu {
            let len = self.rows[menu.row].menu.len();
            if menu.cursor + 1 < len {
                menu.cursor += 1;
            }
        }
    }

    /// Move the menu highlight up
    pub fn menu_prev(&mut self) {
        if let Some(menu) = &mut self.menu {
            menu.cursor = menu.cursor.saturating_sub(1);
        }
    }

    /// Activate the primary affordance of the current row
    ///
    /// Activating a non-interactive row performs no collaborator calls at
    /// all; the dispatcher is not even invoked.
    ///
    /// # Errors
    /// Propagates collaborator failures from the dispatcher.
    pub fn activate_primary(
        &self,
        dispatcher: &mut ActionDispatcher,
        modal: Option<&mut dyn ModalController>,
    ) -> Result<()> {
        let Some(row) = self.current_row() else {
            return Ok(());
        };
        let Some(action) = row.primary else {
            return Ok(());
        };
        self.activate(row, action, dispatcher, modal)
    }

    /// Activate the highlighted entry of the open action menu
    ///
    /// Closes the menu afterwards.
    ///
    /// # Errors
    /// Propagates collaborator failures from the dispatcher.
    pub fn activate_menu_item(
        &mut self,
        dispatcher: &mut ActionDispatcher,
        modal: Option<&mut dyn ModalController>,
    ) -> Result<()> {
        let Some(menu) = self.menu.take() else {
            return Ok(());
        };
        let Some(row) = self.rows.get(menu.row) else {
            return Ok(());
        };
        let Some(action) = row.menu.get(menu.cursor).copied() else {
            return Ok(());
        };
        self.activate(row, action, dispatcher, modal)
    }

    fn activate(
        &self,
        row: &ShortcutRow,
        action: ShortcutAction,
        dispatcher: &mut ActionDispatcher,
        modal: Option<&mut dyn ModalController>,
    ) -> Result<()> {
        if !row.interactive() {
            return Ok(());
        }
        dispatcher.dispatch(&row.descriptor, action, modal)
    }
}
