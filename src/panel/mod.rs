//! Shortcut panel: row composition, state and terminal widgets
//!
//! The panel is a pure function of (context, shortcut list) plus the
//! collaborators it is given: `rows` composes the renderable rows, `state`
//! layers cursor/menu handling and activation on top, and `widget` renders
//! it all with ratatui.

pub mod rows;
pub mod state;
pub mod theme;
pub mod widget;

pub use rows::{ShortcutRow, compose};
pub use state::{MenuState, PanelState};
pub use theme::Theme;
pub use widget::{ActionMenu, DirectoryModal, DirectoryModalView, ShortcutCard};
