//! Ratatui widgets for the shortcut panel
//!
//! The card widget renders one row per shortcut with its badge, label and
//! primary action hint. The action menu renders the "more actions" popup for
//! the current row, and the directory modal is a `ModalController`
//! implementation that renders the listing overlay.

use crate::dispatch::ModalController;
use crate::panel::state::PanelState;
use crate::panel::theme::Theme;
use crate::shortcuts::Icon;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
};

/// Calculate a centered area for a popup
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height.min(90)) / 2),
        Constraint::Percentage(height.min(90)),
        Constraint::Percentage((100 - height.min(90)) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width.min(90)) / 2),
        Constraint::Percentage(width.min(90)),
        Constraint::Percentage((100 - width.min(90)) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// The assay shortcut card widget
pub struct ShortcutCard<'a> {
    /// Panel state to render
    state: &'a PanelState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the card block
    title: String,
}

impl<'a> ShortcutCard<'a> {
    /// Create a new shortcut card widget
    #[must_use]
    pub fn new(state: &'a PanelState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            title: " Assay Shortcuts ".to_string(),
        }
    }

    /// Set a custom card title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Render a single shortcut row
    fn render_row(&self, idx: usize) -> ListItem<'a> {
        let row = &self.state.rows()[idx];
        let is_cursor = idx == self.state.cursor;
        let disabled = !row.interactive();

        let cursor_char = if is_cursor { ">" } else { " " };
        let badge_style = if disabled {
            self.theme.disabled_style()
        } else {
            self.theme.badge_style(row.view.icon == Icon::Puzzle)
        };
        let label_style = if disabled {
            self.theme.disabled_style()
        } else if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };

        let mut spans = vec![
            Span::styled(cursor_char.to_string(), self.theme.selected_style()),
            Span::raw(" "),
            Span::styled(row.view.icon.glyph().to_string(), badge_style),
            Span::raw(" "),
            Span::styled(row.view.label.clone(), label_style),
        ];

        if disabled {
            spans.push(Span::styled(
                "  (disabled)".to_string(),
                self.theme.disabled_style(),
            ));
        } else if let Some(primary) = row.primary {
            spans.push(Span::styled(
                format!("  ⏎ {}", primary.description()),
                Style::default().add_modifier(Modifier::DIM),
            ));
            if !row.menu.is_empty() {
                spans.push(Span::styled(
                    "  [m] more".to_string(),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }

        ListItem::new(Line::from(spans))
    }
}

impl Widget for ShortcutCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let items: Vec<ListItem> = (0..self.state.rows().len())
            .map(|idx| self.render_row(idx))
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}

/// Popup menu exposing the remaining actions of the current row
pub struct ActionMenu<'a> {
    state: &'a PanelState,
    theme: &'a Theme,
}

impl<'a> ActionMenu<'a> {
    /// Create a new action menu widget
    #[must_use]
    pub const fn new(state: &'a PanelState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for ActionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(menu) = self.state.menu else {
            return;
        };
        let Some(row) = self.state.rows().get(menu.row) else {
            return;
        };

        let popup_area = centered_rect(40, 30, area);
        Clear.render(popup_area, buf);

        let items: Vec<ListItem> = row
            .menu
            .iter()
            .enumerate()
            .map(|(idx, action)| {
                let style = if idx == menu.cursor {
                    self.theme.selected_style()
                } else {
                    self.theme.normal_style()
                };
                ListItem::new(Line::from(Span::styled(
                    action.description().to_string(),
                    style,
                )))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {} ", row.view.label))
            .title_alignment(Alignment::Center);

        List::new(items).block(block).render(popup_area, buf);
    }
}

/// Directory listing modal for the panel
///
/// Implements `ModalController`: the dispatcher sets the title first, then
/// shows the modal, and the widget renders whatever was last shown. Hiding
/// clears the content so a re-show never flashes stale state.
#[derive(Debug, Clone, Default)]
pub struct DirectoryModal {
    title: Option<String>,
    path: Option<String>,
    visible: bool,
}

impl DirectoryModal {
    /// Create a hidden directory modal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is currently shown
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// The path being listed, if shown
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Hide the modal and clear its content
    pub fn hide(&mut self) {
        self.visible = false;
        self.title = None;
        self.path = None;
    }
}

impl ModalController for DirectoryModal {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn show_modal(&mut self, path: &str) {
        self.path = Some(path.to_string());
        self.visible = true;
    }
}

/// Renders the directory modal overlay
pub struct DirectoryModalView<'a> {
    modal: &'a DirectoryModal,
    theme: &'a Theme,
    /// Derived WebDAV URL for the listed path, if available
    dav_url: Option<String>,
}

impl<'a> DirectoryModalView<'a> {
    /// Create a view over the given modal state
    #[must_use]
    pub const fn new(modal: &'a DirectoryModal, theme: &'a Theme, dav_url: Option<String>) -> Self {
        Self {
            modal,
            theme,
            dav_url,
        }
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(path) = self.modal.path() {
            lines.push(Line::from(vec![
                Span::styled("Collection: ", self.theme.disabled_style()),
                Span::styled(path.to_string(), self.theme.path_style()),
            ]));
            if let Some(dav_url) = &self.dav_url {
                lines.push(Line::from(vec![
                    Span::styled("WebDAV:     ", self.theme.disabled_style()),
                    Span::raw(dav_url.clone()),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press Esc to close",
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines
    }
}

impl Widget for DirectoryModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.modal.visible() {
            return;
        }

        let popup_area = centered_rect(70, 40, area);
        Clear.render(popup_area, buf);

        let title = self
            .modal
            .title
            .clone()
            .unwrap_or_else(|| "Directory".to_string());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {title} "))
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}
