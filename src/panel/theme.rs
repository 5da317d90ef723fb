//! Color theme for the shortcut panel
//!
//! Defines colors and styles used by the panel widgets.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the panel
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the row under the cursor
    pub selection_bg: Color,
    /// Foreground color for the row under the cursor
    pub selection_fg: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/disabled rows
    pub dimmed: Color,
    /// Color for row badges/icons
    pub badge: Color,
    /// Color for iRODS paths
    pub path: Color,
    /// Color for the extension (plugin) badge
    pub extension: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            badge: Color::Cyan,
            path: Color::White,
            extension: Color::Magenta,
        }
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for disabled rows and controls
    #[must_use]
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::DIM)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for a row badge of the given extension-ness
    #[must_use]
    pub fn badge_style(&self, extension: bool) -> Style {
        if extension {
            Style::default().fg(self.extension)
        } else {
            Style::default().fg(self.badge)
        }
    }

    /// Style for path text
    #[must_use]
    pub fn path_style(&self) -> Style {
        Style::default().fg(self.path)
    }
}
