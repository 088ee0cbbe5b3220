//! Theme and styling constants for the blockdrill TUI.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for hashes and identifiers.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for field labels in detail tables.
pub const LABEL_STYLE: Style = Style::new().fg(WARNING_COLOR).add_modifier(Modifier::BOLD);

/// Style for selected items in lists.
pub const SELECTED_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

// ============================================================================
// Flow Graph Palettes
// ============================================================================

/// Colors used to draw a flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowPalette {
    /// Sender nodes and outgoing bars.
    pub source: Color,
    /// Receiver nodes and incoming bars.
    pub target: Color,
    /// Node labels.
    pub label: Color,
}

/// Selectable flow graph theme, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowTheme {
    /// Orange into green on a dark background.
    #[default]
    Dark,
    /// Pink into amber with navy labels.
    Light,
}

impl FlowTheme {
    #[must_use]
    pub const fn palette(self) -> FlowPalette {
        match self {
            Self::Dark => FlowPalette {
                source: Color::Rgb(0xFF, 0xA5, 0x00),
                target: Color::Rgb(0x32, 0xCD, 0x32),
                label: Color::White,
            },
            Self::Light => FlowPalette {
                source: Color::Rgb(0xD6, 0x33, 0x6C),
                target: Color::Rgb(0xF5, 0x9E, 0x0B),
                label: Color::Rgb(0x34, 0x56, 0x8B),
            },
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}
