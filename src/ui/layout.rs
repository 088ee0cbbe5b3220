//! Layout calculations for the blockdrill TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{BLOCK_FIELDS_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (logo, loading indicator)
    pub header: Rect,
    /// Block view area
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

/// Sections of the block view
#[derive(Debug, Clone, Copy)]
pub struct BlockViewLayout {
    /// Scalar block fields
    pub fields: Rect,
    /// Uncle hash list (top left)
    pub uncles: Rect,
    /// Sidecar table (bottom left)
    pub sidecars: Rect,
    /// Transaction hash list (right)
    pub transactions: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Split the block view: fields on top, lists below.
#[must_use]
pub fn calculate_block_view_layout(area: Rect) -> BlockViewLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BLOCK_FIELDS_HEIGHT), Constraint::Min(4)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    BlockViewLayout {
        fields: rows[0],
        uncles: left[0],
        sidecars: left[1],
        transactions: columns[1],
    }
}

/// Calculate a centered popup area within a parent area
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Calculate a centered rect as a percentage of the parent
#[must_use]
pub fn centered_rect_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    centered_popup_area(area, width, height)
}

// ============================================================================
// Tests
// ============================================================================
