//! Toast notification overlay.
//!
//! Toasts sit in the bottom-right corner and never take input. Fetch failure
//! messages can be long, so the box wraps text and grows up to
//! [`MAX_TOAST_HEIGHT`] rows instead of truncating the reason.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

/// Height of a single-line toast, borders included.
const TOAST_HEIGHT: u16 = 3;

const MAX_TOAST_HEIGHT: u16 = 6;

const TOAST_PADDING_RIGHT: u16 = 2;

const TOAST_PADDING_BOTTOM: u16 = 2;

/// Border and inner spacing around the message.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` as a toast inside `area`.
///
/// `[+]` messages are drawn in the success color, `[x]` in the error color.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = message.chars().count() as u16;
    let max_width = (area.width * 2 / 3).max(MIN_TOAST_WIDTH);
    let toast_width = (message_len + TOAST_WIDTH_PADDING)
        .clamp(MIN_TOAST_WIDTH, max_width)
        .min(area.width);

    let text_width = toast_width.saturating_sub(TOAST_WIDTH_PADDING).max(1);
    let text_lines = message_len.div_ceil(text_width).max(1);
    let toast_height = (text_lines + 2)
        .clamp(TOAST_HEIGHT, MAX_TOAST_HEIGHT)
        .min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
}

#[must_use]
fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================
