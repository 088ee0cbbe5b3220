//! Header bar: logo on the left, fetch activity on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::client::DataService;
use crate::constants::spinner_frame;
use crate::state::App;
use crate::theme::{MUTED_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

const LOGO_WIDTH: u16 = 12;
const INDICATOR_WIDTH: u16 = 26;

/// Render the application header
pub fn render<S: DataService>(frame: &mut Frame, area: Rect, app: &App<S>) {
    frame.render_widget(create_border_block("", false), area);

    if area.height <= 2 {
        return;
    }

    let loading = app.nav.state().is_loading();
    let logo = if loading {
        create_pulsing_logo(app.animation_tick)
    } else {
        create_static_logo()
    };

    let logo_area = Rect::new(
        area.x + 2,
        area.y + 1,
        LOGO_WIDTH.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(logo), logo_area);

    if area.width > LOGO_WIDTH + INDICATOR_WIDTH + 4 {
        let indicator_area = Rect::new(
            area.right() - INDICATOR_WIDTH - 2,
            area.y + 1,
            INDICATOR_WIDTH,
            1,
        );
        frame.render_widget(
            Paragraph::new(activity_line(loading, app.nav.pending(), app.animation_tick))
                .alignment(Alignment::Right),
            indicator_area,
        );
    }
}

fn create_static_logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "block".cyan().bold(),
        "drill".green().bold(),
        "]".into(),
    ])
}

/// Logo whose "drill" half breathes while fetches are in flight.
fn create_pulsing_logo(animation_tick: u64) -> Line<'static> {
    let glow = ((animation_tick as f32 * 0.3).sin() + 1.0) / 2.0;
    let drill_color = Color::Rgb(
        (60.0 * glow) as u8,
        (140.0 + glow * 115.0) as u8,
        (60.0 * glow) as u8,
    );

    Line::from(vec![
        "[".into(),
        "block".cyan().bold(),
        Span::styled(
            "drill",
            Style::default()
                .fg(drill_color)
                .add_modifier(Modifier::BOLD),
        ),
        "]".into(),
    ])
}

fn activity_line(loading: bool, pending: usize, animation_tick: u64) -> Line<'static> {
    if loading {
        Line::from(Span::styled(
            format!("{} Loading ({pending} pending)", spinner_frame(animation_tick)),
            Style::default()
                .fg(WARNING_COLOR)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled("● Idle", Style::default().fg(MUTED_COLOR)))
    }
}

// ============================================================================
// Tests
// ============================================================================
