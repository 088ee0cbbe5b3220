//! Block view: scalar fields, uncle and transaction lists, sidecars.
//!
//! Uncles and transactions are the drill-down targets; the focused list gets
//! the double border and its selected row is the one `Enter` opens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph, Row, Table},
};

use crate::client::DataService;
use crate::constants::{HASH_DISPLAY_LENGTH, spinner_frame};
use crate::domain::{Block, SideCar};
use crate::state::{App, Section};
use crate::theme::{
    ACCENT_COLOR, LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, SUCCESS_COLOR,
    WARNING_COLOR,
};
use crate::ui::helpers::{create_border_block, field_row};
use crate::ui::layout::calculate_block_view_layout;
use crate::widgets::helpers::{format_amount, truncate_key};

/// Renders the current block, or a placeholder until one has loaded.
pub fn render<S: DataService>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let state = app.nav.state();
    let Some(block) = state.current_block() else {
        let message = if state.is_loading() {
            format!("{} Loading block...", spinner_frame(app.animation_tick))
        } else {
            "No block loaded".to_string()
        };
        render_placeholder(frame, area, &message);
        return;
    };

    let layout = calculate_block_view_layout(area);
    render_fields(block, frame, layout.fields);
    render_hash_list(
        frame,
        layout.uncles,
        &format!("Uncles ({})", block.uncles().len()),
        block.uncles(),
        app.ui.uncle_index,
        app.ui.focus == Section::Uncles,
    );
    render_sidecars(block.sidecars(), frame, layout.sidecars);
    render_hash_list(
        frame,
        layout.transactions,
        &format!("Transactions ({})", block.transactions.len()),
        &block.transactions,
        app.ui.txn_index,
        app.ui.focus == Section::Transactions,
    );
}

fn render_placeholder(frame: &mut Frame, area: Rect, message: &str) {
    let block = create_border_block("Block", false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        inner,
    );
}

/// Block count field; flags a count that disagrees with the hash list.
fn txn_count_text(block: &Block) -> (String, Style) {
    if block.has_txn_count_mismatch() {
        (
            format!(
                "{} (list has {})",
                block.txn_count,
                block.transactions.len()
            ),
            Style::default()
                .fg(WARNING_COLOR)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            block.txn_count.to_string(),
            Style::default().fg(SUCCESS_COLOR),
        )
    }
}

fn render_fields(block: &Block, frame: &mut Frame, area: Rect) {
    let primary = Style::default().fg(PRIMARY_COLOR);
    let plain = Style::default();
    let (count_text, count_style) = txn_count_text(block);

    let rows = vec![
        field_row("Hash:", block.block_hash.clone(), primary),
        field_row("Previous:", block.previous_block_hash.clone(), primary),
        field_row("Height:", block.height.to_string(), plain),
        field_row(
            "Timestamp:",
            block.formatted_timestamp(),
            Style::default().fg(MUTED_COLOR),
        ),
        field_row(
            "Miner:",
            block.miner.clone(),
            Style::default().fg(ACCENT_COLOR),
        ),
        field_row("Nonce:", block.nonce.to_string(), plain),
        field_row("Difficulty:", block.difficulty.to_string(), plain),
        field_row("Amount:", format_amount(block.total_amount), plain),
        field_row("Fee:", format_amount(block.total_fee), plain),
        field_row("Txn Count:", count_text, count_style),
    ];

    let title = format!("Block #{}", block.height);
    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(20)])
        .block(create_border_block(&title, false));
    frame.render_widget(table, area);
}

fn render_hash_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    hashes: &[String],
    selected: usize,
    focused: bool,
) {
    let border = create_border_block(title, focused);

    if hashes.is_empty() {
        let inner = border.inner(area);
        frame.render_widget(border, area);
        frame.render_widget(
            Paragraph::new("None").style(Style::default().fg(MUTED_COLOR)),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = hashes
        .iter()
        .map(|hash| ListItem::new(Line::from(truncate_key(hash, HASH_DISPLAY_LENGTH))))
        .collect();

    let highlight = if focused {
        SELECTED_STYLE
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let list = List::new(items)
        .block(border)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(selected.min(hashes.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_sidecars(sidecars: &[SideCar], frame: &mut Frame, area: Rect) {
    let border = create_border_block("Sidecars", false);

    if sidecars.is_empty() {
        let inner = border.inner(area);
        frame.render_widget(border, area);
        frame.render_widget(
            Paragraph::new("None").style(Style::default().fg(MUTED_COLOR)),
            inner,
        );
        return;
    }

    let rows = sidecars.iter().map(|sidecar| {
        Row::new(vec![
            truncate_key(&sidecar.id, HASH_DISPLAY_LENGTH),
            format!("{} bytes", sidecar.size),
        ])
    });

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(16)])
        .header(Row::new(vec!["ID", "Size"]).style(LABEL_STYLE))
        .block(border);
    frame.render_widget(table, area);
}

// ============================================================================
// Tests
// ============================================================================
