//! Transaction modal: record fields above the value-flow diagram.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Table},
};

use crate::client::DataService;
use crate::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::domain::{Transaction, TxnTypeNames};
use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::{create_popup_block, field_row};
use crate::ui::layout::centered_rect_percent;
use crate::widgets::FlowDiagram;
use crate::widgets::helpers::format_amount;

const FIELD_ROWS: u16 = 6;

/// Renders the modal for the current transaction. Draws nothing without one.
pub fn render<S: DataService>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let Some(txn) = app.nav.state().current_transaction() else {
        return;
    };

    let popup_area = centered_rect_percent(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area);
    let popup_block = create_popup_block("Transaction");
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_ROWS),
            Constraint::Length(1), // Separator
            Constraint::Min(3),    // Flow diagram
            Constraint::Length(1), // Help text
        ])
        .split(inner_area);

    render_fields(txn, &app.config.txn_types, frame, sections[0]);

    let separator = "─".repeat(usize::from(inner_area.width));
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        sections[1],
    );

    let graph = txn.flow_graph();
    frame.render_widget(
        FlowDiagram::new(&graph, app.config.theme.palette()),
        sections[2],
    );

    frame.render_widget(
        Paragraph::new("Esc: Close | c: Copy Hash | o: Open in Browser | t: Theme")
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        sections[3],
    );
}

fn status_style(status: &str) -> Style {
    match status.to_ascii_lowercase().as_str() {
        "success" | "confirmed" => Style::default().fg(SUCCESS_COLOR),
        "failed" | "reverted" | "error" => Style::default().fg(ERROR_COLOR),
        _ => Style::default(),
    }
}

fn render_fields(txn: &Transaction, txn_types: &TxnTypeNames, frame: &mut Frame, area: Rect) {
    let plain = Style::default();
    let rows = vec![
        field_row(
            "Hash:",
            txn.txn_hash.clone(),
            Style::default().fg(PRIMARY_COLOR),
        ),
        field_row("Status:", txn.status.clone(), status_style(&txn.status)),
        field_row("Type:", txn_types.label(txn.txn_type), plain),
        field_row("Amount:", format_amount(txn.amount), plain),
        field_row("Fee:", format_amount(txn.fee), plain),
        field_row("Nonce:", txn.nonce.to_string(), plain),
    ];

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(20)]);
    frame.render_widget(table, area);
}

// ============================================================================
// Tests
// ============================================================================
