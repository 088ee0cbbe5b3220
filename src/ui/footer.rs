//! Footer bar with the key hints for the active input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::client::DataService;
use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

const BLOCK_VIEW_HINTS: &str =
    "q:Quit  Tab:Focus  ↑↓:Move  Enter:Open  r:Reopen Txn  c:Copy  p:Copy Prev  o:Browser  t:Theme";

const MODAL_HINTS: &str = "Esc:Close  c:Copy Hash  o:Browser  t:Theme  q:Quit";

/// Hint text for `context`.
#[must_use]
pub const fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::BlockView => BLOCK_VIEW_HINTS,
        InputContext::TransactionModal => MODAL_HINTS,
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render<S: DataService>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let footer = Paragraph::new(hints(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
