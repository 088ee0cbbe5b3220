//! Terminal renderer for flow graphs.
//!
//! Draws a two-column flow diagram: senders on the left flowing into the
//! transaction pivot, receivers on the right fed by it. Bar lengths are
//! proportional to `|amount|`; the amount itself is printed unchanged.
//!
//! ```text
//! From                                  ◆ To
//!    0xa1...e9f0        1.5  ━━━━━━━━━━▶┃━━━━━━━▶ 0xb7...41c2          1
//!    0xc3...77aa        0.5       ━━━━━▶┃
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::types::{FlowEdge, FlowGraph};
use crate::theme::{FlowPalette, MUTED_COLOR};
use crate::widgets::helpers::{format_amount, node_label};

/// Widget that renders a [`FlowGraph`] as a terminal flow diagram.
#[derive(Debug, Clone)]
pub struct FlowDiagram<'a> {
    graph: &'a FlowGraph,
    palette: FlowPalette,
    label_width: usize,
    bar_width: usize,
}

impl<'a> FlowDiagram<'a> {
    const DEFAULT_LABEL_WIDTH: usize = 14;
    const DEFAULT_BAR_WIDTH: usize = 10;
    const AMOUNT_WIDTH: usize = 10;
    const MAX_BAR_WIDTH: usize = 24;

    #[must_use]
    pub const fn new(graph: &'a FlowGraph, palette: FlowPalette) -> Self {
        Self {
            graph,
            palette,
            label_width: Self::DEFAULT_LABEL_WIDTH,
            bar_width: Self::DEFAULT_BAR_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Bar width that fits both sides of the diagram into `width` columns.
    #[must_use]
    pub fn fitted_bar_width(&self, width: u16) -> usize {
        let fixed = 2 * self.label_width + 2 * Self::AMOUNT_WIDTH + 7;
        (usize::from(width).saturating_sub(fixed) / 2).clamp(1, Self::MAX_BAR_WIDTH)
    }

    /// Width of everything left of the pivot column.
    const fn left_width(&self) -> usize {
        self.label_width + 1 + Self::AMOUNT_WIDTH + 1 + self.bar_width + 1
    }

    /// Scaled bar length for `value`. Non-zero values always get one cell.
    fn bar_len(&self, value: f64, scale: f64) -> usize {
        if scale <= 0.0 || !value.is_finite() || value == 0.0 {
            return 0;
        }
        let ratio = (value.abs() / scale).min(1.0);
        ((ratio * self.bar_width as f64).round() as usize).max(1)
    }

    fn sender_spans(&self, edge: &FlowEdge, scale: f64) -> Vec<Span<'static>> {
        let bar_len = self.bar_len(edge.value, scale);
        let label_style = Style::default().fg(self.palette.label);
        vec![
            Span::styled(
                format!(
                    "{:>width$}",
                    node_label(&edge.source, self.label_width),
                    width = self.label_width
                ),
                label_style,
            ),
            Span::raw(" "),
            Span::styled(
                format!(
                    "{:>width$}",
                    format_amount(edge.value),
                    width = Self::AMOUNT_WIDTH
                ),
                label_style,
            ),
            Span::raw(" ".repeat(1 + self.bar_width - bar_len)),
            Span::styled(
                format!("{}▶", "━".repeat(bar_len)),
                Style::default().fg(self.palette.source),
            ),
        ]
    }

    fn receiver_spans(&self, edge: &FlowEdge, scale: f64) -> Vec<Span<'static>> {
        let bar_len = self.bar_len(edge.value, scale);
        let label_style = Style::default().fg(self.palette.label);
        vec![
            Span::styled(
                format!("{}▶ ", "━".repeat(bar_len)),
                Style::default().fg(self.palette.target),
            ),
            Span::styled(
                format!(
                    "{:<width$}",
                    node_label(&edge.target, self.label_width),
                    width = self.label_width
                ),
                label_style,
            ),
            Span::raw(" "),
            Span::styled(
                format!(
                    "{:>width$}",
                    format_amount(edge.value),
                    width = Self::AMOUNT_WIDTH
                ),
                label_style,
            ),
        ]
    }

    /// Generate the diagram lines: a header line, then one line per row pair.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        if self.graph.is_empty() {
            return vec![Line::from(Span::styled(
                "No value flow to show",
                Style::default().fg(MUTED_COLOR),
            ))];
        }

        let bold = Modifier::BOLD;
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{:<width$}", "From", width = self.left_width()),
                Style::default().fg(self.palette.source).add_modifier(bold),
            ),
            Span::styled("◆", Style::default().fg(self.palette.label)),
            Span::styled(
                " To",
                Style::default().fg(self.palette.target).add_modifier(bold),
            ),
        ])];

        let scale = self.graph.max_magnitude();
        let outflows = self.graph.outflows();
        let inflows = self.graph.inflows();
        let row_count = outflows.len().max(inflows.len());

        for index in 0..row_count {
            let mut spans = match outflows.get(index) {
                Some(edge) => self.sender_spans(edge, scale),
                None => vec![Span::raw(" ".repeat(self.left_width()))],
            };
            spans.push(Span::styled("┃", Style::default().fg(self.palette.label)));
            if let Some(edge) = inflows.get(index) {
                spans.extend(self.receiver_spans(edge, scale));
            }
            lines.push(Line::from(spans));
        }

        lines
    }
}

impl Widget for FlowDiagram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fitted = self.fitted_bar_width(area.width);
        let diagram = self.with_bar_width(fitted);
        Paragraph::new(diagram.to_lines()).render(area, buf);
    }
}
