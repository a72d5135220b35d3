//! Breakdown chart view
//!
//! Draws the five-slice series as colored horizontal bars scaled against
//! the largest slice. The same proportions the doughnut would show, in a
//! shape a terminal is good at.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::chart::EMPTY_CHART_TEXT;
use crate::display::format_percentage;
use crate::tui::app::App;

use super::token_color;

/// Render the breakdown chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Breakdown ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let series = &app.evaluation.chart;
    if series.is_empty() {
        let placeholder = Paragraph::new(EMPTY_CHART_TEXT)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, inner);
        return;
    }

    let symbol = &app.settings.currency_symbol;
    let total = series.total().to_f64();
    let max_amount = series
        .slices()
        .iter()
        .map(|s| s.amount.to_f64())
        .fold(0.0_f64, f64::max);

    // label(11) + space + bar + space + amount(12) + space + percent(6)
    let bar_width = usize::from(inner.width).saturating_sub(32).max(4);

    let lines: Vec<Line> = series
        .slices()
        .iter()
        .map(|slice| {
            let amount = slice.amount.to_f64();
            let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
            let filled = if max_amount > 0.0 {
                (((amount / max_amount) * bar_width as f64).round() as usize).min(bar_width)
            } else {
                0
            };

            let color = token_color(slice.kind.color());
            Line::from(vec![
                Span::styled(
                    format!("{:<11}", slice.kind.label()),
                    Style::default().fg(color),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    "░".repeat(bar_width - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!(" {:>12}", slice.amount.with_symbol(symbol)),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!(" {:>6}", format_percentage(share)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
