//! Overview panel: budget summary plus the loan estimate

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::summary::{PLACEHOLDER, WARNING_TEXT};
use crate::models::ColorToken;
use crate::tui::app::App;

use super::token_color;

/// Render the overview panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let result = &app.evaluation.result;
    let style = result.health.style();
    let symbol = &app.settings.currency_symbol;

    let savings_color = if result.savings.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        line(
            "Projected Savings ",
            result.savings.with_symbol(symbol),
            Style::default().fg(savings_color).add_modifier(Modifier::BOLD),
        ),
        line(
            "Total Expenses    ",
            result.total_expenses.with_symbol(symbol),
            Style::default().fg(Color::White),
        ),
        line(
            "Financial Health  ",
            style.label.to_string(),
            Style::default()
                .fg(token_color(style.color))
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if style.warning_visible {
        lines.push(Line::from(Span::styled(
            WARNING_TEXT,
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::default());
    }

    lines.push(Line::default());

    let months_span = match app.loan.months_remaining {
        Some(months) => Span::styled(
            format!("{} months", months),
            Style::default().fg(if months > 0 { Color::Green } else { Color::Red }),
        ),
        None => neutral(PLACEHOLDER),
    };
    lines.push(Line::from(vec![label("Months Remaining  "), months_span]));

    let balance_span = match app.loan.outstanding_balance {
        Some(balance) => Span::styled(
            balance.with_symbol(symbol),
            Style::default().fg(Color::Green),
        ),
        None => neutral(PLACEHOLDER),
    };
    lines.push(Line::from(vec![label("Outstanding       "), balance_span]));

    let installment_span = match app.loan.monthly_installment {
        Some(installment) => Span::styled(
            format!("{} per month", installment.with_symbol(symbol)),
            Style::default().fg(Color::White),
        ),
        None => neutral(PLACEHOLDER),
    };
    lines.push(Line::from(vec![label("Monthly EMI       "), installment_span]));

    let block = Block::default()
        .title(" Overview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn line(label_text: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![label(label_text), Span::styled(value, value_style)])
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::Cyan))
}

fn neutral(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default().fg(token_color(ColorToken::Neutral)),
    )
}
