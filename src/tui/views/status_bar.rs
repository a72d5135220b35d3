//! Status bar view
//!
//! Key hints on the left, the date the figures were computed against on
//! the right.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = " Tab/↓ next · Shift-Tab/↑ prev · Enter analysis · Esc quit";
    let as_of = format!("as of {} ", app.as_of.format(&app.settings.date_format));

    let pad = usize::from(area.width)
        .saturating_sub(hints.chars().count() + as_of.chars().count());

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(pad)),
        Span::styled(as_of, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
