//! Analysis panel
//!
//! Shows the narrative analysis when one has been generated, and a hint
//! otherwise. The panel empties itself whenever an edit invalidates the
//! narrative (see `App::recompute`).

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Hint shown while no analysis is displayed
const HINT_TEXT: &str = "Press Enter to generate an analysis of the current figures.";

/// Render the analysis panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Analysis ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = match &app.report {
        Some(narrative) => Paragraph::new(narrative.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true }),
        None => Paragraph::new(HINT_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
    };

    frame.render_widget(paragraph.block(block), area);
}
