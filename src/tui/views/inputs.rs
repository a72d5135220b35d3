//! Input column view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::App;

/// Render the input fields in a bordered column
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Inputs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 3 || inner.height == 0 {
        return;
    }

    for (i, field) in app.fields.iter().enumerate() {
        // One row per field, with a blank spacer row between them
        let y = inner.y + (i as u16) * 2;
        if y >= inner.y + inner.height {
            break;
        }
        let row = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1);
        frame.render_widget(field.clone().focused(i == app.focus), row);
    }
}
