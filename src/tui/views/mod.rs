//! TUI views
//!
//! One screen, four panels plus the status bar. Each view renders straight
//! from the app's last compute pass; no view owns state of its own.

pub mod chart;
pub mod inputs;
pub mod report;
pub mod status_bar;
pub mod summary;

use ratatui::style::Color;
use ratatui::Frame;

use crate::models::ColorToken;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    inputs::render(frame, app, layout.inputs);
    summary::render(frame, app, layout.overview);
    chart::render(frame, app, layout.chart);
    report::render(frame, app, layout.report);
    status_bar::render(frame, app, layout.status_bar);
}

/// Map a neutral color token onto a terminal color
pub(crate) fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Neutral => Color::DarkGray,
        ColorToken::Red => Color::Red,
        ColorToken::Orange => Color::Yellow,
        ColorToken::Purple => Color::Magenta,
        ColorToken::Blue => Color::Blue,
        ColorToken::Green => Color::Green,
    }
}
