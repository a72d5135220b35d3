//! Layout definitions for the TUI
//!
//! One screen: input column on the left, results stacked on the right,
//! key hints along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Input fields column
    pub inputs: Rect,
    /// Budget summary and loan panel
    pub overview: Rect,
    /// Breakdown chart
    pub chart: Rect,
    /// Narrative analysis panel
    pub report: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from the available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(38), // Input column
                Constraint::Min(42),    // Results
            ])
            .split(vertical[0]);

        let results = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Overview + loan panel
                Constraint::Min(7),     // Chart
                Constraint::Length(6),  // Analysis
            ])
            .split(horizontal[1]);

        Self {
            inputs: horizontal[0],
            overview: results[0],
            chart: results[1],
            report: results[2],
            status_bar: vertical[1],
        }
    }
}
