//! Display formatting for terminal output
//!
//! Formatting helpers shared by the one-shot CLI surfaces. The interactive
//! TUI has its own rendering under `tui::views`; both consume the same
//! color tokens so the two surfaces can never disagree on the mapping.

pub mod chart;
pub mod summary;

pub use chart::format_chart;
pub use summary::{format_loan_panel, format_summary};

use crate::models::ColorToken;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// ANSI escape sequence for a color token
pub fn ansi_code(token: ColorToken) -> &'static str {
    match token {
        ColorToken::Neutral => "\x1b[90m",
        ColorToken::Red => "\x1b[31m",
        ColorToken::Orange => "\x1b[33m",
        ColorToken::Purple => "\x1b[35m",
        ColorToken::Blue => "\x1b[34m",
        ColorToken::Green => "\x1b[32m",
    }
}

/// Wrap text in the ANSI color for a token
pub fn paint(text: &str, token: ColorToken) -> String {
    format!("{}{}{}", ansi_code(token), text, RESET)
}

/// Color a formatted amount by its sign
pub fn paint_by_sign(text: &str, negative: bool) -> String {
    if negative {
        paint(text, ColorToken::Red)
    } else {
        paint(text, ColorToken::Green)
    }
}

/// Create a simple proportional bar
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
