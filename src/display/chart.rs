//! Proportional breakdown chart for one-shot CLI output
//!
//! Renders the five-slice series as colored horizontal bars scaled against
//! the largest slice, with amounts and share-of-total percentages.

use crate::models::{ChartSeries, ColorToken};

use super::{format_bar, format_percentage, paint};

/// Placeholder shown when every slice is zero
pub const EMPTY_CHART_TEXT: &str = "Nothing to chart yet - enter some figures.";

/// Render the breakdown chart as colored text.
pub fn format_chart(series: &ChartSeries, currency_symbol: &str, bar_width: usize) -> String {
    if series.is_empty() {
        return format!("{}\n", paint(EMPTY_CHART_TEXT, ColorToken::Neutral));
    }

    let total = series.total().to_f64();
    let max_amount = series
        .slices()
        .iter()
        .map(|s| s.amount.to_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for slice in series.slices() {
        let amount = slice.amount.to_f64();
        let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };

        let bar = paint(
            &format_bar(amount, max_amount, bar_width),
            slice.kind.color(),
        );
        output.push_str(&format!(
            "{:<11} {} {:>12} {:>6}\n",
            slice.kind.label(),
            bar,
            slice.amount.with_symbol(currency_symbol),
            format_percentage(share),
        ));
    }

    output
}
