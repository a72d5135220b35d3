//! Narrative report formatter
//!
//! Turns a finished evaluation into a short templated analysis. The output
//! is display text only (with `*` emphasis around the tier label); nothing
//! downstream computes on it.

use crate::models::{HealthTier, Money};

/// Fixed prompt shown when no usable income has been entered
pub const NO_INCOME_PROMPT: &str =
    "Please provide a valid income figure and run a calculation first.";

/// Format the narrative analysis for a completed evaluation.
///
/// `savings_display` is the already-formatted savings figure exactly as the
/// summary panel shows it, so the narrative and the panel can never show two
/// different numbers.
pub fn format_report(
    income: Money,
    health: HealthTier,
    savings_display: &str,
    savings_target_percent: u8,
    currency_symbol: &str,
) -> String {
    if income.is_zero() {
        return NO_INCOME_PROMPT.to_string();
    }

    let mut analysis = format!(
        "Based on your income of {}, your financial health is currently rated as *{}*. ",
        income.with_symbol(currency_symbol),
        health.style().label,
    );

    match health {
        HealthTier::Deficit => {
            analysis.push_str(
                "You are spending more than you earn. Immediate action is required \
                 to reduce discretionary expenses or housing costs.",
            );
        }
        HealthTier::LowSavings => {
            analysis.push_str(&format!(
                "You are saving {}, which is below the recommended {}% of income. \
                 Consider trimming utilities or discretionary spending.",
                savings_display, savings_target_percent,
            ));
        }
        HealthTier::Strong => {
            analysis.push_str(&format!(
                "Great work! Your projected savings of {} put you in a secure \
                 position. Consider investing the surplus.",
                savings_display,
            ));
        }
        // Unreachable with a non-zero income, but keep the message sensible
        HealthTier::NoData => analysis.push_str(NO_INCOME_PROMPT),
    }

    analysis
}
