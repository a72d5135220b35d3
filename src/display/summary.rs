//! Summary and loan panel formatting for one-shot CLI output

use crate::models::{ColorToken, LoanResult};
use crate::services::BudgetEvaluation;

use super::{paint, paint_by_sign, separator};

/// Text shown next to the Deficit tier
pub const WARNING_TEXT: &str = "Warning: your expenses exceed your income.";

/// Placeholder for figures the loan estimator could not produce
pub const PLACEHOLDER: &str = "-";

/// Format the budget summary panel: savings, health, optional warning.
pub fn format_summary(evaluation: &BudgetEvaluation, currency_symbol: &str) -> String {
    let result = &evaluation.result;
    let style = result.health.style();

    let savings_text = result.savings.with_symbol(currency_symbol);
    let mut output = String::new();

    output.push_str(&format!(
        "Projected Savings:  {}\n",
        paint_by_sign(&savings_text, result.savings.is_negative()),
    ));
    output.push_str(&format!(
        "Total Expenses:     {}\n",
        result.total_expenses.with_symbol(currency_symbol),
    ));
    output.push_str(&format!(
        "Financial Health:   {}\n",
        paint(style.label, style.color),
    ));

    if style.warning_visible {
        output.push_str(&format!("{}\n", paint(WARNING_TEXT, ColorToken::Red)));
    }

    output
}

/// Format the loan panel: months remaining, outstanding balance, installment.
///
/// Unknown figures render as dashes; months remaining is green while any
/// term is left and red once the loan is fully termed out.
pub fn format_loan_panel(loan: &LoanResult, currency_symbol: &str) -> String {
    let months_text = match loan.months_remaining {
        Some(months) => {
            let color = if months > 0 {
                ColorToken::Green
            } else {
                ColorToken::Red
            };
            paint(&format!("{} months", months), color)
        }
        None => PLACEHOLDER.to_string(),
    };

    let balance_text = match loan.outstanding_balance {
        Some(balance) => paint(&balance.with_symbol(currency_symbol), ColorToken::Green),
        None => PLACEHOLDER.to_string(),
    };

    let installment_text = match loan.monthly_installment {
        Some(installment) => format!("{} per month", installment.with_symbol(currency_symbol)),
        None => PLACEHOLDER.to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("Months Remaining:    {}\n", months_text));
    output.push_str(&format!("Outstanding Balance: {}\n", balance_text));
    output.push_str(&format!("Monthly EMI:         {}\n", installment_text));
    output
}

/// A titled section with a separator line underneath the title
pub fn section(title: &str) -> String {
    format!("{}\n{}\n", title, separator(title.len().max(20)))
}
