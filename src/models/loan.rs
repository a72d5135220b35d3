//! Loan input and result models
//!
//! Inputs arrive as free-form text from whichever surface collected them
//! (CLI flags or TUI fields) and are parsed defensively: numeric fields
//! coerce to zero when malformed, the start date to `None`. The estimator
//! then signals "insufficient data" through an all-`None` result instead of
//! returning an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Inputs to the loan amortization estimator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Loan principal
    pub principal: Money,
    /// Annual simple-interest rate, in percent (e.g. 10.5)
    pub annual_rate_percent: f64,
    /// Total loan term in months
    pub total_months: u32,
    /// Amount already repaid
    pub amount_paid: Money,
    /// Date the loan started
    pub start_date: Option<NaiveDate>,
}

impl LoanInputs {
    /// Build loan inputs from raw form text.
    ///
    /// Every numeric field coerces to zero when missing or malformed; the
    /// start date becomes `None` when it fails to parse with `date_format`.
    /// Fractional term values truncate to whole months.
    pub fn from_raw(
        principal: &str,
        annual_rate: &str,
        total_months: &str,
        amount_paid: &str,
        start_date: Option<&str>,
        date_format: &str,
    ) -> Self {
        Self {
            principal: Money::parse_lenient(principal).max(Money::zero()),
            annual_rate_percent: safe_rate(annual_rate),
            total_months: safe_months(total_months),
            amount_paid: Money::parse_lenient(amount_paid).max(Money::zero()),
            start_date: start_date
                .and_then(|s| NaiveDate::parse_from_str(s.trim(), date_format).ok()),
        }
    }

    /// Whether there is enough data to estimate anything at all.
    ///
    /// A missing start date, a zero term, or a non-positive principal all
    /// mean the estimator should produce the placeholder result.
    pub fn has_sufficient_data(&self) -> bool {
        self.start_date.is_some() && self.total_months > 0 && self.principal.is_positive()
    }
}

/// Result of a loan estimation pass
///
/// All fields are `None` for the "insufficient data" placeholder, rendered
/// as dashes. A fully termed-out loan has `months_remaining == Some(0)`,
/// a zero installment, and no outstanding balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Whole months elapsed since the start date, clamped at zero
    pub months_elapsed: Option<u32>,
    /// Months left on the term
    pub months_remaining: Option<u32>,
    /// Balance still owed (principal plus simple interest, less repayments)
    pub outstanding_balance: Option<Money>,
    /// Equated monthly installment over the remaining months
    pub monthly_installment: Option<Money>,
}

impl LoanResult {
    /// The placeholder result emitted when inputs are insufficient
    pub fn insufficient_data() -> Self {
        Self::default()
    }

    /// Whether this result carries an actual estimate
    pub fn is_estimated(&self) -> bool {
        self.months_remaining.is_some()
    }

    /// The installment to carry into the budget evaluation.
    ///
    /// A placeholder result contributes nothing to monthly expenses.
    pub fn installment_or_zero(&self) -> Money {
        self.monthly_installment.unwrap_or_else(Money::zero)
    }
}

/// Parse an interest rate from free text; non-finite or unparsable → 0.
fn safe_rate(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a month count from free text; negative, non-finite, or
/// unparsable → 0. Fractional values truncate.
fn safe_months(input: &str) -> u32 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v as u32)
        .unwrap_or(0)
}
