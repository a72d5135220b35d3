//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. All budget and loan
//! flags are collected as free-form strings and parsed defensively — a typo
//! becomes a zero or a placeholder, never a usage error.

pub mod calculate;
pub mod loan;
pub mod report;

pub use calculate::handle_calculate_command;
pub use loan::handle_loan_command;
pub use report::handle_report_command;

use clap::Args;

use crate::models::{BudgetInputs, LoanInputs, Money};

/// Monthly budget figures
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Monthly income
    #[arg(long, default_value = "0")]
    pub income: String,

    /// Monthly rent or mortgage
    #[arg(long, default_value = "0")]
    pub rent: String,

    /// Monthly utilities
    #[arg(long, default_value = "0")]
    pub utilities: String,

    /// Other monthly expenses
    #[arg(long, default_value = "0")]
    pub other: String,
}

impl BudgetArgs {
    /// Parse the raw flags into budget inputs, carrying the loan installment
    pub fn to_inputs(&self, monthly_installment: Money) -> BudgetInputs {
        BudgetInputs::from_raw(
            &self.income,
            &self.rent,
            &self.utilities,
            &self.other,
            monthly_installment,
        )
    }
}

/// Loan terms
#[derive(Args, Debug, Clone, Default)]
pub struct LoanArgs {
    /// Loan principal
    #[arg(long, default_value = "0")]
    pub loan_amount: String,

    /// Annual simple-interest rate in percent
    #[arg(long, default_value = "0")]
    pub loan_interest_rate: String,

    /// Total loan term in months
    #[arg(long, default_value = "0")]
    pub loan_time_period: String,

    /// Amount already repaid
    #[arg(long, default_value = "0")]
    pub amount_paid: String,

    /// Date the loan started (per the configured date format)
    #[arg(long)]
    pub loan_start_date: Option<String>,
}

impl LoanArgs {
    /// Parse the raw flags into loan inputs
    pub fn to_inputs(&self, date_format: &str) -> LoanInputs {
        LoanInputs::from_raw(
            &self.loan_amount,
            &self.loan_interest_rate,
            &self.loan_time_period,
            &self.amount_paid,
            self.loan_start_date.as_deref(),
            date_format,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_args_default_to_zero() {
        let inputs = BudgetArgs::default().to_inputs(Money::zero());
        assert!(inputs.income.is_zero());
        assert!(inputs.total_expenses().is_zero());
    }

    #[test]
    fn test_loan_args_parse_through() {
        let args = LoanArgs {
            loan_amount: "120000".into(),
            loan_interest_rate: "12".into(),
            loan_time_period: "24".into(),
            amount_paid: "20000".into(),
            loan_start_date: Some("2026-08-06".into()),
        };
        let inputs = args.to_inputs("%Y-%m-%d");

        assert_eq!(inputs.principal.cents(), 12_000_000);
        assert!(inputs.has_sufficient_data());
    }
}
