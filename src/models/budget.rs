//! Budget input and result models
//!
//! A budget evaluation is a pure function of these inputs; nothing here has
//! identity beyond a single calculation pass.

use serde::{Deserialize, Serialize};

use super::health::HealthTier;
use super::money::Money;

/// Inputs to a budget evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInputs {
    /// Monthly income
    pub income: Money,
    /// Monthly rent or mortgage
    pub rent: Money,
    /// Monthly utilities
    pub utilities: Money,
    /// Other monthly expenses
    pub other_expenses: Money,
    /// Monthly loan installment, carried over from the loan estimate
    pub monthly_installment: Money,
}

impl BudgetInputs {
    /// Build budget inputs from raw form text plus the loan installment.
    ///
    /// Each category coerces to zero when malformed and is clamped
    /// non-negative (the data model admits no negative categories).
    pub fn from_raw(
        income: &str,
        rent: &str,
        utilities: &str,
        other_expenses: &str,
        monthly_installment: Money,
    ) -> Self {
        Self {
            income: Money::parse_lenient(income).max(Money::zero()),
            rent: Money::parse_lenient(rent).max(Money::zero()),
            utilities: Money::parse_lenient(utilities).max(Money::zero()),
            other_expenses: Money::parse_lenient(other_expenses).max(Money::zero()),
            monthly_installment: monthly_installment.max(Money::zero()),
        }
    }

    /// Sum of all expense categories including the installment
    pub fn total_expenses(&self) -> Money {
        self.rent + self.utilities + self.other_expenses + self.monthly_installment
    }
}

/// Result of a budget evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetResult {
    /// Sum of rent, utilities, other expenses, and the installment
    pub total_expenses: Money,
    /// Income minus total expenses; negative means a deficit
    pub savings: Money,
    /// Health classification for this evaluation
    pub health: HealthTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_clamps_and_coerces() {
        let inputs = BudgetInputs::from_raw("50000", "-100", "junk", "2000", Money::from_cents(500));

        assert_eq!(inputs.income.cents(), 5_000_000);
        assert!(inputs.rent.is_zero());
        assert!(inputs.utilities.is_zero());
        assert_eq!(inputs.other_expenses.cents(), 200_000);
        assert_eq!(inputs.monthly_installment.cents(), 500);
    }

    #[test]
    fn test_total_expenses() {
        let inputs = BudgetInputs {
            income: Money::from_cents(5_000_000),
            rent: Money::from_cents(1_500_000),
            utilities: Money::from_cents(300_000),
            other_expenses: Money::from_cents(200_000),
            monthly_installment: Money::from_cents(536_667),
        };
        assert_eq!(inputs.total_expenses().cents(), 2_536_667);
    }
}
