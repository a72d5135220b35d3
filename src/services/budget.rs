//! Budget evaluator
//!
//! Derives total expenses, savings, and the health classification from one
//! set of inputs, and produces the chart series alongside. Pure: two calls
//! with identical inputs give identical results.

use crate::models::{BudgetInputs, BudgetResult, ChartSeries, HealthTier, Money};

/// A budget evaluation: the numeric result plus its chart projection
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BudgetEvaluation {
    pub result: BudgetResult,
    pub chart: ChartSeries,
}

/// Evaluate a budget against a savings target (percent of income).
///
/// The health decision ladder is ordered; the first matching rule wins:
/// no income → NoData, negative savings → Deficit, savings below the
/// target share of income → LowSavings, otherwise Strong.
pub fn evaluate_budget(inputs: &BudgetInputs, savings_target_percent: u8) -> BudgetEvaluation {
    let total_expenses = inputs.total_expenses();
    let savings = inputs.income - total_expenses;

    let health = if inputs.income.is_zero() {
        HealthTier::NoData
    } else if savings.is_negative() {
        HealthTier::Deficit
    } else if below_target(savings, inputs.income, savings_target_percent) {
        HealthTier::LowSavings
    } else {
        HealthTier::Strong
    };

    let result = BudgetResult {
        total_expenses,
        savings,
        health,
    };
    let chart = ChartSeries::from_budget(inputs, &result);

    BudgetEvaluation { result, chart }
}

/// savings < income * target% , in exact cents arithmetic
fn below_target(savings: Money, income: Money, target_percent: u8) -> bool {
    i128::from(savings.cents()) * 100 < i128::from(income.cents()) * i128::from(target_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    const TARGET: u8 = 10;

    fn money(units: i64) -> Money {
        Money::from_cents(units * 100)
    }

    #[test]
    fn test_strong_budget() {
        // income 50000, rent 15000, utilities 3000, other 2000, emi 5366.67
        let inputs = BudgetInputs {
            income: money(50_000),
            rent: money(15_000),
            utilities: money(3_000),
            other_expenses: money(2_000),
            monthly_installment: Money::from_cents(536_667),
        };
        let evaluation = evaluate_budget(&inputs, TARGET);

        assert_eq!(evaluation.result.total_expenses, Money::from_cents(2_536_667));
        assert_eq!(evaluation.result.savings, Money::from_cents(2_463_333));
        assert_eq!(evaluation.result.health, HealthTier::Strong);
    }

    #[test]
    fn test_deficit_budget() {
        // income 20000, rent 15000, utilities 3000, other 5000 -> savings -3000
        let inputs = BudgetInputs {
            income: money(20_000),
            rent: money(15_000),
            utilities: money(3_000),
            other_expenses: money(5_000),
            monthly_installment: Money::zero(),
        };
        let evaluation = evaluate_budget(&inputs, TARGET);

        assert_eq!(evaluation.result.savings, money(-3_000));
        assert_eq!(evaluation.result.health, HealthTier::Deficit);
        assert!(evaluation.result.health.style().warning_visible);
    }

    #[test]
    fn test_low_savings_budget() {
        // savings 400 on income 10000 is below the 10% target
        let inputs = BudgetInputs {
            income: money(10_000),
            rent: money(9_600),
            utilities: Money::zero(),
            other_expenses: Money::zero(),
            monthly_installment: Money::zero(),
        };
        let evaluation = evaluate_budget(&inputs, TARGET);
        assert_eq!(evaluation.result.health, HealthTier::LowSavings);
    }

    #[test]
    fn test_savings_exactly_at_target_is_strong() {
        let inputs = BudgetInputs {
            income: money(10_000),
            rent: money(9_000),
            utilities: Money::zero(),
            other_expenses: Money::zero(),
            monthly_installment: Money::zero(),
        };
        let evaluation = evaluate_budget(&inputs, TARGET);
        assert_eq!(evaluation.result.savings, money(1_000));
        assert_eq!(evaluation.result.health, HealthTier::Strong);
    }

    #[test]
    fn test_no_income_is_no_data() {
        let inputs = BudgetInputs {
            income: Money::zero(),
            rent: money(15_000),
            utilities: money(3_000),
            other_expenses: money(99),
            monthly_installment: money(1),
        };
        let evaluation = evaluate_budget(&inputs, TARGET);

        // NoData wins even though savings is also negative
        assert_eq!(evaluation.result.health, HealthTier::NoData);
    }

    #[test]
    fn test_idempotence() {
        let inputs = BudgetInputs {
            income: money(42_000),
            rent: money(12_000),
            utilities: money(1_500),
            other_expenses: money(800),
            monthly_installment: Money::from_cents(123_456),
        };
        let first = evaluate_budget(&inputs, TARGET);
        let second = evaluate_budget(&inputs, TARGET);
        assert_eq!(first, second);
    }

    #[test]
    fn test_increasing_expenses_decreases_savings_monotonically() {
        let base = BudgetInputs {
            income: money(30_000),
            rent: money(10_000),
            utilities: money(2_000),
            other_expenses: money(1_000),
            monthly_installment: Money::zero(),
        };
        let mut previous = evaluate_budget(&base, TARGET).result.savings;
        let mut previous_rank = tier_rank(evaluate_budget(&base, TARGET).result.health);

        for extra in [1_000, 5_000, 10_000, 20_000] {
            let mut inputs = base;
            inputs.other_expenses = base.other_expenses + money(extra);
            let result = evaluate_budget(&inputs, TARGET).result;

            assert!(result.savings < previous);
            let rank = tier_rank(result.health);
            assert!(rank <= previous_rank, "tier moved away from Deficit");
            previous = result.savings;
            previous_rank = rank;
        }
    }

    // Strong > LowSavings > Deficit for monotonicity checks
    fn tier_rank(tier: HealthTier) -> u8 {
        match tier {
            HealthTier::Deficit => 0,
            HealthTier::LowSavings => 1,
            HealthTier::Strong => 2,
            HealthTier::NoData => u8::MAX,
        }
    }

    #[test]
    fn test_chart_matches_result() {
        let inputs = BudgetInputs {
            income: money(50_000),
            rent: money(15_000),
            utilities: money(3_000),
            other_expenses: money(2_000),
            monthly_installment: Money::from_cents(536_667),
        };
        let evaluation = evaluate_budget(&inputs, TARGET);

        let savings_slice = evaluation.chart.slices()[4];
        assert_eq!(savings_slice.amount, evaluation.result.savings);
    }
}
