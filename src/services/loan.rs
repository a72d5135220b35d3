//! Loan amortization estimator
//!
//! Simple-interest EMI estimation. The function is pure: the "as of" date is
//! captured once by the caller and passed in, never read from a clock here.

use chrono::{Datelike, NaiveDate};

use crate::models::{LoanInputs, LoanResult, Money};

/// Estimate the loan schedule as of a given date.
///
/// With a missing start date, a zero term, or a non-positive principal the
/// placeholder result is returned and rendered as dashes. A term that has
/// fully elapsed yields a zero installment and no outstanding balance.
pub fn estimate_loan(inputs: &LoanInputs, as_of: NaiveDate) -> LoanResult {
    if !inputs.has_sufficient_data() {
        return LoanResult::insufficient_data();
    }
    // has_sufficient_data guarantees the start date is present
    let start = match inputs.start_date {
        Some(date) => date,
        None => return LoanResult::insufficient_data(),
    };

    let raw_elapsed = (as_of.year() - start.year()) * 12
        + (as_of.month() as i32 - start.month() as i32);
    // A future start date never produces negative elapsed time
    let months_elapsed = raw_elapsed.max(0) as u32;
    let months_remaining = inputs.total_months.saturating_sub(months_elapsed);

    if months_remaining == 0 {
        return LoanResult {
            months_elapsed: Some(months_elapsed),
            months_remaining: Some(0),
            outstanding_balance: None,
            monthly_installment: Some(Money::zero()),
        };
    }

    let time_in_years = f64::from(inputs.total_months) / 12.0;
    let simple_interest = Money::from_f64(
        inputs.principal.to_f64() * inputs.annual_rate_percent * time_in_years / 100.0,
    );
    let total_amount = inputs.principal + simple_interest;
    let outstanding = (total_amount - inputs.amount_paid).max(Money::zero());

    LoanResult {
        months_elapsed: Some(months_elapsed),
        months_remaining: Some(months_remaining),
        outstanding_balance: Some(outstanding),
        monthly_installment: outstanding.div_round(i64::from(months_remaining)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn inputs(principal: i64, rate: f64, months: u32, paid: i64, start: Option<NaiveDate>) -> LoanInputs {
        LoanInputs {
            principal: Money::from_cents(principal),
            annual_rate_percent: rate,
            total_months: months,
            amount_paid: Money::from_cents(paid),
            start_date: start,
        }
    }

    #[test]
    fn test_zero_term_yields_placeholder() {
        let result = estimate_loan(
            &inputs(10_000_000, 10.0, 0, 0, Some(date(2025, 1, 1))),
            date(2026, 8, 6),
        );
        assert_eq!(result, LoanResult::insufficient_data());
    }

    #[test]
    fn test_zero_principal_yields_placeholder() {
        let result = estimate_loan(
            &inputs(0, 10.0, 12, 0, Some(date(2025, 1, 1))),
            date(2026, 8, 6),
        );
        assert_eq!(result, LoanResult::insufficient_data());
    }

    #[test]
    fn test_missing_start_date_yields_placeholder() {
        let result = estimate_loan(&inputs(10_000_000, 10.0, 12, 0, None), date(2026, 8, 6));
        assert_eq!(result, LoanResult::insufficient_data());
    }

    #[test]
    fn test_fully_termed_out_loan() {
        // 100000 at 10% over 12 months, started exactly 12 months ago
        let result = estimate_loan(
            &inputs(10_000_000, 10.0, 12, 0, Some(date(2025, 8, 6))),
            date(2026, 8, 6),
        );

        assert_eq!(result.months_elapsed, Some(12));
        assert_eq!(result.months_remaining, Some(0));
        assert_eq!(result.monthly_installment, Some(Money::zero()));
        assert!(result.outstanding_balance.is_none());
    }

    #[test]
    fn test_fresh_loan_estimate() {
        // 120000 at 12% over 24 months, 20000 already paid, started today:
        // interest = 120000 * 12 * 2 / 100 = 28800
        // outstanding = 148800 - 20000 = 128800
        // installment = 128800 / 24 = 5366.67
        let result = estimate_loan(
            &inputs(12_000_000, 12.0, 24, 2_000_000, Some(date(2026, 8, 6))),
            date(2026, 8, 6),
        );

        assert_eq!(result.months_elapsed, Some(0));
        assert_eq!(result.months_remaining, Some(24));
        assert_eq!(result.outstanding_balance, Some(Money::from_cents(12_880_000)));
        assert_eq!(result.monthly_installment, Some(Money::from_cents(536_667)));
    }

    #[test]
    fn test_future_start_date_clamps_elapsed_to_zero() {
        let result = estimate_loan(
            &inputs(12_000_000, 12.0, 24, 0, Some(date(2027, 1, 1))),
            date(2026, 8, 6),
        );

        assert_eq!(result.months_elapsed, Some(0));
        assert_eq!(result.months_remaining, Some(24));
    }

    #[test]
    fn test_elapsed_counts_calendar_months_not_days() {
        // Jul 31 -> Aug 1 is one calendar month boundary crossed
        let result = estimate_loan(
            &inputs(12_000_000, 12.0, 24, 0, Some(date(2026, 7, 31))),
            date(2026, 8, 1),
        );
        assert_eq!(result.months_elapsed, Some(1));
        assert_eq!(result.months_remaining, Some(23));
    }

    #[test]
    fn test_overpaid_loan_clamps_outstanding_to_zero() {
        let result = estimate_loan(
            &inputs(10_000_000, 0.0, 12, 20_000_000, Some(date(2026, 8, 6))),
            date(2026, 8, 6),
        );

        assert_eq!(result.outstanding_balance, Some(Money::zero()));
        assert_eq!(result.monthly_installment, Some(Money::zero()));
    }

    #[test]
    fn test_elapsed_beyond_term_is_termed_out() {
        let result = estimate_loan(
            &inputs(10_000_000, 10.0, 12, 0, Some(date(2020, 1, 1))),
            date(2026, 8, 6),
        );

        assert_eq!(result.months_remaining, Some(0));
        assert_eq!(result.monthly_installment, Some(Money::zero()));
    }

    #[test]
    fn test_non_finite_rate_contributes_no_interest() {
        // LoanInputs::from_raw already coerces a non-finite rate to 0; the
        // estimator treats a zero rate as interest-free.
        let result = estimate_loan(
            &inputs(12_000_000, 0.0, 24, 0, Some(date(2026, 8, 6))),
            date(2026, 8, 6),
        );
        assert_eq!(result.outstanding_balance, Some(Money::from_cents(12_000_000)));
        assert_eq!(result.monthly_installment, Some(Money::from_cents(500_000)));
    }
}
