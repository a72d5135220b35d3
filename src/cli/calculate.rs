//! The `calculate` command: one full compute-and-render pass

use chrono::Local;
use serde::Serialize;

use crate::config::Settings;
use crate::display::{format_chart, format_loan_panel, format_summary, summary::section};
use crate::error::PulseResult;
use crate::models::{BudgetResult, ChartSeries, LoanResult};
use crate::services::{estimate_loan, evaluate_budget};

use super::{BudgetArgs, LoanArgs};

/// Structured output for `--json`
#[derive(Serialize)]
struct CalculationOutput<'a> {
    loan: &'a LoanResult,
    budget: &'a BudgetResult,
    chart: &'a ChartSeries,
}

/// Handle the `calculate` command
pub fn handle_calculate_command(
    settings: &Settings,
    budget: &BudgetArgs,
    loan: &LoanArgs,
    json: bool,
) -> PulseResult<()> {
    let as_of = Local::now().date_naive();

    let loan_inputs = loan.to_inputs(&settings.date_format);
    let loan_result = estimate_loan(&loan_inputs, as_of);

    let budget_inputs = budget.to_inputs(loan_result.installment_or_zero());
    let evaluation = evaluate_budget(&budget_inputs, settings.savings_target_percent);

    if json {
        let output = CalculationOutput {
            loan: &loan_result,
            budget: &evaluation.result,
            chart: &evaluation.chart,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", section("Budget Summary"));
    print!("{}", format_summary(&evaluation, &settings.currency_symbol));
    println!();
    print!("{}", section("Loan"));
    print!(
        "{}",
        format_loan_panel(&loan_result, &settings.currency_symbol)
    );
    println!();
    print!("{}", section("Monthly Breakdown"));
    print!(
        "{}",
        format_chart(
            &evaluation.chart,
            &settings.currency_symbol,
            settings.chart_width
        )
    );

    Ok(())
}
