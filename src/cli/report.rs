//! The `report` command: narrative analysis of the current figures
//!
//! Runs the same full pass as `calculate` and feeds the classification into
//! the narrative formatter, so the analysis always describes the figures it
//! was asked about — never a stale earlier run.

use chrono::Local;

use crate::config::Settings;
use crate::display::summary::section;
use crate::error::PulseResult;
use crate::services::{estimate_loan, evaluate_budget, format_report};

use super::{BudgetArgs, LoanArgs};

/// Handle the `report` command
pub fn handle_report_command(
    settings: &Settings,
    budget: &BudgetArgs,
    loan: &LoanArgs,
) -> PulseResult<()> {
    let as_of = Local::now().date_naive();

    let loan_result = estimate_loan(&loan.to_inputs(&settings.date_format), as_of);
    let budget_inputs = budget.to_inputs(loan_result.installment_or_zero());
    let evaluation = evaluate_budget(&budget_inputs, settings.savings_target_percent);

    let savings_display = evaluation
        .result
        .savings
        .with_symbol(&settings.currency_symbol);
    let narrative = format_report(
        budget_inputs.income,
        evaluation.result.health,
        &savings_display,
        settings.savings_target_percent,
        &settings.currency_symbol,
    );

    print!("{}", section("Analysis"));
    println!("{}", narrative);

    Ok(())
}
