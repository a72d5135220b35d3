//! The `loan` command: the amortization estimate on its own

use chrono::Local;

use crate::config::Settings;
use crate::display::{format_loan_panel, summary::section};
use crate::error::PulseResult;
use crate::services::estimate_loan;

use super::LoanArgs;

/// Handle the `loan` command
pub fn handle_loan_command(settings: &Settings, loan: &LoanArgs, json: bool) -> PulseResult<()> {
    let as_of = Local::now().date_naive();
    let result = estimate_loan(&loan.to_inputs(&settings.date_format), as_of);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print!("{}", section("Loan"));
    print!("{}", format_loan_panel(&result, &settings.currency_symbol));

    Ok(())
}
