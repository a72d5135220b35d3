//! Business logic layer
//!
//! Pure computation only: the loan estimator, the budget evaluator, and the
//! narrative formatter. Every function here is a value-in, value-out
//! transformation — no clocks, no terminal, no I/O. The surfaces in `cli`,
//! `display`, and `tui` own all of that.

pub mod budget;
pub mod loan;
pub mod report;

pub use budget::{evaluate_budget, BudgetEvaluation};
pub use loan::estimate_loan;
pub use report::format_report;
