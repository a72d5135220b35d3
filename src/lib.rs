//! PulseCLI - Terminal-based budget health and loan EMI calculator
//!
//! This library provides the core functionality for PulseCLI. It evaluates
//! a monthly budget (income against rent, utilities, other expenses, and a
//! loan installment), estimates a simple-interest EMI from loan terms, and
//! classifies financial health into tiers with a proportional breakdown
//! chart and an on-demand narrative analysis.
//!
//! All figures are transient: every calculation pass starts from the raw
//! inputs, and nothing but user preferences ever touches disk. Malformed
//! input never fails a pass — numbers coerce to zero and an unusable loan
//! form yields a placeholder estimate, so the surfaces always have
//! something to render.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, loan, budget, health tier, chart)
//! - `services`: Pure computation (estimator, evaluator, report formatter)
//! - `display`: ANSI formatting for one-shot CLI output
//! - `cli`: clap command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use pulse_cli::models::{BudgetInputs, Money};
//! use pulse_cli::services::evaluate_budget;
//!
//! let inputs = BudgetInputs::from_raw("50000", "15000", "3000", "2000", Money::zero());
//! let evaluation = evaluate_budget(&inputs, 10);
//! assert!(evaluation.result.savings.is_positive());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{PulseError, PulseResult};
