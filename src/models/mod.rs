//! Core data models for PulseCLI
//!
//! Every model here is transient: built fresh for one calculation pass,
//! rendered, and discarded. There is no persisted budget state.

pub mod budget;
pub mod chart;
pub mod health;
pub mod loan;
pub mod money;

pub use budget::{BudgetInputs, BudgetResult};
pub use chart::{ChartSeries, ChartSlice, SliceKind, SLICE_COUNT};
pub use health::{ColorToken, HealthTier, TierStyle};
pub use loan::{LoanInputs, LoanResult};
pub use money::Money;
