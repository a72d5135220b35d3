//! Chart series model
//!
//! A proportional breakdown of the monthly budget: five slices in a fixed
//! order with a fixed color mapping, independent of how any particular
//! surface ends up drawing them. A deficit never renders as a negative
//! wedge; the Savings slice is clamped at zero.

use serde::{Deserialize, Serialize};

use super::budget::{BudgetInputs, BudgetResult};
use super::health::ColorToken;
use super::money::Money;

/// Number of slices in every chart series
pub const SLICE_COUNT: usize = 5;

/// The five budget breakdown slices, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliceKind {
    Rent,
    Utilities,
    OtherExpenses,
    Installment,
    Savings,
}

impl SliceKind {
    /// All slices in their fixed render order
    pub const ALL: [SliceKind; SLICE_COUNT] = [
        SliceKind::Rent,
        SliceKind::Utilities,
        SliceKind::OtherExpenses,
        SliceKind::Installment,
        SliceKind::Savings,
    ];

    /// Display label for this slice
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::OtherExpenses => "Other Exp.",
            Self::Installment => "EMI",
            Self::Savings => "Savings",
        }
    }

    /// Fixed color for this slice
    pub const fn color(self) -> ColorToken {
        match self {
            Self::Rent => ColorToken::Red,
            Self::Utilities => ColorToken::Orange,
            Self::OtherExpenses => ColorToken::Purple,
            Self::Installment => ColorToken::Blue,
            Self::Savings => ColorToken::Green,
        }
    }
}

/// One labeled magnitude in the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub kind: SliceKind,
    pub amount: Money,
}

/// The full breakdown series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    slices: [ChartSlice; SLICE_COUNT],
}

impl ChartSeries {
    /// Build the series from a budget evaluation's inputs and result.
    ///
    /// Negative savings clamp to a zero-sized slice.
    pub fn from_budget(inputs: &BudgetInputs, result: &BudgetResult) -> Self {
        let amounts = [
            inputs.rent,
            inputs.utilities,
            inputs.other_expenses,
            inputs.monthly_installment,
            result.savings.max(Money::zero()),
        ];

        let mut slices = [ChartSlice {
            kind: SliceKind::Rent,
            amount: Money::zero(),
        }; SLICE_COUNT];
        for (slice, (kind, amount)) in slices.iter_mut().zip(SliceKind::ALL.into_iter().zip(amounts))
        {
            *slice = ChartSlice { kind, amount };
        }

        Self { slices }
    }

    /// The slices, in fixed render order
    pub fn slices(&self) -> &[ChartSlice; SLICE_COUNT] {
        &self.slices
    }

    /// Sum of all slice magnitudes
    pub fn total(&self) -> Money {
        self.slices
            .iter()
            .fold(Money::zero(), |acc, s| acc + s.amount)
    }

    /// Whether there is anything at all to draw
    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }
}
