//! Financial health classification
//!
//! The tier's label, color, and warning visibility live in one associated
//! style table so the three can never drift apart across render surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical classification of budget status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    /// No income entered yet; nothing to classify
    #[default]
    NoData,
    /// Spending exceeds income
    Deficit,
    /// Saving something, but below the configured target share of income
    LowSavings,
    /// Savings at or above the target
    Strong,
}

/// Neutral color names understood by every render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Neutral,
    Red,
    Orange,
    Purple,
    Blue,
    Green,
}

/// How a health tier presents itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierStyle {
    /// Display label
    pub label: &'static str,
    /// Color token for the label
    pub color: ColorToken,
    /// Whether the overspending warning is shown
    pub warning_visible: bool,
}

impl HealthTier {
    /// The presentation table for this tier
    pub const fn style(self) -> TierStyle {
        match self {
            Self::NoData => TierStyle {
                label: "-",
                color: ColorToken::Neutral,
                warning_visible: false,
            },
            Self::Deficit => TierStyle {
                label: "Deficit",
                color: ColorToken::Red,
                warning_visible: true,
            },
            Self::LowSavings => TierStyle {
                label: "Low Savings",
                color: ColorToken::Orange,
                warning_visible: false,
            },
            Self::Strong => TierStyle {
                label: "Strong",
                color: ColorToken::Green,
                warning_visible: false,
            },
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.style().label)
    }
}
