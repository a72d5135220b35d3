//! User settings for PulseCLI
//!
//! Preferences only — never budget figures. Budget data is transient by
//! design and recomputed on every pass.

use serde::{Deserialize, Serialize};

use super::paths::PulsePaths;
use crate::error::PulseError;

/// User settings for PulseCLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for all displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Savings target as a percentage of income. Drives both the
    /// LowSavings/Strong classification and the narrative wording.
    #[serde(default = "default_savings_target")]
    pub savings_target_percent: u8,

    /// Date format for the loan start date field (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Width of the breakdown chart bars in one-shot CLI output
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_savings_target() -> u8 {
    10
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_chart_width() -> usize {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            savings_target_percent: default_savings_target(),
            date_format: default_date_format(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PulsePaths) -> Result<Self, PulseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PulseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PulseError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PulsePaths) -> Result<(), PulseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PulseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PulseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
