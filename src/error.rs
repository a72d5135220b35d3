//! Custom error types for PulseCLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Note that the calculator core (`models`, `services`) never produces errors:
//! malformed input is recovered locally by substitution (zero or a placeholder
//! result), so these variants cover only the ambient layer — configuration,
//! file I/O, and JSON handling.

use thiserror::Error;

/// The main error type for PulseCLI operations
#[derive(Error, Debug)]
pub enum PulseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for PulseCLI operations
pub type PulseResult<T> = Result<T, PulseError>;
