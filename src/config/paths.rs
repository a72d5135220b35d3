//! Path management for PulseCLI
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `PULSE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pulse-cli` or `~/.config/pulse-cli`
//! 3. Windows: `%APPDATA%\pulse-cli`

use std::path::PathBuf;

use crate::error::PulseError;

/// Manages all paths used by PulseCLI
#[derive(Debug, Clone)]
pub struct PulsePaths {
    /// Base directory for all PulseCLI configuration
    base_dir: PathBuf,
}

impl PulsePaths {
    /// Create a new PulsePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PulseError> {
        let base_dir = if let Ok(custom) = std::env::var("PULSE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PulsePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/pulse-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), PulseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PulseError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default configuration directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PulseError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("pulse-cli"))
}

/// Resolve the default configuration directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PulseError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PulseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pulse-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PulsePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("pulse");
        let paths = PulsePaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
