//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PulsePaths;
pub use settings::Settings;
