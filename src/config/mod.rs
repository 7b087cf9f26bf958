//! Configuration management for fintrack
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;
