//! Storage initialization
//!
//! Handles first-run setup: directories, default settings, and empty record
//! files so that later commands never see a half-created data directory.

use crate::config::paths::FintrackPaths;
use crate::config::settings::Settings;
use crate::error::FintrackError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Safe to call repeatedly; existing files are never overwritten.
pub fn initialize_storage(paths: &FintrackPaths) -> Result<(), FintrackError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    for (path, key) in [
        (paths.movements_file(), "movements"),
        (paths.goals_file(), "goals"),
        (paths.debts_file(), "debts"),
        (paths.profiles_file(), "profiles"),
    ] {
        if !path.exists() {
            write_json_atomic(&path, &serde_json::json!({ key: [] }))?;
        }
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FintrackPaths) -> bool {
    !paths.settings_file().exists()
}
