//! Storage layer for fintrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The `Storage` coordinator is constructed explicitly from paths
//! and passed by reference into services; there is no global client state.

pub mod debts;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod movements;
pub mod profiles;

pub use debts::DebtRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use init::initialize_storage;
pub use movements::MovementRepository;
pub use profiles::ProfileRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub movements: MovementRepository,
    pub goals: GoalRepository,
    pub debts: DebtRepository,
    pub profiles: ProfileRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            movements: MovementRepository::new(paths.movements_file()),
            goals: GoalRepository::new(paths.goals_file()),
            debts: DebtRepository::new(paths.debts_file()),
            profiles: ProfileRepository::new(paths.profiles_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.movements.load()?;
        self.goals.load()?;
        self.debts.load()?;
        self.profiles.load()?;
        Ok(())
    }


}
