//! Login session persistence
//!
//! A successful login writes session.json next to the config file; logout
//! removes it. Commands that need an acting profile read it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::ProfileId;
use crate::storage::file_io::write_json_atomic;

/// The current login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Profile that is logged in
    pub profile_id: ProfileId,

    /// Username at login time, kept for display
    pub username: String,

    /// When the session was started
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for a profile
    pub fn new(profile_id: ProfileId, username: impl Into<String>) -> Self {
        Self {
            profile_id,
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }

    /// Read the current session, if any
    pub fn load(paths: &FintrackPaths) -> Result<Option<Self>, FintrackError> {
        let path = paths.session_file();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| FintrackError::Io(format!("Failed to read session file: {}", e)))?;
        let session = serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Storage(format!("Failed to parse session file: {}", e)))?;
        Ok(Some(session))
    }

    /// Persist this session
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        write_json_atomic(paths.session_file(), self)
    }

    /// End any current session
    pub fn clear(paths: &FintrackPaths) -> Result<(), FintrackError> {
        let path = paths.session_file();
        if path.exists() {
            std::fs::remove_file(&path)
                .map_err(|e| FintrackError::Io(format!("Failed to remove session file: {}", e)))?;
        }
        Ok(())
    }
}
