//! JSON export of the full store
//!
//! Produces a versioned snapshot of every record for backups. Password
//! hashes travel with profiles; the snapshot is meant for the owner's own
//! machine, not for sharing.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Debt, Goal, Movement, Profile};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full store export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// All movements
    pub movements: Vec<Movement>,

    /// All goals
    pub goals: Vec<Goal>,

    /// All debts
    pub debts: Vec<Debt>,

    /// All profiles
    pub profiles: Vec<Profile>,
}

/// Export the complete store as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> FintrackResult<()> {
    let export = FullExport {
        schema_version: EXPORT_SCHEMA_VERSION.to_string(),
        exported_at: Utc::now(),
        movements: storage.movements.get_all()?,
        goals: storage.goals.get_all()?,
        debts: storage.debts.get_all()?,
        profiles: storage.profiles.get_all()?,
    };

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
