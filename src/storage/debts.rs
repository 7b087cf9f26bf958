//! Debt repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Debt, DebtId, ProfileId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable debt data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct DebtData {
    debts: Vec<Debt>,
}

/// Repository for debt persistence with owner indexing
pub struct DebtRepository {
    path: PathBuf,
    data: RwLock<HashMap<DebtId, Debt>>,
    by_owner: RwLock<HashMap<ProfileId, Vec<DebtId>>>,
}

impl DebtRepository {
    /// Create a new debt repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load debts from disk and build the owner index
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: DebtData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_owner.clear();

        for debt in file_data.debts {
            by_owner.entry(debt.owner).or_default().push(debt.id);
            data.insert(debt.id, debt);
        }

        Ok(())
    }

    /// Save debts to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut debts: Vec<_> = data.values().cloned().collect();
        debts.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = DebtData { debts };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a debt by ID
    pub fn get(&self, id: DebtId) -> Result<Option<Debt>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all debts, oldest first
    pub fn get_all(&self) -> Result<Vec<Debt>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut debts: Vec<_> = data.values().cloned().collect();
        debts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(debts)
    }

    /// Get debts belonging to a profile, oldest first
    pub fn get_by_owner(&self, owner: ProfileId) -> Result<Vec<Debt>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_owner = self.by_owner.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_owner.get(&owner).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut debts: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        debts.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(debts)
    }

    /// Insert or update a debt
    pub fn upsert(&self, debt: Debt) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(old) = data.get(&debt.id) {
            if let Some(ids) = by_owner.get_mut(&old.owner) {
                ids.retain(|&id| id != debt.id);
            }
        }

        by_owner.entry(debt.owner).or_default().push(debt.id);
        data.insert(debt.id, debt);
        Ok(())
    }

    /// Delete a debt
    pub fn delete(&self, id: DebtId) -> Result<bool, FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(debt) = data.remove(&id) {
            if let Some(ids) = by_owner.get_mut(&debt.owner) {
                ids.retain(|&did| did != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count debts
    pub fn count(&self) -> Result<usize, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("debts.json");

        let repo = DebtRepository::new(path.clone());
        repo.load().unwrap();

        let owner = ProfileId::new();
        let debt = Debt::new(owner, "Car loan", Money::from_cents(1200000));
        let id = debt.id;

        repo.upsert(debt).unwrap();
        repo.save().unwrap();

        let repo2 = DebtRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().description, "Car loan");
        assert_eq!(repo2.get_by_owner(owner).unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = DebtRepository::new(temp_dir.path().join("debts.json"));
        repo.load().unwrap();

        let owner = ProfileId::new();
        let debt = Debt::new(owner, "Car loan", Money::from_cents(1200000));
        let id = debt.id;

        repo.upsert(debt).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
    }
}
