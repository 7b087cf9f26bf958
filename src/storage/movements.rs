//! Movement repository for JSON storage
//!
//! Manages loading and saving movements to movements.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Movement, MovementId, ProfileId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable movement data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MovementData {
    movements: Vec<Movement>,
}

/// Repository for movement persistence with indexing
pub struct MovementRepository {
    path: PathBuf,
    data: RwLock<HashMap<MovementId, Movement>>,
    /// Index: owner profile -> movement_ids
    by_owner: RwLock<HashMap<ProfileId, Vec<MovementId>>>,
}

impl MovementRepository {
    /// Create a new movement repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load movements from disk and build the owner index
    ///
    /// Dates are parsed here; a record with a malformed date fails the whole
    /// load rather than being silently dropped.
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: MovementData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_owner.clear();

        for movement in file_data.movements {
            by_owner.entry(movement.owner).or_default().push(movement.id);
            data.insert(movement.id, movement);
        }

        Ok(())
    }

    /// Save movements to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut movements: Vec<_> = data.values().cloned().collect();
        movements.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = MovementData { movements };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a movement by ID
    pub fn get(&self, id: MovementId) -> Result<Option<Movement>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all movements, newest first
    pub fn get_all(&self) -> Result<Vec<Movement>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut movements: Vec<_> = data.values().cloned().collect();
        movements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(movements)
    }

    /// Get movements belonging to a profile, newest first
    pub fn get_by_owner(&self, owner: ProfileId) -> Result<Vec<Movement>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_owner = self.by_owner.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let ids = by_owner.get(&owner).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut movements: Vec<_> = ids
            .iter()
            .filter_map(|id| data.get(id).cloned())
            .collect();
        movements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(movements)
    }

    /// Insert or update a movement
    pub fn upsert(&self, movement: Movement) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        // Remove from old index if updating
        if let Some(old) = data.get(&movement.id) {
            if let Some(ids) = by_owner.get_mut(&old.owner) {
                ids.retain(|&id| id != movement.id);
            }
        }

        by_owner.entry(movement.owner).or_default().push(movement.id);
        data.insert(movement.id, movement);
        Ok(())
    }

    /// Delete a movement
    pub fn delete(&self, id: MovementId) -> Result<bool, FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_owner = self.by_owner.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(movement) = data.remove(&id) {
            if let Some(ids) = by_owner.get_mut(&movement.owner) {
                ids.retain(|&mid| mid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count movements
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
    use crate::models::{Money, MovementKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, MovementRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("movements.json");
        let repo = MovementRepository::new(path);
        (temp_dir, repo)
    }

    fn movement(owner: ProfileId, y: i32, m: u32, d: u32, cents: i64) -> Movement {
        Movement::new(
            owner,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            MovementKind::Expense,
            "Food",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = ProfileId::new();
        let m = movement(owner, 2024, 3, 5, 20000);
        let id = m.id;

        repo.upsert(m).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 20000);
        assert_eq!(retrieved.owner, owner);
    }

    #[test]
    fn test_get_by_owner() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner1 = ProfileId::new();
        let owner2 = ProfileId::new();

        repo.upsert(movement(owner1, 2024, 3, 5, 100)).unwrap();
        repo.upsert(movement(owner1, 2024, 3, 6, 200)).unwrap();
        repo.upsert(movement(owner2, 2024, 3, 7, 300)).unwrap();

        assert_eq!(repo.get_by_owner(owner1).unwrap().len(), 2);
        assert_eq!(repo.get_by_owner(owner2).unwrap().len(), 1);
        assert_eq!(repo.get_by_owner(ProfileId::new()).unwrap().len(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = ProfileId::new();
        let m = movement(owner, 2024, 3, 5, 20000);
        let id = m.id;

        repo.upsert(m).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("movements.json");
        let repo2 = MovementRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 20000);
        assert_eq!(repo2.get_by_owner(owner).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_updates_index() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let owner = ProfileId::new();
        let m = movement(owner, 2024, 3, 5, 20000);
        let id = m.id;

        repo.upsert(m).unwrap();
        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.get_by_owner(owner).unwrap().len(), 0);
    }

    #[test]
    fn test_malformed_date_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("movements.json");
        std::fs::write(
            &path,
            r#"{"movements":[{"id":"7f3c2b1a-0000-0000-0000-000000000000","owner":"7f3c2b1a-0000-0000-0000-000000000001","date":"2024-13-45","description":"","kind":"expense","category":"Food","amount":100,"payment_method":null,"created_at":"2024-03-05T00:00:00Z"}]}"#,
        )
        .unwrap();

        let repo = MovementRepository::new(path);
        assert!(matches!(repo.load(), Err(FintrackError::Storage(_))));
    }
}
