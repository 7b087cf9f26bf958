//! Profile repository for JSON storage
//!
//! Besides the primary ID map, keeps a username index because logins and most
//! CLI commands address profiles by username.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FintrackError;
use crate::models::{Profile, ProfileId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable profile data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProfileData {
    profiles: Vec<Profile>,
}

/// Repository for profile persistence with username indexing
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<HashMap<ProfileId, Profile>>,
    /// Index: username -> profile_id
    by_username: RwLock<HashMap<String, ProfileId>>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_username: RwLock::new(HashMap::new()),
        }
    }

    /// Load profiles from disk and build the username index
    pub fn load(&self) -> Result<(), FintrackError> {
        let file_data: ProfileData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_username = self.by_username.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        by_username.clear();

        for profile in file_data.profiles {
            by_username.insert(profile.username.clone(), profile.id);
            data.insert(profile.id, profile);
        }

        Ok(())
    }

    /// Save profiles to disk
    pub fn save(&self) -> Result<(), FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut profiles: Vec<_> = data.values().cloned().collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = ProfileData { profiles };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a profile by ID
    pub fn get(&self, id: ProfileId) -> Result<Option<Profile>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get a profile by username
    pub fn get_by_username(&self, username: &str) -> Result<Option<Profile>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let by_username = self.by_username.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(by_username
            .get(username)
            .and_then(|id| data.get(id))
            .cloned())
    }

    /// Get all profiles, oldest first
    pub fn get_all(&self) -> Result<Vec<Profile>, FintrackError> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut profiles: Vec<_> = data.values().cloned().collect();
        profiles.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(profiles)
    }

    /// Insert or update a profile
    pub fn upsert(&self, profile: Profile) -> Result<(), FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_username = self.by_username.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        // Remove the old username mapping if it changed
        if let Some(old) = data.get(&profile.id) {
            if old.username != profile.username {
                by_username.remove(&old.username);
            }
        }

        by_username.insert(profile.username.clone(), profile.id);
        data.insert(profile.id, profile);
        Ok(())
    }

    /// Delete a profile
    pub fn delete(&self, id: ProfileId) -> Result<bool, FintrackError> {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let mut by_username = self.by_username.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(profile) = data.remove(&id) {
            by_username.remove(&profile.username);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Count profiles
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
    use crate::models::Role;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profiles.json");
        let repo = ProfileRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_get_by_username() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let profile = Profile::new("maria", "Maria Silva", "hash", Role::User);
        repo.upsert(profile).unwrap();

        let found = repo.get_by_username("maria").unwrap().unwrap();
        assert_eq!(found.name, "Maria Silva");
        assert!(repo.get_by_username("joao").unwrap().is_none());
    }

    #[test]
    fn test_rename_updates_index() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut profile = Profile::new("maria", "Maria Silva", "hash", Role::User);
        repo.upsert(profile.clone()).unwrap();

        profile.username = "maria_s".to_string();
        repo.upsert(profile).unwrap();

        assert!(repo.get_by_username("maria").unwrap().is_none());
        assert!(repo.get_by_username("maria_s").unwrap().is_some());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let profile = Profile::new("maria", "Maria Silva", "hash", Role::Admin);
        let id = profile.id;
        repo.upsert(profile).unwrap();
        repo.save().unwrap();

        let repo2 = ProfileRepository::new(temp_dir.path().join("profiles.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().role, Role::Admin);
        assert!(repo2.get_by_username("maria").unwrap().is_some());
    }

    #[test]
    fn test_delete_removes_username() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let profile = Profile::new("maria", "Maria Silva", "hash", Role::User);
        let id = profile.id;
        repo.upsert(profile).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(repo.get_by_username("maria").unwrap().is_none());
    }
}
