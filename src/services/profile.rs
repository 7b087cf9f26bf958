//! Profile service
//!
//! User management: creating profiles, listing them, and the admin edit
//! screen. The first profile created on an empty store becomes the admin.

use chrono::NaiveDate;

use crate::auth::password::hash_password;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Profile, Role};
use crate::storage::Storage;

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new profile
#[derive(Debug, Clone)]
pub struct CreateProfileInput {
    pub username: String,
    pub name: String,
    pub password: String,
    pub birth_date: Option<NaiveDate>,
    pub role: Option<Role>,
}

/// Fields an admin may change on an existing profile
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub role: Option<Role>,
    pub password: Option<String>,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new profile
    ///
    /// Usernames are unique. The first profile on an empty store is promoted
    /// to admin regardless of the requested role, so a fresh installation
    /// always has someone who can manage users.
    pub fn create(&self, input: CreateProfileInput) -> FintrackResult<Profile> {
        let username = input.username.trim().to_string();

        if self.storage.profiles.get_by_username(&username)?.is_some() {
            return Err(FintrackError::Duplicate {
                entity_type: "Profile",
                identifier: username,
            });
        }

        let role = if self.storage.profiles.count()? == 0 {
            Role::Admin
        } else {
            input.role.unwrap_or(Role::User)
        };

        let hash = hash_password(&input.password)?;
        let mut profile = Profile::new(username, input.name.trim(), hash, role);
        profile.birth_date = input.birth_date;

        profile
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save()?;

        Ok(profile)
    }

    /// List all profiles, oldest first
    pub fn list(&self) -> FintrackResult<Vec<Profile>> {
        self.storage.profiles.get_all()
    }

    /// Get a profile by username
    pub fn get_by_username(&self, username: &str) -> FintrackResult<Profile> {
        self.storage
            .profiles
            .get_by_username(username)?
            .ok_or_else(|| FintrackError::profile_not_found(username))
    }

    /// Update a profile; the acting profile must be an admin
    pub fn update(
        &self,
        acting: &Profile,
        username: &str,
        input: UpdateProfileInput,
    ) -> FintrackResult<Profile> {
        self.require_admin(acting)?;

        let mut profile = self.get_by_username(username)?;

        if let Some(name) = input.name {
            profile.name = name.trim().to_string();
        }
        if let Some(birth_date) = input.birth_date {
            profile.birth_date = Some(birth_date);
        }
        if let Some(role) = input.role {
            profile.role = role;
        }
        if let Some(password) = input.password {
            profile.password_hash = hash_password(&password)?;
        }

        profile
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save()?;

        Ok(profile)
    }

    /// Delete a profile; the acting profile must be an admin
    ///
    /// Admins cannot delete themselves, so the store never loses its last
    /// administrator by accident.
    pub fn delete(&self, acting: &Profile, username: &str) -> FintrackResult<()> {
        self.require_admin(acting)?;

        let profile = self.get_by_username(username)?;
        if profile.id == acting.id {
            return Err(FintrackError::Validation(
                "Cannot delete the profile you are logged in as".into(),
            ));
        }

        self.storage.profiles.delete(profile.id)?;
        self.storage.profiles.save()?;
        Ok(())
    }

    fn require_admin(&self, acting: &Profile) -> FintrackResult<()> {
        if acting.role.is_admin() {
            Ok(())
        } else {
            Err(FintrackError::PermissionDenied(
                "This operation requires the admin role".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn new_user(username: &str, name: &str) -> CreateProfileInput {
        CreateProfileInput {
            username: username.to_string(),
            name: name.to_string(),
            password: "s3cret".to_string(),
            birth_date: None,
            role: None,
        }
    }

    #[test]
    fn test_first_profile_becomes_admin() {
        let (_tmp, storage) = setup();
        let service = ProfileService::new(&storage);

        let first = service.create(new_user("maria", "Maria")).unwrap();
        assert_eq!(first.role, Role::Admin);

        let second = service.create(new_user("joao", "Joao")).unwrap();
        assert_eq!(second.role, Role::User);
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (_tmp, storage) = setup();
        let service = ProfileService::new(&storage);

        service.create(new_user("maria", "Maria")).unwrap();
        let result = service.create(new_user("maria", "Other Maria"));
        assert!(matches!(result, Err(FintrackError::Duplicate { .. })));
    }

    #[test]
    fn test_update_requires_admin() {
        let (_tmp, storage) = setup();
        let service = ProfileService::new(&storage);

        let admin = service.create(new_user("maria", "Maria")).unwrap();
        let user = service.create(new_user("joao", "Joao")).unwrap();

        let result = service.update(
            &user,
            "maria",
            UpdateProfileInput {
                name: Some("Hacked".to_string()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(FintrackError::PermissionDenied(_))));

        let updated = service
            .update(
                &admin,
                "joao",
                UpdateProfileInput {
                    role: Some(Role::Admin),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.role, Role::Admin);
    }

    #[test]
    fn test_admin_cannot_delete_self() {
        let (_tmp, storage) = setup();
        let service = ProfileService::new(&storage);

        let admin = service.create(new_user("maria", "Maria")).unwrap();
        service.create(new_user("joao", "Joao")).unwrap();

        assert!(service.delete(&admin, "maria").is_err());
        service.delete(&admin, "joao").unwrap();
        assert_eq!(service.list().unwrap().len(), 1);
    }
}
