//! Authentication service
//!
//! Login and session resolution. Login failures are reported with a single
//! generic error so callers cannot probe which usernames exist.

use crate::auth::password::verify_password;
use crate::auth::session::Session;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Profile;
use crate::storage::Storage;

/// Service for login, logout, and session lookup
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check credentials and start a session
    pub fn login(&self, username: &str, password: &str) -> FintrackResult<Profile> {
        let profile = match self.storage.profiles.get_by_username(username.trim())? {
            Some(p) => p,
            None => return Err(FintrackError::InvalidCredentials),
        };

        if !verify_password(password, &profile.password_hash) {
            return Err(FintrackError::InvalidCredentials);
        }

        let session = Session::new(profile.id, &profile.username);
        session.save(self.storage.paths())?;

        Ok(profile)
    }

    /// End the current session, if any
    pub fn logout(&self) -> FintrackResult<()> {
        Session::clear(self.storage.paths())
    }

    /// Resolve the logged-in profile
    ///
    /// A session that points at a deleted profile is cleared and treated as
    /// not logged in.
    pub fn current_profile(&self) -> FintrackResult<Profile> {
        let session = match Session::load(self.storage.paths())? {
            Some(s) => s,
            None => return Err(FintrackError::NotLoggedIn),
        };

        match self.storage.profiles.get(session.profile_id)? {
            Some(profile) => Ok(profile),
            None => {
                Session::clear(self.storage.paths())?;
                Err(FintrackError::NotLoggedIn)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::services::profile::{CreateProfileInput, ProfileService};
    use tempfile::TempDir;

    fn setup_with_user() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        ProfileService::new(&storage)
            .create(CreateProfileInput {
                username: "maria".to_string(),
                name: "Maria".to_string(),
                password: "s3cret".to_string(),
                birth_date: None,
                role: None,
            })
            .unwrap();

        (temp_dir, storage)
    }

    #[test]
    fn test_login_and_current_profile() {
        let (_tmp, storage) = setup_with_user();
        let auth = AuthService::new(&storage);

        let profile = auth.login("maria", "s3cret").unwrap();
        assert_eq!(profile.username, "maria");

        let current = auth.current_profile().unwrap();
        assert_eq!(current.id, profile.id);
    }

    #[test]
    fn test_bad_credentials_are_generic() {
        let (_tmp, storage) = setup_with_user();
        let auth = AuthService::new(&storage);

        // Unknown user and wrong password produce the same error
        let unknown = auth.login("nobody", "s3cret").unwrap_err();
        let wrong = auth.login("maria", "wrong").unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert!(matches!(unknown, FintrackError::InvalidCredentials));
    }

    #[test]
    fn test_logout_clears_session() {
        let (_tmp, storage) = setup_with_user();
        let auth = AuthService::new(&storage);

        auth.login("maria", "s3cret").unwrap();
        auth.logout().unwrap();

        assert!(matches!(
            auth.current_profile(),
            Err(FintrackError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_stale_session_for_deleted_profile() {
        let (_tmp, storage) = setup_with_user();
        let auth = AuthService::new(&storage);

        let profile = auth.login("maria", "s3cret").unwrap();
        storage.profiles.delete(profile.id).unwrap();

        assert!(matches!(
            auth.current_profile(),
            Err(FintrackError::NotLoggedIn)
        ));
    }
}
