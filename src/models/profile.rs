//! User profile model
//!
//! Profiles carry the login handle, the argon2 password hash, and the role
//! used to gate user management. Unlike movements, goals, and debts, profile
//! fields are editable (the admin user screen in the original system).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ProfileId;

/// Access role of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user: owns and sees only their own records
    #[default]
    User,
    /// Administrator: may manage profiles
    Admin,
}

impl Role {
    /// Check if this role may manage other profiles
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Unknown role: '{}'. Use user or admin", s)),
        }
    }
}

/// A user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: ProfileId,

    /// Login handle, unique across profiles
    pub username: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Date of birth (optional)
    pub birth_date: Option<NaiveDate>,

    /// Access role
    #[serde(default)]
    pub role: Role,

    /// Argon2 PHC-format password hash; never the password itself
    pub password_hash: String,

    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with an already-hashed password
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: ProfileId::new(),
            username: username.into(),
            name: name.into(),
            birth_date: None,
            role,
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the record-store invariants
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ProfileValidationError::EmptyUsername);
        }
        if username.contains(char::is_whitespace) {
            return Err(ProfileValidationError::UsernameHasWhitespace);
        }
        if self.password_hash.is_empty() {
            return Err(ProfileValidationError::MissingPasswordHash);
        }
        Ok(())
    }
}

/// Validation errors for profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyUsername,
    UsernameHasWhitespace,
    MissingPasswordHash,
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username must not be empty"),
            Self::UsernameHasWhitespace => write!(f, "Username must not contain whitespace"),
            Self::MissingPasswordHash => write!(f, "Profile is missing a password hash"),
        }
    }
}

impl std::error::Error for ProfileValidationError {}
