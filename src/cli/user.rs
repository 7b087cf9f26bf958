//! User management CLI commands
//!
//! The first `user add` on an empty store needs no login and creates the
//! admin. Everything else here is admin-only.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::display::profile::format_profile_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Profile, Role};
use crate::services::{CreateProfileInput, ProfileService, UpdateProfileInput};
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new user
    Add {
        /// Login handle
        username: String,
        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,
        /// Role (user or admin)
        #[arg(short, long)]
        role: Option<String>,
        /// Date of birth (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: Option<String>,
        /// Password; prompted interactively when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// List all users
    List,
    /// Edit a user
    Edit {
        /// Login handle of the user to edit
        username: String,
        /// New display name
        #[arg(short, long)]
        name: Option<String>,
        /// New role (user or admin)
        #[arg(short, long)]
        role: Option<String>,
        /// New date of birth (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: Option<String>,
        /// New password
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a user
    Delete {
        /// Login handle of the user to delete
        username: String,
    },
}

/// Handle a user command
///
/// `acting` is the logged-in profile, or None when nobody is logged in.
pub fn handle_user_command(
    storage: &Storage,
    acting: Option<&Profile>,
    cmd: UserCommands,
) -> FintrackResult<()> {
    let service = ProfileService::new(storage);

    match cmd {
        UserCommands::Add {
            username,
            name,
            role,
            birth_date,
            password,
        } => {
            // Bootstrap case: anyone may create the first user
            let store_empty = storage.profiles.count()? == 0;
            if !store_empty {
                require_admin(acting)?;
            }

            let role = match role {
                Some(s) => Some(s.parse::<Role>().map_err(FintrackError::Validation)?),
                None => None,
            };
            let birth_date = parse_birth_date(birth_date)?;
            let password = resolve_password(password, "Password: ")?;

            let profile = service.create(CreateProfileInput {
                username,
                name,
                password: password.to_string(),
                birth_date,
                role,
            })?;

            println!("Created user: {}", profile.username);
            println!("  Role: {}", profile.role);
            if store_empty {
                println!("  (first user, promoted to admin)");
            }
        }

        UserCommands::List => {
            require_admin(acting)?;
            let profiles = service.list()?;
            print!("{}", format_profile_list(&profiles));
        }

        UserCommands::Edit {
            username,
            name,
            role,
            birth_date,
            password,
        } => {
            let acting = require_admin(acting)?;

            let role = match role {
                Some(s) => Some(s.parse::<Role>().map_err(FintrackError::Validation)?),
                None => None,
            };
            let birth_date = parse_birth_date(birth_date)?;

            let updated = service.update(
                acting,
                &username,
                UpdateProfileInput {
                    name,
                    birth_date,
                    role,
                    password: password.map(|p| p.to_string()),
                },
            )?;

            println!("Updated user: {}", updated.username);
        }

        UserCommands::Delete { username } => {
            let acting = require_admin(acting)?;
            service.delete(acting, &username)?;
            println!("Deleted user: {}", username);
        }
    }

    Ok(())
}

fn require_admin(acting: Option<&Profile>) -> FintrackResult<&Profile> {
    let profile = acting.ok_or(FintrackError::NotLoggedIn)?;
    if profile.role.is_admin() {
        Ok(profile)
    } else {
        Err(FintrackError::PermissionDenied(
            "User management requires the admin role".into(),
        ))
    }
}

fn parse_birth_date(s: Option<String>) -> FintrackResult<Option<chrono::NaiveDate>> {
    match s {
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| FintrackError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s))),
        None => Ok(None),
    }
}

/// Use the provided password or prompt for it without echoing
pub fn resolve_password(
    provided: Option<String>,
    prompt: &str,
) -> FintrackResult<Zeroizing<String>> {
    match provided {
        Some(p) => Ok(Zeroizing::new(p)),
        None => {
            let entered = rpassword::prompt_password(prompt)
                .map_err(|e| FintrackError::Io(format!("Failed to read password: {}", e)))?;
            Ok(Zeroizing::new(entered))
        }
    }
}
