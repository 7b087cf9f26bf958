//! Authentication for fintrack
//!
//! Local credential checking (argon2 password hashes stored on the profile)
//! and a small session file that records who is logged in.

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password};
pub use session::Session;
