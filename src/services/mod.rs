//! Business logic services for fintrack
//!
//! Services borrow the storage coordinator, validate inputs, enforce
//! ownership and role rules, and persist changes.

pub mod auth;
pub mod debt;
pub mod goal;
pub mod movement;
pub mod profile;

pub use auth::AuthService;
pub use debt::{CreateDebtInput, DebtService};
pub use goal::{CreateGoalInput, GoalService};
pub use movement::{CreateMovementInput, MovementFilter, MovementService};
pub use profile::{CreateProfileInput, ProfileService, UpdateProfileInput};
