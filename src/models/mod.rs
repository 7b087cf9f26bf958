//! Core data models for fintrack
//!
//! This module contains all the data structures that represent the finance
//! tracking domain: movements, goals, debts, and user profiles.

pub mod debt;
pub mod goal;
pub mod ids;
pub mod money;
pub mod movement;
pub mod period;
pub mod profile;

pub use debt::Debt;
pub use goal::Goal;
pub use ids::{DebtId, GoalId, MovementId, ProfileId};
pub use money::Money;
pub use movement::{Movement, MovementKind, PaymentMethod};
pub use period::MonthPeriod;
pub use profile::{Profile, Role};
