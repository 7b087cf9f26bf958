//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers that act
//! on a profile's data receive the resolved logged-in profile from main.

pub mod dashboard;
pub mod debt;
pub mod export;
pub mod goal;
pub mod movement;
pub mod user;

pub use dashboard::handle_dashboard_command;
pub use debt::{handle_debt_command, DebtCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use movement::{handle_movement_command, MovementCommands};
pub use user::{handle_user_command, UserCommands};
