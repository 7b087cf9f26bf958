//! fintrack - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the fintrack application:
//! per-user income/expense/investment movements, savings goals, debts, and a
//! monthly dashboard with per-kind totals, an expense-by-category breakdown,
//! and a cumulative daily balance series.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (movements, goals, debts, profiles)
//! - `storage`: JSON file storage layer
//! - `auth`: Password hashing and login sessions
//! - `services`: Business logic layer
//! - `reports`: Monthly aggregation engine and dashboard report
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON export
//! - `cli`: Command handlers

pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
