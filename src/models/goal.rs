//! Savings goal model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GoalId, ProfileId};
use super::money::Money;
use super::period::MonthPeriod;

/// A savings goal: a target amount, the amount saved so far, and an optional
/// month/year deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// The profile this goal belongs to
    pub owner: ProfileId,

    /// What the goal is for
    pub objective: String,

    /// Target amount
    pub target: Money,

    /// Amount saved so far
    pub saved: Money,

    /// Deadline month (optional)
    pub deadline: Option<MonthPeriod>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal
    pub fn new(owner: ProfileId, objective: impl Into<String>, target: Money) -> Self {
        Self {
            id: GoalId::new(),
            owner,
            objective: objective.into(),
            target,
            saved: Money::zero(),
            deadline: None,
            created_at: Utc::now(),
        }
    }

    /// Completion ratio in [0, ...); 0 when the target is zero
    pub fn progress(&self) -> f64 {
        if self.target.is_positive() {
            self.saved.cents() as f64 / self.target.cents() as f64
        } else {
            0.0
        }
    }

    /// Whether the saved amount has reached the target
    pub fn is_reached(&self) -> bool {
        self.target.is_positive() && self.saved >= self.target
    }

    /// Validate the record-store invariants
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.objective.trim().is_empty() {
            return Err(GoalValidationError::EmptyObjective);
        }
        if self.target.is_negative() || self.saved.is_negative() {
            return Err(GoalValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyObjective,
    NegativeAmount,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyObjective => write!(f, "Goal objective must not be empty"),
            Self::NegativeAmount => write!(f, "Goal amounts must be non-negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
