//! Goal service

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Goal, GoalId, Money, MonthPeriod, ProfileId};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub objective: String,
    pub target: Money,
    pub saved: Money,
    pub deadline: Option<MonthPeriod>,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new goal for a profile
    pub fn create(&self, owner: ProfileId, input: CreateGoalInput) -> FintrackResult<Goal> {
        let mut goal = Goal::new(owner, input.objective.trim(), input.target);
        goal.saved = input.saved;
        goal.deadline = input.deadline;

        goal.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// List a profile's goals, oldest first
    pub fn list(&self, owner: ProfileId) -> FintrackResult<Vec<Goal>> {
        self.storage.goals.get_by_owner(owner)
    }

    /// Get a goal, enforcing ownership
    pub fn get(&self, owner: ProfileId, id: GoalId) -> FintrackResult<Goal> {
        match self.storage.goals.get(id)? {
            Some(g) if g.owner == owner => Ok(g),
            _ => Err(FintrackError::goal_not_found(id.to_string())),
        }
    }

    /// Delete a goal, enforcing ownership
    pub fn delete(&self, owner: ProfileId, id: GoalId) -> FintrackResult<()> {
        self.get(owner, id)?;

        self.storage.goals.delete(id)?;
        self.storage.goals.save()?;
        Ok(())
    }
}
