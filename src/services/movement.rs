//! Movement service
//!
//! Business logic for recording and listing financial movements. Listings are
//! always scoped to the owning profile; period filtering composes the year
//! filter before the month filter.

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Movement, MovementId, MovementKind, PaymentMethod, ProfileId};
use crate::reports::monthly::{filter_by_month, filter_by_year};
use crate::storage::Storage;

/// Service for movement management
pub struct MovementService<'a> {
    storage: &'a Storage,
}

/// Options for filtering movement listings
#[derive(Debug, Clone, Default)]
pub struct MovementFilter {
    /// Keep only movements in this calendar year
    pub year: Option<i32>,
    /// Keep only movements in this month number (1-12)
    pub month: Option<u32>,
    /// Keep only movements of this kind
    pub kind: Option<MovementKind>,
    /// Keep only movements in this category (case-insensitive)
    pub category: Option<String>,
}

impl MovementFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Filter by month number
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: MovementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Input for creating a new movement
#[derive(Debug, Clone)]
pub struct CreateMovementInput {
    pub date: NaiveDate,
    pub description: String,
    pub kind: MovementKind,
    pub category: String,
    pub amount: Money,
    pub payment_method: Option<PaymentMethod>,
}

impl<'a> MovementService<'a> {
    /// Create a new movement service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new movement for a profile
    pub fn create(&self, owner: ProfileId, input: CreateMovementInput) -> FintrackResult<Movement> {
        let mut movement = Movement::new(
            owner,
            input.date,
            input.kind,
            input.category.trim(),
            input.amount,
        );
        movement.description = input.description.trim().to_string();
        movement.payment_method = input.payment_method;

        movement
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.movements.upsert(movement.clone())?;
        self.storage.movements.save()?;

        Ok(movement)
    }

    /// List a profile's movements, newest first, with optional filters
    ///
    /// The year filter is applied before the month filter, so a bare month
    /// filter matches that month across every year.
    pub fn list(&self, owner: ProfileId, filter: &MovementFilter) -> FintrackResult<Vec<Movement>> {
        let mut movements = self.storage.movements.get_by_owner(owner)?;

        if let Some(year) = filter.year {
            movements = filter_by_year(&movements, year);
        }
        if let Some(month) = filter.month {
            movements = filter_by_month(&movements, month);
        }
        if let Some(kind) = filter.kind {
            movements.retain(|m| m.kind == kind);
        }
        if let Some(category) = &filter.category {
            movements.retain(|m| m.category.eq_ignore_ascii_case(category));
        }

        Ok(movements)
    }

    /// Get a movement, enforcing ownership
    pub fn get(&self, owner: ProfileId, id: MovementId) -> FintrackResult<Movement> {
        match self.storage.movements.get(id)? {
            Some(m) if m.owner == owner => Ok(m),
            _ => Err(FintrackError::movement_not_found(id.to_string())),
        }
    }

    /// Delete a movement, enforcing ownership
    pub fn delete(&self, owner: ProfileId, id: MovementId) -> FintrackResult<()> {
        // Verify it exists and belongs to the caller before removing
        self.get(owner, id)?;

        self.storage.movements.delete(id)?;
        self.storage.movements.save()?;
        Ok(())
    }
}
