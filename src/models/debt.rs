//! Debt model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{DebtId, ProfileId};
use super::money::Money;

/// A debt: total owed, optional installment plan, and a paid flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier
    pub id: DebtId,

    /// The profile this debt belongs to
    pub owner: ProfileId,

    /// Free-form description
    pub description: String,

    /// Total amount owed
    pub total: Money,

    /// Number of installments (0 when not paid in installments)
    #[serde(default)]
    pub installments: u32,

    /// Amount per installment
    #[serde(default)]
    pub installment_amount: Money,

    /// Next due date (optional)
    pub due_date: Option<NaiveDate>,

    /// Whether the debt has been settled
    #[serde(default)]
    pub paid: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Debt {
    /// Create a new debt
    pub fn new(owner: ProfileId, description: impl Into<String>, total: Money) -> Self {
        Self {
            id: DebtId::new(),
            owner,
            description: description.into(),
            total,
            installments: 0,
            installment_amount: Money::zero(),
            due_date: None,
            paid: false,
            created_at: Utc::now(),
        }
    }

    /// Validate the record-store invariants
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.description.trim().is_empty() {
            return Err(DebtValidationError::EmptyDescription);
        }
        if self.total.is_negative() || self.installment_amount.is_negative() {
            return Err(DebtValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Validation errors for debts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyDescription,
    NegativeAmount,
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Debt description must not be empty"),
            Self::NegativeAmount => write!(f, "Debt amounts must be non-negative"),
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_debt() {
        let debt = Debt::new(ProfileId::new(), "Car loan", Money::from_cents(1200000));
        assert_eq!(debt.installments, 0);
        assert!(!debt.paid);
        assert!(debt.due_date.is_none());
        assert!(debt.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let mut debt = Debt::new(ProfileId::new(), "Car loan", Money::from_cents(1200000));

        debt.description = String::new();
        assert_eq!(debt.validate(), Err(DebtValidationError::EmptyDescription));

        debt.description = "Car loan".to_string();
        debt.installment_amount = Money::from_cents(-100);
        assert_eq!(debt.validate(), Err(DebtValidationError::NegativeAmount));
    }

    #[test]
    fn test_serialization() {
        let mut debt = Debt::new(ProfileId::new(), "Car loan", Money::from_cents(1200000));
        debt.installments = 24;
        debt.installment_amount = Money::from_cents(50000);
        debt.due_date = NaiveDate::from_ymd_opt(2024, 6, 10);

        let json = serde_json::to_string(&debt).unwrap();
        let deserialized: Debt = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.installments, 24);
        assert_eq!(deserialized.installment_amount, debt.installment_amount);
        assert_eq!(deserialized.due_date, debt.due_date);
    }
}
