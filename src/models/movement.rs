//! Movement model
//!
//! A movement is a single dated financial record: income, expense, or
//! investment. The kind determines the sign of the amount in balance
//! calculations; the stored amount itself is always a non-negative magnitude.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{MovementId, ProfileId};
use super::money::Money;

/// Classification of a movement, determining its sign in balance math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Adds to the balance
    Income,
    /// Subtracts from the balance
    Expense,
    /// Subtracts from the balance (money moved out of spendable funds)
    Investment,
}

impl MovementKind {
    /// All kinds, in display order
    pub const ALL: [MovementKind; 3] = [Self::Income, Self::Expense, Self::Investment];

    /// Suggested categories for this kind, shown in CLI help
    pub fn suggested_categories(&self) -> &'static [&'static str] {
        match self {
            Self::Income => &[
                "Salary",
                "Bonus",
                "Freelance",
                "Interest",
                "Refunds",
                "Other",
            ],
            Self::Expense => &[
                "Food",
                "Housing",
                "Transport",
                "Health",
                "Education",
                "Leisure",
                "Utilities",
                "Subscriptions",
                "Clothing",
                "Taxes",
                "Pets",
                "Other",
            ],
            Self::Investment => &[
                "Savings",
                "Bonds",
                "Funds",
                "Stocks",
                "Retirement",
                "Crypto",
                "Other",
            ],
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Investment => write!(f, "Investment"),
        }
    }
}

impl FromStr for MovementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "investment" => Ok(Self::Investment),
            _ => Err(format!(
                "Unknown movement kind: '{}'. Use income, expense, or investment",
                s
            )),
        }
    }
}

/// How a movement was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Debit,
    Credit,
    Transfer,
    Other,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Debit => write!(f, "Debit"),
            Self::Credit => write!(f, "Credit"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            "transfer" => Ok(Self::Transfer),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Unknown payment method: '{}'. Use cash, debit, credit, transfer, or other",
                s
            )),
        }
    }
}

/// A dated financial record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier
    pub id: MovementId,

    /// The profile this movement belongs to
    pub owner: ProfileId,

    /// Calendar date of the movement
    pub date: NaiveDate,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Income, expense, or investment
    pub kind: MovementKind,

    /// Free-form category label, meaningful within the kind
    pub category: String,

    /// Non-negative magnitude; the kind supplies the sign
    pub amount: Money,

    /// Payment method (optional)
    pub payment_method: Option<PaymentMethod>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Movement {
    /// Create a new movement
    pub fn new(
        owner: ProfileId,
        date: NaiveDate,
        kind: MovementKind,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: MovementId::new(),
            owner,
            date,
            description: String::new(),
            kind,
            category: category.into(),
            amount,
            payment_method: None,
            created_at: Utc::now(),
        }
    }

    /// The signed contribution of this movement to a balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            MovementKind::Income => self.amount,
            MovementKind::Expense | MovementKind::Investment => -self.amount,
        }
    }

    /// Validate the record-store invariants: non-negative amount and a
    /// non-empty category
    pub fn validate(&self) -> Result<(), MovementValidationError> {
        if self.amount.is_negative() {
            return Err(MovementValidationError::NegativeAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(MovementValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for movements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovementValidationError {
    NegativeAmount(Money),
    EmptyCategory,
}

impl fmt::Display for MovementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Movement amount must be non-negative, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Movement category must not be empty"),
        }
    }
}

impl std::error::Error for MovementValidationError {}
