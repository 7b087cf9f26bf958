//! Debt service

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Debt, DebtId, Money, ProfileId};
use crate::storage::Storage;

/// Service for debt management
pub struct DebtService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new debt
#[derive(Debug, Clone)]
pub struct CreateDebtInput {
    pub description: String,
    pub total: Money,
    pub installments: u32,
    pub installment_amount: Money,
    pub due_date: Option<NaiveDate>,
    pub paid: bool,
}

impl<'a> DebtService<'a> {
    /// Create a new debt service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new debt for a profile
    pub fn create(&self, owner: ProfileId, input: CreateDebtInput) -> FintrackResult<Debt> {
        let mut debt = Debt::new(owner, input.description.trim(), input.total);
        debt.installments = input.installments;
        debt.installment_amount = input.installment_amount;
        debt.due_date = input.due_date;
        debt.paid = input.paid;

        debt.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        self.storage.debts.upsert(debt.clone())?;
        self.storage.debts.save()?;

        Ok(debt)
    }

    /// List a profile's debts, oldest first
    pub fn list(&self, owner: ProfileId) -> FintrackResult<Vec<Debt>> {
        self.storage.debts.get_by_owner(owner)
    }

    /// Get a debt, enforcing ownership
    pub fn get(&self, owner: ProfileId, id: DebtId) -> FintrackResult<Debt> {
        match self.storage.debts.get(id)? {
            Some(d) if d.owner == owner => Ok(d),
            _ => Err(FintrackError::debt_not_found(id.to_string())),
        }
    }

    /// Delete a debt, enforcing ownership
    pub fn delete(&self, owner: ProfileId, id: DebtId) -> FintrackResult<()> {
        self.get(owner, id)?;

        self.storage.debts.delete(id)?;
        self.storage.debts.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, ProfileId) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, ProfileId::new())
    }

    fn car_loan() -> CreateDebtInput {
        CreateDebtInput {
            description: "Car loan".to_string(),
            total: Money::from_cents(1200000),
            installments: 24,
            installment_amount: Money::from_cents(50000),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 10),
            paid: false,
        }
    }

    #[test]
    fn test_create_list_delete() {
        let (_tmp, storage, owner) = setup();
        let service = DebtService::new(&storage);

        let debt = service.create(owner, car_loan()).unwrap();
        assert_eq!(debt.installments, 24);
        assert_eq!(service.list(owner).unwrap().len(), 1);

        service.delete(owner, debt.id).unwrap();
        assert!(service.list(owner).unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_empty_description() {
        let (_tmp, storage, owner) = setup();
        let service = DebtService::new(&storage);

        let mut input = car_loan();
        input.description = String::new();
        assert!(matches!(
            service.create(owner, input),
            Err(FintrackError::Validation(_))
        ));
    }

    #[test]
    fn test_ownership_enforced() {
        let (_tmp, storage, owner) = setup();
        let service = DebtService::new(&storage);

        let debt = service.create(owner, car_loan()).unwrap();

        let stranger = ProfileId::new();
        assert!(service.get(stranger, debt.id).is_err());
        assert!(service.delete(stranger, debt.id).is_err());
    }
}
