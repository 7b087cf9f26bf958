//! Debt display formatting

use crate::models::Debt;

use super::truncate;

/// Format a list of debts as a table
pub fn format_debt_list(debts: &[Debt]) -> String {
    if debts.is_empty() {
        return "No debts found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:41} {:24} {:>12} {:>6} {:>12} {:10} {:6}\n",
        "ID", "Description", "Total", "Inst", "Per inst", "Due", "Status"
    ));
    output.push_str(&"-".repeat(118));
    output.push('\n');

    for debt in debts {
        let installments = if debt.installments > 0 {
            debt.installments.to_string()
        } else {
            "-".to_string()
        };
        let per_installment = if debt.installments > 0 {
            debt.installment_amount.to_string()
        } else {
            "-".to_string()
        };
        let due = debt
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let status = if debt.paid { "paid" } else { "open" };

        output.push_str(&format!(
            "{} {} {:>12} {:>6} {:>12} {:10} {:6}\n",
            debt.id,
            truncate(&debt.description, 24),
            debt.total.to_string(),
            installments,
            per_installment,
            due,
            status
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, ProfileId};
    use chrono::NaiveDate;

    #[test]
    fn test_format_empty_list() {
        assert!(format_debt_list(&[]).contains("No debts found"));
    }

    #[test]
    fn test_format_debt_list() {
        let mut debt = Debt::new(ProfileId::new(), "Car loan", Money::from_cents(1200000));
        debt.installments = 24;
        debt.installment_amount = Money::from_cents(50000);
        debt.due_date = NaiveDate::from_ymd_opt(2024, 6, 10);

        let formatted = format_debt_list(&[debt]);
        assert!(formatted.contains("Car loan"));
        assert!(formatted.contains("$12000.00"));
        assert!(formatted.contains("2024-06-10"));
        assert!(formatted.contains("open"));
    }
}
