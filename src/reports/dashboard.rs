//! Monthly dashboard report
//!
//! Assembles the month's totals, the expense breakdown by category, the
//! day-by-day balance series, and the profile's goals and debts into one
//! report with terminal and CSV renderings.

use std::io::Write;

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Debt, Goal, MonthPeriod, ProfileId};
use crate::storage::Storage;

use super::monthly::{
    compute_category_breakdown, compute_daily_cumulative_balance, compute_monthly_totals,
    filter_by_month, filter_by_year, CategoryTotal, DailyBalancePoint, MonthlyTotals,
};

const CHART_WIDTH: usize = 40;

/// Monthly dashboard for one profile
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// The month covered
    pub period: MonthPeriod,
    /// Totals per movement kind
    pub totals: MonthlyTotals,
    /// Expense totals per category, largest first
    pub breakdown: Vec<CategoryTotal>,
    /// Cumulative balance for every day of the month
    pub daily: Vec<DailyBalancePoint>,
    /// Number of movements in the month
    pub movement_count: usize,
    /// The profile's goals
    pub goals: Vec<Goal>,
    /// The profile's debts
    pub debts: Vec<Debt>,
}

impl DashboardReport {
    /// Generate the dashboard for a profile and month
    pub fn generate(
        storage: &Storage,
        owner: ProfileId,
        period: MonthPeriod,
    ) -> FintrackResult<Self> {
        let movements = storage.movements.get_by_owner(owner)?;

        // Year first, then month
        let in_month = filter_by_month(&filter_by_year(&movements, period.year()), period.month());

        let totals = compute_monthly_totals(&in_month);
        let breakdown = compute_category_breakdown(&in_month);
        let daily = compute_daily_cumulative_balance(&in_month, period);

        Ok(Self {
            period,
            totals,
            breakdown,
            daily,
            movement_count: in_month.len(),
            goals: storage.goals.get_by_owner(owner)?,
            debts: storage.debts.get_by_owner(owner)?,
        })
    }

    /// Format the dashboard for terminal display, using the configured
    /// currency symbol and date format
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.period.label()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!(
            "{:<14} {:>14}\n",
            "Income:",
            self.totals.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<14} {:>14}\n",
            "Expenses:",
            self.totals.expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<14} {:>14}\n",
            "Investments:",
            self.totals.investment.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<14} {:>14}\n",
            "Balance:",
            self.totals.balance().format_with_symbol(symbol)
        ));
        output.push_str(&format!("{:<14} {:>14}\n\n", "Movements:", self.movement_count));

        // Expense breakdown
        if !self.breakdown.is_empty() {
            output.push_str("Expenses by category\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');

            let expense_total = self.totals.expense;
            for entry in &self.breakdown {
                let pct = if expense_total.is_zero() {
                    0.0
                } else {
                    entry.total.cents() as f64 / expense_total.cents() as f64 * 100.0
                };
                output.push_str(&format!(
                    "{:<28} {:>14} {:>6.1}%\n",
                    entry.category,
                    entry.total.format_with_symbol(symbol),
                    pct
                ));
            }
            output.push('\n');
        }

        // Daily balance chart
        output.push_str("Daily balance\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&self.format_daily_chart(settings));

        if !self.goals.is_empty() {
            output.push_str("\nGoals\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for goal in &self.goals {
                output.push_str(&format!(
                    "{:<28} {:>14} / {:<14} {:>5.0}%\n",
                    goal.objective,
                    goal.saved.format_with_symbol(symbol),
                    goal.target.format_with_symbol(symbol),
                    goal.progress() * 100.0
                ));
            }
        }

        if !self.debts.is_empty() {
            output.push_str("\nDebts\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for debt in &self.debts {
                let status = if debt.paid { "paid" } else { "open" };
                output.push_str(&format!(
                    "{:<28} {:>14} {:>6}\n",
                    debt.description,
                    debt.total.format_with_symbol(symbol),
                    status
                ));
            }
        }

        output
    }

    /// Render the daily series as a horizontal bar chart
    fn format_daily_chart(&self, settings: &Settings) -> String {
        let mut output = String::new();

        let max_abs = self
            .daily
            .iter()
            .map(|p| p.balance.abs().cents())
            .max()
            .unwrap_or(0);

        for point in &self.daily {
            let bar_len = if max_abs == 0 {
                0
            } else {
                (point.balance.abs().cents() as usize * CHART_WIDTH) / max_abs as usize
            };
            let marker = if point.balance.is_negative() { '-' } else { '#' };
            output.push_str(&format!(
                "{} {:>12} {}\n",
                point.date.format(&settings.date_format),
                point.balance.format_with_symbol(&settings.currency_symbol),
                marker.to_string().repeat(bar_len)
            ));
        }

        output
    }

    /// Export the dashboard's daily series and breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        writeln!(writer, "Section,Key,Amount")
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        writeln!(
            writer,
            "totals,income,{:.2}",
            self.totals.income.cents() as f64 / 100.0
        )
        .map_err(|e| FintrackError::Export(e.to_string()))?;
        writeln!(
            writer,
            "totals,expense,{:.2}",
            self.totals.expense.cents() as f64 / 100.0
        )
        .map_err(|e| FintrackError::Export(e.to_string()))?;
        writeln!(
            writer,
            "totals,investment,{:.2}",
            self.totals.investment.cents() as f64 / 100.0
        )
        .map_err(|e| FintrackError::Export(e.to_string()))?;
        writeln!(
            writer,
            "totals,balance,{:.2}",
            self.totals.balance().cents() as f64 / 100.0
        )
        .map_err(|e| FintrackError::Export(e.to_string()))?;

        for entry in &self.breakdown {
            writeln!(
                writer,
                "category,{},{:.2}",
                entry.category,
                entry.total.cents() as f64 / 100.0
            )
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        for point in &self.daily {
            writeln!(
                writer,
                "daily,{},{:.2}",
                point.date,
                point.balance.cents() as f64 / 100.0
            )
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{Money, Movement, MovementKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_movement(
        storage: &Storage,
        owner: ProfileId,
        y: i32,
        m: u32,
        d: u32,
        kind: MovementKind,
        category: &str,
        cents: i64,
    ) {
        let movement = Movement::new(
            owner,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        );
        storage.movements.upsert(movement).unwrap();
    }

    #[test]
    fn test_generate_dashboard() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = ProfileId::new();

        add_movement(&storage, owner, 2024, 3, 1, MovementKind::Income, "Salary", 100000);
        add_movement(&storage, owner, 2024, 3, 5, MovementKind::Expense, "Food", 20000);
        add_movement(&storage, owner, 2024, 3, 5, MovementKind::Expense, "Food", 5000);
        // Other months and years are excluded
        add_movement(&storage, owner, 2024, 4, 1, MovementKind::Expense, "Food", 999999);
        add_movement(&storage, owner, 2023, 3, 1, MovementKind::Expense, "Food", 999999);

        let period = MonthPeriod::new(2024, 3).unwrap();
        let report = DashboardReport::generate(&storage, owner, period).unwrap();

        assert_eq!(report.movement_count, 3);
        assert_eq!(report.totals.income.cents(), 100000);
        assert_eq!(report.totals.expense.cents(), 25000);
        assert_eq!(report.totals.balance().cents(), 75000);

        assert_eq!(report.breakdown.len(), 1);
        assert_eq!(report.breakdown[0].total.cents(), 25000);

        assert_eq!(report.daily.len(), 31);
        assert_eq!(report.daily.last().unwrap().balance, report.totals.balance());
    }

    #[test]
    fn test_dashboard_scoped_to_owner() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = ProfileId::new();
        let other = ProfileId::new();

        add_movement(&storage, owner, 2024, 3, 1, MovementKind::Income, "Salary", 100000);
        add_movement(&storage, other, 2024, 3, 1, MovementKind::Income, "Salary", 500000);

        let period = MonthPeriod::new(2024, 3).unwrap();
        let report = DashboardReport::generate(&storage, owner, period).unwrap();
        assert_eq!(report.totals.income.cents(), 100000);
    }

    #[test]
    fn test_empty_month_dashboard() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = ProfileId::new();

        let period = MonthPeriod::new(2024, 2).unwrap();
        let report = DashboardReport::generate(&storage, owner, period).unwrap();

        assert_eq!(report.movement_count, 0);
        assert!(report.totals.balance().is_zero());
        assert!(report.breakdown.is_empty());
        assert_eq!(report.daily.len(), 29); // leap February is still dense
    }

    #[test]
    fn test_format_terminal() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = ProfileId::new();

        add_movement(&storage, owner, 2024, 3, 1, MovementKind::Income, "Salary", 100000);
        add_movement(&storage, owner, 2024, 3, 5, MovementKind::Expense, "Food", 25000);

        let period = MonthPeriod::new(2024, 3).unwrap();
        let report = DashboardReport::generate(&storage, owner, period).unwrap();
        let text = report.format_terminal(&Settings::default());

        assert!(text.contains("Mar/2024"));
        assert!(text.contains("Food"));
        assert!(text.contains("$750.00"));
        assert!(text.contains("2024-03-31"));
    }

    #[test]
    fn test_format_terminal_uses_configured_settings() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = ProfileId::new();

        add_movement(&storage, owner, 2024, 3, 1, MovementKind::Income, "Salary", 100000);
        add_movement(&storage, owner, 2024, 3, 5, MovementKind::Expense, "Food", 25000);

        let period = MonthPeriod::new(2024, 3).unwrap();
        let report = DashboardReport::generate(&storage, owner, period).unwrap();

        let settings = Settings {
            currency_symbol: "R$".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        let text = report.format_terminal(&settings);

        assert!(text.contains("R$750.00"));
        assert!(text.contains("R$1000.00"));
        assert!(text.contains("31/03/2024"));
        assert!(!text.contains("2024-03-31"));
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let owner = ProfileId::new();

        add_movement(&storage, owner, 2024, 3, 1, MovementKind::Income, "Salary", 100000);
        add_movement(&storage, owner, 2024, 3, 5, MovementKind::Expense, "Food", 25000);

        let period = MonthPeriod::new(2024, 3).unwrap();
        let report = DashboardReport::generate(&storage, owner, period).unwrap();

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Section,Key,Amount"));
        assert!(csv.contains("totals,balance,750.00"));
        assert!(csv.contains("category,Food,250.00"));
        assert!(csv.contains("daily,2024-03-31,750.00"));
    }
}
