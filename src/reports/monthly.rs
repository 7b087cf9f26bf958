//! Monthly aggregation over movements
//!
//! Pure functions that reduce a slice of movements to the numbers the
//! dashboard shows: totals per kind, expenses grouped by category, and the
//! running day-by-day balance for one month. None of these touch storage;
//! callers filter to the profile and period they care about first.
//!
//! Filtering composes year before month: `filter_by_month` alone matches
//! that month number in every year, so a specific month of a specific year
//! is `filter_by_month(&filter_by_year(movements, year), month)`.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, MonthPeriod, Movement, MovementKind};

/// Income, expense, and investment totals for a set of movements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotals {
    /// Sum of income movements
    pub income: Money,
    /// Sum of expense movements
    pub expense: Money,
    /// Sum of investment movements
    pub investment: Money,
}

impl MonthlyTotals {
    /// Zero totals, the result for an empty movement set
    pub fn zero() -> Self {
        Self {
            income: Money::zero(),
            expense: Money::zero(),
            investment: Money::zero(),
        }
    }

    /// Net balance: income minus expenses minus investments
    pub fn balance(&self) -> Money {
        self.income - self.expense - self.investment
    }
}

/// Total spent in one expense category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Total spent
    pub total: Money,
}

/// Cumulative balance at the end of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyBalancePoint {
    /// The calendar day
    pub date: NaiveDate,
    /// Balance accumulated from the start of the month through this day
    pub balance: Money,
}

/// Keep only movements dated in the given calendar year
pub fn filter_by_year(movements: &[Movement], year: i32) -> Vec<Movement> {
    movements
        .iter()
        .filter(|m| m.date.year() == year)
        .cloned()
        .collect()
}

/// Keep only movements dated in the given month number (1-12), any year
pub fn filter_by_month(movements: &[Movement], month: u32) -> Vec<Movement> {
    movements
        .iter()
        .filter(|m| m.date.month() == month)
        .cloned()
        .collect()
}

/// Sum movement amounts per kind
///
/// The input is assumed to already be filtered to the period of interest.
/// Amounts are non-negative by validation, so each total is a plain sum.
pub fn compute_monthly_totals(movements: &[Movement]) -> MonthlyTotals {
    let mut totals = MonthlyTotals::zero();

    for movement in movements {
        match movement.kind {
            MovementKind::Income => totals.income += movement.amount,
            MovementKind::Expense => totals.expense += movement.amount,
            MovementKind::Investment => totals.investment += movement.amount,
        }
    }

    totals
}

/// Group expense movements by category, largest total first
///
/// Only expenses participate; categories whose total is zero are omitted.
/// Ties are broken alphabetically so the ordering is stable.
pub fn compute_category_breakdown(movements: &[Movement]) -> Vec<CategoryTotal> {
    let mut by_category: HashMap<&str, Money> = HashMap::new();

    for movement in movements {
        if movement.kind == MovementKind::Expense {
            *by_category.entry(movement.category.as_str()).or_default() += movement.amount;
        }
    }

    let mut breakdown: Vec<CategoryTotal> = by_category
        .into_iter()
        .filter(|(_, total)| !total.is_zero())
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total,
        })
        .collect();

    breakdown.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    breakdown
}

/// Running balance for every day of a month
///
/// Produces one point per calendar day of `period`, whether or not anything
/// happened that day. Movements outside the period are ignored, so the
/// caller does not need to pre-filter. The last point always equals the
/// month's net balance.
pub fn compute_daily_cumulative_balance(
    movements: &[Movement],
    period: MonthPeriod,
) -> Vec<DailyBalancePoint> {
    let day_count = period.day_count();

    // Net signed amount per day of month
    let mut per_day = vec![Money::zero(); day_count as usize];
    for movement in movements {
        if period.contains(movement.date) {
            per_day[movement.date.day() as usize - 1] += movement.signed_amount();
        }
    }

    let mut points = Vec::with_capacity(day_count as usize);
    let mut running = Money::zero();
    for day in 1..=day_count {
        running += per_day[day as usize - 1];
        // day is within the month's range, so the date always resolves
        if let Some(date) = period.date_of_day(day) {
            points.push(DailyBalancePoint {
                date,
                balance: running,
            });
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileId;

    fn movement(y: i32, m: u32, d: u32, kind: MovementKind, category: &str, cents: i64) -> Movement {
        Movement::new(
            ProfileId::new(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            kind,
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_filter_by_year() {
        let movements = vec![
            movement(2023, 6, 1, MovementKind::Expense, "Food", 100),
            movement(2024, 6, 1, MovementKind::Expense, "Food", 200),
            movement(2024, 7, 1, MovementKind::Expense, "Food", 300),
        ];

        let filtered = filter_by_year(&movements, 2024);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|m| m.date.year() == 2024));
    }

    #[test]
    fn test_filter_by_month_spans_years() {
        let movements = vec![
            movement(2023, 3, 1, MovementKind::Expense, "Food", 100),
            movement(2024, 3, 1, MovementKind::Expense, "Food", 200),
            movement(2024, 4, 1, MovementKind::Expense, "Food", 300),
        ];

        // Month alone matches both years
        let march = filter_by_month(&movements, 3);
        assert_eq!(march.len(), 2);

        // Year first, then month, pins a single month
        let march_2024 = filter_by_month(&filter_by_year(&movements, 2024), 3);
        assert_eq!(march_2024.len(), 1);
        assert_eq!(march_2024[0].amount.cents(), 200);
    }

    #[test]
    fn test_filters_are_idempotent() {
        let movements = vec![
            movement(2024, 3, 1, MovementKind::Expense, "Food", 100),
            movement(2024, 3, 15, MovementKind::Income, "Salary", 200),
        ];

        let once = filter_by_year(&movements, 2024);
        let twice = filter_by_year(&once, 2024);
        assert_eq!(once.len(), twice.len());

        let once = filter_by_month(&movements, 3);
        let twice = filter_by_month(&once, 3);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_monthly_totals() {
        let movements = vec![
            movement(2024, 3, 1, MovementKind::Income, "Salary", 100000),
            movement(2024, 3, 5, MovementKind::Expense, "Food", 20000),
            movement(2024, 3, 10, MovementKind::Expense, "Transport", 5000),
            movement(2024, 3, 20, MovementKind::Investment, "Stocks", 30000),
        ];

        let totals = compute_monthly_totals(&movements);
        assert_eq!(totals.income.cents(), 100000);
        assert_eq!(totals.expense.cents(), 25000);
        assert_eq!(totals.investment.cents(), 30000);
        assert_eq!(totals.balance().cents(), 45000);
    }

    #[test]
    fn test_monthly_totals_empty_input() {
        let totals = compute_monthly_totals(&[]);
        assert_eq!(totals, MonthlyTotals::zero());
        assert!(totals.balance().is_zero());
    }

    #[test]
    fn test_category_breakdown_expenses_only() {
        let movements = vec![
            movement(2024, 3, 1, MovementKind::Income, "Salary", 100000),
            movement(2024, 3, 5, MovementKind::Expense, "Food", 20000),
            movement(2024, 3, 6, MovementKind::Expense, "Food", 5000),
            movement(2024, 3, 10, MovementKind::Expense, "Transport", 8000),
            movement(2024, 3, 20, MovementKind::Investment, "Stocks", 30000),
        ];

        let breakdown = compute_category_breakdown(&movements);
        assert_eq!(breakdown.len(), 2);
        // Largest first
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].total.cents(), 25000);
        assert_eq!(breakdown[1].category, "Transport");
        assert_eq!(breakdown[1].total.cents(), 8000);

        // Breakdown sums to the expense total
        let sum: Money = breakdown.iter().map(|c| c.total).sum();
        assert_eq!(sum, compute_monthly_totals(&movements).expense);
    }

    #[test]
    fn test_category_breakdown_omits_zero_totals() {
        let movements = vec![
            movement(2024, 3, 5, MovementKind::Expense, "Food", 0),
            movement(2024, 3, 6, MovementKind::Expense, "Transport", 100),
        ];

        let breakdown = compute_category_breakdown(&movements);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, "Transport");
    }

    #[test]
    fn test_category_breakdown_empty_input() {
        assert!(compute_category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_daily_balance_day_counts() {
        // Leap February
        let points = compute_daily_cumulative_balance(&[], MonthPeriod::new(2024, 2).unwrap());
        assert_eq!(points.len(), 29);

        // Regular February
        let points = compute_daily_cumulative_balance(&[], MonthPeriod::new(2023, 2).unwrap());
        assert_eq!(points.len(), 28);

        // Thirty-day month
        let points = compute_daily_cumulative_balance(&[], MonthPeriod::new(2024, 4).unwrap());
        assert_eq!(points.len(), 30);

        // All balances zero on empty input
        assert!(points.iter().all(|p| p.balance.is_zero()));
    }

    #[test]
    fn test_daily_balance_worked_month() {
        // March 2024: income 1000.00 on day 1, Food 200.00 and 50.00 on day 5
        let movements = vec![
            movement(2024, 3, 1, MovementKind::Income, "Salary", 100000),
            movement(2024, 3, 5, MovementKind::Expense, "Food", 20000),
            movement(2024, 3, 5, MovementKind::Expense, "Food", 5000),
        ];
        let period = MonthPeriod::new(2024, 3).unwrap();

        let points = compute_daily_cumulative_balance(&movements, period);
        assert_eq!(points.len(), 31);

        assert_eq!(points[0].balance.cents(), 100000); // day 1
        assert_eq!(points[3].balance.cents(), 100000); // day 4, unchanged
        assert_eq!(points[4].balance.cents(), 75000); // day 5
        assert_eq!(points[30].balance.cents(), 75000); // day 31

        // Dates are dense and in order
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(points[30].date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_daily_balance_last_point_equals_monthly_balance() {
        let movements = vec![
            movement(2024, 3, 2, MovementKind::Income, "Salary", 350000),
            movement(2024, 3, 8, MovementKind::Expense, "Rent", 120000),
            movement(2024, 3, 14, MovementKind::Expense, "Food", 40000),
            movement(2024, 3, 21, MovementKind::Investment, "Stocks", 50000),
        ];
        let period = MonthPeriod::new(2024, 3).unwrap();

        let points = compute_daily_cumulative_balance(&movements, period);
        let totals = compute_monthly_totals(&movements);

        assert_eq!(points.last().unwrap().balance, totals.balance());
    }

    #[test]
    fn test_daily_balance_ignores_out_of_period_movements() {
        let movements = vec![
            movement(2024, 3, 10, MovementKind::Income, "Salary", 100000),
            movement(2024, 2, 10, MovementKind::Income, "Salary", 999999),
            movement(2023, 3, 10, MovementKind::Income, "Salary", 999999),
        ];
        let period = MonthPeriod::new(2024, 3).unwrap();

        let points = compute_daily_cumulative_balance(&movements, period);
        assert_eq!(points.last().unwrap().balance.cents(), 100000);
    }

    #[test]
    fn test_investments_reduce_daily_balance() {
        let movements = vec![
            movement(2024, 3, 1, MovementKind::Income, "Salary", 100000),
            movement(2024, 3, 2, MovementKind::Investment, "Stocks", 40000),
        ];
        let period = MonthPeriod::new(2024, 3).unwrap();

        let points = compute_daily_cumulative_balance(&movements, period);
        assert_eq!(points[1].balance.cents(), 60000);
    }
}
