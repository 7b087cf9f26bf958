//! Reporting and aggregation for fintrack
//!
//! `monthly` holds the pure aggregation functions over movement slices;
//! `dashboard` assembles them into the monthly summary report.

pub mod dashboard;
pub mod monthly;

pub use dashboard::DashboardReport;
pub use monthly::{
    compute_category_breakdown, compute_daily_cumulative_balance, compute_monthly_totals,
    filter_by_month, filter_by_year, CategoryTotal, DailyBalancePoint, MonthlyTotals,
};
