//! Dashboard CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{MonthPeriod, Profile};
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Handle the dashboard command for the logged-in profile
///
/// `period` defaults to the current month; `csv_path` writes the report as
/// CSV instead of printing the terminal rendering.
pub fn handle_dashboard_command(
    storage: &Storage,
    profile: &Profile,
    settings: &Settings,
    period: Option<String>,
    csv_path: Option<PathBuf>,
) -> FintrackResult<()> {
    let period = match period {
        Some(s) => s
            .parse::<MonthPeriod>()
            .map_err(|e| FintrackError::Validation(e.to_string()))?,
        None => MonthPeriod::current(),
    };

    let report = DashboardReport::generate(storage, profile.id, period)?;

    match csv_path {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            report.export_csv(&mut writer)?;
            println!("Wrote dashboard CSV to {}", path.display());
        }
        None => {
            print!("{}", report.format_terminal(settings));
        }
    }

    Ok(())
}
