//! Export CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_full_json, export_movements_csv};
use crate::models::Profile;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export your movements to CSV
    Movements {
        /// Output file path
        #[arg(short, long, default_value = "movements.csv")]
        output: PathBuf,
    },
    /// Export the full store to JSON (admin only)
    Full {
        /// Output file path
        #[arg(short, long, default_value = "fintrack-export.json")]
        output: PathBuf,
    },
}

/// Handle an export command for the logged-in profile
pub fn handle_export_command(
    storage: &Storage,
    profile: &Profile,
    cmd: ExportCommands,
) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Movements { output } => {
            let movements = storage.movements.get_by_owner(profile.id)?;
            let file = create_output(&output)?;
            export_movements_csv(&movements, BufWriter::new(file))?;
            println!("Exported {} movements to {}", movements.len(), output.display());
        }

        ExportCommands::Full { output } => {
            if !profile.role.is_admin() {
                return Err(FintrackError::PermissionDenied(
                    "Full export requires the admin role".into(),
                ));
            }

            let file = create_output(&output)?;
            let mut writer = BufWriter::new(file);
            export_full_json(storage, &mut writer)?;
            println!("Exported full store to {}", output.display());
        }
    }

    Ok(())
}

fn create_output(path: &PathBuf) -> FintrackResult<File> {
    File::create(path).map_err(|e| {
        FintrackError::Export(format!("Failed to create {}: {}", path.display(), e))
    })
}
