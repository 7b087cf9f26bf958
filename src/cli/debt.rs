//! Debt CLI commands

use clap::Subcommand;

use crate::display::debt::format_debt_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{DebtId, Money, Profile};
use crate::services::{CreateDebtInput, DebtService};
use crate::storage::Storage;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Record a new debt
    Add {
        /// Description of the debt
        description: String,
        /// Total amount owed (e.g. "12000.00")
        total: String,
        /// Number of installments
        #[arg(short, long, default_value = "0")]
        installments: u32,
        /// Amount per installment
        #[arg(short = 'a', long, default_value = "0")]
        installment_amount: String,
        /// Next due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// Mark as already settled
        #[arg(long)]
        paid: bool,
    },
    /// List debts
    List,
    /// Delete a debt
    Delete {
        /// Debt ID
        id: String,
    },
}

/// Handle a debt command for the logged-in profile
pub fn handle_debt_command(
    storage: &Storage,
    profile: &Profile,
    cmd: DebtCommands,
) -> FintrackResult<()> {
    let service = DebtService::new(storage);

    match cmd {
        DebtCommands::Add {
            description,
            total,
            installments,
            installment_amount,
            due,
            paid,
        } => {
            let total = parse_amount(&total)?;
            let installment_amount = parse_amount(&installment_amount)?;
            let due_date = match due {
                Some(s) => Some(s.parse().map_err(|_| {
                    FintrackError::Validation(format!(
                        "Invalid date: '{}'. Use YYYY-MM-DD",
                        s
                    ))
                })?),
                None => None,
            };

            let debt = service.create(
                profile.id,
                CreateDebtInput {
                    description,
                    total,
                    installments,
                    installment_amount,
                    due_date,
                    paid,
                },
            )?;

            println!("Recorded debt: {}", debt.description);
            println!("  Total: {}", debt.total);
            println!("  ID: {}", debt.id);
        }

        DebtCommands::List => {
            let debts = service.list(profile.id)?;
            print!("{}", format_debt_list(&debts));
        }

        DebtCommands::Delete { id } => {
            let parsed: DebtId = id
                .parse()
                .map_err(|_| FintrackError::debt_not_found(&id))?;
            service.delete(profile.id, parsed)?;
            println!("Deleted debt {}", parsed);
        }
    }

    Ok(())
}

fn parse_amount(s: &str) -> FintrackResult<Money> {
    Money::parse(s).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid amount: '{}'. Use format like '1000.00'. Error: {}",
            s, e
        ))
    })
}
