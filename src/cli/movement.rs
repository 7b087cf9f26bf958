//! Movement CLI commands

use clap::Subcommand;

use crate::display::movement::{format_movement_details, format_movement_list};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, MovementId, MovementKind, PaymentMethod, Profile};
use crate::services::{CreateMovementInput, MovementFilter, MovementService};
use crate::storage::Storage;

/// Movement subcommands
#[derive(Subcommand)]
pub enum MovementCommands {
    /// Record a new movement
    Add {
        /// Movement kind (income, expense, investment)
        kind: String,
        /// Category label (e.g. Food, Salary)
        category: String,
        /// Amount (e.g. "250.00", "250,00", or "250")
        amount: String,
        /// Movement date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Payment method (cash, debit, credit, transfer, other)
        #[arg(short, long)]
        method: Option<String>,
    },
    /// List movements
    List {
        /// Filter by year
        #[arg(short, long)]
        year: Option<i32>,
        /// Filter by month number (1-12)
        #[arg(short, long)]
        month: Option<u32>,
        /// Filter by kind
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show movement details
    Show {
        /// Movement ID
        id: String,
    },
    /// Delete a movement
    Delete {
        /// Movement ID
        id: String,
    },
    /// List suggested categories per kind
    Categories,
}

/// Handle a movement command for the logged-in profile
pub fn handle_movement_command(
    storage: &Storage,
    profile: &Profile,
    cmd: MovementCommands,
) -> FintrackResult<()> {
    let service = MovementService::new(storage);

    match cmd {
        MovementCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
            method,
        } => {
            let kind: MovementKind = kind
                .parse()
                .map_err(FintrackError::Validation)?;

            let amount = Money::parse(&amount).map_err(|e| {
                FintrackError::Validation(format!(
                    "Invalid amount: '{}'. Use format like '250.00'. Error: {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(s) => s.parse().map_err(|_| {
                    FintrackError::Validation(format!(
                        "Invalid date: '{}'. Use YYYY-MM-DD",
                        s
                    ))
                })?,
                None => chrono::Local::now().date_naive(),
            };

            let payment_method = match method {
                Some(s) => Some(
                    s.parse::<PaymentMethod>()
                        .map_err(FintrackError::Validation)?,
                ),
                None => None,
            };

            let movement = service.create(
                profile.id,
                CreateMovementInput {
                    date,
                    description: description.unwrap_or_default(),
                    kind,
                    category,
                    amount,
                    payment_method,
                },
            )?;

            println!("Recorded movement: {}", movement);
            println!("  ID: {}", movement.id);
        }

        MovementCommands::List {
            year,
            month,
            kind,
            category,
        } => {
            let mut filter = MovementFilter::new();
            filter.year = year;
            if let Some(m) = month {
                if !(1..=12).contains(&m) {
                    return Err(FintrackError::Validation(format!(
                        "Month must be between 1 and 12, got {}",
                        m
                    )));
                }
                filter.month = Some(m);
            }
            if let Some(k) = kind {
                filter.kind = Some(k.parse().map_err(FintrackError::Validation)?);
            }
            filter.category = category;

            let movements = service.list(profile.id, &filter)?;
            print!("{}", format_movement_list(&movements));
        }

        MovementCommands::Show { id } => {
            let id: MovementId = id
                .parse()
                .map_err(|_| FintrackError::movement_not_found(&id))?;
            let movement = service.get(profile.id, id)?;
            print!("{}", format_movement_details(&movement));
        }

        MovementCommands::Delete { id } => {
            let parsed: MovementId = id
                .parse()
                .map_err(|_| FintrackError::movement_not_found(&id))?;
            service.delete(profile.id, parsed)?;
            println!("Deleted movement {}", parsed);
        }

        MovementCommands::Categories => {
            for kind in MovementKind::ALL {
                println!("{}:", kind);
                for category in kind.suggested_categories() {
                    println!("  {}", category);
                }
            }
        }
    }

    Ok(())
}
