//! Goal CLI commands

use clap::Subcommand;

use crate::display::goal::format_goal_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{GoalId, Money, MonthPeriod, Profile};
use crate::services::{CreateGoalInput, GoalService};
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// What the goal is for
        objective: String,
        /// Target amount (e.g. "1000.00")
        target: String,
        /// Amount already saved
        #[arg(short, long, default_value = "0")]
        saved: String,
        /// Deadline month (YYYY-MM)
        #[arg(short, long)]
        deadline: Option<String>,
    },
    /// List goals
    List,
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

/// Handle a goal command for the logged-in profile
pub fn handle_goal_command(
    storage: &Storage,
    profile: &Profile,
    cmd: GoalCommands,
) -> FintrackResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            objective,
            target,
            saved,
            deadline,
        } => {
            let target = parse_amount(&target)?;
            let saved = parse_amount(&saved)?;
            let deadline = match deadline {
                Some(s) => Some(s.parse::<MonthPeriod>().map_err(|e| {
                    FintrackError::Validation(e.to_string())
                })?),
                None => None,
            };

            let goal = service.create(
                profile.id,
                CreateGoalInput {
                    objective,
                    target,
                    saved,
                    deadline,
                },
            )?;

            println!("Created goal: {}", goal.objective);
            println!("  Target: {}", goal.target);
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List => {
            let goals = service.list(profile.id)?;
            print!("{}", format_goal_list(&goals));
        }

        GoalCommands::Delete { id } => {
            let parsed: GoalId = id
                .parse()
                .map_err(|_| FintrackError::goal_not_found(&id))?;
            service.delete(profile.id, parsed)?;
            println!("Deleted goal {}", parsed);
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
