use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_dashboard_command, handle_debt_command, handle_export_command, handle_goal_command,
    handle_movement_command, handle_user_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::services::AuthService;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack is a terminal-based personal finance tracker. It records \
                  income, expenses, and investments per user, tracks savings goals \
                  and debts, and renders a monthly dashboard with category \
                  breakdowns and the day-by-day balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Log in as a user
    Login {
        /// Login handle
        username: String,
        /// Password; prompted interactively when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out
    Logout,

    /// Show who is logged in
    Whoami,

    /// User management commands
    #[command(subcommand)]
    User(fintrack::cli::UserCommands),

    /// Movement commands
    #[command(subcommand, alias = "mov")]
    Movement(fintrack::cli::MovementCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(fintrack::cli::GoalCommands),

    /// Debt commands
    #[command(subcommand)]
    Debt(fintrack::cli::DebtCommands),

    /// Show the monthly dashboard
    Dashboard {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
        /// Write the dashboard as CSV to this path instead of printing
        #[arg(long)]
        csv: Option<std::path::PathBuf>,
    },

    /// Export commands
    #[command(subcommand)]
    Export(fintrack::cli::ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let auth = AuthService::new(&storage);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            fintrack::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Create your first user (it becomes the admin):");
            println!("  fintrack user add <username>");
        }

        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            if fintrack::storage::init::needs_initialization(&paths) {
                println!("Status:           not initialized (run 'fintrack init')");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }

        Some(Commands::Login { username, password }) => {
            let password =
                fintrack::cli::user::resolve_password(password, "Password: ")?;
            let profile = auth.login(&username, password.as_str())?;
            println!("Logged in as {} ({})", profile.username, profile.role);
        }

        Some(Commands::Logout) => {
            auth.logout()?;
            println!("Logged out");
        }

        Some(Commands::Whoami) => match auth.current_profile() {
            Ok(profile) => {
                println!("{} ({})", profile.username, profile.role);
            }
            Err(fintrack::FintrackError::NotLoggedIn) => {
                println!("Not logged in");
            }
            Err(e) => return Err(e.into()),
        },

        Some(Commands::User(cmd)) => {
            let acting = auth.current_profile().ok();
            handle_user_command(&storage, acting.as_ref(), cmd)?;
        }

        Some(Commands::Movement(cmd)) => {
            let profile = auth.current_profile()?;
            handle_movement_command(&storage, &profile, cmd)?;
        }

        Some(Commands::Goal(cmd)) => {
            let profile = auth.current_profile()?;
            handle_goal_command(&storage, &profile, cmd)?;
        }

        Some(Commands::Debt(cmd)) => {
            let profile = auth.current_profile()?;
            handle_debt_command(&storage, &profile, cmd)?;
        }

        Some(Commands::Dashboard { period, csv }) => {
            let profile = auth.current_profile()?;
            handle_dashboard_command(&storage, &profile, &settings, period, csv)?;
        }

        Some(Commands::Export(cmd)) => {
            let profile = auth.current_profile()?;
            handle_export_command(&storage, &profile, cmd)?;
        }

        None => {
            println!("fintrack - Terminal-based personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack init' to set up the data directory.");
        }
    }

    Ok(())
}
