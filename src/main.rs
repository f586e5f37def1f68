mod client;
mod commands;
mod render;
mod session;
mod utils;

use anyhow::Result;
use bdays_core::{AnniversaryDate, Category, CategoryFilter};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::client::ApiError;
use crate::commands::Context;
use crate::commands::calendar::MonthSelection;
use crate::commands::edit::BirthdayChanges;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "bdays")]
#[command(about = "Keep track of birthdays and never miss a celebration")]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Login {
        #[arg(long)]
        email: Option<String>,
    },
    Logout,
    /// Show or update your profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Prompt for a new password
        #[arg(long)]
        password: bool,
    },
    DeleteAccount {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Upcoming birthdays first, then those already past this year
    List {
        /// Only names containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Category key (e.g. "family", "childhood_friends") or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,
    },
    Add {
        name: Option<String>,

        /// Month and day, e.g. "12-25"
        #[arg(short, long)]
        date: Option<AnniversaryDate>,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// Month and day, e.g. "12-25"
        #[arg(short, long)]
        date: Option<AnniversaryDate>,

        #[arg(short, long)]
        category: Option<Category>,

        /// New notes ("" clears them)
        #[arg(short, long)]
        notes: Option<String>,
    },
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Month calendar with birthdays marked
    Calendar {
        /// Month number (1-12), defaults to the current month
        #[arg(short, long)]
        month: Option<u32>,

        #[arg(short, long)]
        year: Option<i32>,

        /// Months forward from the selected month (negative goes back)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// Birthdays in order of their next occurrence
    Next {
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// Dashboard numbers
    Stats,
}

impl Commands {
    /// Whether the command authenticates with the stored bearer token.
    fn uses_session(&self) -> bool {
        !matches!(
            self,
            Commands::Register { .. } | Commands::Login { .. } | Commands::Logout
        )
    }
}

/// True when the API rejected a token that was actually sent.
fn session_rejected(err: &anyhow::Error, sent_token: bool) -> bool {
    sent_token && matches!(err.downcast_ref::<ApiError>(), Some(ApiError::Unauthorized(_)))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let today = chrono::Local::now().date_naive();
    let ctx = Context::load(today)?;
    let sent_token = ctx.session.is_some() && cli.command.uses_session();

    let result = match cli.command {
        Commands::Register { name, email } => commands::auth::register(&ctx, name, email).await,
        Commands::Login { email } => commands::auth::login(&ctx, email).await,
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Profile {
            name,
            email,
            password,
        } => commands::profile::run(&ctx, name, email, password).await,
        Commands::DeleteAccount { force } => commands::profile::delete_account(&ctx, force).await,
        Commands::List { search, category } => commands::list::run(&ctx, search, category).await,
        Commands::Add {
            name,
            date,
            category,
            notes,
        } => commands::add::run(&ctx, name, date, category, notes).await,
        Commands::Edit {
            id,
            name,
            date,
            category,
            notes,
        } => {
            let changes = BirthdayChanges {
                name,
                date,
                category,
                notes,
            };
            commands::edit::run(&ctx, &id, changes).await
        }
        Commands::Delete { id, force } => commands::delete::run(&ctx, &id, force).await,
        Commands::Calendar {
            month,
            year,
            offset,
        } => {
            let selection = MonthSelection {
                month,
                year,
                offset,
            };
            commands::calendar::run(&ctx, selection).await
        }
        Commands::Next { limit } => commands::next::run(&ctx, limit).await,
        Commands::Stats => commands::stats::run(&ctx).await,
    };

    match result {
        Err(err) if session_rejected(&err, sent_token) => {
            tracing::warn!("token rejected, clearing session");
            Session::clear(&ctx.session_path)?;
            Err(err.context("Session expired or invalid. Log in again with `bdays login`"))
        }
        other => other,
    }
}
