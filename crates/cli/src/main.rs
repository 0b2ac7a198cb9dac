//! Lunchbox CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations (includes the session table)
//! lunchbox-cli migrate
//!
//! # Create a colleague account
//! lunchbox-cli colleague add --name "Jo" --password "ham-on-rye"
//!
//! # Create an admin account
//! lunchbox-cli colleague add --name "Sam" --admin
//!
//! # Seed the sandwich catalog from a YAML file
//! lunchbox-cli seed --file catalog.yaml
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `colleague add` - Create colleague accounts
//! - `seed` - Seed the sandwich catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lunchbox-cli")]
#[command(author, version, about = "Lunchbox CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage colleague accounts
    Colleague {
        #[command(subcommand)]
        action: ColleagueAction,
    },
    /// Seed the sandwich catalog
    Seed {
        /// Path to the YAML seed file
        #[arg(short, long)]
        file: String,
    },
}

#[derive(Subcommand)]
enum ColleagueAction {
    /// Create a new colleague account
    Add {
        /// Colleague's display name
        #[arg(short, long)]
        name: String,

        /// Password (falls back to `LUNCHBOX_COLLEAGUE_PASSWORD`)
        #[arg(short, long)]
        password: Option<String>,

        /// Grant admin access
        #[arg(long)]
        admin: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Colleague { action } => match action {
            ColleagueAction::Add {
                name,
                password,
                admin,
            } => {
                commands::colleague::add(&name, password.as_deref(), admin).await?;
            }
        },
        Commands::Seed { file } => commands::seed::catalog(&file).await?,
    }
    Ok(())
}
