//! lightbnb CLI - drive the LightBnB query gateway from a shell
//!
//! - `user show|add` - look up or register users
//! - `reservations` - completed stays for a guest
//! - `search` - filtered, rating-aware property listings
//! - `property add` - insert a listing from JSON
//!
//! Connection settings come from `--config` (TOML), then `DATABASE_URL` /
//! `PG*` variables (a `.env` file is honoured), then `--database-url`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{OutputFormat, Session};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query the LightBnB rental listings database"
)]
struct Cli {
    /// TOML file with connection settings
    #[arg(long, env = "LIGHTBNB_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Connection string, overrides the config file and PG* variables
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging (rendered SQL, row counts)
    #[arg(long, global = true)]
    debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or register users
    User(commands::user::UserArgs),
    /// List a guest's completed reservations, oldest first
    Reservations(commands::reservations::ReservationsArgs),
    /// Search reviewed properties, cheapest first
    Search(commands::search::SearchArgs),
    /// Create property listings
    Property(commands::property::PropertyArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    let session = Session {
        config_path: cli.config,
        database_url: cli.database_url,
        format: cli.format,
    };

    match cli.command {
        Commands::User(args) => commands::user::run(&session, args).await,
        Commands::Reservations(args) => commands::reservations::run(&session, args).await,
        Commands::Search(args) => commands::search::run(&session, args).await,
        Commands::Property(args) => commands::property::run(&session, args).await,
    }
}
