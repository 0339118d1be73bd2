//! `lightbnb property` - create listings from JSON

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{NewProperty, Property};

use super::Session;

#[derive(Parser, Debug)]
pub struct PropertyArgs {
    #[command(subcommand)]
    pub command: PropertyCommands,
}

#[derive(Subcommand, Debug)]
pub enum PropertyCommands {
    /// Insert a property described by a JSON object with all 14 columns
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// JSON file with the property (use '-' for stdin)
    #[arg(long, short)]
    pub file: PathBuf,
}

pub async fn run(session: &Session, args: PropertyArgs) -> Result<()> {
    match args.command {
        PropertyCommands::Add(args) => run_add(session, args).await,
    }
}

async fn run_add(session: &Session, args: AddArgs) -> Result<()> {
    let new = read_new_property(&args.file)?;

    let gateway = session.gateway().await?;
    let property = gateway
        .add_property(&new)
        .await
        .context("Failed to add property")?;

    session.emit(&property, print_property)
}

fn read_new_property(path: &Path) -> Result<NewProperty> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read property from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid property JSON in {}", path.display()))
}

fn print_property(property: &Property) {
    println!(
        "Created property #{} \"{}\" in {} ({}/night)",
        property.id, property.title, property.city, property.cost_per_night
    );
}
