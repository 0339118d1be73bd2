//! Subcommand implementations
//!
//! Every command resolves its input first and only then connects, so
//! argument and file errors never wait on the database. Connection settings
//! are resolved on connect; commands that never connect never read them.

pub mod property;
pub mod reservations;
pub mod search;
pub mod user;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use lightbnb_db::{DbConfig, QueryGateway};
use serde::Serialize;
use tracing::debug;

// ============================================================================
// Output Format (shared)
// ============================================================================

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (for piping to jq)
    Json,
}

/// Settings shared by all subcommands
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// TOML file with connection settings
    pub config_path: Option<PathBuf>,
    /// Connection string overriding the file and PG* variables
    pub database_url: Option<String>,
    pub format: OutputFormat,
}

impl Session {
    /// Defaults, then `--config`, then the environment, then `--database-url`.
    pub fn db_config(&self) -> Result<DbConfig> {
        let base = match &self.config_path {
            Some(path) => DbConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DbConfig::default(),
        };

        let mut config = base
            .with_env()
            .context("Invalid database settings in environment")?;
        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }
        Ok(config)
    }

    pub async fn gateway(&self) -> Result<QueryGateway> {
        let config = self.db_config()?;
        match &config.url {
            Some(_) => debug!("connecting with database url"),
            None => debug!(
                host = %config.host,
                port = config.port,
                database = %config.database,
                "connecting"
            ),
        }

        QueryGateway::connect(&config)
            .await
            .context("Failed to connect to the LightBnB database")
    }

    /// Print `value` as JSON, or hand it to `human` for text output.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
                println!("{}", json);
            }
            OutputFormat::Human => human(value),
        }
        Ok(())
    }
}

fn format_rating(rating: Option<f64>) -> String {
    rating
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "-".to_string())
}
