//! Connection settings for the LightBnB store
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file,
//! then the standard libpq environment variables.

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

use crate::error::{DbError, DbResult};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DATABASE: &str = "lightbnb";

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Full connection string; when set, the discrete fields are ignored.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            user: None,
            password: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DbConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> DbResult<Self> {
        Self::default().with_env()
    }

    /// Load a TOML file. Missing keys keep their defaults.
    ///
    /// ```toml
    /// host = "db.internal"
    /// database = "lightbnb"
    /// user = "vagrant"
    /// max_connections = 10
    /// ```
    pub fn from_file(path: &Path) -> DbResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DbError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            DbError::config(format!("invalid TOML in {}: {}", path.display(), e))
        })
    }

    /// Apply `DATABASE_URL`, `PGHOST`, `PGPORT`, `PGDATABASE`, `PGUSER`,
    /// `PGPASSWORD` and `LIGHTBNB_MAX_CONNECTIONS` on top of `self`.
    pub fn with_env(self) -> DbResult<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> DbResult<Self> {
        if let Some(url) = lookup("DATABASE_URL") {
            self.url = Some(url);
        }
        if let Some(host) = lookup("PGHOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PGPORT") {
            self.port = parse_var("PGPORT", &port)?;
        }
        if let Some(database) = lookup("PGDATABASE") {
            self.database = database;
        }
        if let Some(user) = lookup("PGUSER") {
            self.user = Some(user);
        }
        if let Some(password) = lookup("PGPASSWORD") {
            self.password = Some(password);
        }
        if let Some(max) = lookup("LIGHTBNB_MAX_CONNECTIONS") {
            self.max_connections = parse_var("LIGHTBNB_MAX_CONNECTIONS", &max)?;
        }
        Ok(self)
    }

    /// Build sqlx connect options from either the URL or the discrete fields.
    pub fn connect_options(&self) -> DbResult<PgConnectOptions> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return PgConnectOptions::from_str(url)
                .map_err(|e| DbError::config(format!("invalid database url: {}", e)));
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database);
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> DbResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| DbError::config(format!("{} has invalid value '{}': {}", key, value, e)))
}
