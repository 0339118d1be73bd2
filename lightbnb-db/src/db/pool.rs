//! Database connection pool management
//!
//! Uses sqlx PgPool sized by [`DbConfig`]. The pool is created once by the
//! caller and handed to [`QueryGateway`](crate::QueryGateway).

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::DbConfig;
use crate::error::DbError;

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
}

/// Create a PostgreSQL connection pool and open its first connection.
///
/// # Errors
///
/// `DbError::Config` for unusable settings, `DbError::Transport` if the
/// server cannot be reached.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    let options = config.connect_options()?;
    let pool = pool_options(config).connect_with(options).await?;
    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Create a pool that connects on first use.
pub fn create_lazy_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    let options = config.connect_options()?;
    Ok(pool_options(config).connect_lazy_with(options))
}
