//! Database connection management

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::PostgresConfig;

/// Logical schema of the account table.
///
/// `account_id` is text so that arbitrary path parameters can be compared
/// against it without a cast failure.
pub const ACCOUNTS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS accounts (
    customer_id TEXT NOT NULL,
    account_id  TEXT NOT NULL UNIQUE,
    balance     NUMERIC NOT NULL,
    currency    TEXT NOT NULL
)"#;

pub const ACCOUNTS_CUSTOMER_INDEX_DDL: &str =
    "CREATE INDEX IF NOT EXISTS idx_accounts_customer_id ON accounts (customer_id)";

/// PostgreSQL database connection pool
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "PostgreSQL connection pool established"
        );
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `accounts` table and its customer index if absent.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(ACCOUNTS_DDL).execute(&self.pool).await?;
        sqlx::query(ACCOUNTS_CUSTOMER_INDEX_DDL)
            .execute(&self.pool)
            .await?;
        tracing::info!("accounts schema ensured");
        Ok(())
    }
}
