// SQLite Connection Pool Setup

use crate::error::map_sqlx_error;
use orderflow_core::error::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Create SQLite connection pool with WAL mode and optimizations
///
/// An in-memory database lives inside a single connection, so such pools are
/// capped at one connection that is never recycled.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::Config(format!("Invalid database url {}: {}", database_url, e)))?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let in_memory = database_url.contains(":memory:");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(10)
    };

    debug!(database_url, in_memory, "Opening SQLite pool");

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(map_sqlx_error)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_create_pool() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        assert_ok!(pool.acquire().await);
    }

    #[tokio::test]
    async fn test_create_pool_rejects_bad_url() {
        let err = create_pool("sqlite://orders.db?no_such_option=1").await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
