// Migration Runner

use crate::error::map_sqlx_error;
use orderflow_core::error::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Ordered migrations: (version, description, sql)
const MIGRATIONS: &[(i64, &str, &str)] = &[
    (
        1,
        "Initial schema",
        include_str!("../migrations/001_initial_schema.sql"),
    ),
    (
        2,
        "Newest-first listing index",
        include_str!("../migrations/002_orders_created_at_index.sql"),
    ),
];

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Running database migrations...");

    // Check if schema_version table exists
    let table_exists: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
    )
    .fetch_one(pool)
    .await
    .map_err(map_sqlx_error)?;

    let current_version: i64 = if table_exists > 0 {
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(map_sqlx_error)?
            .unwrap_or(0)
    } else {
        0
    };

    info!("Current schema version: {}", current_version);

    for (version, description, sql) in MIGRATIONS {
        if current_version < *version {
            info!("Applying migration {:03}: {}", version, description);
            apply_migration(pool, sql).await?;
        }
    }

    info!("All migrations applied successfully");
    Ok(())
}

/// Apply a single migration SQL file
async fn apply_migration(pool: &SqlitePool, sql: &str) -> Result<()> {
    // Execute migration in a transaction
    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    for statement in split_statements(sql) {
        sqlx::query(&statement)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
    }

    tx.commit().await.map_err(map_sqlx_error)?;
    Ok(())
}

/// Drop `--` comment lines, then split on `;`.
///
/// Comments go first so a `;` inside one cannot cut a statement.
fn split_statements(sql: &str) -> Vec<String> {
    let without_comments = sql
        .lines()
        .filter(|line| !line.trim_start().starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n");

    without_comments
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_pool;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_run_migrations() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        assert_ok!(run_migrations(&pool).await);

        // Check that tables exist
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        let version: i64 = sqlx::query_scalar("SELECT MAX(version) FROM schema_version")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(version, 2);
    }

    #[tokio::test]
    async fn test_run_migrations_twice_is_noop() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schema_version")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 2);
    }

    #[test]
    fn test_split_ignores_semicolons_in_comments() {
        let sql = "-- first; still a comment\nCREATE TABLE a (x INTEGER);\n  -- b; c\nCREATE TABLE b (y TEXT);\n";

        assert_eq!(
            split_statements(sql),
            vec!["CREATE TABLE a (x INTEGER)", "CREATE TABLE b (y TEXT)"]
        );
    }

    #[tokio::test]
    async fn test_apply_migration_with_semicolon_in_comment() {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let sql = r#"
-- notes; value is decimal text
CREATE TABLE notes (
    id INTEGER PRIMARY KEY,
    -- body; free text
    body TEXT NOT NULL
);

INSERT INTO notes (body) VALUES ('kept');
"#;

        assert_ok!(apply_migration(&pool, sql).await);

        let body: String = sqlx::query_scalar("SELECT body FROM notes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(body, "kept");
    }
}
