//! Database Layer
//!
//! SQLite storage for account links and imported profile data used by
//! commands outside the authorization core. Admin role tracking is never
//! persisted; it is rebuilt from guild snapshots on every start.

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Create the `SQLite` connection pool, creating the database file if needed.
pub async fn create_pool(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .with_context(|| format!("Unable to open SQLite database at {}", path.display()))?;

    info!(path = %path.display(), "Connected to SQLite");
    Ok(pool)
}

/// Run idempotent schema setup.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            token TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .context("Bad create on `users`")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS systems (
            id TEXT PRIMARY KEY,
            name TEXT,
            description TEXT,
            tag TEXT,
            avatar_url TEXT,
            tz TEXT,
            description_privacy TEXT,
            member_list_privacy TEXT,
            front_privacy TEXT,
            front_history_privacy TEXT
        )",
    )
    .execute(pool)
    .await
    .context("Bad create on `systems`")?;

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let dir = std::env::temp_dir().join(format!("rolewarden-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("schema.db");

        let pool = create_pool(&path).await.unwrap();
        run_migrations(&pool).await.unwrap();
        run_migrations(&pool).await.unwrap();

        sqlx::query("INSERT INTO users (id, token) VALUES ('u1', 'tok')")
            .execute(&pool)
            .await
            .unwrap();

        pool.close().await;
        let _ = std::fs::remove_dir_all(&dir);
    }
}
