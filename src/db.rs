use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Create a pool on the store file, creating the file when missing.
///
/// PRAGMAs are set on the connect options so every pooled connection gets
/// them: WAL journal, 5s busy timeout, synchronous=NORMAL and foreign keys.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Open the store and make sure the `users` table exists.
pub async fn init(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = create_pool(database_url, max_connections).await?;
    recipehub_db::ensure_schema(&pool).await?;

    tracing::info!(database_url, "Database initialized and users table ensured");

    Ok(pool)
}
