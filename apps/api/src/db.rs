use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS job_experience (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        job_title TEXT NOT NULL,
        company TEXT NOT NULL,
        responsibilities TEXT NOT NULL,
        skills TEXT DEFAULT ''
    )
"#;

/// Opens (or creates) the SQLite database at `path` and ensures the schema exists.
///
/// `":memory:"` gives a private in-memory database held by a single connection.
pub async fn create_pool(path: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {path}...");

    let pool = if path == ":memory:" {
        // Every in-memory connection is its own database, so keep exactly one alive.
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
            .await?
    } else {
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create database directory {}", parent.display()))?;
        }
        let opts = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .context("failed to open SQLite database")?
    };

    sqlx::query(SCHEMA)
        .execute(&pool)
        .await
        .context("failed to create job_experience table")?;

    info!("SQLite database ready");
    Ok(pool)
}
