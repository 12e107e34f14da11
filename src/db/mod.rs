//! SQLite persistence for the content document and aspirations.
//!
//! SQLite is the source of truth. The content document is stored whole, as
//! JSON, in a single row; the revision counter in `meta` moves on every write.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::content::default_document;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    seed_content(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS meta (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            schema_version INTEGER NOT NULL DEFAULT 1,
            revision_id INTEGER NOT NULL DEFAULT 0,
            generated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        INSERT OR IGNORE INTO meta (id, schema_version, revision_id, generated_at)
        VALUES (1, 1, 0, datetime('now'));
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS content (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            document TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS aspirations (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            student_id TEXT NOT NULL,
            department TEXT NOT NULL,
            message TEXT NOT NULL,
            contact TEXT,
            attachment_name TEXT,
            submitted_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_aspirations_submitted_at ON aspirations(submitted_at);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Store the bundled default document if no content exists yet.
async fn seed_content(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let document = serde_json::to_string(&default_document())
        .map_err(|e| sqlx::Error::Protocol(format!("default document: {}", e)))?;

    let result = sqlx::query(
        "INSERT OR IGNORE INTO content (id, document, updated_at) VALUES (1, ?, datetime('now'))",
    )
    .bind(document)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        tracing::info!("Seeded content with the bundled default document");
    }
    Ok(())
}
