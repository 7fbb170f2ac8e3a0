//! Persistence Layer
//!
//! Candidate and score-snapshot storage. SQLite via sqlx for durable
//! storage, plus an in-memory store for tests and dry runs.
//!
//! # Database Schema
//!
//! ## anr_candidates
//! - id: Integer primary key
//! - artist_slug: Unique artist identifier
//! - display_name: Human-readable name
//! - created_at: Timestamp
//!
//! ## anr_scores
//! - id: Integer primary key
//! - candidate_id: Foreign key to anr_candidates
//! - snapshot_date: Date the snapshot describes
//! - one REAL column per dimension, plus composite_score
//! - metadata_json: model version, weights, explanation, provider availability
//! - created_at: Timestamp
//!
//! Score rows are only ever inserted.

pub mod memory_store;
pub mod models;
pub mod sqlite_store;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

pub use memory_store::InMemoryCandidateStore;
pub use sqlite_store::SqliteCandidateStore;

/// Database connection pool
pub type DbPool = SqlitePool;

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Database initialization error
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Initialize the database connection pool and run migrations
///
/// `database_url` is a SQLite URL such as `sqlite://data/anr.db` or
/// `sqlite::memory:`. In-memory databases get a single long-lived connection so
/// every query sees the same database.
pub async fn init_database(database_url: &str) -> Result<DbPool, DatabaseError> {
    info!(database_url = %database_url, "Initializing database");

    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        if let Some(parent) = Path::new(db_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::ConnectionError(sqlx::Error::Configuration(Box::new(e)))
            })?;
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await?;

    run_migrations(&pool).await?;

    info!("Database initialized");

    Ok(pool)
}

/// Create tables and indexes if they do not exist
pub async fn run_migrations(pool: &DbPool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS anr_candidates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            artist_slug TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| {
        DatabaseError::MigrationError(format!("Failed to create anr_candidates table: {}", e))
    })?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS anr_scores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            candidate_id INTEGER NOT NULL,
            snapshot_date DATE NOT NULL,
            breakout_score REAL NOT NULL,
            momentum_score REAL NOT NULL,
            scene_alignment_score REAL NOT NULL,
            creative_uniqueness_score REAL NOT NULL,
            campaign_efficiency_score REAL NOT NULL,
            engagement_quality_score REAL NOT NULL,
            risk_score REAL NOT NULL,
            composite_score REAL NOT NULL,
            metadata_json TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (candidate_id) REFERENCES anr_candidates(id)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create anr_scores table: {}", e)))?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_anr_scores_candidate_date ON anr_scores(candidate_id, snapshot_date)",
    )
    .execute(pool)
    .await
    .map_err(|e| DatabaseError::MigrationError(format!("Failed to create index: {}", e)))?;

    info!("Database migrations completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_init() {
        let pool = init_database("sqlite::memory:").await;
        assert!(pool.is_ok());
    }

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let pool = init_database("sqlite::memory:").await.unwrap();

        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('anr_candidates', 'anr_scores')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(result.0, 2);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = init_database("sqlite::memory:").await.unwrap();
        assert!(run_migrations(&pool).await.is_ok());
    }
}
