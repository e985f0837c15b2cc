use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

mod request_error;
pub mod requests;
mod score;

pub use request_error::*;
pub use score::{HighScoreEntry, Leaderboard, ScoreId, ScoreSubmission, SubmittedScore};

pub type DatabasePool = sqlx::SqlitePool;

/// Opens a connection pool for `database_url`, creating the database file if
/// it does not exist yet.
pub async fn connect(database_url: &str) -> sqlx::Result<DatabasePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Every in-memory sqlite connection is its own database: the pool must
    // hold exactly one connection and never recycle it, or all rows vanish.
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    pool.connect_with(options).await
}

/// Creates the `high_scores` table if this database has not seen it yet.
/// Scores are append-only: nothing in the application updates or deletes rows.
pub async fn init_schema(database: &DatabasePool) -> sqlx::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS high_scores ( \
            id INTEGER PRIMARY KEY AUTOINCREMENT, \
            player_name TEXT NOT NULL, \
            score INTEGER NOT NULL, \
            created_at TEXT NOT NULL \
        )",
    )
    .execute(database)
    .await?;

    Ok(())
}
