use chrono::{SecondsFormat, Utc};
use rocket::serde::json::{serde_json, Json};
use rocket::*;
use sqlx::Row;

use super::score::LEADERBOARD_SIZE;
use super::*;

/// Serves the current top of the leaderboard.
/// Returns at most 10 records, highest score first; equal scores keep
/// submission order (earliest `created_at`, then lowest id).
#[get("/highscores")]
pub async fn get_highscores(database: &State<DatabasePool>) -> RequestResult<Json<Leaderboard>> {
    let rows = sqlx::query(
        "SELECT player_name, score, created_at FROM high_scores \
         ORDER BY score DESC, created_at ASC, id ASC LIMIT ?",
    )
    .bind(LEADERBOARD_SIZE)
    .fetch_all(database.inner())
    .await?;

    let highscores = rows
        .into_iter()
        .map(|row| {
            Ok(HighScoreEntry {
                player: row.try_get("player_name")?,
                score: row.try_get("score")?,
                date: row.try_get("created_at")?,
            })
        })
        .collect::<Result<_, sqlx::Error>>()?;

    Ok(Json(Leaderboard { highscores }))
}

/// Validates and persists one score submission.
/// Returns the stored record's id, name, and score. A body that does not
/// parse as JSON, or a score that is not a non-negative integer, fails with
/// 400 and stores nothing.
#[post("/highscores", data = "<payload>")]
pub async fn add_highscore(
    payload: String,
    database: &State<DatabasePool>,
) -> RequestResult<Json<SubmittedScore>> {
    let submission: ScoreSubmission =
        serde_json::from_str(&payload).map_err(|_| RequestError::InvalidPayload)?;

    let player = submission.player_name();
    let score = submission.score()?;
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    // Insert score
    let result =
        sqlx::query("INSERT INTO high_scores (player_name, score, created_at) VALUES (?, ?, ?)")
            .bind(&player)
            .bind(score)
            .bind(&created_at)
            .execute(database.inner())
            .await?;

    Ok(Json(SubmittedScore {
        id: result.last_insert_rowid(),
        player,
        score,
    }))
}

// Rocket answers 404 for methods with no route; the write path promises 400.

#[put("/highscores")]
pub fn put_highscore() -> RequestError {
    RequestError::PostRequired
}

#[delete("/highscores")]
pub fn delete_highscore() -> RequestError {
    RequestError::PostRequired
}

#[patch("/highscores")]
pub fn patch_highscore() -> RequestError {
    RequestError::PostRequired
}
