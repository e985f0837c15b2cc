use rocket::serde::json::Value;
use rocket::serde::{Deserialize, Serialize};

use super::RequestError;

pub type ScoreId = i64;

/// Scores are non-negative; sqlite stores them as i64, which u32 fits into
/// losslessly.
pub type PlayerScore = u32;

pub const MAX_PLAYER_NAME_LEN: usize = 32;
pub const DEFAULT_PLAYER_NAME: &str = "Anon";

/// How many records the leaderboard query returns at most.
pub const LEADERBOARD_SIZE: i64 = 10;

/// One leaderboard row as served to clients.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct HighScoreEntry {
    pub player: String,
    pub score: PlayerScore,
    pub date: String,
}

/// Envelope for the leaderboard query response.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Leaderboard {
    pub highscores: Vec<HighScoreEntry>,
}

/// Response to a successful score submission.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct SubmittedScore {
    pub id: ScoreId,
    pub player: String,
    pub score: PlayerScore,
}

/// Raw submission payload. Both fields are optional; absent fields fall back
/// to defaults, and `score` accepts either a number or a numeric string.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreSubmission {
    pub player: Option<String>,
    pub score: Option<Value>,
}

impl ScoreSubmission {
    /// The name to store: `"Anon"` when absent, truncated to the first
    /// 32 characters regardless of source length.
    pub fn player_name(&self) -> String {
        self.player
            .as_deref()
            .unwrap_or(DEFAULT_PLAYER_NAME)
            .chars()
            .take(MAX_PLAYER_NAME_LEN)
            .collect()
    }

    /// The score to store: 0 when absent. Anything that is not a
    /// non-negative integer (or a string parsing as one) is a client error.
    pub fn score(&self) -> Result<PlayerScore, RequestError> {
        match &self.score {
            None => Ok(0),
            Some(Value::Number(number)) => number
                .as_u64()
                .and_then(|n| PlayerScore::try_from(n).ok())
                .ok_or(RequestError::InvalidScore),
            Some(Value::String(text)) => text
                .trim()
                .parse::<PlayerScore>()
                .map_err(|_| RequestError::InvalidScore),
            Some(_) => Err(RequestError::InvalidScore),
        }
    }
}
