use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best score a user has reached on a game. The stored score never decreases.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct ScoreRecord {
    pub user_id: String,
    pub game_id: String,
    pub score: i64,
    #[serde(with = "crate::models::domain::timestamp")]
    pub last_played_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(user_id: &str, game_id: &str, score: i64, played_at: DateTime<Utc>) -> Self {
        ScoreRecord {
            user_id: user_id.to_string(),
            game_id: game_id.to_string(),
            score,
            last_played_at: played_at,
        }
    }

    /// Applies a submission to the record held before it.
    ///
    /// Returns the resulting record and whether the submission set a new high
    /// score. Stores that update atomically use this on the pre-image they read.
    pub fn apply_submission(
        previous: Option<ScoreRecord>,
        user_id: &str,
        game_id: &str,
        submitted: i64,
        played_at: DateTime<Utc>,
    ) -> (ScoreRecord, bool) {
        match previous {
            None => (ScoreRecord::new(user_id, game_id, submitted, played_at), true),
            Some(mut record) => {
                let is_new_high_score = submitted > record.score;
                if is_new_high_score {
                    record.score = submitted;
                }
                record.last_played_at = played_at;
                (record, is_new_high_score)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
pub struct ScoreUpdate {
    pub record: ScoreRecord,
    pub is_new_high_score: bool,
}
