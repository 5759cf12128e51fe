use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted quiz result. Attempts form an append-only history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    pub score: i64,
    pub passed: bool,
    #[serde(with = "crate::models::domain::timestamp")]
    pub attempted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(user_id: &str, quiz_id: &str, score: i64, passed: bool) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            score,
            passed,
            attempted_at: Utc::now(),
        }
    }
}
