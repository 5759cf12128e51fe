use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz::Difficulty;

/// Catalog entry for a published quiz. Only metadata is stored; the
/// question content is produced on demand.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct QuizListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub question_count: u32,
    pub time_estimate_minutes: u32,
    pub completion: u32,
    pub is_active: bool,
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl QuizListing {
    pub fn new(
        title: &str,
        difficulty: Difficulty,
        question_count: u32,
        time_estimate_minutes: u32,
    ) -> Self {
        QuizListing {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: String::new(),
            difficulty,
            question_count,
            time_estimate_minutes,
            completion: 0,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
