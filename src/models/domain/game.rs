use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Game {
    pub game_id: String,
    pub title: String,
    pub description: String,
    pub difficulty_level: String,
    pub category: String,
    pub points_possible: i64,
    pub game_url: String,
    pub game_thumbnail: Option<String>,
    pub is_active: bool,
    #[serde(with = "crate::models::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn new(title: &str, difficulty_level: &str, category: &str, points_possible: i64) -> Self {
        Game {
            game_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: String::new(),
            difficulty_level: difficulty_level.to_string(),
            category: category.to_string(),
            points_possible,
            game_url: String::new(),
            game_thumbnail: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
