use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{timestamp, ScoreRecord},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameScoreRepository: Send + Sync {
    async fn find(&self, user_id: &str, game_id: &str) -> AppResult<Option<ScoreRecord>>;

    /// Atomically raises the stored score to `score` if it is higher and
    /// stamps `played_at`, creating the record when none exists.
    ///
    /// Returns the resulting record and whether `score` became the new high score.
    async fn record_high_score(
        &self,
        user_id: &str,
        game_id: &str,
        score: i64,
        played_at: DateTime<Utc>,
    ) -> AppResult<(ScoreRecord, bool)>;
}

pub struct MongoGameScoreRepository {
    collection: Collection<ScoreRecord>,
}

impl MongoGameScoreRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.game_scores();
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for game_scores collection");

        let user_game_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "game_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_game_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_game_index).await?;

        log::info!("Successfully created indexes for game_scores collection");
        Ok(())
    }
}

#[async_trait]
impl GameScoreRepository for MongoGameScoreRepository {
    async fn find(&self, user_id: &str, game_id: &str) -> AppResult<Option<ScoreRecord>> {
        let record = self
            .collection
            .find_one(doc! { "user_id": user_id, "game_id": game_id })
            .await?;
        Ok(record)
    }

    async fn record_high_score(
        &self,
        user_id: &str,
        game_id: &str,
        score: i64,
        played_at: DateTime<Utc>,
    ) -> AppResult<(ScoreRecord, bool)> {
        // $max ignores a missing field, so the upsert path stores `score` as is.
        let update = vec![doc! {
            "$set": {
                "user_id": user_id,
                "game_id": game_id,
                "score": { "$max": ["$score", score] },
                "last_played_at": timestamp::format(&played_at),
            }
        }];

        let previous = self
            .collection
            .find_one_and_update(doc! { "user_id": user_id, "game_id": game_id }, update)
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .await?;

        Ok(ScoreRecord::apply_submission(
            previous, user_id, game_id, score, played_at,
        ))
    }
}
