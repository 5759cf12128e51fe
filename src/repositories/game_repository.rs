use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Game,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create(&self, game: Game) -> AppResult<Game>;
    async fn find_by_id(&self, game_id: &str) -> AppResult<Option<Game>>;
    async fn exists(&self, game_id: &str) -> AppResult<bool>;
    async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<Game>>;
    async fn delete(&self, game_id: &str) -> AppResult<()>;
}

pub struct MongoGameRepository {
    collection: Collection<Game>,
}

impl MongoGameRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.games();
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for games collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "game_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("game_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for games collection");
        Ok(())
    }
}

#[async_trait]
impl GameRepository for MongoGameRepository {
    async fn create(&self, game: Game) -> AppResult<Game> {
        self.collection.insert_one(&game).await?;
        Ok(game)
    }

    async fn find_by_id(&self, game_id: &str) -> AppResult<Option<Game>> {
        let game = self
            .collection
            .find_one(doc! { "game_id": game_id })
            .await?;
        Ok(game)
    }

    async fn exists(&self, game_id: &str) -> AppResult<bool> {
        let game = self
            .collection
            .find_one(doc! { "game_id": game_id })
            .await?;
        Ok(game.is_some())
    }

    async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<Game>> {
        let filter = match is_active {
            Some(active) => doc! { "is_active": active },
            None => doc! {},
        };

        let games = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(games)
    }

    async fn delete(&self, game_id: &str) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "game_id": game_id })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Game with id '{}' not found",
                game_id
            )));
        }

        Ok(())
    }
}
