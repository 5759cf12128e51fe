use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizListing};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: QuizListing) -> AppResult<QuizListing>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizListing>>;
    async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<QuizListing>>;
}

pub struct MongoQuizRepository {
    collection: Collection<QuizListing>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.quizzes();
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: QuizListing) -> AppResult<QuizListing> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizListing>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<QuizListing>> {
        let filter = match is_active {
            Some(active) => doc! { "is_active": active },
            None => doc! {},
        };

        let quizzes = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }
}
