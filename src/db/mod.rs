use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{Game, QuizAttempt, QuizListing, ScoreRecord},
};

pub const GAMES: &str = "games";
pub const GAME_SCORES: &str = "game_scores";
pub const QUIZZES: &str = "quizzes";
pub const QUIZ_ATTEMPTS: &str = "quiz_attempts";

const APP_NAME: &str = "cyberfort-server";

/// Handle to the activity database. Each store gets a typed collection.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_conn_string).await?;
        apply_pool_settings(&mut client_options);

        let db = Self {
            client: Client::with_options(client_options)?,
            db_name: config.mongo_db_name.clone(),
        };
        db.health_check().await?;

        log::info!("Connected to MongoDB database '{}'", db.db_name);
        Ok(db)
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.client.database(&self.db_name).collection(name)
    }

    pub fn games(&self) -> Collection<Game> {
        self.collection(GAMES)
    }

    pub fn game_scores(&self) -> Collection<ScoreRecord> {
        self.collection(GAME_SCORES)
    }

    pub fn quizzes(&self) -> Collection<QuizListing> {
        self.collection(QUIZZES)
    }

    pub fn quiz_attempts(&self) -> Collection<QuizAttempt> {
        self.collection(QUIZ_ATTEMPTS)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

fn apply_pool_settings(options: &mut ClientOptions) {
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some(APP_NAME.to_string());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));
}
