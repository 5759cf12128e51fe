use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::{Config, StoreBackend},
    db::Database,
    errors::AppResult,
    repositories::{
        GameRepository, GameScoreRepository, InMemoryGameRepository, InMemoryGameScoreRepository,
        InMemoryQuizAttemptRepository, InMemoryQuizRepository, MongoGameRepository,
        MongoGameScoreRepository, MongoQuizAttemptRepository, MongoQuizRepository,
        QuizAttemptRepository, QuizRepository,
    },
    services::{
        GameService, OfflineModelService, OpenAiModelService, QuizGenerationService, QuizService,
        ScoreLedger, TextCompletion,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService>,
    pub quiz_service: Arc<QuizService>,
    pub quiz_generation_service: Arc<QuizGenerationService>,
    pub score_ledger: Arc<ScoreLedger>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
    database: Option<Database>,
}

struct Stores {
    games: Arc<dyn GameRepository>,
    scores: Arc<dyn GameScoreRepository>,
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let completion = completion_service(&config);

        match config.store_backend {
            StoreBackend::Mongo => Self::with_mongo(config, completion).await,
            StoreBackend::Memory => {
                log::warn!("Using the in-memory store; all data is lost on shutdown");
                Ok(Self::in_memory(config, completion))
            }
        }
    }

    async fn with_mongo(config: Config, completion: Arc<dyn TextCompletion>) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let games = Arc::new(MongoGameRepository::new(&db));
        games.ensure_indexes().await?;
        let scores = Arc::new(MongoGameScoreRepository::new(&db));
        scores.ensure_indexes().await?;
        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;
        let attempts = Arc::new(MongoQuizAttemptRepository::new(&db));
        attempts.ensure_indexes().await?;

        let stores = Stores {
            games,
            scores,
            quizzes,
            attempts,
        };
        Ok(Self::assemble(config, completion, stores, Some(db)))
    }

    /// State backed by process-local stores, with the given completion service.
    pub fn in_memory(config: Config, completion: Arc<dyn TextCompletion>) -> Self {
        let stores = Stores {
            games: Arc::new(InMemoryGameRepository::new()),
            scores: Arc::new(InMemoryGameScoreRepository::new()),
            quizzes: Arc::new(InMemoryQuizRepository::new()),
            attempts: Arc::new(InMemoryQuizAttemptRepository::new()),
        };
        Self::assemble(config, completion, stores, None)
    }

    fn assemble(
        config: Config,
        completion: Arc<dyn TextCompletion>,
        stores: Stores,
        database: Option<Database>,
    ) -> Self {
        Self {
            game_service: Arc::new(GameService::new(stores.games.clone())),
            quiz_service: Arc::new(QuizService::new(stores.quizzes)),
            quiz_generation_service: Arc::new(QuizGenerationService::new(completion)),
            score_ledger: Arc::new(ScoreLedger::new(
                stores.games,
                stores.scores,
                stores.attempts,
            )),
            jwt_service: Arc::new(JwtService::new(&config.jwt_secret)),
            config: Arc::new(config),
            database,
        }
    }

    /// Succeeds when the backing store can serve requests.
    pub async fn readiness(&self) -> AppResult<()> {
        match &self.database {
            Some(db) => db.health_check().await,
            None => Ok(()),
        }
    }
}

fn completion_service(config: &Config) -> Arc<dyn TextCompletion> {
    match &config.openai_api_key {
        Some(api_key) => {
            log::info!(
                "Quiz generation uses model '{}' at {}",
                config.openai_model,
                config.openai_base_url
            );
            Arc::new(OpenAiModelService::new(
                api_key,
                &config.openai_base_url,
                &config.openai_model,
                config.completion_timeout(),
            ))
        }
        None => {
            log::warn!("OPENAI_API_KEY is not set; every quiz will be synthesized");
            Arc::new(OfflineModelService)
        }
    }
}
