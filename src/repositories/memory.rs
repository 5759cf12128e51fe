//! Process-local stores backing `STORE_BACKEND=memory` and the test suites.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Game, QuizAttempt, QuizListing, ScoreRecord},
    repositories::{GameRepository, GameScoreRepository, QuizAttemptRepository, QuizRepository},
};

#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create(&self, game: Game) -> AppResult<Game> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.game_id) {
            return Err(AppError::InvalidInput(format!(
                "Game with id '{}' already exists",
                game.game_id
            )));
        }
        games.insert(game.game_id.clone(), game.clone());
        Ok(game)
    }

    async fn find_by_id(&self, game_id: &str) -> AppResult<Option<Game>> {
        let games = self.games.read().await;
        Ok(games.get(game_id).cloned())
    }

    async fn exists(&self, game_id: &str) -> AppResult<bool> {
        let games = self.games.read().await;
        Ok(games.contains_key(game_id))
    }

    async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<Game>> {
        let games = self.games.read().await;
        let mut items: Vec<_> = games
            .values()
            .filter(|g| is_active.map_or(true, |active| g.is_active == active))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }

    async fn delete(&self, game_id: &str) -> AppResult<()> {
        let mut games = self.games.write().await;
        games
            .remove(game_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Game with id '{}' not found", game_id)))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryGameScoreRepository {
    scores: Arc<RwLock<HashMap<(String, String), ScoreRecord>>>,
}

impl InMemoryGameScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameScoreRepository for InMemoryGameScoreRepository {
    async fn find(&self, user_id: &str, game_id: &str) -> AppResult<Option<ScoreRecord>> {
        let scores = self.scores.read().await;
        Ok(scores
            .get(&(user_id.to_string(), game_id.to_string()))
            .cloned())
    }

    async fn record_high_score(
        &self,
        user_id: &str,
        game_id: &str,
        score: i64,
        played_at: DateTime<Utc>,
    ) -> AppResult<(ScoreRecord, bool)> {
        // The write lock spans the compare and the store.
        let mut scores = self.scores.write().await;
        let key = (user_id.to_string(), game_id.to_string());

        let (record, is_new_high_score) = ScoreRecord::apply_submission(
            scores.get(&key).cloned(),
            user_id,
            game_id,
            score,
            played_at,
        );
        scores.insert(key, record.clone());

        Ok((record, is_new_high_score))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, QuizListing>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: QuizListing) -> AppResult<QuizListing> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::InvalidInput(format!(
                "Quiz with id '{}' already exists",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuizListing>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<QuizListing>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes
            .values()
            .filter(|q| is_active.map_or(true, |active| q.is_active == active))
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(items)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryQuizAttemptRepository {
    attempts: Arc<RwLock<Vec<QuizAttempt>>>,
}

impl InMemoryQuizAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn create(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        let mut attempts = self.attempts.write().await;
        attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        let attempts = self.attempts.read().await;
        // Stable sort over reverse insertion order keeps same-instant attempts newest first.
        let mut history: Vec<QuizAttempt> = attempts
            .iter()
            .rev()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.attempted_at.cmp(&a.attempted_at));
        Ok(history)
    }
}
