use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizAttempt, ScoreUpdate},
    repositories::{GameRepository, GameScoreRepository, QuizAttemptRepository},
};

/// Keeps per-user game high scores and the quiz attempt history.
pub struct ScoreLedger {
    games: Arc<dyn GameRepository>,
    scores: Arc<dyn GameScoreRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl ScoreLedger {
    pub fn new(
        games: Arc<dyn GameRepository>,
        scores: Arc<dyn GameScoreRepository>,
        attempts: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self {
            games,
            scores,
            attempts,
        }
    }

    /// Records a game result. The stored score only ever rises; a lower or
    /// equal submission just refreshes `last_played_at`.
    pub async fn record_game_score(
        &self,
        user_id: &str,
        game_id: &str,
        submitted_score: i64,
    ) -> AppResult<ScoreUpdate> {
        if !self.games.exists(game_id).await? {
            return Err(AppError::NotFound(format!(
                "Game with id '{}' not found",
                game_id
            )));
        }

        let (record, is_new_high_score) = self
            .scores
            .record_high_score(user_id, game_id, submitted_score, Utc::now())
            .await?;

        if is_new_high_score {
            log::info!(
                "New high score {} for user {} on game {}",
                record.score,
                user_id,
                game_id
            );
        }

        Ok(ScoreUpdate {
            record,
            is_new_high_score,
        })
    }

    /// Stored high score, or 0 if the user never played the game.
    pub async fn game_score(&self, user_id: &str, game_id: &str) -> AppResult<i64> {
        let record = self.scores.find(user_id, game_id).await?;
        Ok(record.map(|r| r.score).unwrap_or(0))
    }

    pub async fn record_quiz_attempt(
        &self,
        user_id: &str,
        quiz_id: &str,
        score: i64,
        passed: bool,
    ) -> AppResult<QuizAttempt> {
        if quiz_id.trim().is_empty() {
            return Err(AppError::InvalidInput("Quiz id is required".to_string()));
        }

        let attempt = self
            .attempts
            .create(QuizAttempt::new(user_id, quiz_id, score, passed))
            .await?;

        log::debug!("Saved quiz attempt {} for user {}", attempt.id, user_id);
        Ok(attempt)
    }

    /// Attempts by `user_id`, newest first.
    pub async fn attempt_history(&self, user_id: &str) -> AppResult<Vec<QuizAttempt>> {
        self.attempts.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Game;
    use crate::repositories::{
        game_repository::MockGameRepository, game_score_repository::MockGameScoreRepository,
        quiz_attempt_repository::MockQuizAttemptRepository, InMemoryGameRepository,
        InMemoryGameScoreRepository, InMemoryQuizAttemptRepository,
    };

    async fn ledger_with_game() -> (ScoreLedger, String) {
        let games = InMemoryGameRepository::new();
        let game = games
            .create(Game::new("Port Scanner", "easy", "networking", 100))
            .await
            .unwrap();

        let ledger = ScoreLedger::new(
            Arc::new(games),
            Arc::new(InMemoryGameScoreRepository::new()),
            Arc::new(InMemoryQuizAttemptRepository::new()),
        );
        (ledger, game.game_id)
    }

    #[tokio::test]
    async fn stored_score_never_decreases() {
        let (ledger, game_id) = ledger_with_game().await;
        let mut stored = Vec::new();
        let mut flags = Vec::new();

        for score in [50, 30, 80, 80, 10] {
            let update = ledger
                .record_game_score("user-1", &game_id, score)
                .await
                .unwrap();
            stored.push(update.record.score);
            flags.push(update.is_new_high_score);
        }

        assert_eq!(stored, vec![50, 50, 80, 80, 80]);
        assert_eq!(flags, vec![true, false, true, false, false]);
        assert_eq!(ledger.game_score("user-1", &game_id).await.unwrap(), 80);
    }

    #[tokio::test]
    async fn scores_are_tracked_per_user() {
        let (ledger, game_id) = ledger_with_game().await;

        ledger.record_game_score("alice", &game_id, 90).await.unwrap();
        let update = ledger.record_game_score("bob", &game_id, 20).await.unwrap();

        assert!(update.is_new_high_score);
        assert_eq!(ledger.game_score("alice", &game_id).await.unwrap(), 90);
        assert_eq!(ledger.game_score("bob", &game_id).await.unwrap(), 20);
    }

    #[tokio::test]
    async fn unknown_game_is_not_found_and_store_is_untouched() {
        let mut games = MockGameRepository::new();
        games.expect_exists().times(1).returning(|_| Ok(false));
        let mut scores = MockGameScoreRepository::new();
        scores.expect_record_high_score().never();
        let ledger = ScoreLedger::new(
            Arc::new(games),
            Arc::new(scores),
            Arc::new(MockQuizAttemptRepository::new()),
        );

        let result = ledger.record_game_score("user-1", "missing", 10).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn unplayed_game_scores_zero() {
        let (ledger, game_id) = ledger_with_game().await;

        assert_eq!(ledger.game_score("user-1", &game_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn quiz_attempts_append_without_merging() {
        let (ledger, _) = ledger_with_game().await;

        ledger
            .record_quiz_attempt("user-1", "quiz-1", 40, false)
            .await
            .unwrap();
        ledger
            .record_quiz_attempt("user-1", "quiz-1", 90, true)
            .await
            .unwrap();
        ledger
            .record_quiz_attempt("user-2", "quiz-1", 75, true)
            .await
            .unwrap();

        let history = ledger.attempt_history("user-1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].score, 90);
        assert_eq!(history[1].score, 40);
    }

    #[tokio::test]
    async fn blank_quiz_id_is_invalid_input() {
        let mut attempts = MockQuizAttemptRepository::new();
        attempts.expect_create().never();
        let ledger = ScoreLedger::new(
            Arc::new(MockGameRepository::new()),
            Arc::new(MockGameScoreRepository::new()),
            Arc::new(attempts),
        );

        let result = ledger.record_quiz_attempt("user-1", "  ", 50, false).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
