use serde::Serialize;

use crate::models::domain::{Game, Quiz, QuizAttempt, QuizListing, ScoreRecord, ScoreUpdate};

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub quiz: Quiz,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub message: String,
    pub game: Game,
}

#[derive(Debug, Serialize)]
pub struct GameListResponse {
    pub count: usize,
    pub games: Vec<Game>,
}

impl From<Vec<Game>> for GameListResponse {
    fn from(games: Vec<Game>) -> Self {
        Self {
            count: games.len(),
            games,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateQuizResponse {
    pub message: String,
    pub quiz: QuizListing,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: QuizListing,
}

#[derive(Debug, Serialize)]
pub struct QuizListResponse {
    pub count: usize,
    pub quizzes: Vec<QuizListing>,
}

impl From<Vec<QuizListing>> for QuizListResponse {
    fn from(quizzes: Vec<QuizListing>) -> Self {
        Self {
            count: quizzes.len(),
            quizzes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameScoreResponse {
    pub message: String,
    pub score: ScoreRecord,
    pub is_high_score: bool,
}

impl From<ScoreUpdate> for GameScoreResponse {
    fn from(update: ScoreUpdate) -> Self {
        Self {
            message: "Game score saved successfully".to_string(),
            score: update.record,
            is_high_score: update.is_new_high_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreLookupResponse {
    pub score: i64,
}

#[derive(Debug, Serialize)]
pub struct SaveAttemptResponse {
    pub success: bool,
    pub message: String,
    pub data: QuizAttempt,
}

#[derive(Debug, Serialize)]
pub struct AttemptHistoryResponse {
    pub count: usize,
    pub attempts: Vec<QuizAttempt>,
}

impl From<Vec<QuizAttempt>> for AttemptHistoryResponse {
    fn from(attempts: Vec<QuizAttempt>) -> Self {
        Self {
            count: attempts.len(),
            attempts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
