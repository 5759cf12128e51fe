use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuizListing, dto::request::CreateQuizListingRequest},
    repositories::QuizRepository,
};

/// Published quiz catalog.
pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizListing> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz)
    }

    pub async fn create_quiz(&self, request: CreateQuizListingRequest) -> AppResult<QuizListing> {
        request.validate()?;

        let mut quiz = QuizListing::new(
            request.title.trim(),
            request.difficulty,
            request.question_count,
            request.time_estimate_minutes,
        );
        quiz.description = request.description;
        quiz.completion = request.completion;

        let quiz = self.repository.create(quiz).await?;
        log::info!("Created quiz listing '{}' ({})", quiz.title, quiz.id);
        Ok(quiz)
    }

    pub async fn list_quizzes(&self, is_active: Option<bool>) -> AppResult<Vec<QuizListing>> {
        self.repository.list(is_active).await
    }
}
