use async_graphql::{Context, Object, Result, ResultExt};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    errors::AppError,
    models::{
        domain::{Difficulty, GradingResult, Quiz, QuizAttempt, ScoreUpdate, UserAnswers},
        dto::request::{GenerateQuizRequest, SaveQuizAttemptRequest, SubmitGameScoreRequest},
    },
    services::AnswerGrader,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn generate_quiz(
        &self,
        ctx: &Context<'_>,
        topic: String,
        #[graphql(default)] difficulty: Difficulty,
        question_count: u32,
    ) -> Result<Quiz> {
        let state = ctx.data::<AppState>()?;

        let request = GenerateQuizRequest {
            topic,
            difficulty,
            number_of_questions: question_count,
        };
        request.validate().map_err(AppError::from).extend()?;

        Ok(state
            .quiz_generation_service
            .generate(
                &request.topic,
                request.difficulty,
                request.number_of_questions,
            )
            .await)
    }

    /// `answers[i]` is the option picked for question `i`; `null` skips it.
    async fn grade_quiz(&self, quiz: Quiz, answers: Vec<Option<i64>>) -> Result<GradingResult> {
        let answers = UserAnswers::from_ordered(answers);
        AnswerGrader::grade(&quiz, Some(&answers)).extend()
    }

    async fn record_game_score(
        &self,
        ctx: &Context<'_>,
        game_id: String,
        score: i64,
    ) -> Result<ScoreUpdate> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).extend()?;

        let request = SubmitGameScoreRequest { game_id, score };
        request.validate().map_err(AppError::from).extend()?;

        state
            .score_ledger
            .record_game_score(claims.user_id(), &request.game_id, request.score)
            .await
            .extend()
    }

    async fn save_quiz_attempt(
        &self,
        ctx: &Context<'_>,
        quiz_id: String,
        score: i64,
        passed: bool,
    ) -> Result<QuizAttempt> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).extend()?;

        let request = SaveQuizAttemptRequest {
            quiz_id,
            score,
            passed,
        };
        request.validate().map_err(AppError::from).extend()?;

        state
            .score_ledger
            .record_quiz_attempt(
                claims.user_id(),
                &request.quiz_id,
                request.score,
                request.passed,
            )
            .await
            .extend()
    }
}
