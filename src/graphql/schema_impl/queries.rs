use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::{
    app_state::AppState,
    auth::extract_claims_from_context,
    models::domain::{Game, QuizAttempt, QuizListing},
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn games(&self, ctx: &Context<'_>, is_active: Option<bool>) -> Result<Vec<Game>> {
        let state = ctx.data::<AppState>()?;
        state.game_service.list_games(is_active).await.extend()
    }

    async fn quizzes(
        &self,
        ctx: &Context<'_>,
        is_active: Option<bool>,
    ) -> Result<Vec<QuizListing>> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.list_quizzes(is_active).await.extend()
    }

    async fn quiz(&self, ctx: &Context<'_>, id: ID) -> Result<QuizListing> {
        let state = ctx.data::<AppState>()?;
        state.quiz_service.get_quiz(&id).await.extend()
    }

    /// High score of the caller on a game; 0 when never played.
    async fn game_score(&self, ctx: &Context<'_>, game_id: String) -> Result<i64> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).extend()?;

        state
            .score_ledger
            .game_score(claims.user_id(), &game_id)
            .await
            .extend()
    }

    async fn attempt_history(&self, ctx: &Context<'_>) -> Result<Vec<QuizAttempt>> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx).extend()?;

        state
            .score_ledger
            .attempt_history(claims.user_id())
            .await
            .extend()
    }
}
