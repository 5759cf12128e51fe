use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{SaveQuizAttemptRequest, SubmitGameScoreRequest},
        response::{
            AttemptHistoryResponse, GameScoreResponse, SaveAttemptResponse, ScoreLookupResponse,
        },
    },
};

#[post("/score")]
pub async fn submit_game_score(
    state: web::Data<AppState>,
    request: web::Json<SubmitGameScoreRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let update = state
        .score_ledger
        .record_game_score(auth.0.user_id(), &request.game_id, request.score)
        .await?;

    Ok(HttpResponse::Ok().json(GameScoreResponse::from(update)))
}

#[get("/getScore/{game_id}")]
pub async fn get_game_score(
    state: web::Data<AppState>,
    game_id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let score = state
        .score_ledger
        .game_score(auth.0.user_id(), &game_id)
        .await?;

    Ok(HttpResponse::Ok().json(ScoreLookupResponse { score }))
}

#[post("/savequiz")]
pub async fn save_quiz_attempt(
    state: web::Data<AppState>,
    request: web::Json<SaveQuizAttemptRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let attempt = state
        .score_ledger
        .record_quiz_attempt(
            auth.0.user_id(),
            &request.quiz_id,
            request.score,
            request.passed,
        )
        .await?;

    Ok(HttpResponse::Created().json(SaveAttemptResponse {
        success: true,
        message: "Quiz attempt saved successfully".to_string(),
        data: attempt,
    }))
}

#[get("/history")]
pub async fn attempt_history(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let attempts = state.score_ledger.attempt_history(auth.0.user_id()).await?;
    Ok(HttpResponse::Ok().json(AttemptHistoryResponse::from(attempts)))
}
