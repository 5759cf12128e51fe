use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{
            ActiveFilterQuery, CreateQuizListingRequest, GenerateQuizRequest, GradeQuizRequest,
        },
        response::{CreateQuizResponse, GenerateQuizResponse, QuizListResponse, QuizResponse},
    },
    services::AnswerGrader,
};

#[post("/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let quiz = state
        .quiz_generation_service
        .generate(
            &request.topic,
            request.difficulty,
            request.number_of_questions,
        )
        .await;

    Ok(HttpResponse::Ok().json(GenerateQuizResponse { quiz }))
}

#[post("/validatequiz")]
pub async fn validate_quiz(request: web::Json<GradeQuizRequest>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let quiz = request
        .quiz_data
        .ok_or_else(|| AppError::InvalidInput("Quiz data is required".to_string()))?;

    let result = AnswerGrader::grade(&quiz, request.user_answers.as_ref())?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/addquiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizListingRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreateQuizResponse {
        message: "Quiz created successfully".to_string(),
        quiz,
    }))
}

#[get("/getquizzes")]
pub async fn list_quizzes(
    state: web::Data<AppState>,
    query: web::Query<ActiveFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes(query.filter()).await?;
    Ok(HttpResponse::Ok().json(QuizListResponse::from(quizzes)))
}

#[get("/getquiz/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(QuizResponse { quiz }))
}
