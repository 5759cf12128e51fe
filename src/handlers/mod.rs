pub mod game_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod score_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::{auth::AuthMiddleware, errors::AppError};

pub use game_handler::{create_game, delete_game, list_games};
pub use graphql_handler::{graphiql, graphql};
pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{create_quiz, generate_quiz, get_quiz, list_quizzes, validate_quiz};
pub use score_handler::{attempt_history, get_game_score, save_quiz_attempt, submit_game_score};

/// Malformed JSON bodies surface as `InvalidInput`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        AppError::InvalidInput(err.to_string()).into()
    })
}

/// Registers every route. Callers provide `web::Data<AppState>` and
/// `web::Data<Schema>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(health_check_ready)
        .service(graphql)
        .service(graphiql)
        .service(
            web::scope("/api/quiz")
                .service(generate_quiz)
                .service(validate_quiz)
                .service(create_quiz)
                .service(list_quizzes)
                .service(get_quiz),
        )
        .service(
            web::scope("/api/games")
                .service(create_game)
                .service(list_games)
                .service(delete_game),
        )
        .service(
            web::scope("/api/gamesscore")
                .wrap(AuthMiddleware)
                .service(submit_game_score)
                .service(get_game_score),
        )
        .service(
            web::scope("/api/attempts")
                .wrap(AuthMiddleware)
                .service(save_quiz_attempt)
                .service(attempt_history),
        );
}
