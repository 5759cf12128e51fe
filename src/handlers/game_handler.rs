use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{ActiveFilterQuery, CreateGameRequest},
        response::{CreateGameResponse, GameListResponse, MessageResponse},
    },
};

#[post("/addgame")]
pub async fn create_game(
    state: web::Data<AppState>,
    request: web::Json<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let game = state.game_service.create_game(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreateGameResponse {
        message: "Game created successfully".to_string(),
        game,
    }))
}

#[get("/getgames")]
pub async fn list_games(
    state: web::Data<AppState>,
    query: web::Query<ActiveFilterQuery>,
) -> Result<HttpResponse, AppError> {
    let games = state.game_service.list_games(query.filter()).await?;
    Ok(HttpResponse::Ok().json(GameListResponse::from(games)))
}

#[delete("/deletegame/{id}")]
pub async fn delete_game(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.game_service.delete_game(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Game deleted permanently")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_state;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_game_catalog_lifecycle() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .service(
                    web::scope("/api/games")
                        .service(create_game)
                        .service(list_games)
                        .service(delete_game),
                ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/games/addgame")
            .set_json(json!({
                "title": "Password Cracker",
                "difficulty_level": "medium",
                "category": "authentication",
                "points_possible": 250,
                "is_active": false
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let game_id = body["game"]["game_id"].as_str().unwrap().to_string();
        assert_eq!(body["game"]["description"], "");

        let req = test::TestRequest::get()
            .uri("/api/games/getgames?is_active=false")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["count"], 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/games/deletegame/{}", game_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/games/deletegame/{}", game_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
