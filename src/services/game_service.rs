use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{domain::Game, dto::request::CreateGameRequest},
    repositories::GameRepository,
};

pub struct GameService {
    repository: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_game(&self, request: CreateGameRequest) -> AppResult<Game> {
        request.validate()?;

        let mut game = Game::new(
            request.title.trim(),
            &request.difficulty_level,
            &request.category,
            request.points_possible,
        );
        game.description = request.description;
        game.game_url = request.game_url;
        game.game_thumbnail = request.game_thumbnail;
        game.is_active = request.is_active.unwrap_or(true);

        let game = self.repository.create(game).await?;
        log::info!("Created game '{}' ({})", game.title, game.game_id);
        Ok(game)
    }

    pub async fn list_games(&self, is_active: Option<bool>) -> AppResult<Vec<Game>> {
        self.repository.list(is_active).await
    }

    pub async fn delete_game(&self, game_id: &str) -> AppResult<()> {
        self.repository.delete(game_id).await?;
        log::info!("Deleted game {}", game_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        repositories::{game_repository::MockGameRepository, InMemoryGameRepository},
    };

    fn request(title: &str, points_possible: i64) -> CreateGameRequest {
        CreateGameRequest {
            title: title.to_string(),
            description: String::new(),
            difficulty_level: "medium".to_string(),
            category: "networking".to_string(),
            points_possible,
            game_url: String::new(),
            game_thumbnail: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn create_game_defaults_to_active() {
        let service = GameService::new(Arc::new(InMemoryGameRepository::new()));

        let game = service.create_game(request("Firewall Frenzy", 300)).await.unwrap();

        assert!(game.is_active);
        assert_eq!(game.points_possible, 300);
        assert_eq!(service.list_games(Some(true)).await.unwrap().len(), 1);
        assert!(service.list_games(Some(false)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_game_never_reaches_the_store() {
        let mut repository = MockGameRepository::new();
        repository.expect_create().never();
        let service = GameService::new(Arc::new(repository));

        let result = service.create_game(request("", 0)).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn deleting_unknown_game_is_not_found() {
        let service = GameService::new(Arc::new(InMemoryGameRepository::new()));

        let result = service.delete_game("missing").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
