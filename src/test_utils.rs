use std::sync::Arc;

use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    app_state::AppState, auth::Claims, config::Config, services::OfflineModelService,
};

/// In-memory state with no model configured, so generation always falls back.
pub fn test_state() -> AppState {
    AppState::in_memory(Config::test_config(), Arc::new(OfflineModelService))
}

/// Signs `claims` the way the identity provider does (HS256).
pub fn issue_token(secret: &SecretString, claims: &Claims) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .expect("test token should encode")
}

pub mod fixtures {
    use crate::models::{
        domain::{Difficulty, Question, Quiz},
        dto::request::CreateGameRequest,
    };

    pub fn create_game_request(title: &str) -> CreateGameRequest {
        CreateGameRequest {
            title: title.to_string(),
            description: "Find the weak hash".to_string(),
            difficulty_level: "easy".to_string(),
            category: "cryptography".to_string(),
            points_possible: 100,
            game_url: String::new(),
            game_thumbnail: None,
            is_active: None,
        }
    }

    /// A quiz whose correct answers are `correct_indexes`, in order.
    pub fn quiz_with_answers(correct_indexes: &[u32]) -> Quiz {
        let questions = correct_indexes
            .iter()
            .enumerate()
            .map(|(i, &correct)| Question {
                text: format!("Sample question {}", i + 1),
                options: vec![
                    "Alpha".to_string(),
                    "Bravo".to_string(),
                    "Charlie".to_string(),
                    "Delta".to_string(),
                ],
                correct_option_index: correct,
                explanation: String::new(),
            })
            .collect();

        Quiz::annotated(
            "Sample Quiz".to_string(),
            String::new(),
            questions,
            Difficulty::Medium,
            correct_indexes.len() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_fixtures_quiz_with_answers() {
        let quiz = quiz_with_answers(&[0, 3, 1]);

        assert_eq!(quiz.total_questions, 3);
        assert_eq!(quiz.questions[1].correct_option_index, 3);
        assert!(quiz.questions.iter().all(|q| q.shape_error().is_none()));
    }

    #[test]
    fn test_issued_token_is_accepted_by_test_config() {
        let config = Config::test_config();
        let token = issue_token(&config.jwt_secret, &Claims::new("fixture-user", 1));

        let claims = test_state().jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "fixture-user");
    }
}
