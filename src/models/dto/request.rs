use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Difficulty, Quiz, UserAnswers};

pub const MAX_GENERATED_QUESTIONS: u32 = 50;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub topic: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(alias = "questionCount")]
    #[validate(range(min = 1, max = 50))]
    pub number_of_questions: u32,
}

/// Both fields are optional on the wire so their absence reaches the grader
/// as `InvalidInput` rather than a body parse failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeQuizRequest {
    #[serde(default, alias = "quiz")]
    pub quiz_data: Option<Quiz>,

    #[serde(default, alias = "answers")]
    pub user_answers: Option<UserAnswers>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizListingRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    pub difficulty: Difficulty,

    #[serde(alias = "questions")]
    #[validate(range(min = 1, max = 50))]
    pub question_count: u32,

    #[serde(alias = "timeEstimate")]
    #[validate(range(min = 1))]
    pub time_estimate_minutes: u32,

    #[serde(default)]
    #[validate(range(max = 100))]
    pub completion: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 50))]
    pub difficulty_level: String,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    #[validate(range(min = 1))]
    pub points_possible: i64,

    #[serde(default)]
    pub game_url: String,

    #[validate(url)]
    pub game_thumbnail: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitGameScoreRequest {
    #[validate(length(min = 1))]
    pub game_id: String,

    #[validate(range(min = 0))]
    pub score: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuizAttemptRequest {
    #[serde(alias = "quiz_id")]
    #[validate(length(min = 1))]
    pub quiz_id: String,

    #[validate(range(min = 0, max = 100))]
    pub score: i64,

    #[serde(default)]
    pub passed: bool,
}

/// `?is_active=` filter. `true` and `1` select active entries, any other
/// value inactive ones; an absent parameter disables the filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActiveFilterQuery {
    pub is_active: Option<String>,
}

impl ActiveFilterQuery {
    pub fn filter(&self) -> Option<bool> {
        self.is_active
            .as_deref()
            .map(|value| matches!(value.trim(), "true" | "1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_rejects_out_of_range_counts() {
        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic": "Malware", "numberOfQuestions": 51}"#).unwrap();
        assert!(request.validate().is_err());

        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic": "Malware", "numberOfQuestions": 0}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn generate_request_defaults_difficulty_to_medium() {
        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic": "Malware", "numberOfQuestions": 5}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.difficulty, Difficulty::Medium);
    }

    #[test]
    fn grade_request_accepts_missing_parts() {
        let request: GradeQuizRequest = serde_json::from_str("{}").unwrap();

        assert!(request.quiz_data.is_none());
        assert!(request.user_answers.is_none());
    }

    #[test]
    fn grade_request_reads_index_keyed_answers() {
        let request: GradeQuizRequest = serde_json::from_str(
            r#"{"quizData": {"questions": []}, "userAnswers": {"0": 2, "1": 0}}"#,
        )
        .unwrap();

        let answers = request.user_answers.unwrap();
        assert_eq!(answers.get(0), Some(2));
        assert_eq!(answers.get(1), Some(0));
    }

    #[test]
    fn create_game_requires_points_and_category() {
        let request: CreateGameRequest = serde_json::from_str(
            r#"{"title": "Packet Sniffer", "difficulty_level": "easy", "category": "", "points_possible": 0}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("points_possible"));
    }

    #[test]
    fn quiz_listing_accepts_legacy_time_estimate_name() {
        let request: CreateQuizListingRequest = serde_json::from_str(
            r#"{"title": "Crypto 101", "difficulty": "easy", "questionCount": 10, "timeEstimate": 20}"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.time_estimate_minutes, 20);
    }

    #[test]
    fn active_filter_parses_truthy_values() {
        let filter = |value: Option<&str>| ActiveFilterQuery {
            is_active: value.map(str::to_string),
        }
        .filter();

        assert_eq!(filter(None), None);
        assert_eq!(filter(Some("true")), Some(true));
        assert_eq!(filter(Some("1")), Some(true));
        assert_eq!(filter(Some("false")), Some(false));
        assert_eq!(filter(Some("yes")), Some(false));
    }
}
