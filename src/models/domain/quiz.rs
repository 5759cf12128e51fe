use std::fmt;

use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::Question;

pub const DEFAULT_PASSING_SCORE_PERCENT: u32 = 70;
pub const MINUTES_PER_QUESTION: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A gradeable quiz as handed to clients.
///
/// Clients echo quizzes back for grading, so every metadata field has a
/// default and a quiz without `passingScorePercent` grades against 70.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject, InputObject)]
#[graphql(input_name = "QuizInput")]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    #[graphql(default)]
    pub title: String,
    #[serde(default)]
    #[graphql(default)]
    pub description: String,
    #[serde(default)]
    #[graphql(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    #[graphql(default)]
    pub difficulty: Difficulty,
    #[serde(default, alias = "time_estimate")]
    #[graphql(default)]
    pub time_estimate_minutes: u32,
    #[serde(default = "default_passing_score", alias = "passing_score")]
    #[graphql(default_with = "default_passing_score()")]
    pub passing_score_percent: u32,
    #[serde(default, alias = "total_questions")]
    #[graphql(default)]
    pub total_questions: u32,
}

fn default_passing_score() -> u32 {
    DEFAULT_PASSING_SCORE_PERCENT
}

impl Quiz {
    /// Stamps the generation metadata onto freshly produced content.
    pub fn annotated(
        title: String,
        description: String,
        questions: Vec<Question>,
        difficulty: Difficulty,
        question_count: u32,
    ) -> Self {
        Quiz {
            title,
            description,
            questions,
            difficulty,
            time_estimate_minutes: question_count.saturating_mul(MINUTES_PER_QUESTION),
            passing_score_percent: DEFAULT_PASSING_SCORE_PERCENT,
            total_questions: question_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).expect("difficulty should serialize");
        assert_eq!(json, "\"hard\"");

        let parsed: Difficulty =
            serde_json::from_str("\"easy\"").expect("difficulty should deserialize");
        assert_eq!(parsed, Difficulty::Easy);
    }

    #[test]
    fn difficulty_rejects_unknown_level() {
        let parsed = serde_json::from_str::<Difficulty>("\"impossible\"");

        assert!(parsed.is_err());
    }

    #[test]
    fn quiz_without_passing_score_defaults_to_seventy() {
        let json = r#"{
            "title": "Rust",
            "questions": [
                {
                    "text": "Which keyword declares an immutable binding?",
                    "options": ["let", "mut", "var", "const fn"],
                    "correctOptionIndex": 0
                }
            ]
        }"#;

        let quiz: Quiz = serde_json::from_str(json).expect("partial quiz should deserialize");

        assert_eq!(quiz.passing_score_percent, DEFAULT_PASSING_SCORE_PERCENT);
        assert_eq!(quiz.difficulty, Difficulty::Medium);
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].explanation, "");
    }

    #[test]
    fn quiz_accepts_snake_case_metadata() {
        let json = r#"{"title": "Networks", "passing_score": 80, "time_estimate": 10}"#;

        let quiz: Quiz = serde_json::from_str(json).expect("quiz should deserialize");

        assert_eq!(quiz.passing_score_percent, 80);
        assert_eq!(quiz.time_estimate_minutes, 10);
        assert!(quiz.questions.is_empty());
    }

    #[test]
    fn annotated_quiz_derives_time_estimate_from_count() {
        let quiz = Quiz::annotated(
            "Cryptography Quiz".to_string(),
            "Ciphers".to_string(),
            Vec::new(),
            Difficulty::Easy,
            6,
        );

        assert_eq!(quiz.time_estimate_minutes, 12);
        assert_eq!(quiz.passing_score_percent, 70);
        assert_eq!(quiz.total_questions, 6);
    }
}
