use std::sync::Arc;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{
    constants::quiz_prompt::{
        COUNT_PLACEHOLDER, DIFFICULTY_PLACEHOLDER, QUIZ_GENERATION_PROMPT, SCHEMA_PLACEHOLDER,
        TOPIC_PLACEHOLDER,
    },
    errors::{AppError, AppResult},
    models::domain::{Difficulty, Question, Quiz},
    services::{model_service::TextCompletion, quiz_synthesizer::QuizSynthesizer},
};

pub const DEFAULT_TOPIC: &str = "General Knowledge";

const REPLY_EXCERPT_CHARS: usize = 200;

/// Reply shape requested from the model.
#[derive(Debug, Deserialize, JsonSchema)]
struct GeneratedQuiz {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    questions: Vec<Question>,
}

static REPLY_SCHEMA: Lazy<String> = Lazy::new(|| {
    serde_json::to_string_pretty(&schemars::schema_for!(GeneratedQuiz))
        .unwrap_or_else(|_| "{}".to_string())
});

/// Produces gradeable quizzes from the model, falling back to
/// [`QuizSynthesizer`] whenever the model cannot deliver.
pub struct QuizGenerationService {
    model: Arc<dyn TextCompletion>,
}

impl QuizGenerationService {
    pub fn new(model: Arc<dyn TextCompletion>) -> Self {
        Self { model }
    }

    /// Never fails: any model, transport or parse problem yields a synthesized quiz.
    pub async fn generate(&self, topic: &str, difficulty: Difficulty, question_count: u32) -> Quiz {
        let topic = topic.trim();

        if topic.is_empty() {
            log::warn!("Quiz requested without a topic; synthesizing a '{}' quiz", DEFAULT_TOPIC);
            return QuizSynthesizer::synthesize(DEFAULT_TOPIC, difficulty, question_count);
        }

        if question_count == 0 {
            return QuizSynthesizer::synthesize(topic, difficulty, 0);
        }

        match self.generate_from_model(topic, difficulty, question_count).await {
            Ok(quiz) => {
                log::info!(
                    "Generated {} {} questions about '{}' from the model",
                    question_count,
                    difficulty,
                    topic
                );
                quiz
            }
            Err(err) => {
                log::warn!("Falling back to a synthesized quiz about '{}': {}", topic, err);
                QuizSynthesizer::synthesize(topic, difficulty, question_count)
            }
        }
    }

    async fn generate_from_model(
        &self,
        topic: &str,
        difficulty: Difficulty,
        question_count: u32,
    ) -> AppResult<Quiz> {
        let prompt = build_prompt(topic, difficulty, question_count);
        let reply = self.model.complete(&prompt).await?;

        parse_model_reply(&reply, topic, difficulty, question_count).inspect_err(|_| {
            log::debug!(
                "Rejected model reply: {}",
                reply.chars().take(REPLY_EXCERPT_CHARS).collect::<String>()
            );
        })
    }
}

pub fn build_prompt(topic: &str, difficulty: Difficulty, question_count: u32) -> String {
    QUIZ_GENERATION_PROMPT
        .replace(TOPIC_PLACEHOLDER, topic)
        .replace(DIFFICULTY_PLACEHOLDER, &difficulty.to_string())
        .replace(COUNT_PLACEHOLDER, &question_count.to_string())
        .replace(SCHEMA_PLACEHOLDER, &REPLY_SCHEMA)
}

fn parse_model_reply(
    reply: &str,
    topic: &str,
    difficulty: Difficulty,
    question_count: u32,
) -> AppResult<Quiz> {
    let span = extract_json_object(reply).ok_or_else(|| {
        AppError::MalformedResponse("no JSON object found in model reply".to_string())
    })?;

    let generated: GeneratedQuiz = serde_json::from_str(span)?;

    if generated.questions.len() != question_count as usize {
        return Err(AppError::MalformedResponse(format!(
            "expected {} questions, model returned {}",
            question_count,
            generated.questions.len()
        )));
    }

    for (index, question) in generated.questions.iter().enumerate() {
        if let Some(problem) = question.shape_error() {
            return Err(AppError::MalformedResponse(format!(
                "question {}: {}",
                index + 1,
                problem
            )));
        }
    }

    let title = if generated.title.trim().is_empty() {
        format!("{} Quiz", topic)
    } else {
        generated.title
    };
    let description = if generated.description.trim().is_empty() {
        format!("A {} level quiz about {}", difficulty, topic)
    } else {
        generated.description
    };

    Ok(Quiz::annotated(
        title,
        description,
        generated.questions,
        difficulty,
        question_count,
    ))
}

/// Returns the first balanced `{...}` span of `text`, skipping braces that
/// appear inside JSON string literals.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
