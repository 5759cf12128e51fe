use std::time::Duration;

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::errors::{AppError, AppResult};

const QUIZ_TEMPERATURE: f32 = 0.9;

/// Free-form text completion. Replies are untrusted and may be malformed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiModelService {
    pub fn new(api_key: &SecretString, base_url: &str, model: &str, timeout: Duration) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(base_url);

        Self {
            client: Client::with_config(config),
            model: model.to_string(),
            timeout,
        }
    }

    async fn request_completion(&self, prompt: &str) -> Result<ChatCompletionReply, OpenAIError> {
        self.client
            .chat()
            .create_byot(json!({
                "model": self.model,
                "temperature": QUIZ_TEMPERATURE,
                "messages": [
                    { "role": "user", "content": prompt }
                ]
            }))
            .await
    }
}

#[async_trait]
impl TextCompletion for OpenAiModelService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let reply = tokio::time::timeout(self.timeout, self.request_completion(prompt))
            .await
            .map_err(|_| {
                AppError::ExternalServiceFailure(format!(
                    "model '{}' did not answer within {}s",
                    self.model,
                    self.timeout.as_secs()
                ))
            })??;

        let text = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        log::debug!(
            "Model '{}' replied with {} characters",
            self.model,
            text.len()
        );

        Ok(text)
    }
}

/// Stand-in used when no model API key is configured. Every call fails, so
/// callers take their fallback path.
pub struct OfflineModelService;

#[async_trait]
impl TextCompletion for OfflineModelService {
    async fn complete(&self, _prompt: &str) -> AppResult<String> {
        Err(AppError::ExternalServiceFailure(
            "no text-completion service is configured".to_string(),
        ))
    }
}
