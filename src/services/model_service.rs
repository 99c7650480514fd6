use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Single-shot chat completion returning the raw assistant text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, api_key: &SecretString, request: CompletionRequest)
        -> AppResult<String>;
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Serialize, Debug)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChatMessage,
}

/// OpenAI-compatible chat client pointed at Groq by default.
///
/// The HTTP client (and its connection pool) is shared across requests;
/// only the API key changes per call.
pub struct GroqCompletionClient {
    http_client: reqwest::Client,
    api_base: String,
    model: String,
}

impl GroqCompletionClient {
    pub fn new(config: &Config, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            api_base: config.model_api_base.clone(),
            model: config.model_name.clone(),
        }
    }

    fn client(&self, api_key: &SecretString) -> Client<OpenAIConfig> {
        let config = OpenAIConfig::new()
            .with_api_base(self.api_base.as_str())
            .with_api_key(api_key.expose_secret());
        Client::build(self.http_client.clone(), config, single_attempt())
    }

    fn chat_request(&self, request: CompletionRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(request.system_prompt),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(request.user_prompt),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqCompletionClient {
    async fn complete(
        &self,
        api_key: &SecretString,
        request: CompletionRequest,
    ) -> AppResult<String> {
        let client = self.client(api_key);
        let chat = client.chat();
        let response: ChatCompletionResponse = chat.create_byot(self.chat_request(request)).await?;

        first_content(response)
    }
}

/// Backoff that gives up after the first failure: a rate-limited or
/// failing provider is reported, never retried.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

fn first_content(response: ChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| AppError::ExternalService("model response contained no choices".to_string()))
}
