//! HTTP client for an OpenAI-compatible chat-completion API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use ghosted_core::message::{ChatMessage, ChatRole, MessageContent};

use crate::error::CompletionError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The completion capability the server depends on. Implemented by
/// [`CompletionClient`] for the real provider and by stubs in tests.
#[async_trait]
pub trait Completions: Send + Sync {
    /// Send a conversation and return the trimmed text of the first choice.
    ///
    /// The system prompt, when present, is prepended as a `system`-role
    /// entry ahead of `messages`.
    async fn complete(
        &self,
        system: Option<&str>,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}

/// Client for a fixed model on one OpenAI-compatible endpoint.
///
/// A missing API key is not an error here: the request is sent without
/// authentication and the provider's rejection surfaces at call time.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl CompletionClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        CompletionClient {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: MessageContent,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn build_wire_messages(system: Option<&str>, messages: &[ChatMessage]) -> Vec<WireMessage> {
    let mut wire = Vec::with_capacity(messages.len() + 1);

    if let Some(system) = system {
        wire.push(WireMessage {
            role: "system",
            content: MessageContent::Text(system.to_string()),
        });
    }

    for msg in messages {
        let role = match msg.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        };
        wire.push(WireMessage {
            role,
            content: msg.content.clone(),
        });
    }

    wire
}

#[async_trait]
impl Completions for CompletionClient {
    async fn complete(
        &self,
        system: Option<&str>,
        messages: &[ChatMessage],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: build_wire_messages(system, messages),
            temperature,
            max_tokens,
        };

        let mut builder = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::ResponseParse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::ResponseParse("no choices in response".to_string()))?;

        info!(
            model = %self.model,
            reply_len = content.len(),
            "chat completion complete"
        );

        Ok(content.trim().to_string())
    }
}
