use std::sync::Arc;

use super::upstream::{ChatCompletionRequest, ChatCompletions, ChatMessage, Role, UpstreamError};
use crate::config::Config;

/// Turns one user prompt into one assistant reply.
#[derive(Clone)]
pub struct CompletionClient {
    api: Arc<dyn ChatCompletions>,
    model: String,
    temperature: f32,
}

impl CompletionClient {
    pub fn new(api: Arc<dyn ChatCompletions>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            api,
            model: model.into(),
            temperature,
        }
    }

    pub fn from_config(api: Arc<dyn ChatCompletions>, config: &Config) -> Self {
        Self::new(api, config.model.clone(), config.temperature)
    }

    /// Sends `prompt` unmodified and returns the first choice's content.
    pub async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: Some(prompt.to_string()),
            }],
            temperature: self.temperature,
        };

        let response = self.api.create(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(UpstreamError::EmptyResponse)
    }
}
