// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionClient;
use crate::services::upstream::{ChatCompletions, OpenAiCompatible};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub completions: CompletionClient,
}

impl AppState {
    pub fn new(completions: CompletionClient) -> Self {
        Self { completions }
    }

    pub fn from_config(config: &Config) -> Self {
        let api: Arc<dyn ChatCompletions> =
            Arc::new(OpenAiCompatible::new(&config.base_url, config.api_key()));
        Self::new(CompletionClient::from_config(api, config))
    }
}
