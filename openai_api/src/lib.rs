//! Completion client for OpenAI's chat completion API.
//!
//! `OpenAIHandler` implements `text_completion::RequestHandler`, so it can be
//! handed to the web layer behind the trait.

mod models;
pub use models::{ChatCompletionRequest, ChatCompletionResponse};
mod chat_completion;
pub use chat_completion::chat_completion;

use text_completion::{CompletionResult, Prompt, RequestHandler};
use tokio::sync::oneshot::Sender;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    /// Without trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
}

impl OpenAIConfig {
    pub fn new(api_key: String) -> Self {
        OpenAIConfig {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct OpenAIHandler {
    pub config: OpenAIConfig,
    // Pooled, cheap to clone.
    client: reqwest::Client,
}

impl OpenAIHandler {
    pub fn new(config: OpenAIConfig) -> Self {
        OpenAIHandler {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl RequestHandler for OpenAIHandler {
    fn answer_request(&self, prompt: Prompt, result: Sender<CompletionResult>) {
        let handler = self.clone();
        tokio::spawn(async move {
            let r = chat_completion(&handler, &prompt).await;
            let _ = result.send(r);
        });
    }
}
