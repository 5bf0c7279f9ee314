//! Chat-completion provider used to rewrite text.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

#[async_trait]
pub trait Rewriter: Send + Sync {
    async fn rewrite(&self, system_prompt: &str, text: &str) -> Result<String>;
}

/// OpenAI-compatible `chat/completions` client (Groq by default).
pub struct ChatCompletionRewriter {
    http: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionRewriter {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let base = base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/chat/completions"))
            .with_context(|| format!("invalid provider base url '{base_url}'"))?;
        Ok(Self {
            http: Client::new(),
            endpoint,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl Rewriter for ChatCompletionRewriter {
    async fn rewrite(&self, system_prompt: &str, text: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: text.to_string(),
                },
            ],
        };

        let response: ChatCompletionResponse = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("chat completion request failed")?
            .error_for_status()?
            .json()
            .await
            .context("chat completion response did not decode")?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("chat completion returned no content"))?;
        debug!(model = %self.model, chars = content.chars().count(), "rewrite completed");
        Ok(content)
    }
}

#[cfg(test)]
#[path = "tests/provider_tests.rs"]
mod tests;
