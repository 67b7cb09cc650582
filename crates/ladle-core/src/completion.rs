use std::time::Duration;

use crate::error::{LadleError, Result};

/// Where completions come from: an Ollama-compatible daemon and the
/// model it should run. Built once in `main` and handed to every stage
/// that needs it.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2:1b".to_string(),
        }
    }
}

/// Synchronous-in-spirit text completion: one prompt in, one plain-text
/// response out. The model's answer is returned untouched.
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        // Small local models can take minutes on a long transcript.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(600))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "requesting completion"
        );

        let response = self
            .http
            .post(format!("{}/api/generate", self.config.endpoint))
            .json(&serde_json::json!({
                "model": self.config.model,
                "prompt": prompt,
                "stream": false,
            }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let text = response["response"]
            .as_str()
            .ok_or_else(|| LadleError::CompletionFailed {
                reason: format!("invalid API response: {response:?}"),
            })?;

        Ok(text.to_string())
    }
}
