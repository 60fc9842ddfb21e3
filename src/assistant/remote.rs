// Remote assistant — OpenAI-compatible chat completions endpoint.
//
// The endpoint URL, API key, and model name all come from configuration,
// so any compatible gateway works. Failures here are ordinary errors; the
// caller decides whether to fall back to the rule-based assistant.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::AssistantContext;
use super::traits::Assistant;

pub struct RemoteAssistant {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl RemoteAssistant {
    pub fn new(url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Assistant for RemoteAssistant {
    async fn reply(&self, context: &AssistantContext, question: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: context.render(question),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to call the assistant endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Assistant endpoint returned {}: {}", status, body);
        }

        let result: ChatResponse = response
            .json()
            .await
            .context("Failed to parse the assistant response")?;

        let answer = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if answer.trim().is_empty() {
            anyhow::bail!("Assistant returned an empty reply");
        }

        debug!(chars = answer.len(), "Remote assistant replied");

        Ok(answer)
    }
}

// --- Chat completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
