use serde_json::{Value, json};

use crate::{CompletionModel, FeedbackError};

/// Upstream provider the relay forwards to. The relay attaches the matching
/// server-side credential header and passes the body through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gpt,
    Claude,
}

impl Provider {
    pub fn tag(self) -> &'static str {
        match self {
            Provider::Gpt => "gpt",
            Provider::Claude => "claude",
        }
    }
}

/// A completion model reached through the AI relay.
#[derive(Clone)]
pub struct RelayModel {
    client: reqwest::Client,
    relay_url: String,
    provider: Provider,
    model: String,
    max_tokens: u32,
    display_name: String,
}

impl RelayModel {
    pub fn new(
        relay_url: impl Into<String>,
        provider: Provider,
        model: impl Into<String>,
        max_tokens: u32,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url: relay_url.into(),
            provider,
            model: model.into(),
            max_tokens,
            display_name: display_name.into(),
        }
    }

    /// Provider-native request body, plus the provider tag the relay routes on.
    fn body(&self, prompt: &str, system_prompt: &str) -> Value {
        match self.provider {
            Provider::Gpt => json!({
                "provider": self.provider.tag(),
                "model": self.model,
                "max_tokens": self.max_tokens,
                "messages": [
                    { "role": "system", "content": system_prompt },
                    { "role": "user", "content": prompt },
                ],
            }),
            Provider::Claude => json!({
                "provider": self.provider.tag(),
                "model": self.model,
                "max_tokens": self.max_tokens,
                "system": system_prompt,
                "messages": [
                    { "role": "user", "content": prompt },
                ],
            }),
        }
    }

    /// Pull the completion text out of the provider's raw response shape.
    fn text_of(&self, response: &Value) -> Result<String, FeedbackError> {
        let text = match self.provider {
            Provider::Gpt => response["choices"]
                .get(0)
                .and_then(|c| c["message"]["content"].as_str()),
            Provider::Claude => response["content"].get(0).and_then(|c| c["text"].as_str()),
        };
        text.map(str::to_string)
            .ok_or_else(|| FeedbackError::BadResponse("no completion text in response".into()))
    }
}

#[async_trait::async_trait]
impl CompletionModel for RelayModel {
    async fn complete(&self, prompt: &str, system_prompt: &str) -> Result<String, FeedbackError> {
        if self.relay_url.is_empty() {
            return Err(FeedbackError::NotConfigured("AI relay URL"));
        }

        let response = self
            .client
            .post(&self.relay_url)
            .json(&self.body(prompt, system_prompt))
            .send()
            .await?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| FeedbackError::BadResponse(format!("undecodable relay response: {e}")))?;

        if !status.is_success() {
            // Both providers and the relay itself report {"error": {"message"}}.
            let message = payload["error"]["message"]
                .as_str()
                .unwrap_or("upstream provider error")
                .to_string();
            return Err(FeedbackError::Api(format!("HTTP {status}: {message}")));
        }

        self.text_of(&payload)
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}
