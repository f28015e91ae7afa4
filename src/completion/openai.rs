//! OpenAI-compatible chat completions client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::CompletionClient;
use crate::config::CompletionConfig;
use crate::models::CompletionRequest;
use crate::{CityGuideError, Result};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Chat completions client authenticated with a bearer API key
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl OpenAiClient {
    /// Create a new client for `base_url` (e.g. `https://api.openai.com`)
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("cityguide/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    /// Create a client from the completion section of the configuration.
    /// The API key must already be resolved.
    pub fn from_config(config: &CompletionConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            CityGuideError::config("No API key configured. Set OPENAI_API_KEY.")
        })?;
        Self::new(api_key, config.base_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), COMPLETIONS_PATH)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "Completion response received");

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    CityGuideError::authentication(format!("Completion API returned {status}"))
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    CityGuideError::rate_limit(format!("Completion API returned {status}"))
                }
                _ => CityGuideError::api(format!("Completion API error {status}: {body}")),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            CityGuideError::invalid_response(format!("Failed to decode completion: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CityGuideError::invalid_response("Completion has no choices"))?
            .message
            .content
            .ok_or_else(|| CityGuideError::invalid_response("First choice has no text content"))
    }
}
