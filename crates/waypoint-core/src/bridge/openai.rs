//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::CompletionService;
use crate::{config::ServiceConfig, error::ServiceError};

const SYSTEM_PROMPT: &str = "You are an assistant that breaks goals into task plans.";

/// Client for a `/chat/completions` endpoint authenticated with a bearer key.
pub struct OpenAiService {
    config: ServiceConfig,
    http: Client,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiService {
    /// Creates a client whose requests are bounded by the configured timeout.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        if config.api_key.trim().is_empty() {
            return Err(ServiceError::MissingCredential);
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ServiceError::Network)?;
        Ok(Self {
            config: config.clone(),
            http,
        })
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    fn classify(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout(self.config.timeout)
        } else {
            ServiceError::Network(err)
        }
    }
}

#[async_trait]
impl CompletionService for OpenAiService {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        let url = self.config.completions_url();
        debug!("Requesting plan from {url} with model {}", self.config.model);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout(self.config.timeout)
            } else {
                ServiceError::InvalidResponse(e.to_string())
            }
        })?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ServiceError::InvalidResponse("no choices in completion".to_string()))
    }
}
