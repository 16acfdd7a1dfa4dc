//! Gemini client implementing `TextGenerationClient`

use crate::config::GeminiConfig;
use crate::wire::{status_error, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use roadmap_core::{GenerationError, TextGenerationClient};
use std::fmt;
use std::time::Duration;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` client
///
/// Built once from explicit configuration and injected into the extractor.
/// Performs no retries of its own.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    api_key: String,
}

impl GeminiClient {
    /// Create a client with an explicit API key
    pub fn new(config: GeminiConfig, api_key: impl Into<String>) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GenerationError::Config("API key is empty".to_string()));
        }
        if config.timeout_secs == 0 {
            return Err(GenerationError::Config("timeout must be positive".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    /// Create a client reading the key from `config.api_key_env`
    pub fn from_env(config: GeminiConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            GenerationError::Config(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;
        Self::new(config, api_key)
    }

    fn transport_error(&self, err: &reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout {
                secs: self.config.timeout_secs,
            }
        } else {
            GenerationError::Network(err.to_string())
        }
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextGenerationClient for GeminiClient {
    async fn send(&self, prompt: &str) -> Result<String, GenerationError> {
        let endpoint = self.config.endpoint();
        tracing::debug!("POST {} ({} prompt bytes)", endpoint, prompt.len());

        let response = self
            .http
            .post(&endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            tracing::warn!("Gemini replied {}", status);
            return Err(status_error(status.as_u16(), &body));
        }

        // A success status with an unreadable body is a cut-off transfer
        let reply: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::Network(format!("malformed response body: {e}")))?;

        reply.text().ok_or(GenerationError::EmptyResponse)
    }

    fn describe(&self) -> String {
        format!("gemini/{}", self.config.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_key() {
        let err = GeminiClient::new(GeminiConfig::new(), "  ").unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = GeminiClient::new(GeminiConfig::new().with_timeout_secs(0), "key").unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
    }

    #[test]
    fn debug_redacts_key() {
        let client = GeminiClient::new(GeminiConfig::new(), "secret-key").unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn describe_names_model() {
        let client = GeminiClient::new(GeminiConfig::new(), "key").unwrap();
        assert_eq!(client.describe(), "gemini/gemini-2.0-flash");
    }

    #[test]
    fn from_env_requires_variable() {
        let mut config = GeminiConfig::new();
        config.api_key_env = "ROADMAP_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        let err = GeminiClient::from_env(config).unwrap_err();
        assert!(err.to_string().contains("ROADMAP_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
