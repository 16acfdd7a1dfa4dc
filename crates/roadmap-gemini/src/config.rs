//! Gemini client configuration

use serde::{Deserialize, Serialize};

/// Public Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// API version the roadmap prompts were tuned against
pub const DEFAULT_API_VERSION: &str = "v1alpha";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini client configuration
///
/// The key itself is never stored here, only the name of the environment
/// variable it is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeminiConfig {
    /// Scheme and host, without trailing path
    pub base_url: String,
    /// API version path segment
    pub api_version: String,
    /// Model name
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full `generateContent` URL for the configured model
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/'),
            self.model
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint() {
        assert_eq!(
            GeminiConfig::new().endpoint(),
            "https://generativelanguage.googleapis.com/v1alpha/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn endpoint_tolerates_slashes() {
        let config = GeminiConfig::new()
            .with_base_url("http://127.0.0.1:8080/")
            .with_model("gemini-1.5-pro");
        assert_eq!(
            config.endpoint(),
            "http://127.0.0.1:8080/v1alpha/models/gemini-1.5-pro:generateContent"
        );
    }
}
