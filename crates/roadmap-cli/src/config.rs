//! Layered configuration: defaults, optional TOML file, then CLI flags
//!
//! ```toml
//! [gemini]
//! model = "gemini-2.0-flash"
//! api_key_env = "GOOGLE_API_KEY"
//!
//! [retry]
//! max_attempts = 3
//! backoff_ms = 2000
//!
//! [style]
//! node_color = "blue"
//! layout = "force-atlas-2-based"
//!
//! [output]
//! dir = "roadmaps"
//! html = true
//! ```

use anyhow::Context;
use roadmap_core::RetryPolicy;
use roadmap_gemini::GeminiConfig;
use roadmap_render::RenderStyle;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "roadmap.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Text generation client
    pub gemini: GeminiConfig,
    /// JSON coercion retry budget
    pub retry: RetryConfig,
    /// Render style
    pub style: RenderStyle,
    /// Artifact output
    pub output: OutputConfig,
}

impl AppConfig {
    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load `path` if given, else `roadmap.toml` if present, else defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Retry section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryConfig {
    /// Total JSON coercion attempts
    pub max_attempts: u32,
    /// Pause between attempts in milliseconds
    pub backoff_ms: u64,
}

impl RetryConfig {
    /// Extractor retry policy
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.backoff_ms))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            backoff_ms: u64::try_from(policy.backoff.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Output section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for generated artifacts
    pub dir: PathBuf,
    /// Also write the HTML artifact
    pub html: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            html: true,
        }
    }
}
