//! Error types for the roadmap pipeline
//!
//! Provides error handling for:
//! - Text generation failures (network, auth, quota, timeout)
//! - Structural validation of model-produced JSON
//! - Extraction exhaustion after the retry budget is spent

use crate::extractor::GenerationAttempt;

/// Main pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    /// Topic was empty after trimming
    #[error("invalid topic: {0}")]
    InvalidTopic(String),

    /// The text generation call itself failed
    #[error("text generation unavailable: {0}")]
    GenerationUnavailable(#[from] GenerationError),

    /// JSON coercion never produced a valid graph within the retry budget
    #[error("extraction failed after {attempts} attempt(s): {}", .last_attempt.outcome)]
    ExtractionFailed {
        /// Number of coercion attempts made
        attempts: u32,
        /// Diagnostics of the final attempt
        last_attempt: Box<GenerationAttempt>,
    },
}

impl RoadmapError {
    /// Attempt count carried by `ExtractionFailed`
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> Option<u32> {
        match self {
            Self::ExtractionFailed { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }

    /// Check if the whole request is worth retrying from the user's side
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::InvalidTopic(_) => false,
            Self::GenerationUnavailable(e) => e.is_transient(),
            Self::ExtractionFailed { .. } => true,
        }
    }
}

/// Failures reported by a text generation client
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Network or connection error
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded its deadline
    #[error("request timed out after {secs}s")]
    Timeout {
        /// Configured timeout in seconds
        secs: u64,
    },

    /// Credentials rejected (401/403)
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Quota or rate limit hit (429)
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// Any other non-success API reply
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the reply body
        message: String,
    },

    /// Reply carried no generated text
    #[error("empty response from model")]
    EmptyResponse,

    /// Client is misconfigured (missing key, bad URL)
    #[error("client configuration error: {0}")]
    Config(String),
}

impl GenerationError {
    /// Check if a later identical request could succeed
    #[inline]
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::RateLimit(_) | Self::EmptyResponse
        ) || matches!(self, Self::Api { status, .. } if *status >= 500)
    }
}

/// Which end of an edge failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The `source` member
    Source,
    /// The `target` member
    Target,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Structural validation failures for a parsed graph document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Top-level JSON value is not an object
    #[error("top-level value is not an object")]
    NotAnObject,

    /// Required top-level member absent
    #[error("missing top-level member '{0}'")]
    MissingMember(&'static str),

    /// Top-level member is not an array
    #[error("member '{0}' is not an array")]
    NotASequence(&'static str),

    /// Entry could not be read as a node or edge
    #[error("{kind} #{index} is malformed: {reason}")]
    MalformedEntry {
        /// "node" or "edge"
        kind: &'static str,
        /// Position in its array
        index: usize,
        /// Deserializer message
        reason: String,
    },

    /// Id or label is blank
    #[error("node #{index} has an empty {field}")]
    EmptyField {
        /// Position in the nodes array
        index: usize,
        /// Offending member name
        field: &'static str,
    },

    /// Two nodes share an id
    #[error("duplicate node id '{0}'")]
    DuplicateNodeId(String),

    /// Edge references an id that no node defines
    #[error("edge #{index} {endpoint} '{id}' does not match any node")]
    DanglingEdge {
        /// Position in the edges array
        index: usize,
        /// Which end failed
        endpoint: Endpoint,
        /// Unresolved id
        id: String,
    },
}

/// Errors while loading a JSON graph document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Text is not JSON at all
    #[error("JSON parse error: {0}")]
    Syntax(String),

    /// JSON parsed but violates the graph structure
    #[error("invalid graph: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_display() {
        let err = GenerationError::Api {
            status: 500,
            message: "backend error".to_string(),
        };
        assert_eq!(err.to_string(), "api error (status 500): backend error");
    }

    #[test]
    fn generation_error_is_transient() {
        assert!(GenerationError::Network("reset".to_string()).is_transient());
        assert!(GenerationError::Timeout { secs: 30 }.is_transient());
        assert!(GenerationError::Api { status: 503, message: String::new() }.is_transient());
        assert!(!GenerationError::Api { status: 400, message: String::new() }.is_transient());
        assert!(!GenerationError::Auth("bad key".to_string()).is_transient());
    }

    #[test]
    fn roadmap_error_conversion() {
        let err: RoadmapError = GenerationError::EmptyResponse.into();
        assert!(matches!(err, RoadmapError::GenerationUnavailable(_)));
        assert!(err.to_string().contains("empty response"));
        assert_eq!(err.attempts(), None);
    }

    #[test]
    fn dangling_edge_display() {
        let err = ValidationError::DanglingEdge {
            index: 0,
            endpoint: Endpoint::Target,
            id: "B".to_string(),
        };
        assert_eq!(err.to_string(), "edge #0 target 'B' does not match any node");
    }
}
