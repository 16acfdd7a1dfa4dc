//! Roadmap Extractor
//!
//! Turns a topic into a validated [`RoadmapGraph`]:
//! 1. Ask the model for a free-text roadmap
//! 2. Ask the model to re-express it as nodes/edges JSON
//! 3. Strip fences, parse, validate; retry step 2 within a bounded budget
//!
//! Every call is awaited before the next one starts. No state survives a
//! request, so one extractor can serve any number of independent callers.

use crate::client::TextGenerationClient;
use crate::error::{DocumentError, RoadmapError, ValidationError};
use crate::fence::strip_code_fence;
use crate::graph::RoadmapGraph;
use crate::prompt;
use crate::validation::parse_document;
use std::fmt;
use std::time::Duration;

/// Default number of JSON coercion attempts
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default pause between JSON coercion attempts
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(2);

/// Bounded retry policy for the JSON coercion step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first (at least 1)
    pub max_attempts: u32,
    /// Fixed pause between consecutive attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Create a policy; `max_attempts` is raised to 1 if zero
    #[inline]
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// With attempt budget
    #[inline]
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// With backoff interval
    #[inline]
    #[must_use]
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

/// Result of evaluating one coercion reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Parsed and validated
    Accepted,
    /// Cleaned text was not JSON
    Unparseable(String),
    /// JSON parsed but is not a valid graph
    Invalid(ValidationError),
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => f.write_str("accepted"),
            Self::Unparseable(msg) => write!(f, "unparseable JSON: {msg}"),
            Self::Invalid(err) => write!(f, "invalid graph: {err}"),
        }
    }
}

/// Diagnostic record of one JSON coercion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationAttempt {
    /// 1-based attempt number
    pub number: u32,
    /// Model reply, trimmed
    pub raw: String,
    /// Reply after fence stripping
    pub cleaned: String,
    /// What happened to it
    pub outcome: AttemptOutcome,
}

impl GenerationAttempt {
    /// Clean, parse and validate a model reply
    ///
    /// Returns the diagnostic record and, when accepted, the graph.
    #[must_use]
    pub fn evaluate(number: u32, reply: &str) -> (Self, Option<RoadmapGraph>) {
        let raw = reply.trim().to_string();
        let cleaned = strip_code_fence(&raw).to_string();

        let (outcome, graph) = match parse_document(&cleaned) {
            Ok(graph) => (AttemptOutcome::Accepted, Some(graph)),
            Err(DocumentError::Syntax(msg)) => (AttemptOutcome::Unparseable(msg), None),
            Err(DocumentError::Invalid(err)) => (AttemptOutcome::Invalid(err), None),
        };

        let attempt = Self {
            number,
            raw,
            cleaned,
            outcome,
        };
        (attempt, graph)
    }
}

/// Orchestrates the two generation steps behind a bounded retry contract
#[derive(Debug, Clone)]
pub struct RoadmapExtractor<C> {
    client: C,
    policy: RetryPolicy,
}

impl<C: TextGenerationClient> RoadmapExtractor<C> {
    /// Create an extractor with the default retry policy
    #[inline]
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            policy: RetryPolicy::default(),
        }
    }

    /// With retry policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active retry policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Build a validated roadmap graph for `topic`
    ///
    /// This is the main entry point: free-text generation followed by graph
    /// extraction. Failures from either step propagate unchanged.
    pub async fn build_roadmap(&self, topic: &str) -> Result<RoadmapGraph, RoadmapError> {
        tracing::info!(
            "Building roadmap for '{}' via {}",
            topic.trim(),
            self.client.describe()
        );

        let freeform = self.generate_freeform(topic).await?;
        let graph = self.extract_graph(&freeform).await?;

        tracing::info!(
            "Roadmap ready: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Ask the model for a free-text roadmap of `topic`
    ///
    /// Not retried: free text cannot fail to parse.
    pub async fn generate_freeform(&self, topic: &str) -> Result<String, RoadmapError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(RoadmapError::InvalidTopic("topic is empty".to_string()));
        }

        let reply = self
            .client
            .send(&prompt::freeform_prompt(topic))
            .await
            .map_err(|e| {
                tracing::error!("Free-text generation failed: {}", e);
                e
            })?;

        let text = reply.trim().to_string();
        tracing::debug!("Free-text roadmap: {} bytes", text.len());
        Ok(text)
    }

    /// Convert a free-text roadmap into a validated graph
    ///
    /// Unparseable or invalid replies are discarded and the request is
    /// repeated after the backoff interval, up to the policy's attempt budget.
    /// A failing client call ends the loop immediately.
    pub async fn extract_graph(&self, freeform: &str) -> Result<RoadmapGraph, RoadmapError> {
        let request = prompt::graph_prompt(freeform.trim());
        let max_attempts = self.policy.max_attempts.max(1);
        let mut number = 0;

        loop {
            number += 1;
            let reply = self.client.send(&request).await.map_err(|e| {
                tracing::error!("JSON generation attempt {} failed: {}", number, e);
                e
            })?;

            let (attempt, graph) = GenerationAttempt::evaluate(number, &reply);
            if let Some(graph) = graph {
                tracing::debug!("JSON attempt {}/{} accepted", number, max_attempts);
                return Ok(graph);
            }

            tracing::warn!(
                "JSON attempt {}/{} rejected: {}",
                number,
                max_attempts,
                attempt.outcome
            );

            if number >= max_attempts {
                return Err(RoadmapError::ExtractionFailed {
                    attempts: number,
                    last_attempt: Box::new(attempt),
                });
            }

            tokio::time::sleep(self.policy.backoff).await;
        }
    }
}
