//! Testing utilities for the roadmap workspace
//!
//! Shared fakes, fixtures, and assertions.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use roadmap_core::{GenerationError, TextGenerationClient};
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Result<String, GenerationError>>,
    prompts: Vec<String>,
}

/// Text generation client that replays a fixed script of replies
///
/// Clones share the same script, so a test can keep one handle and give the
/// other to the extractor.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClient {
    script: Arc<Mutex<Script>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    #[must_use]
    pub fn with_failure(self, error: GenerationError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, reply: Result<String, GenerationError>) {
        self.script.lock().replies.push_back(reply);
    }

    /// Prompts received so far, in order
    pub fn prompts(&self) -> Vec<String> {
        self.script.lock().prompts.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().prompts.len()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().replies.len()
    }
}

#[async_trait]
impl TextGenerationClient for ScriptedClient {
    async fn send(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut script = self.script.lock();
        script.prompts.push(prompt.to_string());
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Config("scripted client exhausted".to_string())))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

pub mod fixtures {
    use serde_json::json;

    pub const FREEFORM_ROADMAP: &str = "1. Basics: vertices, edges, degree\n\
        2. Traversal: BFS, DFS\n\
        3. Shortest paths: Dijkstra, Bellman-Ford";

    pub fn single_node_json() -> String {
        json!({
            "nodes": [{"id": "A", "label": "Intro"}],
            "edges": []
        })
        .to_string()
    }

    pub fn graph_theory_json() -> String {
        json!({
            "nodes": [
                {"id": "basics", "label": "Basics"},
                {"id": "traversal", "label": "Traversal"},
                {"id": "paths", "label": "Shortest Paths"}
            ],
            "edges": [
                {"source": "basics", "target": "traversal", "relation": "prerequisite"},
                {"source": "traversal", "target": "paths", "relation": "leads to"}
            ]
        })
        .to_string()
    }

    pub fn dangling_edge_json() -> String {
        json!({
            "nodes": [{"id": "A", "label": "X"}],
            "edges": [{"source": "A", "target": "B", "relation": "leads to"}]
        })
        .to_string()
    }

    pub fn duplicate_id_json() -> String {
        json!({
            "nodes": [{"id": "A", "label": "X"}, {"id": "A", "label": "Y"}],
            "edges": []
        })
        .to_string()
    }

    /// Wrap `payload` the way chat models usually do
    pub fn fenced(payload: &str) -> String {
        format!("```json\n{payload}\n```")
    }
}
