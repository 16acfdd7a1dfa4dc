//! Validated roadmap graph - proof-carrying type
//!
//! `RoadmapGraph` has no public constructor. The only way to obtain one is
//! through [`crate::validation`], so every graph in circulation satisfies:
//! 1. Node ids are unique and non-empty
//! 2. Node labels are non-empty
//! 3. Every edge endpoint names a node in the same graph

use crate::error::DocumentError;
use serde::Serialize;

/// A single roadmap topic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    /// Unique id within the graph
    pub id: String,
    /// Human-readable label
    pub label: String,
}

/// A directed relation between two topics
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Id of the originating node
    pub source: String,
    /// Id of the destination node
    pub target: String,
    /// Free-form relation description, possibly empty
    pub relation: String,
}

/// Immutable, structurally valid roadmap graph
///
/// Serializes to the persisted artifact format:
/// `{"nodes": [{"id", "label"}...], "edges": [{"source", "target", "relation"}...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl RoadmapGraph {
    /// Construct from already-validated parts (validation module only)
    pub(crate) fn from_validated(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Parse and validate a persisted JSON document
    ///
    /// Applies the same structural checks as model output, so a hand-edited
    /// file cannot smuggle a dangling edge past the renderer.
    pub fn from_json_str(text: &str) -> Result<Self, DocumentError> {
        crate::validation::parse_document(text)
    }

    /// Nodes in source order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in source order
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Pretty-printed JSON artifact
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoadmapGraph {
        RoadmapGraph::from_validated(
            vec![
                Node {
                    id: "basics".to_string(),
                    label: "Basics".to_string(),
                },
                Node {
                    id: "trees".to_string(),
                    label: "Trees".to_string(),
                },
            ],
            vec![Edge {
                source: "basics".to_string(),
                target: "trees".to_string(),
                relation: "prerequisite".to_string(),
            }],
        )
    }

    #[test]
    fn accessors() {
        let graph = sample();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.nodes()[1].label, "Trees");
        assert_eq!(graph.edges()[0].source, "basics");
    }

    #[test]
    fn pretty_json_shape() {
        let json = sample().to_pretty_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"][0]["id"], "basics");
        assert_eq!(value["edges"][0]["relation"], "prerequisite");
        assert!(json.contains('\n'));
    }

    #[test]
    fn pretty_json_reloads_to_equal_graph() {
        let graph = sample();
        let json = graph.to_pretty_json().unwrap();
        assert_eq!(RoadmapGraph::from_json_str(&json).unwrap(), graph);
    }
}
