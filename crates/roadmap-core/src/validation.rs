//! Structural validation of graph documents
//!
//! The only construction path for [`RoadmapGraph`]. Checks, in order:
//! top-level shape, per-entry fields, node id uniqueness, edge endpoints.
//! The first violation is reported; nothing is repaired or defaulted except
//! a missing or null `relation`, which becomes the empty string.

use crate::error::{DocumentError, Endpoint, ValidationError};
use crate::graph::{Edge, Node, RoadmapGraph};
use indexmap::IndexSet;
use serde::Deserialize;
use serde_json::Value;

/// Node or edge id as models emit it
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: RawId,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    source: RawId,
    target: RawId,
    #[serde(default)]
    relation: Option<String>,
}

/// Parse text as JSON and validate it as a graph document
pub fn parse_document(text: &str) -> Result<RoadmapGraph, DocumentError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DocumentError::Syntax(e.to_string()))?;
    Ok(validate_value(&value)?)
}

/// Validate an already-parsed JSON value as a graph document
pub fn validate_value(value: &Value) -> Result<RoadmapGraph, ValidationError> {
    let root = value.as_object().ok_or(ValidationError::NotAnObject)?;

    let raw_nodes = member_array(root, "nodes")?;
    let raw_edges = member_array(root, "edges")?;

    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for (index, entry) in raw_nodes.iter().enumerate() {
        let raw = RawNode::deserialize(entry).map_err(|e| ValidationError::MalformedEntry {
            kind: "node",
            index,
            reason: e.to_string(),
        })?;
        let node = Node {
            id: raw.id.into(),
            label: raw.label,
        };
        if node.id.trim().is_empty() {
            return Err(ValidationError::EmptyField { index, field: "id" });
        }
        if node.label.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                index,
                field: "label",
            });
        }
        nodes.push(node);
    }

    let mut ids: IndexSet<&str> = IndexSet::with_capacity(nodes.len());
    for node in &nodes {
        if !ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateNodeId(node.id.clone()));
        }
    }

    let mut edges = Vec::with_capacity(raw_edges.len());
    for (index, entry) in raw_edges.iter().enumerate() {
        let raw = RawEdge::deserialize(entry).map_err(|e| ValidationError::MalformedEntry {
            kind: "edge",
            index,
            reason: e.to_string(),
        })?;
        let edge = Edge {
            source: raw.source.into(),
            target: raw.target.into(),
            relation: raw.relation.unwrap_or_default(),
        };
        for (endpoint, id) in [(Endpoint::Source, &edge.source), (Endpoint::Target, &edge.target)] {
            if !ids.contains(id.as_str()) {
                return Err(ValidationError::DanglingEdge {
                    index,
                    endpoint,
                    id: id.clone(),
                });
            }
        }
        edges.push(edge);
    }

    Ok(RoadmapGraph::from_validated(nodes, edges))
}

fn member_array<'a>(
    root: &'a serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<&'a Vec<Value>, ValidationError> {
    root.get(name)
        .ok_or(ValidationError::MissingMember(name))?
        .as_array()
        .ok_or(ValidationError::NotASequence(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_minimal_graph() {
        let graph = validate_value(&json!({
            "nodes": [{"id": "A", "label": "Intro"}],
            "edges": []
        }))
        .unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].id, "A");
        assert_eq!(graph.nodes()[0].label, "Intro");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn preserves_source_order() {
        let graph = validate_value(&json!({
            "nodes": [
                {"id": "z", "label": "Last alphabetically"},
                {"id": "a", "label": "First alphabetically"},
                {"id": "m", "label": "Middle"}
            ],
            "edges": [
                {"source": "m", "target": "a", "relation": "second"},
                {"source": "z", "target": "m", "relation": "first"}
            ]
        }))
        .unwrap();
        let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["z", "a", "m"]);
        assert_eq!(graph.edges()[0].relation, "second");
    }

    #[test]
    fn relation_defaults_to_empty() {
        let graph = validate_value(&json!({
            "nodes": [{"id": "A", "label": "X"}, {"id": "B", "label": "Y"}],
            "edges": [
                {"source": "A", "target": "B"},
                {"source": "B", "target": "A", "relation": null}
            ]
        }))
        .unwrap();
        assert!(graph.edges().iter().all(|e| e.relation.is_empty()));
    }

    #[test]
    fn integer_ids_become_strings() {
        let graph = validate_value(&json!({
            "nodes": [{"id": 1, "label": "One"}, {"id": "2", "label": "Two"}],
            "edges": [{"source": 1, "target": 2, "relation": "next"}]
        }))
        .unwrap();
        assert_eq!(graph.nodes()[0].id, "1");
        assert_eq!(graph.edges()[0].source, "1");
        assert_eq!(graph.edges()[0].target, "2");
    }

    #[test]
    fn ignores_extra_members() {
        let graph = validate_value(&json!({
            "title": "Roadmap",
            "nodes": [{"id": "A", "label": "X", "group": 3}],
            "edges": []
        }))
        .unwrap();
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn rejects_non_object() {
        assert_eq!(
            validate_value(&json!([1, 2])).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn rejects_missing_members() {
        assert_eq!(
            validate_value(&json!({"nodes": []})).unwrap_err(),
            ValidationError::MissingMember("edges")
        );
        assert_eq!(
            validate_value(&json!({"edges": []})).unwrap_err(),
            ValidationError::MissingMember("nodes")
        );
    }

    #[test]
    fn rejects_non_array_members() {
        assert_eq!(
            validate_value(&json!({"nodes": {}, "edges": []})).unwrap_err(),
            ValidationError::NotASequence("nodes")
        );
    }

    #[test]
    fn rejects_node_without_label() {
        let err = validate_value(&json!({
            "nodes": [{"id": "A"}],
            "edges": []
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedEntry { kind: "node", index: 0, .. }
        ));
    }

    #[test]
    fn rejects_blank_label() {
        let err = validate_value(&json!({
            "nodes": [{"id": "A", "label": "X"}, {"id": "B", "label": "  "}],
            "edges": []
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { index: 1, field: "label" });
    }

    #[test]
    fn rejects_edge_without_target() {
        let err = validate_value(&json!({
            "nodes": [{"id": "A", "label": "X"}],
            "edges": [{"source": "A", "relation": "self"}]
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedEntry { kind: "edge", index: 0, .. }
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = validate_value(&json!({
            "nodes": [{"id": "A", "label": "X"}, {"id": "A", "label": "Y"}],
            "edges": []
        }))
        .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateNodeId("A".to_string()));
    }

    #[test]
    fn rejects_dangling_target() {
        let err = validate_value(&json!({
            "nodes": [{"id": "A", "label": "X"}],
            "edges": [{"source": "A", "target": "B", "relation": "leads to"}]
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DanglingEdge {
                index: 0,
                endpoint: Endpoint::Target,
                id: "B".to_string(),
            }
        );
    }

    #[test]
    fn rejects_dangling_source() {
        let err = validate_value(&json!({
            "nodes": [{"id": "A", "label": "X"}],
            "edges": [{"source": "Q", "target": "A", "relation": ""}]
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::DanglingEdge { endpoint: Endpoint::Source, .. }
        ));
    }

    #[test]
    fn parse_document_reports_syntax() {
        let err = parse_document(r#"{"nodes": ["#).unwrap_err();
        assert!(matches!(err, DocumentError::Syntax(_)));
    }
}
