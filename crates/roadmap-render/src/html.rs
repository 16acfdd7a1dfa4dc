//! vis-network HTML renderer

use crate::error::RenderError;
use crate::style::RenderStyle;
use roadmap_core::RoadmapGraph;
use serde_json::{json, Value};

/// vis-network standalone bundle
pub const DEFAULT_VIS_NETWORK_URL: &str =
    "https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js";

/// Renderer trait for turning a validated graph into a visual artifact
///
/// Implement this trait to add output formats.
pub trait GraphRenderer: Send + Sync {
    /// Render `graph` with `style` into the artifact's text
    fn render(&self, graph: &RoadmapGraph, style: &RenderStyle) -> Result<String, RenderError>;

    /// File extension of the artifact (without dot)
    fn extension(&self) -> &str;
}

/// Self-contained HTML document renderer
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
    script_url: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            title: "Roadmap".to_string(),
            script_url: DEFAULT_VIS_NETWORK_URL.to_string(),
        }
    }
}

impl HtmlRenderer {
    /// Create renderer with default title and CDN script
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With document title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With vis-network script URL
    #[inline]
    #[must_use]
    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.script_url = url.into();
        self
    }

    fn node_data(graph: &RoadmapGraph, style: &RenderStyle) -> Value {
        graph
            .nodes()
            .iter()
            .map(|n| {
                json!({
                    "id": n.id,
                    "label": n.label,
                    "title": n.label,
                    "color": style.node_color,
                    "size": style.node_size,
                    "font": {"size": style.font_size, "color": style.font_color},
                })
            })
            .collect()
    }

    fn edge_data(graph: &RoadmapGraph, style: &RenderStyle) -> Value {
        graph
            .edges()
            .iter()
            .map(|e| {
                let mut edge = json!({
                    "from": e.source,
                    "to": e.target,
                    "title": e.relation,
                    "color": style.edge_color,
                });
                if style.directed {
                    edge["arrows"] = json!("to");
                }
                edge
            })
            .collect()
    }

    fn options(style: &RenderStyle) -> Value {
        json!({
            "nodes": {"shape": "dot"},
            "edges": {"smooth": {"type": "dynamic"}},
            "interaction": {"hover": true, "navigationButtons": true},
            "physics": {
                "enabled": true,
                "solver": style.layout.solver(),
                "stabilization": {"iterations": 200},
            },
        })
    }
}

impl GraphRenderer for HtmlRenderer {
    fn render(&self, graph: &RoadmapGraph, style: &RenderStyle) -> Result<String, RenderError> {
        style.validate()?;

        let nodes = script_safe_json(&Self::node_data(graph, style))?;
        let edges = script_safe_json(&Self::edge_data(graph, style))?;
        let options = script_safe_json(&Self::options(style))?;
        let title = escape_html(&self.title);
        let script_url = escape_html(&self.script_url);
        let background = style.background.trim();
        let height = style.height_px;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{script_url}"></script>
<style>
  html, body {{ margin: 0; padding: 0; background: {background}; }}
  #roadmap {{ width: 100%; height: {height}px; background: {background}; }}
</style>
</head>
<body>
<div id="roadmap"></div>
<script>
  const nodes = new vis.DataSet({nodes});
  const edges = new vis.DataSet({edges});
  const options = {options};
  new vis.Network(document.getElementById("roadmap"), {{ nodes: nodes, edges: edges }}, options);
</script>
</body>
</html>
"#
        ))
    }

    fn extension(&self) -> &str {
        "html"
    }
}

/// JSON that can sit inside a `<script>` element without closing it
fn script_safe_json(value: &Value) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
