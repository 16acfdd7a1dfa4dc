//! Render style and layout selection

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Force-directed layout solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Barnes-Hut n-body approximation
    #[default]
    #[serde(rename = "barnes-hut", alias = "barnes_hut")]
    BarnesHut,
    /// ForceAtlas2 variant with linear attraction
    #[serde(rename = "force-atlas-2-based", alias = "force_atlas_2_based")]
    ForceAtlas2Based,
}

impl Layout {
    /// All layouts, in presentation order
    pub const ALL: [Layout; 2] = [Layout::BarnesHut, Layout::ForceAtlas2Based];

    /// Name used on the command line and in config files
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BarnesHut => "barnes-hut",
            Self::ForceAtlas2Based => "force-atlas-2-based",
        }
    }

    /// vis-network physics solver name
    #[inline]
    #[must_use]
    pub fn solver(self) -> &'static str {
        match self {
            Self::BarnesHut => "barnesHut",
            Self::ForceAtlas2Based => "forceAtlas2Based",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "barneshut" => Ok(Self::BarnesHut),
            "forceatlas2based" | "forceatlas2" => Ok(Self::ForceAtlas2Based),
            _ => Err(RenderError::UnknownLayout(s.to_string())),
        }
    }
}

/// Visual options applied to every node and edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    /// Node fill color (CSS color)
    pub node_color: String,
    /// Edge line color
    pub edge_color: String,
    /// Node radius in pixels
    pub node_size: u32,
    /// Label font size in pixels
    pub font_size: u32,
    /// Layout solver
    pub layout: Layout,
    /// Canvas background color
    pub background: String,
    /// Label color
    pub font_color: String,
    /// Canvas height in pixels
    pub height_px: u32,
    /// Draw arrowheads on edges
    pub directed: bool,
}

impl RenderStyle {
    /// Create default style
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With node color
    #[inline]
    #[must_use]
    pub fn with_node_color(mut self, color: impl Into<String>) -> Self {
        self.node_color = color.into();
        self
    }

    /// With edge color
    #[inline]
    #[must_use]
    pub fn with_edge_color(mut self, color: impl Into<String>) -> Self {
        self.edge_color = color.into();
        self
    }

    /// With node size
    #[inline]
    #[must_use]
    pub fn with_node_size(mut self, size: u32) -> Self {
        self.node_size = size;
        self
    }

    /// With label font size
    #[inline]
    #[must_use]
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// With layout
    #[inline]
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Check sizes are positive and colors are plain CSS color tokens
    pub fn validate(&self) -> Result<(), RenderError> {
        for (field, value) in [
            ("node_size", self.node_size),
            ("font_size", self.font_size),
            ("height_px", self.height_px),
        ] {
            if value == 0 {
                return Err(RenderError::InvalidStyle(format!("{field} must be positive")));
            }
        }

        for (field, value) in [
            ("node_color", &self.node_color),
            ("edge_color", &self.edge_color),
            ("background", &self.background),
            ("font_color", &self.font_color),
        ] {
            check_color(field, value)?;
        }
        Ok(())
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_color: "blue".to_string(),
            edge_color: "white".to_string(),
            node_size: 25,
            font_size: 14,
            layout: Layout::BarnesHut,
            background: "#222222".to_string(),
            font_color: "white".to_string(),
            height_px: 800,
            directed: true,
        }
    }
}

/// Colors are interpolated into CSS, so only color-token characters pass
fn check_color(field: &str, value: &str) -> Result<(), RenderError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RenderError::InvalidStyle(format!("{field} is empty")));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ');
    if !value.chars().all(allowed) {
        return Err(RenderError::InvalidStyle(format!(
            "{field} '{value}' is not a CSS color"
        )));
    }
    Ok(())
}
