//! Renderer error types

/// Errors while rendering a graph
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Style option out of range or unsafe to embed
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// Layout name not recognized
    #[error("unknown layout '{0}' (expected barnes-hut or force-atlas-2-based)")]
    UnknownLayout(String),

    /// Embedded data could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
