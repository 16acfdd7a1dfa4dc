//! Roadmap Render - interactive HTML for roadmap graphs
//!
//! Produces a single self-contained HTML document that draws a validated
//! [`roadmap_core::RoadmapGraph`] with the vis-network library.

#![warn(unreachable_pub)]

pub mod error;
pub mod html;
pub mod style;

pub use error::RenderError;
pub use html::{GraphRenderer, HtmlRenderer, DEFAULT_VIS_NETWORK_URL};
pub use style::{Layout, RenderStyle};
