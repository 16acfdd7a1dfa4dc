//! Roadmap Core - topic to validated graph
//!
//! The extraction pipeline behind the roadmap generator:
//! - Prompts a text generation service for a free-text roadmap
//! - Coerces that text into nodes/edges JSON
//! - Strips markdown fences, parses, and structurally validates the result
//! - Retries the coercion step within a fixed attempt budget
//!
//! # Example
//!
//! ```rust,ignore
//! use roadmap_core::{RoadmapExtractor, RetryPolicy};
//!
//! # async fn example(client: impl roadmap_core::TextGenerationClient) -> Result<(), roadmap_core::RoadmapError> {
//! let extractor = RoadmapExtractor::new(client).with_policy(RetryPolicy::default());
//! let graph = extractor.build_roadmap("Graph Theory").await?;
//!
//! println!("{} nodes, {} edges", graph.node_count(), graph.edge_count());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod client;
pub mod error;
pub mod extractor;
pub mod fence;
pub mod graph;
pub mod prompt;
pub mod validation;

pub use client::TextGenerationClient;
pub use error::{DocumentError, Endpoint, GenerationError, RoadmapError, ValidationError};
pub use extractor::{
    AttemptOutcome, GenerationAttempt, RetryPolicy, RoadmapExtractor, DEFAULT_BACKOFF,
    DEFAULT_MAX_ATTEMPTS,
};
pub use fence::strip_code_fence;
pub use graph::{Edge, Node, RoadmapGraph};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the extraction pipeline
    pub use crate::{
        GenerationError, RetryPolicy, RoadmapError, RoadmapExtractor, RoadmapGraph,
        TextGenerationClient,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
