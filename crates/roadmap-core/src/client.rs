//! Text generation client seam
//!
//! The extractor talks to the model only through [`TextGenerationClient`].
//! Concrete vendors live in their own crates; tests substitute a scripted fake.

use crate::error::GenerationError;
use async_trait::async_trait;
use std::sync::Arc;

/// A service that turns one prompt into generated text
///
/// Implementations must not retry on their own: retry policy belongs to the
/// extractor, which needs to see every reply.
#[async_trait]
pub trait TextGenerationClient: Send + Sync {
    /// Send `prompt` and wait for the generated text
    async fn send(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Short identifier for logs (vendor and model)
    fn describe(&self) -> String {
        "text-generation-client".to_string()
    }
}

#[async_trait]
impl<C> TextGenerationClient for Arc<C>
where
    C: TextGenerationClient + ?Sized,
{
    async fn send(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).send(prompt).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
