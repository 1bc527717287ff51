//! AI service integration for restaurant search and image synthesis
//!
//! Provides the trait seams the pipeline depends on, the Gemini-backed
//! implementations, and builder-style mocks for tests.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiImageSynthesisClient, GeminiSearchClient};
pub use mock::{MockImageSynthesisClient, MockSearchClient};

use crate::compose::CompositePart;
use crate::models::SynthesizedImage;
use crate::Result;
use async_trait::async_trait;

/// Search-augmented text generation: one natural-language query in, the
/// concatenated non-reasoning text of the reply out.
#[async_trait]
pub trait SearchGenerationService: Send + Sync {
    async fn search_text(&self, query: &str) -> Result<String>;
}

/// Multimodal image synthesis from an ordered composite instruction set.
#[async_trait]
pub trait ImageSynthesisService: Send + Sync {
    async fn synthesize(&self, parts: &[CompositePart]) -> Result<SynthesizedImage>;
}
