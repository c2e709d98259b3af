// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Business logic
// (retrieval ranking, batch staging) lives in domain functions that use
// these traits.
//
// Naming convention: Base* for trait names (e.g., BaseEmbeddingService)

use anyhow::Result;
use async_trait::async_trait;
use parallel_client::{ExtractResult, SearchItem};

// =============================================================================
// Embedding Service Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseEmbeddingService: Send + Sync {
    /// Generate an embedding for text (1536-dimensional vector).
    ///
    /// Returns `None` when no vector can be produced: empty or
    /// whitespace-only input must short-circuit to `None` without a
    /// provider call. Provider failures are `Err`.
    async fn generate(&self, text: &str) -> Result<Option<Vec<f32>>>;
}

// =============================================================================
// Content Provider Trait (Infrastructure - web search + extraction)
// =============================================================================

#[async_trait]
pub trait BaseContentService: Send + Sync {
    /// Search the web for URLs relevant to an objective.
    async fn search(
        &self,
        objective: &str,
        search_queries: &[String],
        max_results: usize,
    ) -> Result<Vec<SearchItem>>;

    /// Extract content and publish metadata from a set of URLs.
    async fn extract(&self, urls: &[String], objective: &str) -> Result<Vec<ExtractResult>>;
}
