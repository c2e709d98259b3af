//! Server dependencies (using traits for testability)
//!
//! Central dependency container carried by the axum state and passed by
//! reference into domain functions. Replaces process-wide singletons with
//! an explicitly constructed object injected at startup.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parallel_client::{ExtractResult, ParallelClient, SearchItem};
use sqlx::PgPool;

use crate::kernel::{BaseContentService, BaseEmbeddingService};

/// Excerpt cap for search results (chars per result).
const SEARCH_EXCERPT_CHARS: usize = 8000;

/// Excerpt cap for extraction (chars per result).
const EXTRACT_EXCERPT_CHARS: usize = 50_000;

// =============================================================================
// ParallelClient Adapter (implements BaseContentService trait)
// =============================================================================

/// Wrapper around ParallelClient that implements BaseContentService
pub struct ParallelContentService(pub Arc<ParallelClient>);

impl ParallelContentService {
    pub fn new(client: Arc<ParallelClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseContentService for ParallelContentService {
    async fn search(
        &self,
        objective: &str,
        search_queries: &[String],
        max_results: usize,
    ) -> Result<Vec<SearchItem>> {
        let results = self
            .0
            .search(
                objective,
                search_queries,
                Some(max_results),
                SEARCH_EXCERPT_CHARS,
            )
            .await?;
        Ok(results)
    }

    async fn extract(&self, urls: &[String], objective: &str) -> Result<Vec<ExtractResult>> {
        let results = self
            .0
            .extract(urls, objective, EXTRACT_EXCERPT_CHARS, true)
            .await?;
        Ok(results)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to domain functions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    pub embedding_service: Arc<dyn BaseEmbeddingService>,
    /// Content provider for the search -> extract -> store workflow.
    /// Optional; not all deployments run ingestion.
    pub content_service: Option<Arc<dyn BaseContentService>>,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        embedding_service: Arc<dyn BaseEmbeddingService>,
        content_service: Option<Arc<dyn BaseContentService>>,
    ) -> Self {
        Self {
            db_pool,
            embedding_service,
            content_service,
        }
    }
}
