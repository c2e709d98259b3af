//! Search -> Extract -> Embed -> Store workflow.
//!
//! Sequential three-stage pipeline over the content provider and the
//! ingestion core. Stage failures are caught at the stage boundary and
//! recorded in the running error list; the report's `success` flag is
//! true only when at least one article was ultimately stored.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::common::{ServiceError, ServiceResult};
use crate::domains::articles::ingest::{ingest_batch, ExtractBatch};
use crate::kernel::ServerDeps;

/// At most this many expanded search queries are sent to the provider.
const MAX_SEARCH_QUERIES: usize = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRequest {
    /// What to look for, e.g. "Latest AI news".
    pub query: String,
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    #[serde(default)]
    pub category_id: Option<i32>,
    /// Relevance score 1-10 applied to every stored article.
    #[serde(default = "default_relevance_score")]
    pub relevance_score: i32,
    /// Custom search queries; auto-generated from `query` when absent.
    #[serde(default)]
    pub search_queries: Option<Vec<String>>,
}

fn default_max_articles() -> usize {
    10
}

fn default_relevance_score() -> i32 {
    8
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowReport {
    pub success: bool,
    pub query: String,
    pub articles_found: usize,
    pub articles_extracted: usize,
    pub articles_stored: usize,
    pub article_ids: Vec<i32>,
    pub errors: Vec<String>,
}

impl WorkflowReport {
    fn new(query: String) -> Self {
        Self {
            success: false,
            query,
            articles_found: 0,
            articles_extracted: 0,
            articles_stored: 0,
            article_ids: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Deterministically expand the primary query into provider search
/// queries: recency synonyms, the current year, and a "news" variant.
pub fn generate_search_queries(query: &str) -> Vec<String> {
    let mut queries = vec![query.to_string()];
    let lowered = query.to_lowercase();

    if lowered.contains("latest") {
        queries.push(query.replace("latest", "recent").replace("Latest", "Recent"));
        queries.push(query.replace("latest", "new").replace("Latest", "New"));
    }

    let year = chrono::Utc::now().year().to_string();
    if !query.contains(&year) {
        queries.push(format!("{query} {year}"));
    }

    if lowered.contains("latest") || lowered.contains("recent") {
        queries.push(format!("{query} news"));
    }

    queries.truncate(MAX_SEARCH_QUERIES);
    queries
}

/// Complete workflow: Search -> Extract -> Embed -> Store.
pub async fn search_extract_store(
    deps: &ServerDeps,
    request: WorkflowRequest,
) -> ServiceResult<WorkflowReport> {
    let content = deps.content_service.as_ref().ok_or_else(|| {
        ServiceError::ContentProvider("no content provider configured".to_string())
    })?;

    let mut report = WorkflowReport::new(request.query.clone());
    tracing::info!(query = %request.query, "Starting unified workflow");

    // Step 1: Search
    let search_queries = request
        .search_queries
        .clone()
        .unwrap_or_else(|| generate_search_queries(&request.query));

    let found = match content
        .search(&request.query, &search_queries, request.max_articles)
        .await
    {
        Ok(found) => found,
        Err(e) => {
            report.errors.push(format!("Search failed: {e}"));
            return Ok(report);
        }
    };

    report.articles_found = found.len();
    tracing::info!(count = report.articles_found, "Step 1/3: search complete");

    if found.is_empty() {
        report.errors.push("No articles found".to_string());
        return Ok(report);
    }

    let urls: Vec<String> = found
        .into_iter()
        .take(request.max_articles)
        .map(|r| r.url)
        .collect();

    // Step 2: Extract
    let objective = format!("Extract detailed content for: {}", request.query);
    let extracted = match content.extract(&urls, &objective).await {
        Ok(extracted) => extracted,
        Err(e) => {
            report.errors.push(format!("Extraction failed: {e}"));
            return Ok(report);
        }
    };

    report.articles_extracted = extracted.len();
    tracing::info!(
        count = report.articles_extracted,
        "Step 2/3: extraction complete"
    );

    if extracted.is_empty() {
        report.errors.push("No content extracted".to_string());
        return Ok(report);
    }

    // Step 3: Embed and Store
    let batch = ExtractBatch {
        results: extracted,
        default_category_id: request.category_id,
        default_relevance_score: request.relevance_score,
    };

    match ingest_batch(batch, deps.embedding_service.as_ref(), &deps.db_pool).await {
        Ok(outcome) => {
            report.articles_stored = outcome.articles_created;
            report.article_ids = outcome.article_ids;
            report.errors.extend(outcome.errors);
            report.success = report.articles_stored > 0;
            tracing::info!(
                stored = report.articles_stored,
                "Step 3/3: storage complete"
            );
        }
        Err(e) => {
            report.errors.push(format!("Storage failed: {e}"));
        }
    }

    Ok(report)
}
