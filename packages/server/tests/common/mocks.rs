//! Mock infrastructure services for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use parallel_client::{ExtractResult, SearchItem};
use server_core::common::EMBEDDING_DIM;
use server_core::kernel::{BaseContentService, BaseEmbeddingService};

/// Unit vector along one axis of the embedding space. Two distinct axes
/// have cosine similarity 0; identical axes have similarity 1.
pub fn basis_vector(axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; EMBEDDING_DIM];
    v[axis] = 1.0;
    v
}

/// Mock embedding service with canned per-text responses.
///
/// Mirrors the real service's contract: whitespace-only input returns
/// `None` without counting as a provider call.
#[derive(Default)]
pub struct MockEmbeddingService {
    responses: Mutex<HashMap<String, Vec<f32>>>,
    fallback: Mutex<Option<Vec<f32>>>,
    fail: bool,
    provider_calls: AtomicUsize,
}

impl MockEmbeddingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map an exact input text to a vector.
    pub fn with_response(self, text: &str, vector: Vec<f32>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(text.to_string(), vector);
        self
    }

    /// Vector returned for any text without a mapped response.
    pub fn with_fallback(self, vector: Vec<f32>) -> Self {
        *self.fallback.lock().unwrap() = Some(vector);
        self
    }

    /// Every provider call fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of times the provider was actually invoked.
    pub fn provider_calls(&self) -> usize {
        self.provider_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseEmbeddingService for MockEmbeddingService {
    async fn generate(&self, text: &str) -> Result<Option<Vec<f32>>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        self.provider_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            anyhow::bail!("mock embedding provider down");
        }

        if let Some(vector) = self.responses.lock().unwrap().get(text) {
            return Ok(Some(vector.clone()));
        }
        Ok(self.fallback.lock().unwrap().clone())
    }
}

/// Mock content provider with fixed search and extract results.
#[derive(Default)]
pub struct MockContentService {
    search_results: Vec<SearchItem>,
    extract_results: Vec<ExtractResult>,
    fail_search: bool,
    fail_extract: bool,
}

impl MockContentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_results(mut self, results: Vec<SearchItem>) -> Self {
        self.search_results = results;
        self
    }

    pub fn with_extract_results(mut self, results: Vec<ExtractResult>) -> Self {
        self.extract_results = results;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn failing_extract(mut self) -> Self {
        self.fail_extract = true;
        self
    }
}

#[async_trait]
impl BaseContentService for MockContentService {
    async fn search(
        &self,
        _objective: &str,
        _search_queries: &[String],
        max_results: usize,
    ) -> Result<Vec<SearchItem>> {
        if self.fail_search {
            anyhow::bail!("mock search provider down");
        }
        Ok(self
            .search_results
            .iter()
            .take(max_results)
            .cloned()
            .collect())
    }

    async fn extract(&self, urls: &[String], _objective: &str) -> Result<Vec<ExtractResult>> {
        if self.fail_extract {
            anyhow::bail!("mock extract provider down");
        }
        Ok(self
            .extract_results
            .iter()
            .filter(|r| urls.contains(&r.url))
            .cloned()
            .collect())
    }
}

/// Convenience constructor for a search hit.
pub fn search_item(url: &str, title: &str) -> SearchItem {
    SearchItem {
        url: url.to_string(),
        title: Some(title.to_string()),
        excerpts: Vec::new(),
    }
}

/// Convenience constructor for an extract result.
pub fn extract_item(url: &str, title: Option<&str>, excerpts: &[&str]) -> ExtractResult {
    ExtractResult {
        url: url.to_string(),
        title: title.map(String::from),
        excerpts: excerpts.iter().map(|s| s.to_string()).collect(),
        full_content: None,
        publish_date: None,
        status: None,
    }
}
