//! Pure Parallel REST API client.
//!
//! A minimal client for Parallel's Search and Extract endpoints. Search
//! discovers ranked URLs for an objective; Extract pulls excerpts, full
//! content, and publish metadata for a set of URLs.
//!
//! # Example
//!
//! ```rust,ignore
//! use parallel_client::ParallelClient;
//!
//! let client = ParallelClient::new("your-api-key".into());
//!
//! let found = client
//!     .search("Latest AI news", &["Latest AI news".into()], Some(10), 8000)
//!     .await?;
//! let urls: Vec<String> = found.iter().map(|r| r.url.clone()).collect();
//!
//! let extracted = client
//!     .extract(&urls, "Extract detailed content for: Latest AI news", 50_000, true)
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{ParallelError, Result};
pub use types::{ExtractRequest, ExtractResult, SearchItem, SearchRequest};

use types::{ExcerptOptions, ExtractResponse, SearchResponse};

const BASE_URL: &str = "https://api.parallel.ai/v1beta";

pub struct ParallelClient {
    client: reqwest::Client,
    api_key: String,
}

impl ParallelClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Search the web for URLs matching an objective.
    pub async fn search(
        &self,
        objective: &str,
        search_queries: &[String],
        max_results: Option<usize>,
        max_chars_per_result: usize,
    ) -> Result<Vec<SearchItem>> {
        let request = SearchRequest {
            objective: objective.to_string(),
            search_queries: search_queries.to_vec(),
            max_results,
            excerpts: Some(ExcerptOptions {
                max_chars_per_result,
            }),
        };

        let url = format!("{}/search", BASE_URL);
        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ParallelError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let search_resp: SearchResponse = resp.json().await?;
        tracing::info!(count = search_resp.results.len(), "Parallel search done");
        Ok(search_resp.results)
    }

    /// Extract content from a set of URLs.
    pub async fn extract(
        &self,
        urls: &[String],
        objective: &str,
        max_chars_per_result: usize,
        full_content: bool,
    ) -> Result<Vec<ExtractResult>> {
        let request = ExtractRequest {
            urls: urls.to_vec(),
            objective: objective.to_string(),
            excerpts: Some(ExcerptOptions {
                max_chars_per_result,
            }),
            full_content,
        };

        let url = format!("{}/extract", BASE_URL);
        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ParallelError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let extract_resp: ExtractResponse = resp.json().await?;
        tracing::info!(count = extract_resp.results.len(), "Parallel extract done");
        Ok(extract_resp.results)
    }
}
