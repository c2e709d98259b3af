use serde::{Deserialize, Serialize};

/// Excerpt settings shared by the search and extract endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ExcerptOptions {
    pub max_chars_per_result: usize,
}

/// Input for the Parallel Search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub objective: String,
    pub search_queries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpts: Option<ExcerptOptions>,
}

/// A single search hit: a ranked URL with optional title and excerpts.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchItem>,
}

/// Input for the Parallel Extract endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    pub objective: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpts: Option<ExcerptOptions>,
    pub full_content: bool,
}

/// Extracted page content and metadata for one URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpts: Vec<String>,
    #[serde(default)]
    pub full_content: Option<String>,
    /// Publish date as reported by the source, an unparsed string.
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub results: Vec<ExtractResult>,
}
