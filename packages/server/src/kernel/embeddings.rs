use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::kernel::BaseEmbeddingService;

/// Input longer than this is truncated before the provider call
/// (~8000 tokens for text-embedding-3-small).
const MAX_INPUT_CHARS: usize = 30_000;

/// Embedding service backed by an Azure OpenAI deployment of
/// text-embedding-3-small.
pub struct AzureEmbeddingService {
    client: Client,
    api_key: String,
    endpoint: String,
    api_version: String,
    deployment: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    input: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl AzureEmbeddingService {
    pub fn new(
        api_key: String,
        endpoint: String,
        api_version: String,
        deployment: String,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_version,
            deployment,
        }
    }
}

#[async_trait]
impl BaseEmbeddingService for AzureEmbeddingService {
    async fn generate(&self, text: &str) -> Result<Option<Vec<f32>>> {
        if text.trim().is_empty() {
            tracing::warn!("Empty text provided for embedding");
            return Ok(None);
        }

        let input = if text.len() > MAX_INPUT_CHARS {
            tracing::warn!(
                chars = text.len(),
                "Text too long, truncating to {} chars",
                MAX_INPUT_CHARS
            );
            let mut cut = MAX_INPUT_CHARS;
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            &text[..cut]
        } else {
            text
        };

        let url = format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.endpoint, self.deployment, self.api_version
        );

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&EmbeddingRequest {
                input: input.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            anyhow::bail!("Azure OpenAI API error {}: {}", status, body);
        }

        let embedding_response: EmbeddingResponse = response.json().await?;

        let embedding = embedding_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No embedding returned"))?
            .embedding;

        tracing::debug!(dims = embedding.len(), "Generated embedding");
        Ok(Some(embedding))
    }
}
