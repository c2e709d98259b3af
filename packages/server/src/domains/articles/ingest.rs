//! Ingestion core.
//!
//! Converts a batch of content-provider extract results into article
//! rows. Handling is best-effort per item: each item either stages a row
//! or contributes one error string, and all successfully staged rows
//! commit together at the end. A commit failure rolls the whole set back
//! and surfaces as a batch-level database error, distinct from the
//! item-level error list.

use chrono::{DateTime, NaiveDate, Utc};
use parallel_client::ExtractResult;
use pgvector::Vector;
use serde::{Deserialize, Serialize};
use sqlx::{Acquire, PgPool};

use crate::common::{ServiceError, ServiceResult, EMBEDDING_DIM};
use crate::domains::articles::models::{Article, NewArticle};
use crate::kernel::BaseEmbeddingService;

/// Full-content fallback is capped at this many characters.
const MAX_TEXT_CHARS: usize = 10_000;

/// Batch ingestion request: provider extract output plus batch defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractBatch {
    pub results: Vec<ExtractResult>,
    #[serde(default)]
    pub default_category_id: Option<i32>,
    /// Default relevance score 1-10.
    #[serde(default = "default_relevance_score")]
    pub default_relevance_score: i32,
}

fn default_relevance_score() -> i32 {
    5
}

/// Batch ingestion report.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub success: bool,
    pub articles_created: usize,
    /// Created ids in processing order.
    pub article_ids: Vec<i32>,
    pub errors: Vec<String>,
}

/// Request shape for creating a single article directly.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleCreate {
    pub text: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub relevance_score: Option<i32>,
    #[serde(default)]
    pub date_written: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
}

fn validate_relevance_score(score: i32) -> ServiceResult<()> {
    if !(1..=10).contains(&score) {
        return Err(ServiceError::InvalidArgument(format!(
            "relevance_score must be between 1 and 10, got {score}"
        )));
    }
    Ok(())
}

/// Select the article text for one extract result: first excerpt,
/// else full content truncated to the cap.
fn select_text(result: &ExtractResult) -> Option<String> {
    if let Some(excerpt) = result.excerpts.first() {
        return Some(excerpt.clone());
    }
    result.full_content.as_ref().map(|full| {
        if full.len() > MAX_TEXT_CHARS {
            let mut cut = MAX_TEXT_CHARS;
            while !full.is_char_boundary(cut) {
                cut -= 1;
            }
            full[..cut].to_string()
        } else {
            full.clone()
        }
    })
}

/// Parse a provider publish date (RFC 3339, or a bare date). Unparseable
/// dates are logged and dropped; they never fail the item.
fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    tracing::warn!(publish_date = raw, "Could not parse publish date");
    None
}

/// Embed text for an article. Embedding failure degrades the item (null
/// vector) rather than failing it; only a wrong-dimension vector is a
/// hard per-item error, reported by the caller.
async fn embed_for_article(
    embedder: &dyn BaseEmbeddingService,
    text: &str,
    source: &str,
) -> Option<Vec<f32>> {
    match embedder.generate(text).await {
        Ok(Some(embedding)) => Some(embedding),
        Ok(None) => {
            tracing::warn!(source, "No embedding produced, storing article without vector");
            None
        }
        Err(e) => {
            tracing::warn!(source, error = %e, "Embedding failed, storing article without vector");
            None
        }
    }
}

/// Process a batch of extract results into article rows.
///
/// Each item is staged inside its own savepoint so a failed INSERT (for
/// example a wrong-dimension vector slipping past the length check)
/// cannot poison sibling items; the outer transaction commits once at
/// the end.
pub async fn ingest_batch(
    batch: ExtractBatch,
    embedder: &dyn BaseEmbeddingService,
    pool: &PgPool,
) -> ServiceResult<BatchOutcome> {
    validate_relevance_score(batch.default_relevance_score)?;

    let mut article_ids: Vec<i32> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    let mut tx = pool.begin().await?;

    for (idx, result) in batch.results.iter().enumerate() {
        let Some(text) = select_text(result) else {
            errors.push(format!(
                "Result {} ({}): No text content available",
                idx, result.url
            ));
            continue;
        };

        let date_written = result.publish_date.as_deref().and_then(parse_publish_date);

        let vector = embed_for_article(embedder, &text, &result.url).await;
        if let Some(v) = &vector {
            if v.len() != EMBEDDING_DIM {
                errors.push(format!(
                    "Result {} ({}): embedding has {} dimensions, expected {}",
                    idx,
                    result.url,
                    v.len(),
                    EMBEDDING_DIM
                ));
                continue;
            }
        }

        // Savepoint per item: a failed statement aborts only this item.
        let mut savepoint = tx.begin().await?;

        let staged = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO articles (text, summary, relevance_score, date_written, source, category_id, vector)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&text)
        .bind(&result.title)
        .bind(batch.default_relevance_score)
        .bind(date_written)
        .bind(&result.url)
        .bind(batch.default_category_id)
        .bind(vector.map(Vector::from))
        .fetch_one(&mut *savepoint)
        .await;

        match staged {
            Ok(id) => {
                savepoint.commit().await?;
                tracing::info!(article_id = id, url = %result.url, "Prepared article");
                article_ids.push(id);
            }
            Err(e) => {
                savepoint.rollback().await?;
                let error_msg = format!("Result {} ({}): {}", idx, result.url, e);
                tracing::error!("{error_msg}");
                errors.push(error_msg);
            }
        }
    }

    // Single commit for every staged row; failure here rolls all of them
    // back and escalates as a batch-level error.
    tx.commit().await?;

    let articles_created = article_ids.len();
    tracing::info!(articles_created, "Batch ingestion complete");

    Ok(BatchOutcome {
        success: articles_created > 0,
        articles_created,
        article_ids,
        errors,
    })
}

/// Create a single article with an embedding.
pub async fn create_article(
    request: ArticleCreate,
    embedder: &dyn BaseEmbeddingService,
    pool: &PgPool,
) -> ServiceResult<Article> {
    if let Some(score) = request.relevance_score {
        validate_relevance_score(score)?;
    }

    let vector = embed_for_article(embedder, &request.text, "direct create")
        .await
        .filter(|v| {
            if v.len() == EMBEDDING_DIM {
                true
            } else {
                tracing::warn!(
                    dims = v.len(),
                    "Dropping wrong-dimension embedding, storing article without vector"
                );
                false
            }
        });

    Article::create(
        NewArticle {
            text: request.text,
            summary: request.summary,
            relevance_score: request.relevance_score,
            date_written: request.date_written,
            source: request.source,
            category_id: request.category_id,
            vector: vector.map(Vector::from),
        },
        pool,
    )
    .await
}
