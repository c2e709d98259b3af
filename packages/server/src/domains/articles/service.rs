//! Retrieval core.
//!
//! Four read-only retrieval modes over the articles table, each returning
//! a ranked, bounded projection. Similarity is cosine: the pgvector `<=>`
//! operator yields cosine distance, so `1 - (a.vector <=> v)` is the
//! similarity score in [0, 1] for near-unit-norm embeddings.
//!
//! Ordering contract: similarity modes rank by similarity descending with
//! `date_written DESC NULLS LAST` as the tie-break; undated articles
//! always sort after dated ones.

use pgvector::Vector;
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{ServiceError, ServiceResult};
use crate::domains::articles::models::UserSettings;
use crate::kernel::BaseEmbeddingService;

/// Article projection for similarity-ranked retrieval modes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ScoredArticle {
    pub id: i32,
    pub text: String,
    pub summary: Option<String>,
    pub relevance_score: Option<i32>,
    pub date_written: Option<chrono::DateTime<chrono::Utc>>,
    pub source: Option<String>,
    pub category_name: Option<String>,
    pub similarity_score: f64,
}

/// Article projection for modes without a similarity score.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleDigest {
    pub id: i32,
    pub text: String,
    pub summary: Option<String>,
    pub relevance_score: Option<i32>,
    pub date_written: Option<chrono::DateTime<chrono::Utc>>,
    pub source: Option<String>,
    pub category_name: Option<String>,
}

/// Settings projection exposed to callers (without the raw vector).
#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub id: i32,
    pub user_id: i32,
    pub category_ids: Option<Vec<i32>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

fn validate_limit(limit: i64) -> ServiceResult<()> {
    if !(1..=50).contains(&limit) {
        return Err(ServiceError::InvalidArgument(format!(
            "limit must be between 1 and 50, got {limit}"
        )));
    }
    Ok(())
}

fn validate_threshold(threshold: f64) -> ServiceResult<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ServiceError::InvalidArgument(format!(
            "similarity_threshold must be between 0 and 1, got {threshold}"
        )));
    }
    Ok(())
}

/// Service for retrieving articles from the vector database.
pub struct ArticleService;

impl ArticleService {
    /// Retrieve articles ranked by similarity to the user's preference
    /// vector.
    ///
    /// A missing settings row, or one without a preference vector, yields
    /// an empty list rather than an error. Only articles with a stored
    /// vector participate.
    pub async fn get_articles_by_user_preferences(
        user_id: i32,
        limit: i64,
        similarity_threshold: f64,
        pool: &PgPool,
    ) -> ServiceResult<Vec<ScoredArticle>> {
        validate_limit(limit)?;
        validate_threshold(similarity_threshold)?;

        let articles = sqlx::query_as::<_, ScoredArticle>(
            r#"
            SELECT
                a.id,
                a.text,
                a.summary,
                a.relevance_score,
                a.date_written,
                a.source,
                c.name AS category_name,
                1 - (a.vector <=> s.preference_vector) AS similarity_score
            FROM articles a
            LEFT JOIN categories c ON a.category_id = c.id
            CROSS JOIN settings s
            WHERE s.user_id = $1
              AND s.preference_vector IS NOT NULL
              AND a.vector IS NOT NULL
              AND 1 - (a.vector <=> s.preference_vector) >= $2
            ORDER BY similarity_score DESC, a.date_written DESC NULLS LAST
            LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(similarity_threshold)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    /// Retrieve recent articles in any of the given categories.
    ///
    /// An empty `category_ids` list yields an empty result, never the
    /// whole table.
    pub async fn get_articles_by_category(
        category_ids: &[i32],
        limit: i64,
        pool: &PgPool,
    ) -> ServiceResult<Vec<ArticleDigest>> {
        validate_limit(limit)?;

        let articles = sqlx::query_as::<_, ArticleDigest>(
            r#"
            SELECT
                a.id,
                a.text,
                a.summary,
                a.relevance_score,
                a.date_written,
                a.source,
                c.name AS category_name
            FROM articles a
            LEFT JOIN categories c ON a.category_id = c.id
            WHERE a.category_id = ANY($1)
            ORDER BY a.date_written DESC NULLS LAST, a.relevance_score DESC NULLS LAST
            LIMIT $2
            "#,
        )
        .bind(category_ids)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    /// Retrieve specific articles by id. Unknown ids are silently
    /// omitted, so the result may be shorter than the input.
    pub async fn get_articles_by_ids(
        article_ids: &[i32],
        pool: &PgPool,
    ) -> ServiceResult<Vec<ArticleDigest>> {
        let articles = sqlx::query_as::<_, ArticleDigest>(
            r#"
            SELECT
                a.id,
                a.text,
                a.summary,
                a.relevance_score,
                a.date_written,
                a.source,
                c.name AS category_name
            FROM articles a
            LEFT JOIN categories c ON a.category_id = c.id
            WHERE a.id = ANY($1)
            ORDER BY a.date_written DESC NULLS LAST
            "#,
        )
        .bind(article_ids)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    /// Search articles by similarity to a free-text query.
    ///
    /// Unlike the preference mode there is no minimum-similarity filter;
    /// the closest `limit` articles are returned regardless of score.
    /// A query the provider cannot embed fails with EmbeddingUnavailable
    /// before the datastore is touched.
    pub async fn search_articles_by_text(
        query_text: &str,
        limit: i64,
        category_ids: Option<&[i32]>,
        embedder: &dyn BaseEmbeddingService,
        pool: &PgPool,
    ) -> ServiceResult<Vec<ScoredArticle>> {
        validate_limit(limit)?;

        let embedding = embedder
            .generate(query_text)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Query embedding failed");
                ServiceError::EmbeddingUnavailable
            })?
            .ok_or(ServiceError::EmbeddingUnavailable)?;
        let query_vector = Vector::from(embedding);

        let articles = match category_ids {
            Some(ids) => {
                sqlx::query_as::<_, ScoredArticle>(
                    r#"
                    SELECT
                        a.id,
                        a.text,
                        a.summary,
                        a.relevance_score,
                        a.date_written,
                        a.source,
                        c.name AS category_name,
                        1 - (a.vector <=> $1) AS similarity_score
                    FROM articles a
                    LEFT JOIN categories c ON a.category_id = c.id
                    WHERE a.vector IS NOT NULL
                      AND a.category_id = ANY($2)
                    ORDER BY similarity_score DESC, a.date_written DESC NULLS LAST
                    LIMIT $3
                    "#,
                )
                .bind(&query_vector)
                .bind(ids)
                .bind(limit)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ScoredArticle>(
                    r#"
                    SELECT
                        a.id,
                        a.text,
                        a.summary,
                        a.relevance_score,
                        a.date_written,
                        a.source,
                        c.name AS category_name,
                        1 - (a.vector <=> $1) AS similarity_score
                    FROM articles a
                    LEFT JOIN categories c ON a.category_id = c.id
                    WHERE a.vector IS NOT NULL
                    ORDER BY similarity_score DESC, a.date_written DESC NULLS LAST
                    LIMIT $2
                    "#,
                )
                .bind(&query_vector)
                .bind(limit)
                .fetch_all(pool)
                .await?
            }
        };

        Ok(articles)
    }

    /// Retrieve a user's settings (category preferences, no vector).
    pub async fn get_user_settings(
        user_id: i32,
        pool: &PgPool,
    ) -> ServiceResult<Option<SettingsView>> {
        let settings = UserSettings::find_by_user_id(user_id, pool).await?;
        Ok(settings.map(|s| SettingsView {
            id: s.id,
            user_id: s.user_id,
            category_ids: s.category_ids,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }))
    }
}
