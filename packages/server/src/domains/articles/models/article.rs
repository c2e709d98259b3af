//! Article model - stored news content with an optional embedding
//!
//! Articles are append-mostly: the ingestion core creates them, the
//! retrieval core reads them, and deletion happens individually by id.
//! There is no partial-field update path.

use chrono::{DateTime, Utc};
use pgvector::Vector;
use serde::Serialize;
use sqlx::PgPool;

use crate::common::{ServiceError, ServiceResult};

/// A stored article row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub id: i32,
    /// Main content, taken from a provider excerpt or truncated full content.
    pub text: String,
    /// Usually the source page title.
    pub summary: Option<String>,
    /// Caller-supplied relevance, 1-10.
    pub relevance_score: Option<i32>,
    pub date_written: Option<DateTime<Utc>>,
    pub date_created: DateTime<Utc>,
    pub source: Option<String>,
    pub category_id: Option<i32>,
    /// Absent when embedding generation failed for this article.
    #[serde(skip_serializing)]
    pub vector: Option<Vector>,
}

/// A staged article row, ready to insert.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub text: String,
    pub summary: Option<String>,
    pub relevance_score: Option<i32>,
    pub date_written: Option<DateTime<Utc>>,
    pub source: Option<String>,
    pub category_id: Option<i32>,
    pub vector: Option<Vector>,
}

impl Article {
    /// Insert a new article and return the created row.
    pub async fn create(new: NewArticle, pool: &PgPool) -> ServiceResult<Self> {
        let article = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO articles (text, summary, relevance_score, date_written, source, category_id, vector)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new.text)
        .bind(new.summary)
        .bind(new.relevance_score)
        .bind(new.date_written)
        .bind(new.source)
        .bind(new.category_id)
        .bind(new.vector)
        .fetch_one(pool)
        .await?;
        Ok(article)
    }

    /// Find article by ID (optional)
    pub async fn find_by_id_optional(id: i32, pool: &PgPool) -> ServiceResult<Option<Self>> {
        let article = sqlx::query_as::<_, Self>("SELECT * FROM articles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(article)
    }

    /// List articles with offset pagination, newest first.
    pub async fn list(skip: i64, limit: i64, pool: &PgPool) -> ServiceResult<Vec<Self>> {
        let articles = sqlx::query_as::<_, Self>(
            "SELECT * FROM articles
             ORDER BY date_created DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;
        Ok(articles)
    }

    /// Count all articles.
    pub async fn count(pool: &PgPool) -> ServiceResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete an article by ID. Unknown ids are a NotFound error.
    pub async fn delete(id: i32, pool: &PgPool) -> ServiceResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound {
                what: "article",
                id,
            });
        }
        Ok(())
    }
}
