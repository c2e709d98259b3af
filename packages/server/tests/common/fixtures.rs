//! Test fixtures for creating test data.
//!
//! These use the model methods directly where one exists, and plain SQL
//! for rows the application never writes (seeded articles with explicit
//! vectors).

use anyhow::Result;
use chrono::{DateTime, Utc};
use pgvector::Vector;
use server_core::domains::articles::{Category, UserSettings};
use sqlx::PgPool;

/// Create a category, returning its id.
pub async fn seed_category(pool: &PgPool, name: &str) -> Result<i32> {
    let category = Category::create(name, None, pool).await?;
    Ok(category.id)
}

/// Create or replace a user's settings row.
pub async fn seed_settings(
    pool: &PgPool,
    user_id: i32,
    category_ids: &[i32],
    preference_vector: Option<Vec<f32>>,
) -> Result<()> {
    UserSettings::upsert(
        user_id,
        category_ids,
        preference_vector.map(Vector::from),
        pool,
    )
    .await?;
    Ok(())
}

/// Insert an article row with explicit fields, returning its id.
pub async fn seed_article(
    pool: &PgPool,
    text: &str,
    date_written: Option<&str>,
    category_id: Option<i32>,
    relevance_score: Option<i32>,
    vector: Option<Vec<f32>>,
) -> Result<i32> {
    let date_written: Option<DateTime<Utc>> = date_written
        .map(|raw| DateTime::parse_from_rfc3339(raw).map(|d| d.with_timezone(&Utc)))
        .transpose()?;

    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO articles (text, summary, relevance_score, date_written, source, category_id, vector)
        VALUES ($1, NULL, $2, $3, NULL, $4, $5)
        RETURNING id
        "#,
    )
    .bind(text)
    .bind(relevance_score)
    .bind(date_written)
    .bind(category_id)
    .bind(vector.map(Vector::from))
    .fetch_one(pool)
    .await?;

    Ok(id)
}
