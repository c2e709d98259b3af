//! Category model.
//!
//! Categories are managed outside this service and read-only here apart
//! from creation. The articles FK is declared ON DELETE SET NULL at the
//! schema level; no application code observes category deletion.

use serde::Serialize;
use sqlx::PgPool;

use crate::common::ServiceResult;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    pub async fn create(
        name: &str,
        description: Option<&str>,
        pool: &PgPool,
    ) -> ServiceResult<Self> {
        let category = sqlx::query_as::<_, Self>(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(description)
        .fetch_one(pool)
        .await?;
        Ok(category)
    }
}
