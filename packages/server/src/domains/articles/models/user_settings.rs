//! User settings: topical category preferences plus an aggregate
//! preference vector in the same embedding space as article vectors.

use chrono::{DateTime, Utc};
use pgvector::Vector;
use serde::Serialize;
use sqlx::PgPool;

use crate::common::ServiceResult;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserSettings {
    pub id: i32,
    pub user_id: i32,
    pub category_ids: Option<Vec<i32>>,
    #[serde(skip_serializing)]
    pub preference_vector: Option<Vector>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSettings {
    pub async fn find_by_user_id(user_id: i32, pool: &PgPool) -> ServiceResult<Option<Self>> {
        let settings = sqlx::query_as::<_, Self>("SELECT * FROM settings WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(settings)
    }

    /// Insert or replace the settings row for a user.
    pub async fn upsert(
        user_id: i32,
        category_ids: &[i32],
        preference_vector: Option<Vector>,
        pool: &PgPool,
    ) -> ServiceResult<Self> {
        let settings = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO settings (user_id, category_ids, preference_vector)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET category_ids = EXCLUDED.category_ids,
                preference_vector = EXCLUDED.preference_vector,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(category_ids)
        .bind(preference_vector)
        .fetch_one(pool)
        .await?;
        Ok(settings)
    }
}
