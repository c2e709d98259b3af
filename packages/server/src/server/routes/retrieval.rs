//! Retrieval endpoints: the four modes of the retrieval core.

use axum::{extract::Extension, Json};
use serde::Deserialize;

use crate::common::ServiceError;
use crate::domains::articles::{ArticleDigest, ArticleService, ScoredArticle};
use crate::server::app::AppState;

fn default_limit() -> i64 {
    10
}

fn default_threshold() -> f64 {
    0.7
}

#[derive(Debug, Deserialize)]
pub struct PreferencesQuery {
    pub user_id: i32,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
}

/// POST /articles/retrieve/preferences
pub async fn retrieve_by_preferences_handler(
    Extension(state): Extension<AppState>,
    Json(query): Json<PreferencesQuery>,
) -> Result<Json<Vec<ScoredArticle>>, ServiceError> {
    let articles = ArticleService::get_articles_by_user_preferences(
        query.user_id,
        query.limit,
        query.similarity_threshold,
        &state.db_pool,
    )
    .await?;
    Ok(Json(articles))
}

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    pub category_ids: Vec<i32>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// POST /articles/retrieve/categories
pub async fn retrieve_by_categories_handler(
    Extension(state): Extension<AppState>,
    Json(query): Json<CategoriesQuery>,
) -> Result<Json<Vec<ArticleDigest>>, ServiceError> {
    let articles =
        ArticleService::get_articles_by_category(&query.category_ids, query.limit, &state.db_pool)
            .await?;
    Ok(Json(articles))
}

#[derive(Debug, Deserialize)]
pub struct IdsQuery {
    pub article_ids: Vec<i32>,
}

/// POST /articles/retrieve/ids
pub async fn retrieve_by_ids_handler(
    Extension(state): Extension<AppState>,
    Json(query): Json<IdsQuery>,
) -> Result<Json<Vec<ArticleDigest>>, ServiceError> {
    let articles = ArticleService::get_articles_by_ids(&query.article_ids, &state.db_pool).await?;
    Ok(Json(articles))
}

#[derive(Debug, Deserialize)]
pub struct TextQuery {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub category_ids: Option<Vec<i32>>,
}

/// POST /articles/retrieve/search
pub async fn search_articles_handler(
    Extension(state): Extension<AppState>,
    Json(query): Json<TextQuery>,
) -> Result<Json<Vec<ScoredArticle>>, ServiceError> {
    let articles = ArticleService::search_articles_by_text(
        &query.query,
        query.limit,
        query.category_ids.as_deref(),
        state.deps.embedding_service.as_ref(),
        &state.db_pool,
    )
    .await?;
    Ok(Json(articles))
}
