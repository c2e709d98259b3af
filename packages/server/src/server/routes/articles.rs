//! Article CRUD and batch ingestion endpoints.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::common::ServiceError;
use crate::domains::articles::{
    create_article, ingest_batch, Article, ArticleCreate, BatchOutcome, ExtractBatch,
};
use crate::server::app::AppState;

/// POST /articles - create a single article with an embedding
pub async fn create_article_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ArticleCreate>,
) -> Result<(StatusCode, Json<Article>), ServiceError> {
    let article = create_article(
        request,
        state.deps.embedding_service.as_ref(),
        &state.db_pool,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_page_size")]
    pub limit: i64,
}

fn default_page_size() -> i64 {
    100
}

/// GET /articles - list articles with offset pagination
pub async fn list_articles_handler(
    Extension(state): Extension<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Article>>, ServiceError> {
    let articles = Article::list(page.skip, page.limit, &state.db_pool).await?;
    Ok(Json(articles))
}

/// GET /articles/:id
pub async fn get_article_handler(
    Extension(state): Extension<AppState>,
    Path(article_id): Path<i32>,
) -> Result<Json<Article>, ServiceError> {
    let article = Article::find_by_id_optional(article_id, &state.db_pool)
        .await?
        .ok_or(ServiceError::NotFound {
            what: "article",
            id: article_id,
        })?;
    Ok(Json(article))
}

/// DELETE /articles/:id
pub async fn delete_article_handler(
    Extension(state): Extension<AppState>,
    Path(article_id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    Article::delete(article_id, &state.db_pool).await?;
    tracing::info!(article_id, "Deleted article");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /articles/batch - ingest a batch of extract results
pub async fn batch_handler(
    Extension(state): Extension<AppState>,
    Json(batch): Json<ExtractBatch>,
) -> Result<Json<BatchOutcome>, ServiceError> {
    let outcome = ingest_batch(
        batch,
        state.deps.embedding_service.as_ref(),
        &state.db_pool,
    )
    .await?;
    Ok(Json(outcome))
}
