//! Application setup and router assembly.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    batch_handler, create_article_handler, delete_article_handler, get_article_handler,
    health_handler, list_articles_handler, retrieve_by_categories_handler,
    retrieve_by_ids_handler, retrieve_by_preferences_handler, search_articles_handler,
    workflow_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the axum application with all routes and layers.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState {
        db_pool: deps.db_pool.clone(),
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/articles", post(create_article_handler).get(list_articles_handler))
        .route(
            "/articles/:id",
            get(get_article_handler).delete(delete_article_handler),
        )
        .route("/articles/batch", post(batch_handler))
        .route(
            "/articles/retrieve/preferences",
            post(retrieve_by_preferences_handler),
        )
        .route(
            "/articles/retrieve/categories",
            post(retrieve_by_categories_handler),
        )
        .route("/articles/retrieve/ids", post(retrieve_by_ids_handler))
        .route("/articles/retrieve/search", post(search_articles_handler))
        .route("/workflow/search", post(workflow_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
