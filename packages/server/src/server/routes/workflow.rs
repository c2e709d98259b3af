//! Workflow endpoint: run the search -> extract -> store pipeline.

use axum::{extract::Extension, Json};

use crate::common::ServiceError;
use crate::kernel::{search_extract_store, WorkflowReport, WorkflowRequest};
use crate::server::app::AppState;

/// POST /workflow/search
pub async fn workflow_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<WorkflowRequest>,
) -> Result<Json<WorkflowReport>, ServiceError> {
    let report = search_extract_store(&state.deps, request).await?;
    Ok(Json(report))
}
