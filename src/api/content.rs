//! Content document endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResult};
use crate::db::RevisionInfo;
use crate::errors::AppError;
use crate::models::{ContentDocument, WriteAction, WriteOutcome};
use crate::AppState;

/// GET /api/content - The stored content document.
pub async fn get_content(State(state): State<AppState>) -> Result<Json<ContentDocument>, AppError> {
    Ok(Json(state.repo.get_document().await?))
}

/// GET /api/content/revision - Current revision, for cheap change detection.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info = state.repo.get_revision_info().await?;
    let revision_id = revision_info.revision_id;
    success(revision_info, revision_id)
}

/// POST /api/content - Apply one `{"action", "payload"}` write.
///
/// The body is read as plain text: clients send `text/plain` to stay a simple
/// cross-origin request.
pub async fn write_content(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<WriteOutcome>, AppError> {
    let action: WriteAction = serde_json::from_str(&body)?;
    let revision_id = state.repo.apply_write(action).await?;
    Ok(Json(WriteOutcome::ok(revision_id)))
}
