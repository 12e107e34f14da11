//! Aspiration form endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Aspiration, AspirationSubmission};
use crate::AppState;

/// POST /api/aspirations - Submit an aspiration.
///
/// Parsed by hand like content writes, so a malformed body still gets the
/// `{"success": false, "error"}` envelope.
pub async fn submit_aspiration(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<Aspiration> {
    let submission: AspirationSubmission = serde_json::from_str(&body)?;
    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Required fields are empty: {}",
            missing.join(", ")
        )));
    }

    let aspiration = state.repo.create_aspiration(&submission).await?;
    tracing::info!("Aspiration {} received", aspiration.id);

    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(aspiration, revision_id)
}

/// GET /api/aspirations - All submissions, newest first.
pub async fn list_aspirations(State(state): State<AppState>) -> ApiResult<Vec<Aspiration>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(state.repo.list_aspirations().await?, revision_id)
}
