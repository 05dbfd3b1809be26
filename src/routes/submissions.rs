use axum::Json;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Submission>, AppError> {
    let submission = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Not found".to_string()))?;
    Ok(Json(submission))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.store.list_all().await?;
    Ok(Json(submissions))
}
