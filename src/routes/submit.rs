use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::intake::{parser, pipeline};
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, Response> {
    let (fields, video) = parser::parse_submission(&headers, body)
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(json!({"error": e}))).into_response())?;

    let Some(video) = video else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing video file"})),
        )
            .into_response());
    };

    let submission = pipeline::run(&state, fields, video).await.map_err(|e| {
        tracing::error!("Error during submission: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Submission failed"})),
        )
            .into_response()
    })?;

    Ok(Json(json!({ "id": submission.id })).into_response())
}
