pub mod submissions;
pub mod submit;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/submit", post(submit::submit))
        .route("/user/{id}", get(submissions::get))
        .route("/admin/submissions", get(submissions::list))
}
