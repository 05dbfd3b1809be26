pub mod config;
pub mod email;
pub mod error;
pub mod intake;
pub mod media;
pub mod models;
pub mod qr;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, StorageMode};
use crate::email::Notifier;
use crate::media::MediaStore;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

pub fn build_app(
    store: Arc<dyn SubmissionStore>,
    media: Arc<dyn MediaStore>,
    config: Config,
) -> Router {
    // Build notifier if SMTP is configured; submissions work without it
    let notifier = config
        .smtp
        .as_ref()
        .and_then(|smtp| match Notifier::new(smtp) {
            Ok(notifier) => {
                tracing::info!("SMTP notifier configured");
                Some(Arc::new(notifier))
            }
            Err(e) => {
                tracing::warn!("SMTP notifier not available: {e}");
                None
            }
        });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let max_body_size = config.max_body_size;

    // In offline mode QR images and videos live on disk and get served here
    let uploads_dir = match &config.storage {
        StorageMode::Offline { upload_dir } => Some(upload_dir.clone()),
        StorageMode::Durable { .. } => None,
    };

    let state: SharedState = Arc::new(AppState {
        config,
        store,
        media,
        notifier,
    });

    let mut app = Router::new()
        .merge(routes::routes())
        .route("/health", axum::routing::get(health));

    if let Some(dir) = uploads_dir {
        app = app.nest_service("/uploads", ServeDir::new(dir));
    }

    app.layer(DefaultBodyLimit::max(max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
