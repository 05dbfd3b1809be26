use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use clipform::config::{Config, StorageMode};
use clipform::media::{LocalMediaStore, MediaStore, S3MediaStore};
use clipform::store::{MemoryStore, PgStore, SubmissionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting clipform");

    let (store, media): (Arc<dyn SubmissionStore>, Arc<dyn MediaStore>) = match &config.storage {
        StorageMode::Durable { database_url, s3 } => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            tracing::info!("Migrations applied");

            let media = S3MediaStore::new(s3).await;
            (Arc::new(PgStore::new(pool)), Arc::new(media))
        }
        StorageMode::Offline { upload_dir } => {
            tracing::warn!("Running in offline mode: records are not durable");
            (
                Arc::new(MemoryStore::new()),
                Arc::new(LocalMediaStore::new(upload_dir.clone())),
            )
        }
    };

    let addr = SocketAddr::new(config.host, config.port);
    let app = clipform::build_app(store, media, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
