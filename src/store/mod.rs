pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::Submission;

/// Persistence boundary for submission records. One durable implementation
/// (Postgres) and one in-process fallback (memory).
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a fully-populated record. Writing an existing id replaces the
    /// previous record (last write wins, matching the overwrite-enabled
    /// object key in the media store).
    async fn create(&self, submission: &Submission) -> Result<(), AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Submission>, AppError>;

    /// All records, newest first.
    async fn list_all(&self) -> Result<Vec<Submission>, AppError>;
}
