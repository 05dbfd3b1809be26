pub mod local;
pub mod s3;

pub use local::LocalMediaStore;
pub use s3::S3MediaStore;

use async_trait::async_trait;
use bytes::Bytes;

/// Narrow adapter boundary to wherever uploaded media lives: bytes and an
/// identifier in, an externally-reachable reference out. No retries; errors
/// propagate to the intake pipeline.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Store the uploaded video under a deterministic key derived from `id`,
    /// replacing any previous object for the same id. Returns the public URL.
    async fn store_video(
        &self,
        id: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<String, String>;

    /// Store the rendered QR image for `id`. Returns the reference path or URL.
    async fn store_qr(&self, id: &str, png: Vec<u8>) -> Result<String, String>;
}
