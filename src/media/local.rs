use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use super::MediaStore;

/// Offline fallback: media lands under the upload directory and is served
/// statically at /uploads.
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    async fn write(&self, rel: &str, data: Vec<u8>) -> Result<String, String> {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

        Ok(format!("/uploads/{rel}"))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store_video(
        &self,
        id: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<String, String> {
        let ext = extension_for(content_type);
        self.write(&format!("videos/user_{id}.{ext}"), data.to_vec())
            .await
    }

    async fn store_qr(&self, id: &str, png: Vec<u8>) -> Result<String, String> {
        self.write(&format!("qrcodes/{id}.png"), png).await
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "video/quicktime" => "mov",
        _ => "bin",
    }
}
