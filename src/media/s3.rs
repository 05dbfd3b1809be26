use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::config::S3Config;

use super::MediaStore;

const VIDEO_FOLDER: &str = "video_templates";
const QR_FOLDER: &str = "qrcodes";

pub struct S3MediaStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3MediaStore {
    pub async fn new(config: &S3Config) -> Self {
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = S3ConfigBuilder::from(&aws_config);

        // Custom endpoint for MinIO-style deployments
        if let Some(ref endpoint_url) = config.endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }
        if config.force_path_style {
            builder = builder.force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        tracing::info!(
            bucket = %config.bucket,
            region = %config.region,
            "S3 media store initialized"
        );

        Self {
            client,
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn put(&self, key: &str, content_type: &str, body: Vec<u8>) -> Result<String, String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| format!("Failed to upload {key}: {e}"))?;

        Ok(format!("{}/{key}", self.public_base_url))
    }
}

#[async_trait]
impl MediaStore for S3MediaStore {
    async fn store_video(
        &self,
        id: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<String, String> {
        self.put(&video_key(id), content_type, data.to_vec()).await
    }

    async fn store_qr(&self, id: &str, png: Vec<u8>) -> Result<String, String> {
        self.put(&qr_key(id), "image/png", png).await
    }
}

pub fn video_key(id: &str) -> String {
    format!("{VIDEO_FOLDER}/user_{id}")
}

pub fn qr_key(id: &str) -> String {
    format!("{QR_FOLDER}/{id}.png")
}
