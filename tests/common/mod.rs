use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use clipform::config::{Config, StorageMode};
use clipform::media::LocalMediaStore;
use clipform::store::MemoryStore;

/// A running test server instance in offline mode with a dedicated
/// temporary upload directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub upload_dir: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a multipart form, return (body, status).
    pub async fn submit(
        &self,
        fields: &[(&str, &str)],
        video: Option<(&str, Vec<u8>)>,
    ) -> (Value, StatusCode) {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in fields {
            form = form.text(name.to_string(), value.to_string());
        }
        if let Some((filename, bytes)) = video {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name(filename.to_string())
                .mime_str("video/mp4")
                .expect("invalid mime");
            form = form.part("video", part);
        }

        let resp = self
            .client
            .post(self.url("/submit"))
            .multipart(form)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit with the full field set and a small fake video, return the new id.
    pub async fn submit_ok(&self) -> String {
        let (body, status) = self
            .submit(
                &[
                    ("name", "Ana"),
                    ("email", "a@x.com"),
                    ("company", "Acme"),
                    ("location", "NY"),
                    ("template", "t1"),
                ],
                Some(("clip.mp4", fake_video())),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "submit failed: {body}");
        body["id"].as_str().expect("missing id").to_string()
    }

    /// GET a path and parse the JSON body.
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// A few bytes with an mp4-looking header; content is never inspected.
pub fn fake_video() -> Vec<u8> {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypmp42");
    data.extend_from_slice(&[0u8; 64]);
    data
}

/// Spawn a test app in offline mode with a fresh upload directory.
pub async fn spawn_app() -> TestApp {
    let upload_dir = std::env::temp_dir().join(format!(
        "clipform_test_{}",
        Uuid::now_v7().to_string().replace('-', "")
    ));
    std::fs::create_dir_all(&upload_dir).expect("Failed to create upload dir");

    spawn_app_with_dir(upload_dir).await
}

/// Spawn a test app against a caller-provided upload directory, which may be
/// deliberately broken to exercise storage failures.
pub async fn spawn_app_with_dir(upload_dir: PathBuf) -> TestApp {
    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        frontend_base_url: "http://frontend.test".to_string(),
        max_body_size: 10 * 1024 * 1024,
        log_level: "warn".to_string(),
        storage: StorageMode::Offline {
            upload_dir: upload_dir.clone(),
        },
        smtp: None,
    };

    let store = Arc::new(MemoryStore::new());
    let media = Arc::new(LocalMediaStore::new(upload_dir.clone()));
    let app = clipform::build_app(store, media, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        upload_dir,
    }
}

/// Remove the temp upload directory after tests complete.
pub fn cleanup(app: TestApp) {
    let _ = std::fs::remove_dir_all(&app.upload_dir);
}
