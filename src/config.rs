use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub frontend_base_url: String,
    pub max_body_size: usize,
    pub log_level: String,
    pub storage: StorageMode,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub enum StorageMode {
    /// Canonical deployment: videos and QR images in object storage,
    /// records in Postgres.
    Durable { database_url: String, s3: S3Config },
    /// Degraded fallback: media on local disk under the upload directory,
    /// records in memory. Nothing survives a restart.
    Offline { upload_dir: PathBuf },
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub admin_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("CLIPFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CLIPFORM_HOST: {e}"))?;

        let port: u16 = env_or("CLIPFORM_PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid CLIPFORM_PORT: {e}"))?;

        let frontend_base_url = env_required("FRONTEND_URL")?;

        let max_body_size: usize = env_or("CLIPFORM_MAX_BODY_SIZE", "104857600")
            .parse()
            .map_err(|e| format!("Invalid CLIPFORM_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("CLIPFORM_LOG_LEVEL", "info");

        let storage = match env_or("CLIPFORM_STORAGE", "durable").as_str() {
            "offline" => StorageMode::Offline {
                upload_dir: PathBuf::from(env_or("CLIPFORM_UPLOAD_DIR", "uploads")),
            },
            _ => StorageMode::Durable {
                database_url: env_required("DATABASE_URL")?,
                s3: S3Config {
                    bucket: env_required("CLIPFORM_S3_BUCKET")?,
                    region: env_or("CLIPFORM_S3_REGION", "us-east-1"),
                    endpoint_url: std::env::var("CLIPFORM_S3_ENDPOINT").ok(),
                    force_path_style: env_or("CLIPFORM_S3_FORCE_PATH_STYLE", "false") == "true",
                    public_base_url: env_required("CLIPFORM_S3_PUBLIC_URL")?,
                },
            },
        };

        let smtp = match (
            std::env::var("CLIPFORM_SMTP_HOST").ok(),
            std::env::var("CLIPFORM_SMTP_PORT").ok(),
            std::env::var("CLIPFORM_SMTP_USER").ok(),
            std::env::var("CLIPFORM_SMTP_PASS").ok(),
            std::env::var("CLIPFORM_SMTP_FROM").ok(),
            std::env::var("CLIPFORM_ADMIN_EMAIL").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from), Some(admin_email)) => {
                Some(SmtpConfig {
                    host,
                    port: port
                        .parse()
                        .map_err(|e| format!("Invalid CLIPFORM_SMTP_PORT: {e}"))?,
                    user,
                    pass,
                    from,
                    admin_email,
                })
            }
            _ => None,
        };

        Ok(Config {
            host,
            port,
            frontend_base_url,
            max_body_size,
            log_level,
            storage,
            smtp,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
