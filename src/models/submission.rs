use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed form intake. Fully populated before it is ever persisted;
/// read-only afterwards.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub location: String,
    pub template: String,
    pub video_url: String,
    pub qr_path: String,
    pub page_url: String,
    pub created_at: DateTime<Utc>,
}
