use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::Submission;

use super::SubmissionStore;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn create(&self, submission: &Submission) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO submissions
                 (id, name, email, company, location, template, video_url, qr_path, page_url, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (id) DO UPDATE SET
                 name = EXCLUDED.name,
                 email = EXCLUDED.email,
                 company = EXCLUDED.company,
                 location = EXCLUDED.location,
                 template = EXCLUDED.template,
                 video_url = EXCLUDED.video_url,
                 qr_path = EXCLUDED.qr_path,
                 page_url = EXCLUDED.page_url",
        )
        .bind(&submission.id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.company)
        .bind(&submission.location)
        .bind(&submission.template)
        .bind(&submission.video_url)
        .bind(&submission.qr_path)
        .bind(&submission.page_url)
        .bind(submission.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Submission>, AppError> {
        let submission =
            sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(submission)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, AppError> {
        let submissions =
            sqlx::query_as::<_, Submission>("SELECT * FROM submissions ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;
        Ok(submissions)
    }
}
