use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::AppError;
use crate::models::Submission;

use super::SubmissionStore;

/// In-process fallback store for offline mode. Entries vanish on restart.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, Submission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn create(&self, submission: &Submission) -> Result<(), AppError> {
        self.entries
            .insert(submission.id.clone(), submission.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Submission>, AppError> {
        Ok(self.entries.get(id).map(|e| e.value().clone()))
    }

    async fn list_all(&self) -> Result<Vec<Submission>, AppError> {
        let mut all: Vec<Submission> = self.entries.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }
}
