// crates/job-search/src/application/index_job/index_job_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;

use crate::application::index_job::IndexJobCommand;
use crate::domain::repositories::{JobRepository, JobSearchIndex};
use crate::domain::search::JobSearchMapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexJobOutcome {
    Indexed,
    /// L'offre n'existe plus : son document a été retiré
    Removed,
}

pub struct IndexJobUseCase {
    repo: Arc<dyn JobRepository>,
    index: Arc<dyn JobSearchIndex>,
}

impl IndexJobUseCase {
    pub fn new(repo: Arc<dyn JobRepository>, index: Arc<dyn JobSearchIndex>) -> Self {
        Self { repo, index }
    }

    pub async fn execute(&self, command: IndexJobCommand) -> Result<IndexJobOutcome> {
        // 1. Relecture depuis la source de vérité (jamais depuis le payload de l'appelant)
        let Some(job) = self.repo.find_by_id(&command.job_id).await? else {
            // Pas d'orphelin dans l'index
            self.index.delete_by_id(&command.job_id).await?;
            tracing::info!("Job {} not found in store, search document removed", command.job_id);
            return Ok(IndexJobOutcome::Removed);
        };

        // 2. Projection + upsert (idempotent)
        let document = JobSearchMapper::to_search_document(&job);
        self.index.index(&document).await?;

        tracing::debug!("Job {} indexed", command.job_id);
        Ok(IndexJobOutcome::Indexed)
    }
}
