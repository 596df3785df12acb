// crates/job-search/src/application/reindex_jobs/reindex_jobs_use_case.rs

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::with_retry;
use std::sync::Arc;
use std::time::Instant;

use crate::application::reindex_jobs::ReindexJobsCommand;
use crate::domain::repositories::{BulkIndexReport, JobRepository, JobSearchIndex};

pub struct ReindexJobsUseCase {
    repo: Arc<dyn JobRepository>,
    index: Arc<dyn JobSearchIndex>,
}

impl ReindexJobsUseCase {
    pub fn new(repo: Arc<dyn JobRepository>, index: Arc<dyn JobSearchIndex>) -> Self {
        Self { repo, index }
    }

    pub async fn execute(&self, command: ReindexJobsCommand) -> Result<BulkIndexReport> {
        let started = Instant::now();

        // Upserts par id : rejouer une passe complète converge vers le même état
        let report = with_retry(command.retry, || async {
            self.index.index_all(self.repo.stream_all()).await
        })
        .await?;

        if report.failed > 0 {
            tracing::warn!(
                "Reindex finished with {} failed jobs ({} indexed)",
                report.failed,
                report.indexed
            );
        } else {
            tracing::info!(
                "Reindex finished: {} jobs indexed in {:?}",
                report.indexed,
                started.elapsed()
            );
        }
        Ok(report)
    }
}
