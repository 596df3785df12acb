// crates/job-search/src/application/reindex_jobs/reindex_jobs_command.rs

use shared_kernel::infrastructure::retry::RetryConfig;

/// Reconstruction complète de l'index depuis le store primaire
#[derive(Debug, Clone, Copy, Default)]
pub struct ReindexJobsCommand {
    pub retry: RetryConfig,
}
