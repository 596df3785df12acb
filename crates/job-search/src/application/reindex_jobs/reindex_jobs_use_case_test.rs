#[cfg(test)]
mod tests {
    use crate::application::reindex_jobs::{ReindexJobsCommand, ReindexJobsUseCase};
    use crate::domain::entities::Job;
    use crate::domain::repositories::BulkIndexReport;
    use crate::domain::value_objects::{JobId, JobStatus};
    use crate::utils::{JobRepositoryStub, JobSearchIndexStub};
    use chrono::Utc;
    use shared_kernel::errors::DomainError;
    use shared_kernel::infrastructure::retry::RetryConfig;
    use std::sync::Arc;

    fn jobs(n: usize) -> Vec<Job> {
        (0..n)
            .map(|i| {
                Job::builder(JobId::new(), format!("Job {}", i), JobStatus::Approved, Utc::now().fixed_offset())
                    .build()
            })
            .collect()
    }

    fn fast_retry() -> ReindexJobsCommand {
        ReindexJobsCommand {
            retry: RetryConfig { max_retries: 2, initial_backoff_ms: 1 },
        }
    }

    fn setup(jobs: Vec<Job>) -> (ReindexJobsUseCase, Arc<JobRepositoryStub>, Arc<JobSearchIndexStub>) {
        let repo = Arc::new(JobRepositoryStub::with_jobs(jobs));
        let index = Arc::new(JobSearchIndexStub::default());
        (ReindexJobsUseCase::new(repo.clone(), index.clone()), repo, index)
    }

    #[tokio::test]
    async fn test_reindex_projects_the_whole_store() {
        // Arrange
        let all = jobs(4);
        let (use_case, _, index) = setup(all.clone());

        // Act
        let report = use_case.execute(fast_retry()).await.unwrap();

        // Assert
        assert_eq!(report, BulkIndexReport { indexed: 4, failed: 0 });
        let expected: Vec<String> = all.iter().map(|j| j.id().to_string()).collect();
        assert_eq!(index.document_ids(), expected);
    }

    #[tokio::test]
    async fn test_reindex_twice_converges() {
        let (use_case, _, index) = setup(jobs(3));

        use_case.execute(fast_retry()).await.unwrap();
        let first = index.documents.lock().unwrap().clone();
        use_case.execute(fast_retry()).await.unwrap();

        assert_eq!(*index.documents.lock().unwrap(), first);
    }

    #[tokio::test]
    async fn test_broken_rows_are_counted_and_skipped() {
        let (use_case, repo, index) = setup(jobs(2));
        repo.broken_rows
            .lock()
            .unwrap()
            .push(DomainError::validation("job_type", "Unknown job_type value: 'GIG'"));

        let report = use_case.execute(fast_retry()).await.unwrap();

        assert_eq!(report, BulkIndexReport { indexed: 2, failed: 1 });
        assert_eq!(index.documents.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_transient_index_failure_is_retried() {
        let (use_case, _, index) = setup(jobs(2));
        *index.transient_failures.lock().unwrap() = 1;

        let report = use_case.execute(fast_retry()).await.unwrap();

        assert_eq!(report.indexed, 2);
    }

    #[tokio::test]
    async fn test_store_outage_exhausts_retries() {
        let (use_case, repo, index) = setup(jobs(2));
        *repo.error_to_return.lock().unwrap() = Some(DomainError::Infrastructure("db down".into()));

        let result = use_case.execute(fast_retry()).await;

        assert!(matches!(result, Err(DomainError::RetriesExhausted(_))));
        assert!(index.documents.lock().unwrap().is_empty());
    }
}
