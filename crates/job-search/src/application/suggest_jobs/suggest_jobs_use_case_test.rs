#[cfg(test)]
mod tests {
    use crate::application::suggest_jobs::{SuggestJobsCommand, SuggestJobsUseCase};
    use crate::domain::entities::Job;
    use crate::domain::value_objects::{JobId, JobStatus};
    use crate::utils::JobSearchIndexStub;
    use chrono::Utc;
    use std::sync::Arc;

    fn job(title: &str, company: &str, status: JobStatus) -> Job {
        Job::builder(JobId::new(), title, status, Utc::now().fixed_offset())
            .with_company_name(company)
            .build()
    }

    fn setup(jobs: &[Job]) -> (SuggestJobsUseCase, Arc<JobSearchIndexStub>) {
        let index = Arc::new(JobSearchIndexStub::with_jobs(jobs));
        (SuggestJobsUseCase::new(index.clone()), index)
    }

    fn cmd(prefix: &str, size: Option<usize>) -> SuggestJobsCommand {
        SuggestJobsCommand { prefix: prefix.into(), size }
    }

    #[tokio::test]
    async fn test_suggestions_come_from_titles_and_companies() {
        let (use_case, _) = setup(&[
            job("Rust Engineer", "Acme", JobStatus::Approved),
            job("Designer", "Rustacean Labs", JobStatus::Approved),
        ]);

        let suggestions = use_case.execute(cmd("rust", None)).await.unwrap();

        assert_eq!(suggestions, vec!["Rust Engineer".to_string(), "Rustacean Labs".to_string()]);
    }

    #[tokio::test]
    async fn test_unpublished_jobs_are_not_suggested() {
        let (use_case, _) = setup(&[
            job("Rust Engineer", "Acme", JobStatus::Pending),
            job("Rust Lead", "Acme", JobStatus::Approved),
        ]);

        let suggestions = use_case.execute(cmd("Rust", None)).await.unwrap();

        assert_eq!(suggestions, vec!["Rust Lead".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_prefix_short_circuits() {
        let (use_case, index) = setup(&[job("Rust Engineer", "Acme", JobStatus::Approved)]);
        // Un appel à l'index échouerait
        *index.error_to_return.lock().unwrap() =
            Some(shared_kernel::errors::DomainError::Infrastructure("down".into()));

        let suggestions = use_case.execute(cmd("   ", Some(10))).await.unwrap();

        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(cmd("a", None).effective_size(), SuggestJobsCommand::DEFAULT_SIZE);
        assert_eq!(cmd("a", Some(0)).effective_size(), 1);
        assert_eq!(cmd("a", Some(500)).effective_size(), SuggestJobsCommand::MAX_SIZE);
    }

    #[tokio::test]
    async fn test_size_limits_results() {
        let jobs: Vec<Job> = (0..10)
            .map(|i| job(&format!("Rust role {}", i), "Acme", JobStatus::Approved))
            .collect();
        let (use_case, _) = setup(&jobs);

        let suggestions = use_case.execute(cmd("rust", Some(3))).await.unwrap();

        assert_eq!(suggestions.len(), 3);
    }
}
