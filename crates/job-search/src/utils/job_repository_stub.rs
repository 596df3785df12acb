// crates/job-search/src/utils/job_repository_stub.rs

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use shared_kernel::errors::{DomainError, Result};
use std::sync::Mutex;

use crate::domain::entities::Job;
use crate::domain::repositories::JobRepository;
use crate::domain::value_objects::JobId;

// --- STUB JOB REPOSITORY ---
pub struct JobRepositoryStub {
    pub jobs: Mutex<Vec<Job>>,
    /// Lignes "corrompues" renvoyées par `stream_all` après les offres valides
    pub broken_rows: Mutex<Vec<DomainError>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Trace des appels groupés (pour vérifier l'absence d'allers-retours unitaires)
    pub batch_calls: Mutex<Vec<Vec<JobId>>>,
}

impl Default for JobRepositoryStub {
    fn default() -> Self {
        Self {
            jobs: Mutex::new(vec![]),
            broken_rows: Mutex::new(vec![]),
            error_to_return: Mutex::new(None),
            batch_calls: Mutex::new(vec![]),
        }
    }
}

impl JobRepositoryStub {
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let stub = Self::default();
        *stub.jobs.lock().unwrap() = jobs;
        stub
    }

    fn fail_if_configured(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryStub {
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>> {
        self.fail_if_configured()?;
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id() == id).cloned())
    }

    async fn find_all_by_ids(&self, ids: &[JobId]) -> Result<Vec<Job>> {
        self.fail_if_configured()?;
        self.batch_calls.lock().unwrap().push(ids.to_vec());

        // Ordre volontairement inversé : le store ne garantit aucun ordre
        let mut found: Vec<Job> = self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| ids.contains(j.id()))
            .cloned()
            .collect();
        found.reverse();
        Ok(found)
    }

    fn stream_all(&self) -> BoxStream<'_, Result<Job>> {
        if let Err(err) = self.fail_if_configured() {
            return stream::iter(vec![Err(err)]).boxed();
        }

        let jobs: Vec<Result<Job>> = self.jobs.lock().unwrap().iter().cloned().map(Ok).collect();
        let broken: Vec<Result<Job>> = self.broken_rows.lock().unwrap().iter().cloned().map(Err).collect();
        stream::iter(jobs.into_iter().chain(broken)).boxed()
    }
}
