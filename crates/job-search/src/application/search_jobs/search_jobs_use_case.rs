// crates/job-search/src/application/search_jobs/search_jobs_use_case.rs

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::pagination::PageResponse;
use std::collections::HashMap;
use std::sync::Arc;

use crate::application::search_jobs::SearchJobsCommand;
use crate::domain::entities::Job;
use crate::domain::repositories::{JobRepository, JobSearchIndex};
use crate::domain::search::query::JobQueryCompiler;
use crate::domain::value_objects::JobId;

pub struct SearchJobsUseCase {
    repo: Arc<dyn JobRepository>,
    index: Arc<dyn JobSearchIndex>,
    compiler: Arc<JobQueryCompiler>,
    max_page_size: u32,
}

impl SearchJobsUseCase {
    pub fn new(
        repo: Arc<dyn JobRepository>,
        index: Arc<dyn JobSearchIndex>,
        compiler: Arc<JobQueryCompiler>,
        max_page_size: u32,
    ) -> Self {
        Self { repo, index, compiler, max_page_size }
    }

    pub async fn execute(&self, command: SearchJobsCommand) -> Result<PageResponse<Job>> {
        // 1. Validation des critères
        let criteria = command.into_criteria(self.max_page_size)?;

        // 2. Compilation + exécution sur l'index (une panne de l'index fait échouer la recherche)
        let query = self.compiler.compile(&criteria);
        let hits = self.index.search(&query).await?;

        // 3. Hydratation groupée depuis le store primaire
        let jobs = if hits.ids.is_empty() {
            Vec::new()
        } else {
            self.repo.find_all_by_ids(&hits.ids).await?
        };

        // 4. Réconciliation : l'ordre de l'index fait foi
        let items = Self::reorder_by_rank(&hits.ids, jobs);

        Ok(PageResponse::new(items, criteria.page, hits.total))
    }

    /// Remet les offres dans l'ordre du classement. Les ids non résolus
    /// (supprimés du store, index en retard) sont écartés.
    fn reorder_by_rank(ranked_ids: &[JobId], jobs: Vec<Job>) -> Vec<Job> {
        let mut by_id: HashMap<JobId, Job> = jobs.into_iter().map(|job| (*job.id(), job)).collect();

        ranked_ids
            .iter()
            .filter_map(|id| {
                let job = by_id.remove(id);
                if job.is_none() {
                    tracing::debug!("Stale index entry dropped: job {} not found in primary store", id);
                }
                job
            })
            .collect()
    }
}
