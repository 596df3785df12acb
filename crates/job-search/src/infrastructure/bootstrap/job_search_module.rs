// crates/job-search/src/infrastructure/bootstrap/job_search_module.rs

use elasticsearch::Elasticsearch;
use shared_kernel::clock::{Clock, SystemClock};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::delete_job_document::DeleteJobDocumentUseCase;
use crate::application::index_job::IndexJobUseCase;
use crate::application::reindex_jobs::ReindexJobsUseCase;
use crate::application::search_jobs::SearchJobsUseCase;
use crate::application::suggest_jobs::SuggestJobsUseCase;
use crate::domain::repositories::{JobRepository, JobSearchIndex};
use crate::domain::search::query::JobQueryCompiler;
use crate::infrastructure::config::SearchConfig;
use crate::infrastructure::elasticsearch::ElasticsearchJobIndex;
use crate::infrastructure::postgres::repositories::PostgresJobRepository;

/// Point de montage unique des use cases, pour l'hôte (API, worker) qui les expose
pub struct JobSearchModule {
    pub search: SearchJobsUseCase,
    pub suggest: SuggestJobsUseCase,
    pub index_job: IndexJobUseCase,
    pub delete_job_document: DeleteJobDocumentUseCase,
    pub reindex: ReindexJobsUseCase,
}

impl JobSearchModule {
    pub fn new(pool: PgPool, client: Elasticsearch, config: &SearchConfig) -> Self {
        let repo: Arc<dyn JobRepository> = Arc::new(PostgresJobRepository::new(pool));
        let index: Arc<dyn JobSearchIndex> = Arc::new(ElasticsearchJobIndex::new(client, config));
        Self::from_ports(repo, index, Arc::new(SystemClock), config)
    }

    pub fn from_ports(
        repo: Arc<dyn JobRepository>,
        index: Arc<dyn JobSearchIndex>,
        clock: Arc<dyn Clock>,
        config: &SearchConfig,
    ) -> Self {
        let compiler = Arc::new(JobQueryCompiler::new(clock, config.min_score));

        Self {
            search: SearchJobsUseCase::new(repo.clone(), index.clone(), compiler, config.max_page_size),
            suggest: SuggestJobsUseCase::new(index.clone()),
            index_job: IndexJobUseCase::new(repo.clone(), index.clone()),
            delete_job_document: DeleteJobDocumentUseCase::new(index.clone()),
            reindex: ReindexJobsUseCase::new(repo, index),
        }
    }
}
