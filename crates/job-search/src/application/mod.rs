pub mod delete_job_document;
pub mod index_job;
pub mod reindex_jobs;
pub mod search_jobs;
pub mod suggest_jobs;
