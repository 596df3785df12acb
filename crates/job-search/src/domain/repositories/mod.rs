mod job_repository;
mod job_search_index;

pub use job_repository::JobRepository;
pub use job_search_index::{BulkIndexReport, JobSearchIndex, SearchHits};
