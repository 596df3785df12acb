// crates/job-search/src/utils/mod.rs

mod job_repository_stub;
mod job_search_index_stub;

pub use job_repository_stub::JobRepositoryStub;
pub use job_search_index_stub::JobSearchIndexStub;
