mod job_search_module;
mod reindex;

pub use job_search_module::JobSearchModule;
pub use reindex::run_reindex_worker;
