mod reindex_jobs_command;
mod reindex_jobs_use_case;

#[cfg(test)]
mod reindex_jobs_use_case_test;

pub use reindex_jobs_command::ReindexJobsCommand;
pub use reindex_jobs_use_case::ReindexJobsUseCase;
