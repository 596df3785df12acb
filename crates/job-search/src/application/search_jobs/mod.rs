mod search_jobs_command;
mod search_jobs_use_case;


pub use search_jobs_command::SearchJobsCommand;
pub use search_jobs_use_case::SearchJobsUseCase;
