mod suggest_jobs_command;
mod suggest_jobs_use_case;

#[cfg(test)]
mod suggest_jobs_use_case_test;

pub use suggest_jobs_command::SuggestJobsCommand;
pub use suggest_jobs_use_case::SuggestJobsUseCase;
