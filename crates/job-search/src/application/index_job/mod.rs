mod index_job_command;
mod index_job_use_case;


pub use index_job_command::IndexJobCommand;
pub use index_job_use_case::{IndexJobOutcome, IndexJobUseCase};
