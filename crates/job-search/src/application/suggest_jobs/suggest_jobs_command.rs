// crates/job-search/src/application/suggest_jobs/suggest_jobs_command.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestJobsCommand {
    pub prefix: String,
    pub size: Option<usize>,
}

impl SuggestJobsCommand {
    pub const DEFAULT_SIZE: usize = 5;
    pub const MAX_SIZE: usize = 20;

    pub fn effective_size(&self) -> usize {
        self.size.unwrap_or(Self::DEFAULT_SIZE).clamp(1, Self::MAX_SIZE)
    }
}
