// crates/job-search/src/application/suggest_jobs/suggest_jobs_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;

use crate::application::suggest_jobs::SuggestJobsCommand;
use crate::domain::repositories::JobSearchIndex;
use crate::domain::search::text::collapse_whitespace;

pub struct SuggestJobsUseCase {
    index: Arc<dyn JobSearchIndex>,
}

impl SuggestJobsUseCase {
    pub fn new(index: Arc<dyn JobSearchIndex>) -> Self {
        Self { index }
    }

    pub async fn execute(&self, command: SuggestJobsCommand) -> Result<Vec<String>> {
        let prefix = collapse_whitespace(&command.prefix);
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        self.index.suggest(&prefix, command.effective_size()).await
    }
}
