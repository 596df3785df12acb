// crates/job-search/src/application/delete_job_document/delete_job_document_use_case.rs

use shared_kernel::errors::Result;
use std::sync::Arc;

use crate::application::delete_job_document::DeleteJobDocumentCommand;
use crate::domain::repositories::JobSearchIndex;

pub struct DeleteJobDocumentUseCase {
    index: Arc<dyn JobSearchIndex>,
}

impl DeleteJobDocumentUseCase {
    pub fn new(index: Arc<dyn JobSearchIndex>) -> Self {
        Self { index }
    }

    /// Idempotent : un document déjà absent n'est pas une erreur
    pub async fn execute(&self, command: DeleteJobDocumentCommand) -> Result<()> {
        self.index.delete_by_id(&command.job_id).await?;
        tracing::debug!("Search document for job {} deleted", command.job_id);
        Ok(())
    }
}
