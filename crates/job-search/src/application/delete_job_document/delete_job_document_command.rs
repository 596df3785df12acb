// crates/job-search/src/application/delete_job_document/delete_job_document_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::JobId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteJobDocumentCommand {
    pub job_id: JobId,
}
