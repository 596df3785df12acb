// crates/job-search/src/application/index_job/index_job_command.rs

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::JobId;

/// Émis après création ou modification d'une offre dans le store primaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexJobCommand {
    pub job_id: JobId,
}
