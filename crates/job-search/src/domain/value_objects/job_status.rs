// crates/job-search/src/domain/value_objects/job_status.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Statut de modération d'une offre. Les transitions appartiennent au store primaire,
/// la recherche ne fait que le lire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Expired,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Expired => "EXPIRED",
            Self::Closed => "CLOSED",
        }
    }

    // --- LOGIQUE MÉTIER ---

    /// Seules les offres publiées sont visibles dans la recherche
    pub fn is_searchable(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl ValueObject for JobStatus {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

// --- CONVERSIONS ---

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "EXPIRED" => Ok(Self::Expired),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::validation(
                "job_status",
                format!("Unknown job status: {}", s),
            )),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_defaults_to_pending_and_is_hidden() {
        let status = JobStatus::default();

        assert_eq!(status, JobStatus::Pending);
        assert!(!status.is_searchable());
    }

    #[test]
    fn test_status_parses_case_insensitively() {
        assert_eq!(" approved ".parse::<JobStatus>().unwrap(), JobStatus::Approved);
        assert!("ARCHIVED".parse::<JobStatus>().is_err());
    }
}
