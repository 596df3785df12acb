// crates/job-search/src/domain/value_objects/job_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Génère un nouvel UUID v7 (Séquentiel, optimisé pour les index DB)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Reconstruction depuis un type sûr (Interne/DB)
    pub fn new_unchecked(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Validation et création depuis une String (API, _id d'un hit d'index)
    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let s = id.into();
        Self::from_str(&s)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl ValueObject for JobId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::validation("job_id", "Job ID cannot be nil"));
        }
        Ok(())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl FromStr for JobId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let id = Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::validation("job_id", format!("'{}' is not a valid UUID", s)))?;
        id.validate()?;
        Ok(id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
