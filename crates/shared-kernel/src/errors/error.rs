// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Entrée client invalide (critères de recherche, identifiants, enums)
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Erreur liée à l'infrastructure (Postgres, Elasticsearch). Transitoire.
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    /// Échec définitif après plusieurs tentatives de retry
    #[error("Operation failed after maximum retries: {0}")]
    RetriesExhausted(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Utilisé par la boucle de retry : seules les pannes d'infra valent un nouvel essai
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Infrastructure(_))
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
