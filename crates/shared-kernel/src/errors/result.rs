use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Use Cases, mapping, compilation de requêtes, ports (Repositories / Index).
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : Workers, bootstrap, API.
pub type AppResult<T> = std::result::Result<T, AppError>;
