use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Critères invalides (400)
            DomainError::Validation { field, reason } => {
                Self::new(ErrorCode::ValidationFailed, format!("Validation failed for {field}"))
                    .with_details(serde_json::json!({ "field": field, "reason": reason }))
            }

            // 2. Cas : Index ou base indisponible (503) - le client peut réessayer
            DomainError::Infrastructure(reason) | DomainError::RetriesExhausted(reason) => {
                tracing::error!("Infrastructure error: {}", reason);
                Self::new(
                    ErrorCode::ServiceUnavailable,
                    "Search is temporarily unavailable. Please try again later.",
                )
            }

            // 3. Cas : Erreurs internes (500), détail masqué au client
            DomainError::Internal(reason) => {
                tracing::error!("Internal error: {}", reason);
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_keeps_field_in_details() {
        let err: AppError = DomainError::validation("salary_unit", "Unknown salary unit: EURO").into();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.code.http_status(), 400);
        let details = err.details.expect("details attendus");
        assert_eq!(details["field"], "salary_unit");
    }

    #[test]
    fn test_infrastructure_error_is_retryable_and_masked() {
        let err: AppError = DomainError::Infrastructure("connection refused".into()).into();

        assert_eq!(err.code, ErrorCode::ServiceUnavailable);
        assert!(err.code.is_retryable());
        assert!(!err.message.contains("connection refused"));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::ValidationFailed).unwrap();
        assert_eq!(json, "\"VALIDATION_FAILED\"");
    }
}
