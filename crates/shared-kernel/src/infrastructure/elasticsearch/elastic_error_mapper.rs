// crates/shared-kernel/src/infrastructure/elasticsearch/elastic_error_mapper.rs

use crate::errors::{DomainError, Result};
use elasticsearch::http::response::Response;

pub trait ElasticErrorExt<T> {
    fn map_domain_infra(self, context: &'static str) -> Result<T>;
}

impl<T> ElasticErrorExt<T> for std::result::Result<T, elasticsearch::Error> {
    fn map_domain_infra(self, context: &'static str) -> Result<T> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}

/// Un statut HTTP non-2xx est une panne d'index, jamais un "zéro résultat"
pub async fn ensure_success(response: Response, context: &'static str) -> Result<Response> {
    let status = response.status_code();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DomainError::Infrastructure(format!(
        "{}: HTTP {} {}",
        context,
        status.as_u16(),
        body
    )))
}
