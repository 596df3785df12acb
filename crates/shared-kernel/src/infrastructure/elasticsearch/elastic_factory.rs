// crates/shared-kernel/src/infrastructure/elasticsearch/elastic_factory.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use elasticsearch::Elasticsearch;
use elasticsearch::http::Url;
use elasticsearch::http::transport::{SingleNodeConnectionPool, TransportBuilder};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ElasticConfig {
    pub url: String,
    pub request_timeout: Duration,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl ElasticConfig {
    /// Charge la config depuis les variables d'environnement (valeurs par défaut en local)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("ELASTICSEARCH_URL").unwrap_or(defaults.url),
            request_timeout: std::env::var("ELASTICSEARCH_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
        }
    }
}

pub fn create_elasticsearch_client(config: &ElasticConfig) -> AppResult<Elasticsearch> {
    let url = Url::parse(&config.url).map_err(|e| {
        AppError::new(
            ErrorCode::InternalError,
            format!("Invalid ELASTICSEARCH_URL '{}': {}", config.url, e),
        )
    })?;

    let transport = TransportBuilder::new(SingleNodeConnectionPool::new(url))
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| {
            AppError::new(
                ErrorCode::InternalError,
                format!("Failed to build Elasticsearch transport: {}", e),
            )
        })?;

    Ok(Elasticsearch::new(transport))
}
