// shared-kernel/src/infrastructure/postgres/factories/postgres_factory.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Charge la config depuis les variables d'environnement
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            url: std::env::var("DATABASE_URL")
                .map_err(|_| AppError::new(ErrorCode::InternalError, "DATABASE_URL must be set"))?,
            max_connections: env_or("DB_MAX_CONNECTIONS", 20),
            min_connections: env_or("DB_MIN_CONNECTIONS", 5),
            connect_timeout: Duration::from_secs(env_or("DB_CONNECT_TIMEOUT_SECS", 3)),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

pub async fn create_postgres_pool(config: &DbConfig) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::new(
                ErrorCode::ServiceUnavailable,
                format!("Failed to connect to Postgres: {}", e),
            )
        })
}
