// crates/shared-kernel/src/infrastructure/retry.rs

use crate::errors::{DomainError, Result};
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 200,
        }
    }
}

/// Exécute une action avec une stratégie de retry (Exponential Backoff + Jitter).
/// Seules les erreurs transitoires (infrastructure) sont rejouées ; l'action doit être idempotente.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_transient() && attempt < config.max_retries => {
                // Calcul de l'exponentiel : 2^attempt * base
                let base_backoff = config.initial_backoff_ms * 2u64.pow(attempt);

                // Jitter (entre 0 et 25% de la base) pour désynchroniser les clients
                let jitter = rand::rng().random_range(0..base_backoff / 4 + 1);
                let backoff = std::time::Duration::from_millis(base_backoff + jitter);

                tracing::warn!(
                    "🔄 Transient failure (attempt {}/{}): {}, retrying in {:?}...",
                    attempt + 1,
                    config.max_retries,
                    e,
                    backoff
                );

                last_error = Some(e);
                tokio::time::sleep(backoff).await;
            }
            Err(e) if e.is_transient() => {
                last_error = Some(e);
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Err(DomainError::RetriesExhausted(format!(
        "Operation failed after {} retries: {}",
        config.max_retries,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    )))
}
