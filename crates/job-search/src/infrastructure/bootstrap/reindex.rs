// crates/job-search/src/infrastructure/bootstrap/reindex.rs

use shared_kernel::errors::{AppError, AppResult, ErrorCode};
use shared_kernel::infrastructure::elasticsearch::{ElasticConfig, create_elasticsearch_client};
use shared_kernel::infrastructure::postgres::factories::{DbConfig, create_postgres_pool};
use std::sync::Arc;

use crate::application::reindex_jobs::{ReindexJobsCommand, ReindexJobsUseCase};
use crate::infrastructure::config::SearchConfig;
use crate::infrastructure::elasticsearch::ElasticsearchJobIndex;
use crate::infrastructure::postgres::repositories::PostgresJobRepository;

/// Reconstruit l'index de recherche depuis Postgres, puis s'arrête
pub async fn run_reindex_worker() -> AppResult<()> {
    // 1. Initialisation des logs
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 2. Configuration via Environnement
    let db_config = DbConfig::from_env()?;
    let elastic_config = ElasticConfig::from_env();
    let search_config = SearchConfig::from_env();

    tracing::info!(
        "🚀 Starting job reindex into '{}' (batch_size={})",
        search_config.index_name,
        search_config.bulk_batch_size
    );

    // 3. Montage de l'infrastructure
    let pool = create_postgres_pool(&db_config).await?;
    let client = create_elasticsearch_client(&elastic_config)?;

    let index = ElasticsearchJobIndex::new(client, &search_config);
    index.ensure_index_ready().await?;

    let use_case = ReindexJobsUseCase::new(
        Arc::new(PostgresJobRepository::new(pool)),
        Arc::new(index),
    );

    // 4. Exécution, interrompue proprement sur Ctrl+C (la passe est rejouable)
    tokio::select! {
        result = use_case.execute(ReindexJobsCommand::default()) => {
            let report = result?;
            tracing::info!(
                "✅ Reindex complete: {} indexed, {} failed",
                report.indexed,
                report.failed
            );
            Ok(())
        }
        signal = tokio::signal::ctrl_c() => {
            signal.map_err(|e| {
                AppError::new(ErrorCode::InternalError, format!("Unable to listen for shutdown signal: {}", e))
            })?;
            tracing::warn!("🛑 Shutdown signal received, reindex interrupted");
            Ok(())
        }
    }
}
