// crates/job-search/src/domain/repositories/job_repository.rs

use async_trait::async_trait;
use futures::stream::BoxStream;
use shared_kernel::errors::Result;

use crate::domain::entities::Job;
use crate::domain::value_objects::JobId;

/// Accès en lecture au store primaire (source de vérité des offres)
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>>;

    /// Chargement groupé en un seul aller-retour. L'ordre du résultat n'est pas garanti.
    async fn find_all_by_ids(&self, ids: &[JobId]) -> Result<Vec<Job>>;

    /// Parcours complet, en flux, pour la reconstruction de l'index.
    /// Une ligne inexploitable remonte comme `Err` sans interrompre le flux.
    fn stream_all(&self) -> BoxStream<'_, Result<Job>>;
}
