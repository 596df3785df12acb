// crates/job-search/src/domain/repositories/job_search_index.rs

use async_trait::async_trait;
use futures::stream::BoxStream;
use shared_kernel::errors::Result;

use crate::domain::entities::Job;
use crate::domain::search::JobSearchDocument;
use crate::domain::search::query::CompiledJobQuery;
use crate::domain::value_objects::JobId;

/// Identifiants classés par le moteur + nombre total de hits
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHits {
    pub ids: Vec<JobId>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkIndexReport {
    pub indexed: u64,
    pub failed: u64,
}

impl BulkIndexReport {
    pub fn merge(&mut self, other: BulkIndexReport) {
        self.indexed += other.indexed;
        self.failed += other.failed;
    }
}

/// Passerelle vers l'index de recherche. L'index est un artefact secondaire :
/// toute indisponibilité remonte en `DomainError::Infrastructure`, jamais avalée.
#[async_trait]
pub trait JobSearchIndex: Send + Sync {
    /// Upsert (remplacement complet) par identifiant
    async fn index(&self, document: &JobSearchDocument) -> Result<()>;

    /// Idempotent : supprimer un id absent n'est pas une erreur
    async fn delete_by_id(&self, id: &JobId) -> Result<()>;

    /// Transformation + upsert groupé, en une seule passe sur le flux
    async fn index_all(&self, jobs: BoxStream<'_, Result<Job>>) -> Result<BulkIndexReport>;

    async fn search(&self, query: &CompiledJobQuery) -> Result<SearchHits>;

    /// Suggestions d'autocomplétion (titres, entreprises) des offres publiées
    async fn suggest(&self, prefix: &str, size: usize) -> Result<Vec<String>>;
}
