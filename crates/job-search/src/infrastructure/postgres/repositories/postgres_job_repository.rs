// crates/job-search/src/infrastructure/postgres/repositories/postgres_job_repository.rs

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Job;
use crate::domain::repositories::JobRepository;
use crate::domain::value_objects::JobId;
use crate::infrastructure::postgres::rows::PostgresJobRow;

/// Relations agrégées en tableaux : une ligne SQL = une offre complète, pas de N+1
macro_rules! select_jobs {
    () => {
        r#"
        SELECT
            j.id, j.title, j.company_name, j.description, j.requirement,
            j.min_salary, j.max_salary, j.salary_type, j.salary_unit,
            j.job_level, j.job_type, j.experience, j.education,
            j.status, j.expiration_date, j.created_at, j.updated_at,
            ARRAY(
                SELECT i.id FROM job_industries ji JOIN industries i ON i.id = ji.industry_id
                WHERE ji.job_id = j.id ORDER BY i.id
            ) AS industry_ids,
            ARRAY(
                SELECT i.name FROM job_industries ji JOIN industries i ON i.id = ji.industry_id
                WHERE ji.job_id = j.id ORDER BY i.id
            ) AS industry_names,
            ARRAY(SELECT jl.province_id FROM job_locations jl WHERE jl.job_id = j.id ORDER BY jl.id) AS province_ids,
            ARRAY(SELECT jl.address FROM job_locations jl WHERE jl.job_id = j.id ORDER BY jl.id) AS addresses
        FROM jobs j
        "#
    };
}

const FIND_BY_ID: &str = concat!(select_jobs!(), "WHERE j.id = $1");
const FIND_ALL_BY_IDS: &str = concat!(select_jobs!(), "WHERE j.id = ANY($1)");
// Ordre stable par id : une passe interrompue peut être relancée à l'identique
const STREAM_ALL: &str = concat!(select_jobs!(), "ORDER BY j.id");

pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn find_by_id(&self, id: &JobId) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, PostgresJobRow>(FIND_BY_ID)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_domain_infra("JobFetch")?;

        row.map(Job::try_from).transpose()
    }

    async fn find_all_by_ids(&self, ids: &[JobId]) -> Result<Vec<Job>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(JobId::as_uuid).collect();

        let rows = sqlx::query_as::<_, PostgresJobRow>(FIND_ALL_BY_IDS)
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("JobFetchBatch")?;

        // Une ligne illisible ne doit pas faire tomber toute la page de résultats
        let mut jobs = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.id;
            match Job::try_from(row) {
                Ok(job) => jobs.push(job),
                Err(err) => tracing::warn!("Job {} could not be restored: {}", id, err),
            }
        }
        Ok(jobs)
    }

    fn stream_all(&self) -> BoxStream<'_, Result<Job>> {
        sqlx::query_as::<_, PostgresJobRow>(STREAM_ALL)
            .fetch(&self.pool)
            .map(|row| row.map_domain_infra("JobStream").and_then(Job::try_from))
            .boxed()
    }
}
