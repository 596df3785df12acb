// crates/job-search/tests/infrastructure/repository_it_for_job.rs

use futures::StreamExt;
use job_search::domain::repositories::JobRepository;
use job_search::domain::search::JobSearchMapper;
use job_search::domain::value_objects::{JobId, JobStatus, JobType, SalaryUnit};
use job_search::infrastructure::postgres::repositories::PostgresJobRepository;
use shared_kernel::infrastructure::postgres::utils::setup_test_postgres;
use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;
use uuid::Uuid;

async fn setup_context() -> (PostgresJobRepository, PgPool, ContainerAsync<Postgres>) {
    let (pool, container) = setup_test_postgres(&["./migrations/postgres"]).await;

    sqlx::query("INSERT INTO industries (id, name) VALUES (1, 'Software'), (2, 'Finance')")
        .execute(&pool)
        .await
        .unwrap();

    (PostgresJobRepository::new(pool.clone()), pool, container)
}

async fn insert_job(pool: &PgPool, title: &str, job_type: &str) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query(
        r#"
        INSERT INTO jobs (id, title, company_name, description, salary_type, salary_unit,
                          min_salary, max_salary, job_type, status)
        VALUES ($1, $2, 'Ferris Corp', '<p>Build <b>fast</b> things</p>', 'RANGE', 'USD',
                1000, 2000, $3, 'APPROVED')
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(job_type)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO job_industries (job_id, industry_id) VALUES ($1, 2), ($1, 1)")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO job_locations (job_id, province_id, address) VALUES ($1, 79, 'District 1'), ($1, 1, NULL)")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();

    id
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_by_id_restores_relations() {
    let (repo, pool, _container) = setup_context().await;
    let id = insert_job(&pool, "Rust Engineer", "FULL_TIME").await;

    let job = repo
        .find_by_id(&JobId::new_unchecked(id))
        .await
        .unwrap()
        .expect("Job should exist");

    assert_eq!(job.title(), "Rust Engineer");
    assert_eq!(job.status(), JobStatus::Approved);
    assert_eq!(job.job_type(), Some(JobType::FullTime));
    assert_eq!(job.salary_unit(), Some(SalaryUnit::Usd));

    let doc = JobSearchMapper::to_search_document(&job);
    assert_eq!(doc.industry_ids, vec![1, 2]);
    assert_eq!(doc.province_ids, vec![1, 79]);
    assert_eq!(doc.description, "Build fast things");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_find_by_unknown_id_is_none() {
    let (repo, _pool, _container) = setup_context().await;

    let job = repo.find_by_id(&JobId::new()).await.unwrap();

    assert!(job.is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_batch_fetch_ignores_unknown_ids() {
    let (repo, pool, _container) = setup_context().await;
    let a = insert_job(&pool, "A", "FULL_TIME").await;
    let b = insert_job(&pool, "B", "PART_TIME").await;

    let jobs = repo
        .find_all_by_ids(&[JobId::new_unchecked(b), JobId::new(), JobId::new_unchecked(a)])
        .await
        .unwrap();

    let mut titles: Vec<&str> = jobs.iter().map(|j| j.title()).collect();
    titles.sort();
    assert_eq!(titles, vec!["A", "B"]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_stream_all_reports_broken_rows_and_continues() {
    let (repo, pool, _container) = setup_context().await;
    insert_job(&pool, "Valid", "FULL_TIME").await;
    insert_job(&pool, "Broken", "GIG").await;
    insert_job(&pool, "Also valid", "CONTRACT").await;

    let items: Vec<_> = repo.stream_all().collect().await;

    assert_eq!(items.len(), 3);
    assert_eq!(items.iter().filter(|r| r.is_ok()).count(), 2);
    assert!(items.iter().any(|r| r.is_err()));
}
