// crates/job-search/src/infrastructure/postgres/rows/postgres_job_row.rs

use chrono::{DateTime, NaiveDate, Utc};
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entities::Job;
use crate::domain::value_objects::{IndustryId, JobId, JobStatus, ProvinceId};

/// Une offre et ses relations, agrégées en tableaux par la requête SQL
#[derive(FromRow, Debug)]
pub struct PostgresJobRow {
    pub id: Uuid,
    pub title: String,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub requirement: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_type: Option<String>,
    pub salary_unit: Option<String>,
    pub job_level: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub status: String,
    pub expiration_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub industry_ids: Vec<i64>,
    pub industry_names: Vec<String>,
    pub province_ids: Vec<Option<i64>>,
    pub addresses: Vec<Option<String>>,
}

fn parse_opt<T: FromStr<Err = DomainError>>(value: Option<&str>) -> Result<Option<T>> {
    value.map(str::parse).transpose()
}

impl TryFrom<PostgresJobRow> for Job {
    type Error = DomainError;

    /// Échoue sur une valeur d'énumération inconnue ou une localisation sans province
    fn try_from(row: PostgresJobRow) -> Result<Self> {
        let mut builder = Job::builder(
            JobId::new_unchecked(row.id),
            row.title,
            JobStatus::from_str(&row.status)?,
            row.created_at.fixed_offset(),
        );

        if let Some(name) = row.company_name {
            builder = builder.with_company_name(name);
        }
        if let Some(html) = row.description {
            builder = builder.with_description(html);
        }
        if let Some(html) = row.requirement {
            builder = builder.with_requirement(html);
        }

        for (id, name) in row.industry_ids.into_iter().zip(row.industry_names) {
            builder = builder.with_industry(IndustryId::new_unchecked(id), name);
        }

        for (province, address) in row.province_ids.into_iter().zip(row.addresses) {
            let province = province.ok_or_else(|| {
                DomainError::validation("province_ids", format!("Job {} has a location without province", row.id))
            })?;
            builder = builder.with_location(ProvinceId::new_unchecked(province), address);
        }

        builder = builder.with_salary_range(row.min_salary, row.max_salary);
        if let Some(salary_type) = parse_opt(row.salary_type.as_deref())? {
            builder = builder.with_salary_type(salary_type);
        }
        if let Some(salary_unit) = parse_opt(row.salary_unit.as_deref())? {
            builder = builder.with_salary_unit(salary_unit);
        }

        if let Some(level) = parse_opt(row.job_level.as_deref())? {
            builder = builder.with_level(level);
        }
        if let Some(job_type) = parse_opt(row.job_type.as_deref())? {
            builder = builder.with_type(job_type);
        }
        if let Some(experience) = parse_opt(row.experience.as_deref())? {
            builder = builder.with_experience(experience);
        }
        if let Some(education) = parse_opt(row.education.as_deref())? {
            builder = builder.with_education(education);
        }
        if let Some(date) = row.expiration_date {
            builder = builder.with_expiration_date(date);
        }
        if let Some(updated_at) = row.updated_at {
            builder = builder.with_updated_at(updated_at.fixed_offset());
        }

        Ok(builder.build())
    }
}
