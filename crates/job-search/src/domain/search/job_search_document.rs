// crates/job-search/src/domain/search/job_search_document.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    EducationLevel, ExperienceLevel, JobLevel, JobStatus, JobType, SalaryType, SalaryUnit,
};

/// Projection dénormalisée d'une offre, telle que stockée dans l'index.
/// Jetable : reconstructible à tout moment depuis le store primaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchDocument {
    pub id: String,
    pub title: String,
    pub company_name: Option<String>,
    pub description: String,
    pub requirement: String,
    pub industry_ids: Vec<i64>,
    pub province_ids: Vec<i64>,
    pub expiration_date: Option<NaiveDate>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_type: Option<SalaryType>,
    pub salary_unit: Option<SalaryUnit>,
    pub job_level: Option<JobLevel>,
    pub job_type: Option<JobType>,
    pub experience: Option<ExperienceLevel>,
    pub education: Option<EducationLevel>,
    pub suggest: AutocompleteSuggest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteSuggest {
    pub input: Vec<String>,
    pub weight: i32,
}
