// crates/job-search/src/domain/entities/job.rs

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::builders::JobBuilder;
use crate::domain::value_objects::{
    EducationLevel, ExperienceLevel, IndustryId, JobId, JobLevel, JobStatus, JobType, ProvinceId,
    SalaryType, SalaryUnit,
};

/// Offre d'emploi canonique, propriété du store primaire.
/// La recherche ne la modifie jamais : elle la projette et la ré-hydrate.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub(crate) id: JobId,
    pub(crate) title: String,
    pub(crate) company_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) requirement: Option<String>,
    pub(crate) industries: Vec<JobIndustry>,
    pub(crate) locations: Vec<JobLocation>,
    pub(crate) min_salary: Option<f64>,
    pub(crate) max_salary: Option<f64>,
    pub(crate) salary_type: Option<SalaryType>,
    pub(crate) salary_unit: Option<SalaryUnit>,
    pub(crate) job_level: Option<JobLevel>,
    pub(crate) job_type: Option<JobType>,
    pub(crate) experience: Option<ExperienceLevel>,
    pub(crate) education: Option<EducationLevel>,
    pub(crate) status: JobStatus,
    pub(crate) expiration_date: Option<NaiveDate>,
    pub(crate) created_at: DateTime<FixedOffset>,
    pub(crate) updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobIndustry {
    pub id: IndustryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLocation {
    pub province_id: ProvinceId,
    pub address: Option<String>,
}

impl Job {
    pub fn builder(
        id: JobId,
        title: impl Into<String>,
        status: JobStatus,
        created_at: DateTime<FixedOffset>,
    ) -> JobBuilder {
        JobBuilder::new(id, title, status, created_at)
    }

    // --- Getters (Lecture seule) ---

    pub fn id(&self) -> &JobId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn company_name(&self) -> Option<&str> { self.company_name.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn requirement(&self) -> Option<&str> { self.requirement.as_deref() }
    pub fn industries(&self) -> &[JobIndustry] { &self.industries }
    pub fn locations(&self) -> &[JobLocation] { &self.locations }
    pub fn min_salary(&self) -> Option<f64> { self.min_salary }
    pub fn max_salary(&self) -> Option<f64> { self.max_salary }
    pub fn salary_type(&self) -> Option<SalaryType> { self.salary_type }
    pub fn salary_unit(&self) -> Option<SalaryUnit> { self.salary_unit }
    pub fn job_level(&self) -> Option<JobLevel> { self.job_level }
    pub fn job_type(&self) -> Option<JobType> { self.job_type }
    pub fn experience(&self) -> Option<ExperienceLevel> { self.experience }
    pub fn education(&self) -> Option<EducationLevel> { self.education }
    pub fn status(&self) -> JobStatus { self.status }
    pub fn expiration_date(&self) -> Option<NaiveDate> { self.expiration_date }
    pub fn created_at(&self) -> DateTime<FixedOffset> { self.created_at }
    pub fn updated_at(&self) -> Option<DateTime<FixedOffset>> { self.updated_at }
}
