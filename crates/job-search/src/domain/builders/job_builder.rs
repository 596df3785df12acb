// crates/job-search/src/domain/builders/job_builder.rs

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::domain::entities::{Job, JobIndustry, JobLocation};
use crate::domain::value_objects::{
    EducationLevel, ExperienceLevel, IndustryId, JobId, JobLevel, JobStatus, JobType, ProvinceId,
    SalaryType, SalaryUnit,
};

pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    /// Données obligatoires. Le reste est optionnel (relations et facettes).
    pub fn new(
        id: JobId,
        title: impl Into<String>,
        status: JobStatus,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            job: Job {
                id,
                title: title.into(),
                company_name: None,
                description: None,
                requirement: None,
                industries: Vec::new(),
                locations: Vec::new(),
                min_salary: None,
                max_salary: None,
                salary_type: None,
                salary_unit: None,
                job_level: None,
                job_type: None,
                experience: None,
                education: None,
                status,
                expiration_date: None,
                created_at,
                updated_at: None,
            },
        }
    }

    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.job.company_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, html: impl Into<String>) -> Self {
        self.job.description = Some(html.into());
        self
    }

    pub fn with_requirement(mut self, html: impl Into<String>) -> Self {
        self.job.requirement = Some(html.into());
        self
    }

    pub fn with_industry(mut self, id: IndustryId, name: impl Into<String>) -> Self {
        self.job.industries.push(JobIndustry { id, name: name.into() });
        self
    }

    pub fn with_location(mut self, province_id: ProvinceId, address: Option<String>) -> Self {
        self.job.locations.push(JobLocation { province_id, address });
        self
    }

    pub fn with_salary(
        self,
        min: Option<f64>,
        max: Option<f64>,
        salary_type: SalaryType,
        unit: SalaryUnit,
    ) -> Self {
        self.with_salary_range(min, max)
            .with_salary_type(salary_type)
            .with_salary_unit(unit)
    }

    // Colonnes indépendantes côté store : chacune peut être nulle seule
    pub fn with_salary_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.job.min_salary = min;
        self.job.max_salary = max;
        self
    }

    pub fn with_salary_type(mut self, salary_type: SalaryType) -> Self {
        self.job.salary_type = Some(salary_type);
        self
    }

    pub fn with_salary_unit(mut self, unit: SalaryUnit) -> Self {
        self.job.salary_unit = Some(unit);
        self
    }

    pub fn with_level(mut self, level: JobLevel) -> Self {
        self.job.job_level = Some(level);
        self
    }

    pub fn with_type(mut self, job_type: JobType) -> Self {
        self.job.job_type = Some(job_type);
        self
    }

    pub fn with_experience(mut self, experience: ExperienceLevel) -> Self {
        self.job.experience = Some(experience);
        self
    }

    pub fn with_education(mut self, education: EducationLevel) -> Self {
        self.job.education = Some(education);
        self
    }

    pub fn with_expiration_date(mut self, date: NaiveDate) -> Self {
        self.job.expiration_date = Some(date);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<FixedOffset>) -> Self {
        self.job.updated_at = Some(updated_at);
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}
