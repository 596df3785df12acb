// crates/job-search/src/domain/search/job_search_mapper.rs

use chrono::Utc;
use std::collections::BTreeSet;

use super::job_search_document::{AutocompleteSuggest, JobSearchDocument};
use super::text::strip_markup;
use crate::domain::entities::Job;

pub struct JobSearchMapper;

impl JobSearchMapper {
    pub const SUGGEST_WEIGHT: i32 = 10;

    /// Fonction pure et totale : aucune I/O, même entrée -> même document.
    pub fn to_search_document(job: &Job) -> JobSearchDocument {
        // BTreeSet : dédoublonnage + ordre stable
        let industry_ids: BTreeSet<i64> = job.industries().iter().map(|i| i.id.value()).collect();
        let province_ids: BTreeSet<i64> = job
            .locations()
            .iter()
            .map(|l| l.province_id.value())
            .collect();

        let company_name = job
            .company_name()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        JobSearchDocument {
            id: job.id().to_string(),
            title: job.title().trim().to_string(),
            description: job.description().map(strip_markup).unwrap_or_default(),
            requirement: job.requirement().map(strip_markup).unwrap_or_default(),
            industry_ids: industry_ids.into_iter().collect(),
            province_ids: province_ids.into_iter().collect(),
            expiration_date: job.expiration_date(),
            status: job.status(),
            created_at: job.created_at().with_timezone(&Utc),
            updated_at: job.updated_at().map(|ts| ts.with_timezone(&Utc)),
            min_salary: job.min_salary(),
            max_salary: job.max_salary(),
            salary_type: job.salary_type(),
            salary_unit: job.salary_unit(),
            job_level: job.job_level(),
            job_type: job.job_type(),
            experience: job.experience(),
            education: job.education(),
            suggest: AutocompleteSuggest {
                input: Self::suggest_inputs(job.title(), company_name.as_deref()),
                weight: Self::SUGGEST_WEIGHT,
            },
            company_name,
        }
    }

    fn suggest_inputs(title: &str, company_name: Option<&str>) -> Vec<String> {
        [Some(title.trim()), company_name]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
