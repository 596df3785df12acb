// crates/job-search/src/application/search_jobs/search_jobs_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::pagination::PageRequest;
use std::str::FromStr;

use crate::domain::value_objects::{
    IndustryId, JobSort, ProvinceId, SalaryFilter, SalaryUnit, SearchCriteria,
};

/// Critères bruts tels que reçus de l'API (query string)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchJobsCommand {
    pub keyword: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub provinces: Vec<String>,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
    #[serde(default)]
    pub educations: Vec<String>,
    pub posted_within_days: Option<u32>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub salary_unit: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl SearchJobsCommand {
    /// Validation des entrées client. Toute valeur inconnue est une `DomainError::Validation`.
    pub fn into_criteria(self, max_page_size: u32) -> Result<SearchCriteria> {
        let keyword = self
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        // Sans devise, une bande de salaire n'a pas de sens : elle est ignorée
        let salary = match non_blank(self.salary_unit.as_deref()) {
            Some(unit) => Some(SalaryFilter::try_new(
                SalaryUnit::from_str(unit)?,
                self.min_salary,
                self.max_salary,
            )?),
            None => None,
        };

        Ok(SearchCriteria {
            keyword,
            industry_ids: parse_all(&self.industries, IndustryId::try_new)?,
            province_ids: parse_all(&self.provinces, ProvinceId::try_new)?,
            job_levels: parse_all(&self.levels, str::parse)?,
            job_types: parse_all(&self.types, str::parse)?,
            experiences: parse_all(&self.experiences, str::parse)?,
            educations: parse_all(&self.educations, str::parse)?,
            posted_within_days: self.posted_within_days.filter(|d| *d > 0),
            salary,
            sort: JobSort::from_key(self.sort.as_deref()),
            page: PageRequest::try_new(self.page, self.size, max_page_size)?,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Valeurs blanches ignorées, doublons retirés (ordre d'arrivée conservé)
fn parse_all<T: PartialEq>(raw: &[String], parse: impl Fn(&str) -> Result<T>) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(raw.len());
    for value in raw.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        let parsed = parse(value)?;
        if !out.contains(&parsed) {
            out.push(parsed);
        }
    }
    Ok(out)
}
