// crates/job-search/src/domain/value_objects/search_criteria.rs

use crate::domain::value_objects::{
    EducationLevel, ExperienceLevel, IndustryId, JobLevel, JobType, ProvinceId, SalaryUnit,
};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::pagination::PageRequest;

/// Critères de recherche validés. Une liste vide signifie "pas de contrainte".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Mot-clé trimmé, `None` si absent ou blanc
    pub keyword: Option<String>,
    pub industry_ids: Vec<IndustryId>,
    pub province_ids: Vec<ProvinceId>,
    pub job_levels: Vec<JobLevel>,
    pub job_types: Vec<JobType>,
    pub experiences: Vec<ExperienceLevel>,
    pub educations: Vec<EducationLevel>,
    pub posted_within_days: Option<u32>,
    pub salary: Option<SalaryFilter>,
    pub sort: JobSort,
    pub page: PageRequest,
}

/// Bande de salaire demandée. N'existe que si une devise est précisée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryFilter {
    pub unit: SalaryUnit,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SalaryFilter {
    pub fn try_new(unit: SalaryUnit, min: Option<f64>, max: Option<f64>) -> Result<Self> {
        for (field, value) in [("min_salary", min), ("max_salary", max)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(DomainError::validation(field, "Salary must be a positive amount"));
                }
            }
        }

        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::validation(
                    "min_salary",
                    "Minimum salary cannot exceed maximum salary",
                ));
            }
        }

        Ok(Self { unit, min, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobSort {
    /// Ordre du score de pertinence, décroissant
    #[default]
    Relevance,
    UpdatedAtDesc,
    CreatedAtDesc,
    ExpirationDateAsc,
}

impl JobSort {
    /// Une clé inconnue n'est pas une erreur : on retombe sur la pertinence
    pub fn from_key(key: Option<&str>) -> Self {
        match key.map(str::trim) {
            Some("updatedAt") => Self::UpdatedAtDesc,
            Some("createdAt") => Self::CreatedAtDesc,
            Some("expirationDate") => Self::ExpirationDateAsc,
            _ => Self::Relevance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_keys_map_to_field_sorts() {
        assert_eq!(JobSort::from_key(Some("updatedAt")), JobSort::UpdatedAtDesc);
        assert_eq!(JobSort::from_key(Some("createdAt")), JobSort::CreatedAtDesc);
        assert_eq!(JobSort::from_key(Some("expirationDate")), JobSort::ExpirationDateAsc);
        assert_eq!(JobSort::from_key(Some("salary")), JobSort::Relevance);
        assert_eq!(JobSort::from_key(None), JobSort::Relevance);
    }

    #[test]
    fn test_salary_filter_rejects_inverted_or_negative_band() {
        assert!(SalaryFilter::try_new(SalaryUnit::Usd, Some(2000.0), Some(1000.0)).is_err());
        assert!(SalaryFilter::try_new(SalaryUnit::Usd, Some(-1.0), None).is_err());
        assert!(SalaryFilter::try_new(SalaryUnit::Usd, Some(1000.0), None).is_ok());
    }
}
