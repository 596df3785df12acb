// crates/job-search/src/domain/search/fields.rs
//! Noms de champs du document d'index. `*.raw` = sous-champ keyword (non analysé).

pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const TITLE_RAW: &str = "title.raw";
pub const COMPANY_NAME: &str = "company_name";
pub const COMPANY_NAME_RAW: &str = "company_name.raw";
pub const DESCRIPTION: &str = "description";
pub const REQUIREMENT: &str = "requirement";
pub const INDUSTRY_IDS: &str = "industry_ids";
pub const PROVINCE_IDS: &str = "province_ids";
pub const STATUS: &str = "status";
pub const JOB_LEVEL: &str = "job_level";
pub const JOB_TYPE: &str = "job_type";
pub const EXPERIENCE: &str = "experience";
pub const EDUCATION: &str = "education";
pub const MIN_SALARY: &str = "min_salary";
pub const MAX_SALARY: &str = "max_salary";
pub const SALARY_TYPE: &str = "salary_type";
pub const SALARY_UNIT: &str = "salary_unit";
pub const EXPIRATION_DATE: &str = "expiration_date";
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";
pub const SUGGEST: &str = "suggest";
pub const SCORE: &str = "_score";
