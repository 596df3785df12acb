#[macro_use]
mod stable_enum;

mod job_attributes;
mod job_id;
mod job_status;
mod reference_id;
mod search_criteria;

pub use job_attributes::{EducationLevel, ExperienceLevel, JobLevel, JobType, SalaryType, SalaryUnit};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use reference_id::{IndustryId, ProvinceId};
pub use search_criteria::{JobSort, SalaryFilter, SearchCriteria};
