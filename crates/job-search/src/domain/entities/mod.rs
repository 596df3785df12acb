mod job;

pub use job::{Job, JobIndustry, JobLocation};
