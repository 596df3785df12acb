pub mod fields;
mod job_search_document;
mod job_search_mapper;
pub mod query;
pub mod text;

pub use job_search_document::{AutocompleteSuggest, JobSearchDocument};
pub use job_search_mapper::JobSearchMapper;
