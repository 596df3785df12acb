// crates/job-search/src/lib.rs

#![recursion_limit = "256"]

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(any(test, feature = "test-utils"))]
pub mod utils;
