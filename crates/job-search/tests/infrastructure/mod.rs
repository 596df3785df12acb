// crates/job-search/tests/infrastructure/mod.rs

mod repository_it_for_job;
