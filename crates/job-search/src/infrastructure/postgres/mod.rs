pub mod repositories;
pub mod rows;
