mod postgres_job_row;

pub use postgres_job_row::PostgresJobRow;
