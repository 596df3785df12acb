mod postgres_factory;

pub use postgres_factory::{DbConfig, create_postgres_pool};
