pub mod bootstrap;
pub mod config;
pub mod elasticsearch;
pub mod postgres;
