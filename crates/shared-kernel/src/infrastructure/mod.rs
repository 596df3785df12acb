// crates/shared-kernel/src/infrastructure/mod.rs

pub mod pagination;
pub mod retry;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;
