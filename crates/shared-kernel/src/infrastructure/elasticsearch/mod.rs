// crates/shared-kernel/src/infrastructure/elasticsearch/mod.rs

mod elastic_error_mapper;
mod elastic_factory;

pub use elastic_error_mapper::{ElasticErrorExt, ensure_success};
pub use elastic_factory::{ElasticConfig, create_elasticsearch_client};
