mod elasticsearch_job_index;
mod elasticsearch_query_dsl;

pub use elasticsearch_job_index::ElasticsearchJobIndex;
pub use elasticsearch_query_dsl::{search_body, to_dsl};
