mod job_query_compiler;
mod query_node;

#[cfg(test)]
mod job_query_compiler_test;

pub use job_query_compiler::{JobQueryCompiler, boosts};
pub use query_node::{
    BoolQuery, CompiledJobQuery, FieldValue, MatchOperator, QueryNode, SortDirective, SortOrder,
};
