// crates/job-search/src/domain/search/query/query_node.rs

use chrono::{DateTime, Utc};

/// Valeur comparée par les clauses exactes (term/terms/range)
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Keyword(String),
    Long(i64),
    Double(f64),
    Date(DateTime<Utc>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Keyword(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    And,
    Or,
}

/// Arbre de requête indépendant du moteur. Les boosts et la structure des clauses
/// forment le contrat ; la syntaxe DSL vit dans l'adaptateur d'infrastructure.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    Term {
        field: &'static str,
        value: FieldValue,
        boost: Option<f32>,
    },
    Terms {
        field: &'static str,
        values: Vec<FieldValue>,
    },
    Range {
        field: &'static str,
        gte: Option<FieldValue>,
        lte: Option<FieldValue>,
    },
    Match {
        field: &'static str,
        query: String,
        operator: MatchOperator,
        fuzziness: Option<u8>,
        boost: Option<f32>,
    },
    MatchPhrase {
        field: &'static str,
        query: String,
        slop: u32,
        boost: Option<f32>,
    },
    MatchPhrasePrefix {
        field: &'static str,
        query: String,
        boost: Option<f32>,
    },
    Bool(BoolQuery),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoolQuery {
    /// Doivent matcher, contribuent au score
    pub must: Vec<QueryNode>,
    /// Doivent matcher, sans score
    pub filter: Vec<QueryNode>,
    /// Optionnelles sauf si `minimum_should_match` l'exige
    pub should: Vec<QueryNode>,
    pub minimum_should_match: Option<u32>,
}

impl BoolQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn must(mut self, node: QueryNode) -> Self {
        self.must.push(node);
        self
    }

    pub fn filter(mut self, node: QueryNode) -> Self {
        self.filter.push(node);
        self
    }

    pub fn should(mut self, node: QueryNode) -> Self {
        self.should.push(node);
        self
    }

    pub fn minimum_should_match(mut self, n: u32) -> Self {
        self.minimum_should_match = Some(n);
        self
    }

    pub fn into_node(self) -> QueryNode {
        QueryNode::Bool(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    /// Nom de champ, ou `_score` pour l'ordre de pertinence
    pub field: &'static str,
    pub order: SortOrder,
}

/// Requête compilée, prête à être sérialisée vers le moteur
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledJobQuery {
    pub query: BoolQuery,
    pub min_score: Option<f32>,
    pub sort: Vec<SortDirective>,
    pub from: u64,
    pub size: u32,
}
