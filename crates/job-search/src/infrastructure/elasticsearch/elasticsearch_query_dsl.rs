// crates/job-search/src/infrastructure/elasticsearch/elasticsearch_query_dsl.rs

use chrono::SecondsFormat;
use serde_json::{Map, Value, json};

use crate::domain::search::fields;
use crate::domain::search::query::{
    BoolQuery, CompiledJobQuery, FieldValue, MatchOperator, QueryNode, SortDirective, SortOrder,
};

/// Corps complet d'une requête `_search`. Seuls les `_id` sont lus : les offres
/// sont ré-hydratées depuis le store primaire.
pub fn search_body(query: &CompiledJobQuery) -> Value {
    let mut body = json!({
        "from": query.from,
        "size": query.size,
        "track_total_hits": true,
        "_source": false,
        "query": bool_to_dsl(&query.query),
        "sort": query.sort.iter().map(sort_to_dsl).collect::<Vec<_>>(),
    });

    if let Some(min_score) = query.min_score {
        body["min_score"] = json!(min_score);
    }
    body
}

pub fn to_dsl(node: &QueryNode) -> Value {
    match node {
        QueryNode::Term { field, value, boost } => {
            let mut clause = json!({ "value": value_to_dsl(value) });
            with_boost(&mut clause, *boost);
            json!({ "term": { *field: clause } })
        }
        QueryNode::Terms { field, values } => {
            let values: Vec<Value> = values.iter().map(value_to_dsl).collect();
            json!({ "terms": { *field: values } })
        }
        QueryNode::Range { field, gte, lte } => {
            let mut bounds = Map::new();
            if let Some(v) = gte {
                bounds.insert("gte".into(), value_to_dsl(v));
            }
            if let Some(v) = lte {
                bounds.insert("lte".into(), value_to_dsl(v));
            }
            json!({ "range": { *field: bounds } })
        }
        QueryNode::Match { field, query, operator, fuzziness, boost } => {
            let mut clause = json!({
                "query": query,
                "operator": match operator {
                    MatchOperator::And => "and",
                    MatchOperator::Or => "or",
                },
            });
            if let Some(f) = fuzziness {
                clause["fuzziness"] = json!(f);
            }
            with_boost(&mut clause, *boost);
            json!({ "match": { *field: clause } })
        }
        QueryNode::MatchPhrase { field, query, slop, boost } => {
            let mut clause = json!({ "query": query, "slop": slop });
            with_boost(&mut clause, *boost);
            json!({ "match_phrase": { *field: clause } })
        }
        QueryNode::MatchPhrasePrefix { field, query, boost } => {
            let mut clause = json!({ "query": query });
            with_boost(&mut clause, *boost);
            json!({ "match_phrase_prefix": { *field: clause } })
        }
        QueryNode::Bool(inner) => bool_to_dsl(inner),
    }
}

fn bool_to_dsl(query: &BoolQuery) -> Value {
    let mut clauses = Map::new();
    for (occur, nodes) in [("must", &query.must), ("filter", &query.filter), ("should", &query.should)] {
        if !nodes.is_empty() {
            clauses.insert(occur.into(), nodes.iter().map(to_dsl).collect());
        }
    }
    if let Some(msm) = query.minimum_should_match {
        clauses.insert("minimum_should_match".into(), json!(msm));
    }
    json!({ "bool": clauses })
}

fn sort_to_dsl(directive: &SortDirective) -> Value {
    let order = match directive.order {
        SortOrder::Asc => "asc",
        SortOrder::Desc => "desc",
    };

    if directive.field == fields::SCORE {
        json!({ "_score": { "order": order } })
    } else {
        // Valeur manquante (ex: jamais mise à jour) : en fin de liste
        json!({ directive.field: { "order": order, "missing": "_last" } })
    }
}

fn value_to_dsl(value: &FieldValue) -> Value {
    match value {
        FieldValue::Keyword(s) => json!(s),
        FieldValue::Long(n) => json!(n),
        FieldValue::Double(n) => json!(n),
        FieldValue::Date(d) => json!(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}

fn with_boost(clause: &mut Value, boost: Option<f32>) {
    if let Some(b) = boost {
        clause["boost"] = json!(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::query::JobQueryCompiler;
    use crate::domain::value_objects::{JobSort, SearchCriteria};
    use chrono::{TimeZone, Utc};
    use shared_kernel::clock::FixedClock;
    use shared_kernel::infrastructure::pagination::PageRequest;
    use std::sync::Arc;

    fn compiler() -> JobQueryCompiler {
        let now = Utc.with_ymd_and_hms(2026, 10, 15, 0, 0, 0).unwrap();
        JobQueryCompiler::new(Arc::new(FixedClock(now)), 3.0)
    }

    #[test]
    fn test_leaf_clauses() {
        let term = to_dsl(&QueryNode::Term {
            field: fields::TITLE_RAW,
            value: "Rust Dev".into(),
            boost: Some(12.0),
        });
        assert_eq!(term, json!({ "term": { "title.raw": { "value": "Rust Dev", "boost": 12.0 } } }));

        let fuzzy = to_dsl(&QueryNode::Match {
            field: fields::TITLE,
            query: "rust dev".into(),
            operator: MatchOperator::And,
            fuzziness: Some(1),
            boost: Some(8.0),
        });
        assert_eq!(
            fuzzy,
            json!({ "match": { "title": { "query": "rust dev", "operator": "and", "fuzziness": 1, "boost": 8.0 } } })
        );

        let range = to_dsl(&QueryNode::Range {
            field: fields::MIN_SALARY,
            gte: None,
            lte: Some(FieldValue::Double(2000.0)),
        });
        assert_eq!(range, json!({ "range": { "min_salary": { "lte": 2000.0 } } }));
    }

    #[test]
    fn test_search_body_without_keyword() {
        let criteria = SearchCriteria {
            sort: JobSort::ExpirationDateAsc,
            page: PageRequest { page: 2, size: 10 },
            ..Default::default()
        };

        let body = search_body(&compiler().compile(&criteria));

        assert_eq!(body["from"], 10);
        assert_eq!(body["size"], 10);
        assert_eq!(body["_source"], false);
        assert!(body.get("min_score").is_none());
        assert_eq!(
            body["query"],
            json!({ "bool": { "filter": [ { "term": { "status": { "value": "APPROVED" } } } ] } })
        );
        assert_eq!(
            body["sort"],
            json!([ { "expiration_date": { "order": "asc", "missing": "_last" } } ])
        );
    }

    #[test]
    fn test_search_body_with_keyword() {
        let criteria = SearchCriteria {
            keyword: Some("Rust".into()),
            ..Default::default()
        };

        let body = search_body(&compiler().compile(&criteria));

        assert_eq!(body["min_score"], 3.0);
        assert_eq!(body["sort"], json!([ { "_score": { "order": "desc" } } ]));
        assert_eq!(body["query"]["bool"]["minimum_should_match"], 0);
        assert_eq!(body["query"]["bool"]["should"].as_array().unwrap().len(), 4);

        let admission = &body["query"]["bool"]["must"][0]["bool"];
        assert_eq!(admission["minimum_should_match"], 1);
        assert_eq!(
            admission["should"][0]["bool"]["should"][0],
            json!({ "term": { "title.raw": { "value": "Rust", "boost": 12.0 } } })
        );
    }

    #[test]
    fn test_dates_are_serialized_as_utc_rfc3339() {
        let criteria = SearchCriteria {
            posted_within_days: Some(7),
            ..Default::default()
        };

        let body = search_body(&compiler().compile(&criteria));

        assert_eq!(
            body["query"]["bool"]["filter"][1],
            json!({ "range": { "created_at": { "gte": "2026-10-08T00:00:00.000Z" } } })
        );
    }
}
