// crates/job-search/src/domain/search/query/job_query_compiler.rs

use chrono::Duration;
use shared_kernel::clock::Clock;
use std::sync::Arc;

use super::query_node::{
    BoolQuery, CompiledJobQuery, FieldValue, MatchOperator, QueryNode, SortDirective, SortOrder,
};
use crate::domain::search::fields;
use crate::domain::search::text::normalize_keyword;
use crate::domain::value_objects::{JobSort, JobStatus, SalaryFilter, SearchCriteria};

/// Poids de pertinence : titre > entreprise > description/prérequis
pub mod boosts {
    pub const TITLE_EXACT: f32 = 12.0;
    pub const TITLE_PHRASE: f32 = 9.0;
    pub const TITLE_FUZZY: f32 = 8.0;

    pub const COMPANY_EXACT: f32 = 6.0;
    pub const COMPANY_PHRASE: f32 = 5.0;
    pub const COMPANY_FUZZY: f32 = 4.5;

    pub const BODY_MATCH: f32 = 1.0;
    pub const BODY_PREFIX: f32 = 0.5;
}

const PHRASE_SLOP: u32 = 1;
const FUZZINESS: u8 = 1;

pub struct JobQueryCompiler {
    clock: Arc<dyn Clock>,
    min_score: f32,
}

impl JobQueryCompiler {
    pub const DEFAULT_MIN_SCORE: f32 = 3.0;

    pub fn new(clock: Arc<dyn Clock>, min_score: f32) -> Self {
        Self { clock, min_score }
    }

    pub fn compile(&self, criteria: &SearchCriteria) -> CompiledJobQuery {
        // 1. Seules les offres publiées sont éligibles (filtre, sans score)
        let mut root = BoolQuery::new().filter(term(fields::STATUS, JobStatus::Approved.as_str()));

        // 2. Bloc de pertinence, uniquement si le mot-clé a du contenu après normalisation
        let keyword = criteria
            .keyword
            .as_deref()
            .map(|raw| (raw, normalize_keyword(raw)))
            .filter(|(_, normalized)| !normalized.is_empty());

        if let Some((original, normalized)) = &keyword {
            root = Self::with_keyword_block(root, original, normalized);
        }

        // 3. Facettes (ET entre elles, liste vide = pas de contrainte)
        let facets = [
            terms(fields::INDUSTRY_IDS, criteria.industry_ids.iter().map(|id| FieldValue::Long(id.value()))),
            terms(fields::PROVINCE_IDS, criteria.province_ids.iter().map(|id| FieldValue::Long(id.value()))),
            terms(fields::JOB_LEVEL, criteria.job_levels.iter().map(|v| v.as_str().into())),
            terms(fields::JOB_TYPE, criteria.job_types.iter().map(|v| v.as_str().into())),
            terms(fields::EXPERIENCE, criteria.experiences.iter().map(|v| v.as_str().into())),
            terms(fields::EDUCATION, criteria.educations.iter().map(|v| v.as_str().into())),
        ];
        for facet in facets.into_iter().flatten() {
            root = root.filter(facet);
        }

        // 4. Fraîcheur : créée depuis moins de N jours (UTC, calculé à la compilation)
        if let Some(days) = criteria.posted_within_days.filter(|d| *d > 0) {
            let since = self.clock.now() - Duration::days(i64::from(days));
            root = root.filter(QueryNode::Range {
                field: fields::CREATED_AT,
                gte: Some(FieldValue::Date(since)),
                lte: None,
            });
        }

        // 5. Salaire : chevauchement des bandes, seulement si une devise est donnée
        if let Some(salary) = &criteria.salary {
            for clause in Self::salary_overlap(salary) {
                root = root.filter(clause);
            }
        }

        CompiledJobQuery {
            query: root,
            min_score: keyword.is_some().then_some(self.min_score),
            sort: Self::sort_directives(criteria.sort),
            from: criteria.page.offset(),
            size: criteria.page.size,
        }
    }

    fn with_keyword_block(root: BoolQuery, original: &str, normalized: &str) -> BoolQuery {
        let title = BoolQuery::new()
            .should(exact(fields::TITLE_RAW, original, boosts::TITLE_EXACT))
            .should(phrase(fields::TITLE, normalized, boosts::TITLE_PHRASE))
            .should(fuzzy_all(fields::TITLE, normalized, boosts::TITLE_FUZZY))
            .minimum_should_match(1);

        let company = BoolQuery::new()
            .should(exact(fields::COMPANY_NAME_RAW, original, boosts::COMPANY_EXACT))
            .should(phrase(fields::COMPANY_NAME, normalized, boosts::COMPANY_PHRASE))
            .should(fuzzy_all(fields::COMPANY_NAME, normalized, boosts::COMPANY_FUZZY))
            .minimum_should_match(1);

        // Titre OU entreprise : obligatoire dès qu'un mot-clé est présent
        let admission = BoolQuery::new()
            .should(title.into_node())
            .should(company.into_node())
            .minimum_should_match(1);

        let mut root = root.must(admission.into_node());

        // Description / prérequis : ajoutent du score, ne filtrent jamais
        for field in [fields::DESCRIPTION, fields::REQUIREMENT] {
            root = root
                .should(QueryNode::Match {
                    field,
                    query: normalized.to_string(),
                    operator: MatchOperator::Or,
                    fuzziness: None,
                    boost: Some(boosts::BODY_MATCH),
                })
                .should(QueryNode::MatchPhrasePrefix {
                    field,
                    query: normalized.to_string(),
                    boost: Some(boosts::BODY_PREFIX),
                });
        }
        root.minimum_should_match(0)
    }

    fn salary_overlap(salary: &SalaryFilter) -> Vec<QueryNode> {
        let mut clauses = vec![term(fields::SALARY_UNIT, salary.unit.as_str())];

        if let Some(min) = salary.min {
            clauses.push(QueryNode::Range {
                field: fields::MAX_SALARY,
                gte: Some(FieldValue::Double(min)),
                lte: None,
            });
        }
        if let Some(max) = salary.max {
            clauses.push(QueryNode::Range {
                field: fields::MIN_SALARY,
                gte: None,
                lte: Some(FieldValue::Double(max)),
            });
        }
        clauses
    }

    fn sort_directives(sort: JobSort) -> Vec<SortDirective> {
        let (field, order) = match sort {
            JobSort::UpdatedAtDesc => (fields::UPDATED_AT, SortOrder::Desc),
            JobSort::CreatedAtDesc => (fields::CREATED_AT, SortOrder::Desc),
            JobSort::ExpirationDateAsc => (fields::EXPIRATION_DATE, SortOrder::Asc),
            JobSort::Relevance => (fields::SCORE, SortOrder::Desc),
        };
        vec![SortDirective { field, order }]
    }
}

// --- Constructeurs de clauses ---

fn term(field: &'static str, value: &str) -> QueryNode {
    QueryNode::Term {
        field,
        value: value.into(),
        boost: None,
    }
}

fn terms(field: &'static str, values: impl Iterator<Item = FieldValue>) -> Option<QueryNode> {
    let values: Vec<FieldValue> = values.collect();
    (!values.is_empty()).then_some(QueryNode::Terms { field, values })
}

fn exact(field: &'static str, original: &str, boost: f32) -> QueryNode {
    QueryNode::Term {
        field,
        value: original.into(),
        boost: Some(boost),
    }
}

fn phrase(field: &'static str, normalized: &str, boost: f32) -> QueryNode {
    QueryNode::MatchPhrase {
        field,
        query: normalized.to_string(),
        slop: PHRASE_SLOP,
        boost: Some(boost),
    }
}

fn fuzzy_all(field: &'static str, normalized: &str, boost: f32) -> QueryNode {
    QueryNode::Match {
        field,
        query: normalized.to_string(),
        operator: MatchOperator::And,
        fuzziness: Some(FUZZINESS),
        boost: Some(boost),
    }
}
