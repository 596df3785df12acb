// crates/job-search/src/utils/job_search_index_stub.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use futures::StreamExt;
use futures::stream::BoxStream;
use shared_kernel::errors::{DomainError, Result};
use std::cmp::Ordering;
use std::sync::Mutex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::entities::Job;
use crate::domain::repositories::{BulkIndexReport, JobSearchIndex, SearchHits};
use crate::domain::search::query::{
    BoolQuery, CompiledJobQuery, FieldValue, MatchOperator, QueryNode, SortOrder,
};
use crate::domain::search::{JobSearchDocument, JobSearchMapper, fields};
use crate::domain::value_objects::JobId;

// --- STUB SEARCH INDEX ---
// Moteur en mémoire : évalue l'arbre compilé sur les documents stockés.
// Score = somme des boosts des clauses qui matchent (approximation volontairement simple du BM25).
pub struct JobSearchIndexStub {
    pub documents: Mutex<Vec<JobSearchDocument>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    /// Nombre de prochains appels qui échouent en erreur transitoire (puis tout repasse)
    pub transient_failures: Mutex<u32>,
    /// Si renseigné, `search` renvoie ces hits tels quels (classement imposé)
    pub hits_override: Mutex<Option<SearchHits>>,
    pub executed_queries: Mutex<Vec<CompiledJobQuery>>,
}

impl Default for JobSearchIndexStub {
    fn default() -> Self {
        Self {
            documents: Mutex::new(vec![]),
            error_to_return: Mutex::new(None),
            transient_failures: Mutex::new(0),
            hits_override: Mutex::new(None),
            executed_queries: Mutex::new(vec![]),
        }
    }
}

impl JobSearchIndexStub {
    pub fn with_jobs(jobs: &[Job]) -> Self {
        let stub = Self::default();
        *stub.documents.lock().unwrap() = jobs.iter().map(JobSearchMapper::to_search_document).collect();
        stub
    }

    pub fn document_ids(&self) -> Vec<String> {
        self.documents.lock().unwrap().iter().map(|d| d.id.clone()).collect()
    }

    fn fail_if_configured(&self) -> Result<()> {
        let mut remaining = self.transient_failures.lock().unwrap();
        if *remaining > 0 {
            *remaining -= 1;
            return Err(DomainError::Infrastructure("search engine unavailable".into()));
        }
        drop(remaining);

        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn upsert(&self, document: JobSearchDocument) {
        let mut docs = self.documents.lock().unwrap();
        match docs.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => docs.push(document),
        }
    }
}

#[async_trait]
impl JobSearchIndex for JobSearchIndexStub {
    async fn index(&self, document: &JobSearchDocument) -> Result<()> {
        self.fail_if_configured()?;
        self.upsert(document.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &JobId) -> Result<()> {
        self.fail_if_configured()?;
        let id = id.to_string();
        self.documents.lock().unwrap().retain(|d| d.id != id);
        Ok(())
    }

    async fn index_all(&self, mut jobs: BoxStream<'_, Result<Job>>) -> Result<BulkIndexReport> {
        self.fail_if_configured()?;
        let mut report = BulkIndexReport::default();

        while let Some(item) = jobs.next().await {
            match item {
                Ok(job) => {
                    self.upsert(JobSearchMapper::to_search_document(&job));
                    report.indexed += 1;
                }
                Err(err) if err.is_transient() => return Err(err),
                Err(_) => report.failed += 1,
            }
        }
        Ok(report)
    }

    async fn search(&self, query: &CompiledJobQuery) -> Result<SearchHits> {
        self.fail_if_configured()?;
        self.executed_queries.lock().unwrap().push(query.clone());

        if let Some(hits) = self.hits_override.lock().unwrap().clone() {
            return Ok(hits);
        }

        let docs = self.documents.lock().unwrap();
        let mut matched: Vec<(&JobSearchDocument, f32)> = docs
            .iter()
            .filter_map(|doc| eval_bool(&query.query, doc).map(|score| (doc, score)))
            .filter(|(_, score)| query.min_score.is_none_or(|min| *score >= min))
            .collect();

        // Tri stable : à égalité, l'ordre d'insertion est conservé
        matched.sort_by(|(a, sa), (b, sb)| {
            for directive in &query.sort {
                let ord = if directive.field == fields::SCORE {
                    sa.partial_cmp(sb).unwrap_or(Ordering::Equal)
                } else {
                    compare_first(a, b, directive.field)
                };
                let ord = match directive.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        });

        let total = matched.len() as u64;
        let ids = matched
            .into_iter()
            .skip(query.from as usize)
            .take(query.size as usize)
            .map(|(doc, _)| JobId::try_new(doc.id.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchHits { ids, total })
    }

    async fn suggest(&self, prefix: &str, size: usize) -> Result<Vec<String>> {
        self.fail_if_configured()?;
        let needle = fold(prefix.trim());
        let mut out: Vec<String> = Vec::new();

        for doc in self.documents.lock().unwrap().iter().filter(|d| d.status.is_searchable()) {
            for input in &doc.suggest.input {
                if fold(input).starts_with(&needle) && !out.contains(input) {
                    out.push(input.clone());
                }
            }
        }
        out.truncate(size);
        Ok(out)
    }
}

// --- Évaluation ---

fn eval_bool(query: &BoolQuery, doc: &JobSearchDocument) -> Option<f32> {
    if !query.filter.iter().all(|clause| eval(clause, doc).is_some()) {
        return None;
    }

    let mut score = 0.0;
    for clause in &query.must {
        score += eval(clause, doc)?;
    }

    let mut matched_should = 0;
    for clause in &query.should {
        if let Some(s) = eval(clause, doc) {
            matched_should += 1;
            score += s;
        }
    }

    let required = query.minimum_should_match.unwrap_or(
        if query.must.is_empty() && query.filter.is_empty() && !query.should.is_empty() { 1 } else { 0 },
    );
    (matched_should >= required).then_some(score)
}

fn eval(node: &QueryNode, doc: &JobSearchDocument) -> Option<f32> {
    match node {
        QueryNode::Bool(inner) => eval_bool(inner, doc),
        QueryNode::Term { field, value, boost } => {
            // Sous-champs `.raw` : normalizer lowercase + asciifolding côté mapping
            let normalized = |v: &FieldValue| match v {
                FieldValue::Keyword(s) if field.ends_with(".raw") => FieldValue::Keyword(fold(s)),
                other => other.clone(),
            };
            let expected = normalized(value);
            field_values(doc, field)
                .iter()
                .any(|v| compare(&normalized(v), &expected) == Some(Ordering::Equal))
                .then_some(boost.unwrap_or(1.0))
        }
        QueryNode::Terms { field, values } => {
            let doc_values = field_values(doc, field);
            values
                .iter()
                .any(|q| doc_values.iter().any(|v| compare(v, q) == Some(Ordering::Equal)))
                .then_some(1.0)
        }
        QueryNode::Range { field, gte, lte } => field_values(doc, field)
            .iter()
            .any(|v| {
                gte.as_ref().is_none_or(|lo| matches!(compare(v, lo), Some(Ordering::Greater | Ordering::Equal)))
                    && lte.as_ref().is_none_or(|hi| matches!(compare(v, hi), Some(Ordering::Less | Ordering::Equal)))
            })
            .then_some(1.0),
        QueryNode::Match { field, query, operator, fuzziness, boost } => {
            let doc_tokens = analyze(&field_text(doc, field));
            let query_tokens = analyze(query);
            if query_tokens.is_empty() {
                return None;
            }
            let max_edits = usize::from(fuzziness.unwrap_or(0));
            let hits = query_tokens
                .iter()
                .filter(|q| doc_tokens.iter().any(|d| levenshtein(q, d) <= max_edits))
                .count();

            let ok = match operator {
                MatchOperator::And => hits == query_tokens.len(),
                MatchOperator::Or => hits > 0,
            };
            ok.then(|| boost.unwrap_or(1.0) * hits as f32 / query_tokens.len() as f32)
        }
        QueryNode::MatchPhrase { field, query, slop, boost } => {
            phrase_matches(&analyze(&field_text(doc, field)), &analyze(query), *slop as usize, false)
                .then_some(boost.unwrap_or(1.0))
        }
        QueryNode::MatchPhrasePrefix { field, query, boost } => {
            phrase_matches(&analyze(&field_text(doc, field)), &analyze(query), 0, true)
                .then_some(boost.unwrap_or(1.0))
        }
    }
}

/// Les tokens de la requête apparaissent dans l'ordre, avec au plus `slop` positions intercalées
fn phrase_matches(doc: &[String], query: &[String], slop: usize, last_is_prefix: bool) -> bool {
    if query.is_empty() {
        return false;
    }
    let token_eq = |i: usize, d: &String| {
        if last_is_prefix && i == query.len() - 1 { d.starts_with(&query[i]) } else { *d == query[i] }
    };

    (0..doc.len()).filter(|&start| token_eq(0, &doc[start])).any(|start| {
        let mut pos = start;
        let mut gaps = 0;
        for i in 1..query.len() {
            let next = (pos + 1..doc.len()).find(|&j| token_eq(i, &doc[j]));
            match next {
                Some(j) if gaps + (j - pos - 1) <= slop => {
                    gaps += j - pos - 1;
                    pos = j;
                }
                _ => return false,
            }
        }
        true
    })
}

fn field_values(doc: &JobSearchDocument, field: &str) -> Vec<FieldValue> {
    match field {
        fields::ID => vec![FieldValue::Keyword(doc.id.clone())],
        fields::TITLE | fields::TITLE_RAW => vec![FieldValue::Keyword(doc.title.clone())],
        fields::COMPANY_NAME | fields::COMPANY_NAME_RAW => keyword(doc.company_name.as_deref()),
        fields::DESCRIPTION => vec![FieldValue::Keyword(doc.description.clone())],
        fields::REQUIREMENT => vec![FieldValue::Keyword(doc.requirement.clone())],
        fields::INDUSTRY_IDS => doc.industry_ids.iter().copied().map(FieldValue::Long).collect(),
        fields::PROVINCE_IDS => doc.province_ids.iter().copied().map(FieldValue::Long).collect(),
        fields::STATUS => keyword(Some(doc.status.as_str())),
        fields::JOB_LEVEL => keyword(doc.job_level.as_ref().map(|v| v.as_str())),
        fields::JOB_TYPE => keyword(doc.job_type.as_ref().map(|v| v.as_str())),
        fields::EXPERIENCE => keyword(doc.experience.as_ref().map(|v| v.as_str())),
        fields::EDUCATION => keyword(doc.education.as_ref().map(|v| v.as_str())),
        fields::SALARY_TYPE => keyword(doc.salary_type.as_ref().map(|v| v.as_str())),
        fields::SALARY_UNIT => keyword(doc.salary_unit.as_ref().map(|v| v.as_str())),
        fields::MIN_SALARY => doc.min_salary.map(FieldValue::Double).into_iter().collect(),
        fields::MAX_SALARY => doc.max_salary.map(FieldValue::Double).into_iter().collect(),
        fields::CREATED_AT => vec![FieldValue::Date(doc.created_at)],
        fields::UPDATED_AT => doc.updated_at.map(FieldValue::Date).into_iter().collect(),
        fields::EXPIRATION_DATE => doc.expiration_date.map(date_value).into_iter().collect(),
        fields::SUGGEST => doc.suggest.input.iter().map(|s| FieldValue::Keyword(s.clone())).collect(),
        _ => vec![],
    }
}

fn keyword(value: Option<&str>) -> Vec<FieldValue> {
    value.map(|s| FieldValue::Keyword(s.to_string())).into_iter().collect()
}

fn date_value(day: NaiveDate) -> FieldValue {
    FieldValue::Date(DateTime::<Utc>::from_naive_utc_and_offset(day.and_time(NaiveTime::MIN), Utc))
}

fn field_text(doc: &JobSearchDocument, field: &str) -> String {
    field_values(doc, field)
        .into_iter()
        .filter_map(|v| match v {
            FieldValue::Keyword(s) => Some(s),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Document sans valeur pour le champ : trié en dernier
fn compare_first(a: &JobSearchDocument, b: &JobSearchDocument, field: &str) -> Ordering {
    match (field_values(a, field).first(), field_values(b, field).first()) {
        (Some(x), Some(y)) => compare(x, y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &FieldValue, b: &FieldValue) -> Option<Ordering> {
    match (a, b) {
        (FieldValue::Keyword(x), FieldValue::Keyword(y)) => Some(x.cmp(y)),
        (FieldValue::Long(x), FieldValue::Long(y)) => Some(x.cmp(y)),
        (FieldValue::Double(x), FieldValue::Double(y)) => x.partial_cmp(y),
        (FieldValue::Long(x), FieldValue::Double(y)) => (*x as f64).partial_cmp(y),
        (FieldValue::Double(x), FieldValue::Long(y)) => x.partial_cmp(&(*y as f64)),
        (FieldValue::Date(x), FieldValue::Date(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Analyseur "standard + lowercase + asciifolding", comme le mapping de l'index
fn analyze(text: &str) -> Vec<String> {
    fold(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == 'đ' || c == 'Đ' { 'd' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut current = vec![i + 1];
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            current.push((prev[j] + cost).min(prev[j + 1] + 1).min(current[j] + 1));
        }
        prev = current;
    }
    prev[b_chars.len()]
}
