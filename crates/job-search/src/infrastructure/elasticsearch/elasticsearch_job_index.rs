// crates/job-search/src/infrastructure/elasticsearch/elasticsearch_job_index.rs

use async_trait::async_trait;
use elasticsearch::{
    BulkOperation, BulkParts, DeleteParts, Elasticsearch, IndexParts, SearchParts,
    indices::{IndicesCreateParts, IndicesExistsParts},
    params::OpType,
};
use futures::StreamExt;
use futures::stream::BoxStream;
use serde_json::{Value, json};
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::elasticsearch::{ElasticErrorExt, ensure_success};

use super::elasticsearch_query_dsl::search_body;
use crate::domain::entities::Job;
use crate::domain::repositories::{BulkIndexReport, JobSearchIndex, SearchHits};
use crate::domain::search::query::CompiledJobQuery;
use crate::domain::search::{JobSearchDocument, JobSearchMapper, fields};
use crate::domain::value_objects::{JobId, JobStatus};
use crate::infrastructure::config::SearchConfig;

const SUGGEST_NAME: &str = "job-suggest";

pub struct ElasticsearchJobIndex {
    client: Elasticsearch,
    index_name: String,
    bulk_batch_size: usize,
}

impl ElasticsearchJobIndex {
    pub fn new(client: Elasticsearch, config: &SearchConfig) -> Self {
        Self {
            client,
            index_name: config.index_name.clone(),
            bulk_batch_size: config.bulk_batch_size.max(1),
        }
    }

    /// Crée l'index et son mapping s'il n'existe pas encore
    pub async fn ensure_index_ready(&self) -> Result<()> {
        let exists = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index_name.as_str()]))
            .send()
            .await
            .map_domain_infra("JobIndexExists")?
            .status_code()
            .is_success();

        if !exists {
            let response = self
                .client
                .indices()
                .create(IndicesCreateParts::Index(&self.index_name))
                .body(Self::index_definition())
                .send()
                .await
                .map_domain_infra("JobIndexCreate")?;
            ensure_success(response, "JobIndexCreate").await?;

            tracing::info!("Elasticsearch index '{}' created", self.index_name);
        }
        Ok(())
    }

    fn index_definition() -> Value {
        let folded_text = json!({
            "type": "text",
            "analyzer": "folding",
            "fields": { "raw": { "type": "keyword", "normalizer": "folding_keyword" } }
        });

        let settings = json!({
            "analysis": {
                "analyzer": {
                    "folding": {
                        "type": "custom",
                        "tokenizer": "standard",
                        "filter": ["lowercase", "asciifolding"]
                    }
                },
                "normalizer": {
                    "folding_keyword": {
                        "type": "custom",
                        "filter": ["lowercase", "asciifolding"]
                    }
                }
            }
        });

        let suggest = json!({
            "type": "completion",
            "analyzer": "folding",
            "contexts": [
                { "name": fields::STATUS, "type": "category", "path": fields::STATUS }
            ]
        });

        let properties = json!({
            fields::ID: { "type": "keyword" },
            fields::TITLE: folded_text,
            fields::COMPANY_NAME: folded_text,
            fields::DESCRIPTION: { "type": "text", "analyzer": "folding" },
            fields::REQUIREMENT: { "type": "text", "analyzer": "folding" },
            fields::INDUSTRY_IDS: { "type": "long" },
            fields::PROVINCE_IDS: { "type": "long" },
            fields::STATUS: { "type": "keyword" },
            fields::JOB_LEVEL: { "type": "keyword" },
            fields::JOB_TYPE: { "type": "keyword" },
            fields::EXPERIENCE: { "type": "keyword" },
            fields::EDUCATION: { "type": "keyword" },
            fields::SALARY_TYPE: { "type": "keyword" },
            fields::SALARY_UNIT: { "type": "keyword" },
            fields::MIN_SALARY: { "type": "double" },
            fields::MAX_SALARY: { "type": "double" },
            fields::EXPIRATION_DATE: { "type": "date" },
            fields::CREATED_AT: { "type": "date" },
            fields::UPDATED_AT: { "type": "date" },
            fields::SUGGEST: suggest
        });

        json!({
            "settings": settings,
            "mappings": { "properties": properties }
        })
    }

    async fn send_bulk(&self, documents: Vec<JobSearchDocument>) -> Result<BulkIndexReport> {
        let mut operations: Vec<BulkOperation<Value>> = Vec::with_capacity(documents.len());
        for doc in &documents {
            let body = serde_json::to_value(doc)
                .map_err(|e| DomainError::Internal(format!("JobDocumentSerialize: {}", e)))?;
            operations.push(BulkOperation::index(body).id(&doc.id).into());
        }

        let response = self
            .client
            .bulk(BulkParts::Index(&self.index_name))
            .body(operations)
            .send()
            .await
            .map_domain_infra("JobBulkIndex")?;
        let body: Value = ensure_success(response, "JobBulkIndex")
            .await?
            .json()
            .await
            .map_domain_infra("JobBulkIndex")?;

        Ok(Self::bulk_report(&body, documents.len() as u64))
    }

    /// Compte les échecs unitaires signalés dans la réponse `_bulk`
    fn bulk_report(body: &Value, sent: u64) -> BulkIndexReport {
        if !body["errors"].as_bool().unwrap_or(false) {
            return BulkIndexReport { indexed: sent, failed: 0 };
        }

        let mut failed = 0;
        for item in body["items"].as_array().into_iter().flatten() {
            let result = &item["index"];
            if result.get("error").is_some() {
                failed += 1;
                tracing::warn!(
                    "Bulk index failed for job {}: {}",
                    result["_id"].as_str().unwrap_or("?"),
                    result["error"]["reason"].as_str().unwrap_or("unknown reason")
                );
            }
        }
        BulkIndexReport { indexed: sent.saturating_sub(failed), failed }
    }

    fn parse_hits(body: &Value) -> Result<SearchHits> {
        let total = body["hits"]["total"]["value"].as_u64().unwrap_or(0);
        let ids = body["hits"]["hits"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|hit| hit["_id"].as_str())
            .map(JobId::try_new)
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchHits { ids, total })
    }

    fn parse_suggestions(body: &Value) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for entry in body["suggest"][SUGGEST_NAME].as_array().into_iter().flatten() {
            for option in entry["options"].as_array().into_iter().flatten() {
                if let Some(text) = option["text"].as_str() {
                    if !out.iter().any(|s| s == text) {
                        out.push(text.to_string());
                    }
                }
            }
        }
        out
    }
}

#[async_trait]
impl JobSearchIndex for ElasticsearchJobIndex {
    async fn index(&self, document: &JobSearchDocument) -> Result<()> {
        let body = serde_json::to_value(document)
            .map_err(|e| DomainError::Internal(format!("JobDocumentSerialize: {}", e)))?;

        let response = self
            .client
            .index(IndexParts::IndexId(&self.index_name, &document.id))
            .op_type(OpType::Index) // Remplacement complet (idempotent)
            .body(body)
            .send()
            .await
            .map_domain_infra("JobIndex")?;
        ensure_success(response, "JobIndex").await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &JobId) -> Result<()> {
        let id = id.to_string();
        let response = self
            .client
            .delete(DeleteParts::IndexId(&self.index_name, &id))
            .send()
            .await
            .map_domain_infra("JobDelete")?;

        // Déjà absent : rien à faire
        if response.status_code().as_u16() == 404 {
            return Ok(());
        }
        ensure_success(response, "JobDelete").await?;
        Ok(())
    }

    async fn index_all(&self, jobs: BoxStream<'_, Result<Job>>) -> Result<BulkIndexReport> {
        let mut report = BulkIndexReport::default();
        let mut batches = jobs.chunks(self.bulk_batch_size);

        while let Some(batch) = batches.next().await {
            let mut documents = Vec::with_capacity(batch.len());
            for item in batch {
                match item {
                    Ok(job) => documents.push(JobSearchMapper::to_search_document(&job)),
                    // Le store lui-même est injoignable : inutile de continuer
                    Err(err) if err.is_transient() => return Err(err),
                    Err(err) => {
                        tracing::warn!("Job skipped during bulk indexing: {}", err);
                        report.failed += 1;
                    }
                }
            }

            if !documents.is_empty() {
                report.merge(self.send_bulk(documents).await?);
            }
            tracing::debug!("Bulk progress: {} indexed, {} failed", report.indexed, report.failed);
        }
        Ok(report)
    }

    async fn search(&self, query: &CompiledJobQuery) -> Result<SearchHits> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.index_name.as_str()]))
            .body(search_body(query))
            .send()
            .await
            .map_domain_infra("JobSearch")?;
        let body: Value = ensure_success(response, "JobSearch")
            .await?
            .json()
            .await
            .map_domain_infra("JobSearch")?;

        Self::parse_hits(&body)
    }

    async fn suggest(&self, prefix: &str, size: usize) -> Result<Vec<String>> {
        let response = self
            .client
            .search(SearchParts::Index(&[self.index_name.as_str()]))
            .body(json!({
                "_source": false,
                "suggest": {
                    SUGGEST_NAME: {
                        "prefix": prefix,
                        "completion": {
                            "field": fields::SUGGEST,
                            "size": size,
                            "skip_duplicates": true,
                            "contexts": { fields::STATUS: [JobStatus::Approved.as_str()] }
                        }
                    }
                }
            }))
            .send()
            .await
            .map_domain_infra("JobSuggest")?;
        let body: Value = ensure_success(response, "JobSuggest")
            .await?
            .json()
            .await
            .map_domain_infra("JobSuggest")?;

        let mut suggestions = Self::parse_suggestions(&body);
        suggestions.truncate(size);
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_are_read_in_rank_order() {
        let first = JobId::new();
        let second = JobId::new();
        let body = json!({
            "hits": {
                "total": { "value": 42, "relation": "eq" },
                "hits": [
                    { "_id": second.to_string(), "_score": 9.1 },
                    { "_id": first.to_string(), "_score": 4.0 }
                ]
            }
        });

        let hits = ElasticsearchJobIndex::parse_hits(&body).unwrap();

        assert_eq!(hits.ids, vec![second, first]);
        assert_eq!(hits.total, 42);
    }

    #[test]
    fn test_foreign_document_id_is_an_error() {
        let body = json!({ "hits": { "total": { "value": 1 }, "hits": [ { "_id": "not-a-uuid" } ] } });

        assert!(ElasticsearchJobIndex::parse_hits(&body).is_err());
    }

    #[test]
    fn test_bulk_report_counts_item_failures() {
        let body = json!({
            "errors": true,
            "items": [
                { "index": { "_id": "a", "status": 200 } },
                { "index": { "_id": "b", "status": 400, "error": { "type": "mapper_parsing_exception", "reason": "bad date" } } },
                { "index": { "_id": "c", "status": 201 } }
            ]
        });

        let report = ElasticsearchJobIndex::bulk_report(&body, 3);

        assert_eq!(report, BulkIndexReport { indexed: 2, failed: 1 });
    }

    #[test]
    fn test_suggestions_are_deduplicated() {
        let body = json!({
            "suggest": {
                "job-suggest": [ {
                    "text": "rus",
                    "options": [ { "text": "Rust Engineer" }, { "text": "Rust Engineer" }, { "text": "Rustacean Labs" } ]
                } ]
            }
        });

        assert_eq!(
            ElasticsearchJobIndex::parse_suggestions(&body),
            vec!["Rust Engineer".to_string(), "Rustacean Labs".to_string()]
        );
    }

    #[test]
    fn test_mapping_declares_fields_used_by_queries() {
        let definition = ElasticsearchJobIndex::index_definition();
        let properties = &definition["mappings"]["properties"];

        assert_eq!(properties["title"]["fields"]["raw"]["type"], "keyword");
        assert_eq!(properties["company_name"]["fields"]["raw"]["type"], "keyword");
        assert_eq!(properties["suggest"]["type"], "completion");
        assert_eq!(properties["created_at"]["type"], "date");
        assert_eq!(properties["suggest"]["contexts"][0]["path"], "status");
        assert_eq!(definition["settings"]["analysis"]["normalizer"]["folding_keyword"]["type"], "custom");
    }
}
