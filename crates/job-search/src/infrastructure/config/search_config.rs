// crates/job-search/src/infrastructure/config/search_config.rs

use std::str::FromStr;

use crate::domain::search::query::JobQueryCompiler;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub index_name: String,
    /// Score minimal d'un hit quand un mot-clé est fourni
    pub min_score: f32,
    pub max_page_size: u32,
    /// Taille des lots `_bulk` lors d'une réindexation
    pub bulk_batch_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_name: "jobs_v1".to_string(),
            min_score: JobQueryCompiler::DEFAULT_MIN_SCORE,
            max_page_size: 100,
            bulk_batch_size: 500,
        }
    }
}

impl SearchConfig {
    /// Variables absentes ou illisibles : valeur par défaut
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            index_name: lookup("JOB_INDEX_NAME")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.index_name),
            min_score: parse_var::<f32>(&lookup, "SEARCH_MIN_SCORE")
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(defaults.min_score),
            max_page_size: parse_var::<u32>(&lookup, "SEARCH_MAX_PAGE_SIZE")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_page_size),
            bulk_batch_size: parse_var::<usize>(&lookup, "REINDEX_BATCH_SIZE")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.bulk_batch_size),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> SearchConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        SearchConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(config_from(&[]), SearchConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("JOB_INDEX_NAME", "jobs_v2"),
            ("SEARCH_MIN_SCORE", "4.5"),
            ("SEARCH_MAX_PAGE_SIZE", "50"),
            ("REINDEX_BATCH_SIZE", "1000"),
        ]);

        assert_eq!(config.index_name, "jobs_v2");
        assert_eq!(config.min_score, 4.5);
        assert_eq!(config.max_page_size, 50);
        assert_eq!(config.bulk_batch_size, 1000);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("JOB_INDEX_NAME", "  "),
            ("SEARCH_MIN_SCORE", "-1"),
            ("SEARCH_MAX_PAGE_SIZE", "zero"),
            ("REINDEX_BATCH_SIZE", "0"),
        ]);

        assert_eq!(config, SearchConfig::default());
    }
}
