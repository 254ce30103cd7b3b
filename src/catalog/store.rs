use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

use crate::catalog::exclusion::ExclusionList;
use crate::core::record::BenchmarkRecord;
use crate::parsing::benchmark_csv::{parse_benchmark_csv, parse_benchmark_csv_file};
use crate::parsing::ParseError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to parse benchmark table: {0}")]
    Csv(#[from] ParseError),

    #[error("Embedded catalog unavailable: {0}")]
    Embedded(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    pub created_at: String,
    pub records: Vec<BenchmarkRecord>,
}

/// Immutable table of benchmark scores, in load order
#[derive(Debug, Clone)]
pub struct BenchmarkCatalog {
    records: Vec<BenchmarkRecord>,

    /// Index: model id -> index in records vec
    id_to_index: HashMap<String, usize>,
}

impl BenchmarkCatalog {
    /// Build a catalog from records, dropping excluded models and repeated ids.
    ///
    /// The first record seen for a model id wins.
    pub fn new(records: impl IntoIterator<Item = BenchmarkRecord>, exclusions: &ExclusionList) -> Self {
        let mut kept = Vec::new();
        let mut id_to_index = HashMap::new();

        for record in records {
            if exclusions.contains(record.model.as_str()) {
                continue;
            }
            if id_to_index.contains_key(record.model.as_str()) {
                tracing::warn!("Duplicate model '{}' in catalog, keeping the first", record.model);
                continue;
            }
            id_to_index.insert(record.model.0.clone(), kept.len());
            kept.push(record);
        }

        Self {
            records: kept,
            id_to_index,
        }
    }

    /// Build a catalog from records with the default exclusion list
    pub fn from_records(records: impl IntoIterator<Item = BenchmarkRecord>) -> Self {
        Self::new(records, &ExclusionList::default())
    }

    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Csv` if the embedded table cannot be parsed.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::load_embedded_with(&ExclusionList::default())
    }

    /// Load the embedded catalog with a custom exclusion list
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Csv` if the embedded table cannot be parsed.
    pub fn load_embedded_with(exclusions: &ExclusionList) -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/benchmark_scores.csv");
        Self::from_csv(EMBEDDED_CATALOG, exclusions)
    }

    /// The process-wide embedded catalog, parsed on first access.
    ///
    /// Concurrent first callers block until the single initialization
    /// finishes; afterwards every caller shares the same read-only catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Embedded` if the embedded table failed to parse.
    pub fn shared() -> Result<Arc<Self>, CatalogError> {
        static SHARED: OnceLock<Result<Arc<BenchmarkCatalog>, String>> = OnceLock::new();

        SHARED
            .get_or_init(|| {
                Self::load_embedded()
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map_err(CatalogError::Embedded)
    }

    /// Load a catalog file: JSON for `.json` paths, the wide CSV table otherwise
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ReadError` if the file cannot be read, or a parse
    /// error if its content is invalid.
    pub fn load_from_file(path: &Path, exclusions: &ExclusionList) -> Result<Self, CatalogError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let content = std::fs::read_to_string(path)?;
            Self::from_json(&content, exclusions)
        } else {
            let records = parse_benchmark_csv_file(path, exclusions)?;
            Ok(Self::new(records, exclusions))
        }
    }

    /// Parse a catalog from the wide benchmark CSV table
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Csv` if the table header is invalid.
    pub fn from_csv(csv: &str, exclusions: &ExclusionList) -> Result<Self, CatalogError> {
        let records = parse_benchmark_csv(csv, exclusions)?;
        Ok(Self::new(records, exclusions))
    }

    /// Parse catalog from JSON string
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if the JSON is invalid.
    pub fn from_json(json: &str, exclusions: &ExclusionList) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        Ok(Self::new(data.records, exclusions))
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            records: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// All records in load order
    #[must_use]
    pub fn all(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Get a record by model id
    #[must_use]
    pub fn find(&self, model: &str) -> Option<&BenchmarkRecord> {
        self.id_to_index.get(model).map(|&idx| &self.records[idx])
    }

    /// Number of models in catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for BenchmarkCatalog {
    fn default() -> Self {
        Self::new(Vec::new(), &ExclusionList::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::BenchmarkScores;
    use crate::core::types::Benchmark;

    fn record(model: &str, mmlu: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(model, BenchmarkScores::default().with(Benchmark::Mmlu, mmlu))
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = BenchmarkCatalog::load_embedded().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find("GPT-4").is_some());
    }

    #[test]
    fn test_embedded_catalog_drops_excluded_models() {
        let catalog = BenchmarkCatalog::load_embedded().unwrap();
        let exclusions = ExclusionList::default();
        assert!(catalog
            .all()
            .iter()
            .all(|r| !exclusions.contains(r.model.as_str())));
        assert!(catalog.find("Pythia-12B").is_none());
    }

    #[test]
    fn test_embedded_rows_cover_every_model() {
        // Short rows would only warn at build time, so check nothing was zero-filled
        let catalog = BenchmarkCatalog::load_embedded().unwrap();
        for record in catalog.all() {
            for benchmark in Benchmark::ALL {
                assert!(
                    record.scores.get(benchmark) > 0.0,
                    "{} has no {benchmark} score",
                    record.model
                );
            }
        }
    }

    #[test]
    fn test_embedded_mmlu_pro_is_percentage() {
        let catalog = BenchmarkCatalog::load_embedded().unwrap();
        let gpt4 = catalog.find("GPT-4").unwrap();
        assert!((gpt4.scores.mmlu_pro - 72.6).abs() < 1e-9);
    }

    #[test]
    fn test_load_embedded_with_extra_exclusions() {
        let exclusions = ExclusionList::default().with(["Bard"]);
        let catalog = BenchmarkCatalog::load_embedded_with(&exclusions).unwrap();
        assert!(catalog.find("Bard").is_none());
        assert!(catalog.find("GPT-4").is_some());
    }

    #[test]
    fn test_shared_catalog_is_initialized_once() {
        let first = BenchmarkCatalog::shared().unwrap();
        let second = BenchmarkCatalog::shared().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_shared_catalog_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| BenchmarkCatalog::shared().unwrap()))
            .collect();
        let catalogs: Vec<Arc<BenchmarkCatalog>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(catalogs.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_find_nonexistent() {
        let catalog = BenchmarkCatalog::load_embedded().unwrap();
        assert!(catalog.find("nonexistent-model").is_none());
    }

    #[test]
    fn test_new_keeps_order_and_first_duplicate() {
        let catalog = BenchmarkCatalog::from_records(vec![
            record("b", 1.0),
            record("a", 2.0),
            record("b", 3.0),
        ]);

        let names: Vec<&str> = catalog.all().iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!((catalog.find("b").unwrap().scores.mmlu - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_applies_exclusions() {
        let catalog = BenchmarkCatalog::from_records(vec![record("Alpaca-7B", 1.0), record("x", 2.0)]);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find("Alpaca-7B").is_none());
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let catalog = BenchmarkCatalog::from_records(vec![record("z", 1.0), record("a", 2.0)]);
        let json = catalog.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"records\""));

        let restored = BenchmarkCatalog::from_json(&json, &ExclusionList::default()).unwrap();
        let names: Vec<&str> = restored.all().iter().map(|r| r.model.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = BenchmarkCatalog::from_json("not json", &ExclusionList::default());
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_default_is_empty() {
        let catalog = BenchmarkCatalog::default();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.all().is_empty());
    }
}
