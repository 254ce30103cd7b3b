//! Benchmark catalog storage.
//!
//! The catalog holds one [`BenchmarkRecord`](crate::core::record::BenchmarkRecord)
//! per model, in the order they were loaded. An embedded catalog is compiled
//! into the binary, and custom catalogs can be loaded from the wide benchmark
//! CSV table or from a JSON export.
//!
//! ## Exclusions
//!
//! Legacy models listed in [`exclusion::DEFAULT_EXCLUDED_MODELS`] are dropped
//! while the catalog is built, so no query can ever return them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pair_solver::BenchmarkCatalog;
//!
//! // Shared, lazily parsed embedded catalog
//! let catalog = BenchmarkCatalog::shared().unwrap();
//!
//! for record in catalog.all() {
//!     println!("{}: MMLU {:.1}", record.model, record.scores.mmlu);
//! }
//!
//! let gpt4 = catalog.find("GPT-4");
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use pair_solver::catalog::exclusion::ExclusionList;
//! use pair_solver::BenchmarkCatalog;
//! use std::path::Path;
//!
//! let exclusions = ExclusionList::default();
//! let catalog = BenchmarkCatalog::load_from_file(Path::new("scores.csv"), &exclusions).unwrap();
//! let json = catalog.to_json().unwrap();
//! ```

pub mod exclusion;
pub mod store;
