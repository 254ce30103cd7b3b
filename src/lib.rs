//! # pair-solver
//!
//! A library for choosing the "preferred" and "rejected" source models used to
//! build alignment preference data, from published benchmark scores alone.
//!
//! Labeling every response pair with humans or an LLM judge is expensive.
//! `pair-solver` instead picks the two models to sample from by comparing
//! their benchmark profiles, so no per-instance labels are needed.
//!
//! ## Features
//!
//! - **Ability selection**: Weigh instruction following, knowledge, reasoning, or any mix
//! - **Superior pairs**: The two strongest models overall
//! - **Similarity pairs**: The two models with the most alike profiles
//! - **Hybrid pairs**: The strongest model and its closest match
//! - **Custom pairs**: The closest match for a model you name
//!
//! ## Example
//!
//! ```rust
//! use pair_solver::{AbilitySelection, BenchmarkCatalog, SelectionEngine};
//!
//! // Load the embedded catalog of benchmark scores
//! let catalog = BenchmarkCatalog::load_embedded().unwrap();
//! let engine = SelectionEngine::new(&catalog);
//!
//! // Weigh knowledge and reasoning benchmarks
//! let selection = AbilitySelection::new(false, true, true);
//! let pair = engine.superior(&selection);
//! println!("preferred: {}, rejected: {}", pair.first, pair.second);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Benchmark catalog storage and exclusions
//! - [`core`]: Records, ability selections and capability vectors
//! - [`matching`]: Ranking, similarity and pair selection
//! - [`parsing`]: Parser for the published benchmark table
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP service

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod web;

// Re-export commonly used types for convenience
pub use catalog::exclusion::ExclusionList;
pub use catalog::store::BenchmarkCatalog;
pub use core::record::{BenchmarkRecord, BenchmarkScores};
pub use core::types::*;
pub use core::vector::CapabilityVector;
pub use matching::engine::{BestPairs, PairStrategy, SelectionEngine, SelectionError};
