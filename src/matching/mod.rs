//! Model pair selection.
//!
//! This module answers "which two models?" for preference-data construction:
//!
//! - [`SelectionEngine`]: Main entry point, runs strategies against a catalog
//! - [`similarity::cosine`]: Degenerate-safe cosine similarity
//! - [`ranking`]: Ordering by total capability score
//! - [`pairing`]: Similarity and hybrid pair search
//! - [`nearest`]: Closest match for one named model
//!
//! ## Strategies
//!
//! 1. **Superior**: the two models with the highest capability sums
//! 2. **Similarity**: the pair with the highest cosine similarity, stronger first
//! 3. **Superior + similarity**: the strongest model and its closest match
//!
//! Ties always go to the model (or pair) that comes first in catalog order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pair_solver::{AbilitySelection, BenchmarkCatalog, SelectionEngine};
//!
//! let catalog = BenchmarkCatalog::shared().unwrap();
//! let engine = SelectionEngine::new(&catalog);
//!
//! let selection = AbilitySelection::new(true, true, false);
//! let pairs = engine.best_pairs(&selection);
//! println!("superior: {}", pairs.superior);
//! println!("similarity: {}", pairs.similarity);
//! println!("hybrid: {}", pairs.superior_plus_similarity);
//! ```

pub mod engine;
pub mod nearest;
pub mod pairing;
pub mod ranking;
pub mod similarity;

pub use engine::{BestPairs, PairStrategy, SelectionEngine, SelectionError};
