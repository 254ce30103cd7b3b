//! Parsers for published benchmark tables.
//!
//! The benchmark table is a wide CSV: one row per dataset, one column per
//! model. Parsing normalizes every value onto the 0-100 scale and drops the
//! models on the exclusion list before records reach the catalog.
//!
//! ## Example
//!
//! ```rust
//! use pair_solver::catalog::exclusion::ExclusionList;
//! use pair_solver::parsing::benchmark_csv::parse_benchmark_csv;
//!
//! let csv = ",,metric,model-a,model-b\n\
//!            Knowledge,MMLU,accuracy,70.5,64.0\n\
//!            Knowledge,MMLU-pro,accuracy,0.4123,0.3800\n";
//!
//! let records = parse_benchmark_csv(csv, &ExclusionList::default()).unwrap();
//! assert_eq!(records.len(), 2);
//! assert!((records[0].scores.mmlu_pro - 41.23).abs() < 1e-9);
//! ```
//!
//! ## Scale
//!
//! | Dataset  | Published as | Stored as |
//! |----------|--------------|-----------|
//! | MMLU-pro | 0-1 fraction | ×100      |
//! | others   | percentage   | unchanged |

use thiserror::Error;

pub mod benchmark_csv;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid benchmark table: {0}")]
    InvalidFormat(String),
}
