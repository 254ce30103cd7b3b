//! Core data types for benchmark-driven model selection.
//!
//! - [`BenchmarkRecord`]: One model's scores on the six benchmark dimensions
//! - [`AbilitySelection`]: Which abilities a request weighs
//! - [`CapabilityVector`]: A record's scores projected onto the selected dimensions
//! - [`ModelId`], [`Benchmark`], [`Ability`]: Identifier and dimension types
//!
//! ## Dimensions
//!
//! | Ability               | Benchmarks                              |
//! |-----------------------|-----------------------------------------|
//! | Instruction following | IFEval                                  |
//! | Knowledge             | MMLU, MMLU-Pro                          |
//! | Reasoning             | ARC-Easy, ARC-Challenge, HellaSwag      |
//!
//! Capability vectors always list dimensions in the order of this table, so
//! vectors built for the same request line up element by element.
//!
//! [`BenchmarkRecord`]: record::BenchmarkRecord
//! [`AbilitySelection`]: types::AbilitySelection
//! [`CapabilityVector`]: vector::CapabilityVector
//! [`ModelId`]: types::ModelId
//! [`Benchmark`]: types::Benchmark
//! [`Ability`]: types::Ability

pub mod record;
pub mod types;
pub mod vector;
