//! HTTP service for model pair selection.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! pair-solver serve
//!
//! # Custom port, custom benchmark table
//! pair-solver serve --port 3000 --catalog scores.csv
//!
//! # Bind to all interfaces
//! pair-solver serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! Ability flags are the query parameters `includeInstructionFollowing`,
//! `includeKnowledge` and `includeReasoning`; absent flags are `false`.
//!
//! - `GET /v1/benchmark/models` - All records in the catalog
//! - `GET /v1/benchmark/best-models` - Superior, similarity and hybrid pairs
//! - `GET /v1/benchmark/ranking` - Models ordered by total score
//! - `GET /v1/benchmark/similarity/search?model=NAME` - Closest match for a model
//!
//! Every response uses the envelope `{ code, message, data, meta }`.

pub mod server;
