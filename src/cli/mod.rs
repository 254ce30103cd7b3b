//! Command-line interface for pair-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **pairs**: Select the superior, similarity and hybrid model pairs
//! - **rank**: List models by total capability score
//! - **similar**: Find the closest match for a named model
//! - **catalog**: List, show, or export the benchmark catalog
//! - **serve**: Start the HTTP service
//!
//! ## Usage
//!
//! ```text
//! # All three pairs, weighing knowledge and reasoning
//! pair-solver pairs --knowledge --reasoning
//!
//! # Only the similarity pair, as JSON
//! pair-solver pairs -a --strategy similarity --format json
//!
//! # Closest model to GPT-4 on instruction following
//! pair-solver similar GPT-4 -i
//!
//! # Use a custom benchmark table
//! pair-solver pairs -a --catalog scores.csv
//!
//! # Start the HTTP service
//! pair-solver serve --port 8080
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::catalog::exclusion::ExclusionList;
use crate::catalog::store::BenchmarkCatalog;
use crate::core::types::AbilitySelection;

pub mod catalog;
pub mod pairs;
pub mod rank;
pub mod similar;

#[derive(Parser)]
#[command(name = "pair-solver")]
#[command(version)]
#[command(about = "Select preferred/rejected model pairs from published benchmark scores")]
#[command(
    long_about = "pair-solver picks the two source models for alignment preference data without per-instance labeling.\n\nIt compares models on published benchmark scores for the abilities you choose and offers:\n- Superior pairs: the two strongest models\n- Similarity pairs: the two most alike models\n- Hybrid pairs: the strongest model and its closest match"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select model pairs for preference data
    Pairs(pairs::PairsArgs),

    /// Rank models by total capability score
    Rank(rank::RankArgs),

    /// Find the model most similar to a given model
    Similar(similar::SimilarArgs),

    /// Inspect the benchmark catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,

    #[command(flatten)]
    pub source: CatalogSourceArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Which abilities to weigh
#[derive(clap::Args, Clone, Debug, Default)]
pub struct AbilityArgs {
    /// Weigh instruction-following benchmarks (IFEval)
    #[arg(short = 'i', long)]
    pub instruction_following: bool,

    /// Weigh knowledge benchmarks (MMLU, MMLU-Pro)
    #[arg(short = 'k', long)]
    pub knowledge: bool,

    /// Weigh reasoning benchmarks (ARC-Easy, ARC-Challenge, HellaSwag)
    #[arg(short = 'r', long)]
    pub reasoning: bool,

    /// Weigh every ability
    #[arg(short = 'a', long, conflicts_with_all = ["instruction_following", "knowledge", "reasoning"])]
    pub all_abilities: bool,
}

impl AbilityArgs {
    #[must_use]
    pub fn selection(&self) -> AbilitySelection {
        if self.all_abilities {
            AbilitySelection::all()
        } else {
            AbilitySelection::new(self.instruction_following, self.knowledge, self.reasoning)
        }
    }
}

/// Where the catalog comes from
#[derive(clap::Args, Clone, Debug, Default)]
pub struct CatalogSourceArgs {
    /// Path to custom catalog file (benchmark CSV table or JSON export)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Exclude an additional model (can be repeated)
    #[arg(long = "exclude", value_name = "MODEL")]
    pub exclude: Vec<String>,
}

impl CatalogSourceArgs {
    /// The default exclusion list plus any `--exclude` models
    #[must_use]
    pub fn exclusions(&self) -> ExclusionList {
        ExclusionList::default().with(self.exclude.iter().cloned())
    }

    /// Load the catalog these arguments describe
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or parsed.
    pub fn load(&self) -> anyhow::Result<BenchmarkCatalog> {
        let exclusions = self.exclusions();
        let catalog = if let Some(path) = &self.catalog {
            BenchmarkCatalog::load_from_file(path, &exclusions)?
        } else {
            BenchmarkCatalog::load_embedded_with(&exclusions)?
        };
        Ok(catalog)
    }

    /// Like [`load`](Self::load), but reuses the process-wide embedded catalog
    /// when no custom source is given
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn load_shared(&self) -> anyhow::Result<Arc<BenchmarkCatalog>> {
        if self.catalog.is_none() && self.exclude.is_empty() {
            Ok(BenchmarkCatalog::shared()?)
        } else {
            Ok(Arc::new(self.load()?))
        }
    }
}

/// Warn on stderr when a command will compare empty capability vectors
pub(crate) fn warn_if_no_abilities(selection: &AbilitySelection) {
    if selection.is_empty() {
        eprintln!(
            "Warning: No abilities selected; every model scores 0 and the result follows catalog order. \
             Use -i, -k, -r or -a to choose abilities."
        );
    }
}
