use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::store::BenchmarkCatalog;
use crate::core::types::{AbilitySelection, ModelPair};
use crate::matching::nearest::most_similar_to;
use crate::matching::pairing::{most_similar_pair, superior_plus_similar};
use crate::matching::ranking::{rank_by_sum, top_two, RankedModel};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Model '{model}' not found in catalog")]
    ModelNotFound { model: String },
}

/// How to pick a preferred/rejected model pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PairStrategy {
    /// The two strongest models overall
    Superior,
    /// The two models with the most alike capability profiles
    Similarity,
    /// The strongest model and the model most like it
    #[value(name = "hybrid", alias = "superior-plus-similarity")]
    SuperiorPlusSimilarity,
}

impl PairStrategy {
    pub const ALL: [Self; 3] = [Self::Superior, Self::Similarity, Self::SuperiorPlusSimilarity];
}

impl std::fmt::Display for PairStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Superior => write!(f, "superior"),
            Self::Similarity => write!(f, "similarity"),
            Self::SuperiorPlusSimilarity => write!(f, "superior+similarity"),
        }
    }
}

/// The pair chosen by every strategy for one ability selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestPairs {
    pub superior: ModelPair,
    pub similarity: ModelPair,
    pub superior_plus_similarity: ModelPair,
}

impl BestPairs {
    #[must_use]
    pub fn get(&self, strategy: PairStrategy) -> &ModelPair {
        match strategy {
            PairStrategy::Superior => &self.superior,
            PairStrategy::Similarity => &self.similarity,
            PairStrategy::SuperiorPlusSimilarity => &self.superior_plus_similarity,
        }
    }
}

/// Runs selection strategies against a catalog.
///
/// Every call is a pure function of the catalog and its arguments; capability
/// vectors are rebuilt per call and nothing is cached, so one engine (or many)
/// can serve concurrent requests.
pub struct SelectionEngine<'a> {
    catalog: &'a BenchmarkCatalog,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a BenchmarkCatalog) -> Self {
        Self { catalog }
    }

    /// The two strongest models by capability sum
    #[must_use]
    pub fn superior(&self, selection: &AbilitySelection) -> ModelPair {
        top_two(self.catalog.all(), selection)
    }

    /// The two most similar models, stronger first
    #[must_use]
    pub fn similarity(&self, selection: &AbilitySelection) -> ModelPair {
        most_similar_pair(self.catalog.all(), selection)
    }

    /// The strongest model and its closest match
    #[must_use]
    pub fn superior_plus_similarity(&self, selection: &AbilitySelection) -> ModelPair {
        superior_plus_similar(self.catalog.all(), selection)
    }

    /// Run a single strategy
    #[must_use]
    pub fn select(&self, strategy: PairStrategy, selection: &AbilitySelection) -> ModelPair {
        let pair = match strategy {
            PairStrategy::Superior => self.superior(selection),
            PairStrategy::Similarity => self.similarity(selection),
            PairStrategy::SuperiorPlusSimilarity => self.superior_plus_similarity(selection),
        };
        tracing::debug!("{strategy} pair for {selection}: {pair}");
        pair
    }

    /// Run every strategy
    #[must_use]
    pub fn best_pairs(&self, selection: &AbilitySelection) -> BestPairs {
        BestPairs {
            superior: self.select(PairStrategy::Superior, selection),
            similarity: self.select(PairStrategy::Similarity, selection),
            superior_plus_similarity: self.select(PairStrategy::SuperiorPlusSimilarity, selection),
        }
    }

    /// All models ordered by capability sum, strongest first
    #[must_use]
    pub fn ranking(&self, selection: &AbilitySelection) -> Vec<RankedModel> {
        rank_by_sum(self.catalog.all(), selection)
    }

    /// The model whose profile is most like `model`'s
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::ModelNotFound` if `model` is not in the catalog.
    pub fn most_similar_to(
        &self,
        model: &str,
        selection: &AbilitySelection,
    ) -> Result<String, SelectionError> {
        most_similar_to(self.catalog.all(), selection, model)
    }
}
