use serde::Serialize;

use crate::core::record::BenchmarkRecord;
use crate::core::types::{AbilitySelection, Benchmark};

/// A model's scores projected onto the selected benchmark dimensions.
///
/// Every vector built from the same [`AbilitySelection`] has the same length
/// and dimension order, so sums and cosine similarities are comparable across
/// models within one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapabilityVector(Vec<f64>);

impl CapabilityVector {
    /// Project a record's scores onto the dimensions chosen by `selection`
    #[must_use]
    pub fn build(record: &BenchmarkRecord, selection: &AbilitySelection) -> Self {
        Self(
            Benchmark::ALL
                .into_iter()
                .filter(|b| selection.includes(b.ability()))
                .map(|b| record.scores.get(b))
                .collect(),
        )
    }

    /// Total capability score
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A catalog record paired with its capability vector for one request
#[derive(Debug, Clone)]
pub struct ModelProfile<'a> {
    pub record: &'a BenchmarkRecord,
    pub vector: CapabilityVector,
    pub sum: f64,
}

impl<'a> ModelProfile<'a> {
    #[must_use]
    pub fn new(record: &'a BenchmarkRecord, selection: &AbilitySelection) -> Self {
        let vector = CapabilityVector::build(record, selection);
        let sum = vector.sum();
        Self {
            record,
            vector,
            sum,
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.record.model.as_str()
    }
}

/// Build one profile per record, preserving catalog order
#[must_use]
pub fn profile_all<'a>(
    records: &'a [BenchmarkRecord],
    selection: &AbilitySelection,
) -> Vec<ModelProfile<'a>> {
    records
        .iter()
        .map(|record| ModelProfile::new(record, selection))
        .collect()
}
