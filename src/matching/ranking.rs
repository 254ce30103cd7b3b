use serde::Serialize;

use crate::core::record::BenchmarkRecord;
use crate::core::types::{AbilitySelection, ModelPair};
use crate::core::vector::{profile_all, ModelProfile};

/// A model and its total capability score for one ability selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedModel {
    pub model: String,
    pub sum: f64,
}

/// Order models by capability sum, strongest first.
///
/// The sort is stable: models with equal sums keep their catalog order.
#[must_use]
pub fn rank_by_sum(records: &[BenchmarkRecord], selection: &AbilitySelection) -> Vec<RankedModel> {
    let mut ranked: Vec<RankedModel> = profile_all(records, selection)
        .into_iter()
        .map(|p| RankedModel {
            model: p.model().to_string(),
            sum: p.sum,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.sum
            .partial_cmp(&a.sum)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

/// The two strongest models; missing slots are empty strings
#[must_use]
pub fn top_two(records: &[BenchmarkRecord], selection: &AbilitySelection) -> ModelPair {
    let mut ranked = rank_by_sum(records, selection).into_iter();
    let first = ranked.next().map(|r| r.model).unwrap_or_default();
    let second = ranked.next().map(|r| r.model).unwrap_or_default();
    ModelPair::new(first, second)
}

/// The first profile with the greatest sum, or `None` for an empty slice
pub(crate) fn strongest<'p, 'a>(profiles: &'p [ModelProfile<'a>]) -> Option<&'p ModelProfile<'a>> {
    let mut best: Option<&ModelProfile> = None;
    for profile in profiles {
        // Strict comparison keeps the first of several equal maxima
        if best.map_or(true, |b| profile.sum > b.sum) {
            best = Some(profile);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::BenchmarkScores;

    fn record(model: &str, ifeval: f64, mmlu: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(
            model,
            BenchmarkScores {
                ifeval,
                mmlu,
                ..BenchmarkScores::default()
            },
        )
    }

    fn names(ranked: &[RankedModel]) -> Vec<&str> {
        ranked.iter().map(|r| r.model.as_str()).collect()
    }

    #[test]
    fn test_rank_by_sum_descending() {
        let records = vec![record("low", 10.0, 10.0), record("high", 50.0, 50.0), record("mid", 30.0, 20.0)];
        let ranked = rank_by_sum(&records, &AbilitySelection::all());
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
        assert!((ranked[0].sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_by_sum_is_stable_for_ties() {
        let records = vec![record("x", 10.0, 0.0), record("y", 0.0, 10.0), record("z", 5.0, 5.0)];
        let ranked = rank_by_sum(&records, &AbilitySelection::all());
        assert_eq!(names(&ranked), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_rank_depends_on_selection() {
        let records = vec![record("follower", 90.0, 10.0), record("scholar", 10.0, 90.0)];

        let instruction = AbilitySelection::new(true, false, false);
        assert_eq!(top_two(&records, &instruction), ModelPair::new("follower", "scholar"));

        let knowledge = AbilitySelection::new(false, true, false);
        assert_eq!(top_two(&records, &knowledge), ModelPair::new("scholar", "follower"));
    }

    #[test]
    fn test_top_two_with_few_models() {
        let selection = AbilitySelection::all();
        assert_eq!(top_two(&[], &selection), ModelPair::new("", ""));
        assert_eq!(top_two(&[record("only", 1.0, 1.0)], &selection), ModelPair::new("only", ""));
    }

    #[test]
    fn test_strongest_first_wins_on_ties() {
        let records = vec![record("a", 1.0, 0.0), record("b", 5.0, 0.0), record("c", 5.0, 0.0)];
        let profiles = profile_all(&records, &AbilitySelection::all());
        assert_eq!(strongest(&profiles).map(ModelProfile::model), Some("b"));
        assert!(strongest(&[]).is_none());
    }

    #[test]
    fn test_top_two_without_abilities_keeps_catalog_order() {
        // Every sum is 0.0, so the first two catalog entries win
        let records = vec![record("x", 10.0, 90.0), record("y", 90.0, 10.0), record("z", 50.0, 50.0)];
        let ranked = rank_by_sum(&records, &AbilitySelection::default());
        assert_eq!(names(&ranked), vec!["x", "y", "z"]);
        assert_eq!(top_two(&records, &AbilitySelection::default()), ModelPair::new("x", "y"));
    }
}
