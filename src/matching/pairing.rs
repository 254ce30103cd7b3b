use crate::core::record::BenchmarkRecord;
use crate::core::types::{AbilitySelection, ModelPair};
use crate::core::vector::{profile_all, ModelProfile};
use crate::matching::ranking::strongest;
use crate::matching::similarity::cosine;

/// The two models whose capability vectors are most alike.
///
/// Scans every unordered pair in catalog order and keeps the first pair with
/// the greatest cosine similarity. The winning pair is then ordered so the
/// member with the strictly higher capability sum comes first; equal sums keep
/// discovery order. With fewer than two models the missing slots are empty.
#[must_use]
pub fn most_similar_pair(records: &[BenchmarkRecord], selection: &AbilitySelection) -> ModelPair {
    let profiles = profile_all(records, selection);

    if profiles.len() < 2 {
        let first = profiles.first().map(ModelProfile::model).unwrap_or_default();
        return ModelPair::new(first, "");
    }

    let mut best: Option<(&ModelProfile, &ModelProfile)> = None;
    let mut best_similarity = f64::NEG_INFINITY;

    for (i, a) in profiles.iter().enumerate() {
        for b in &profiles[i + 1..] {
            let similarity = cosine(a.vector.as_slice(), b.vector.as_slice());
            if similarity > best_similarity {
                best_similarity = similarity;
                best = Some((a, b));
            }
        }
    }

    let Some((mut first, mut second)) = best else {
        return ModelPair::default();
    };

    if second.sum > first.sum {
        std::mem::swap(&mut first, &mut second);
    }

    tracing::debug!(
        "Most similar pair: {} / {} (cosine {best_similarity:.4})",
        first.model(),
        second.model()
    );

    ModelPair::new(first.model(), second.model())
}

/// The strongest model paired with the other model most like it.
///
/// The first slot is the first model with the greatest capability sum. The
/// second is the first other model with the greatest cosine similarity to it.
/// No reordering is applied.
#[must_use]
pub fn superior_plus_similar(
    records: &[BenchmarkRecord],
    selection: &AbilitySelection,
) -> ModelPair {
    let profiles = profile_all(records, selection);

    let Some(first) = strongest(&profiles) else {
        return ModelPair::default();
    };

    let second = closest_to(first, &profiles).map(ModelProfile::model).unwrap_or_default();

    tracing::debug!("Superior plus similar pair: {} / {second}", first.model());

    ModelPair::new(first.model(), second)
}

/// The candidate most similar to `target`, skipping any profile with the
/// target's model id. Ties go to the earliest candidate.
pub(crate) fn closest_to<'p, 'a>(
    target: &ModelProfile<'a>,
    candidates: &'p [ModelProfile<'a>],
) -> Option<&'p ModelProfile<'a>> {
    let mut best: Option<&ModelProfile> = None;
    let mut best_similarity = f64::NEG_INFINITY;

    for candidate in candidates.iter().filter(|c| c.model() != target.model()) {
        let similarity = cosine(target.vector.as_slice(), candidate.vector.as_slice());
        if similarity > best_similarity {
            best_similarity = similarity;
            best = Some(candidate);
        }
    }

    best
}
