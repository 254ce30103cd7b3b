use crate::core::record::BenchmarkRecord;
use crate::core::types::AbilitySelection;
use crate::core::vector::{profile_all, ModelProfile};
use crate::matching::engine::SelectionError;
use crate::matching::pairing::closest_to;

/// The model most similar to `target`, never the target itself.
///
/// Returns an empty string when the catalog holds no other model.
///
/// # Errors
///
/// Returns `SelectionError::ModelNotFound` if `target` is not in `records`.
pub fn most_similar_to(
    records: &[BenchmarkRecord],
    selection: &AbilitySelection,
    target: &str,
) -> Result<String, SelectionError> {
    let record = records
        .iter()
        .find(|r| r.model.as_str() == target)
        .ok_or_else(|| SelectionError::ModelNotFound {
            model: target.to_string(),
        })?;

    let target_profile = ModelProfile::new(record, selection);
    let candidates = profile_all(records, selection);

    let matched = closest_to(&target_profile, &candidates)
        .map(|p| p.model().to_string())
        .unwrap_or_default();

    tracing::debug!("Closest model to {target}: {matched}");
    Ok(matched)
}
