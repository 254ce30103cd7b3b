use std::collections::BTreeSet;

/// Legacy or weak models that never enter the catalog
pub const DEFAULT_EXCLUDED_MODELS: [&str; 9] = [
    "UltraLM-13B",
    "UltraLM-65B",
    "WizardLM-13B",
    "Vicuna-33B",
    "Alpaca-7B",
    "Falcon-40B-instruct",
    "MPT-30B-chat",
    "StarChat-Beta",
    "Pythia-12B",
];

/// Model ids dropped while constructing a catalog.
///
/// Matching is exact and case-sensitive. This is a catalog-construction rule,
/// not a per-request filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    models: BTreeSet<String>,
}

impl ExclusionList {
    /// An exclusion list containing exactly `models`
    pub fn new<I, S>(models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            models: models.into_iter().map(Into::into).collect(),
        }
    }

    /// An exclusion list that keeps every model
    #[must_use]
    pub fn none() -> Self {
        Self {
            models: BTreeSet::new(),
        }
    }

    /// Add more models to the list
    #[must_use]
    pub fn with<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models.extend(extra.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains(model)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_MODELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_contains_legacy_models() {
        let list = ExclusionList::default();
        assert_eq!(list.len(), DEFAULT_EXCLUDED_MODELS.len());
        assert!(list.contains("Alpaca-7B"));
        assert!(list.contains("Pythia-12B"));
        assert!(!list.contains("GPT-4"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let list = ExclusionList::default();
        assert!(!list.contains("alpaca-7b"));
    }

    #[test]
    fn test_with_extends_defaults() {
        let list = ExclusionList::default().with(["Bard"]);
        assert!(list.contains("Bard"));
        assert!(list.contains("Vicuna-33B"));
        assert_eq!(list.len(), DEFAULT_EXCLUDED_MODELS.len() + 1);
    }

    #[test]
    fn test_none_is_empty() {
        assert!(ExclusionList::none().is_empty());
    }
}
