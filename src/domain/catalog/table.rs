use std::collections::HashMap;

use super::errors::CatalogError;
use super::value_objects::{BoxTypeId, FeatureSet};

// ============================================================================
// Feature Catalog - Box Type Lookup Table
// ============================================================================
//
// The mapping is not derivable from a rule (grade 1 only takes plain boxes,
// corner reinforcement needs bottom reinforcement, ...), so it is kept as
// static data and seeded once into an immutable map.
//
// ============================================================================

/// Every permitted feature combination and its box type
pub const CATALOG_ENTRIES: [(FeatureSet, u8); 17] = [
    (FeatureSet::new(1, 0, false, false), 1),
    (FeatureSet::new(2, 0, false, false), 1),
    (FeatureSet::new(3, 0, false, false), 1),
    (FeatureSet::new(2, 1, false, false), 2),
    (FeatureSet::new(3, 1, false, false), 2),
    (FeatureSet::new(4, 1, false, false), 2),
    (FeatureSet::new(2, 2, false, false), 3),
    (FeatureSet::new(3, 2, false, false), 3),
    (FeatureSet::new(4, 2, false, false), 3),
    (FeatureSet::new(5, 2, false, false), 3),
    (FeatureSet::new(2, 2, true, false), 4),
    (FeatureSet::new(3, 2, true, false), 4),
    (FeatureSet::new(4, 2, true, false), 4),
    (FeatureSet::new(5, 2, true, false), 4),
    (FeatureSet::new(3, 2, true, true), 5),
    (FeatureSet::new(4, 2, true, true), 5),
    (FeatureSet::new(5, 2, true, true), 5),
];

#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    entries: HashMap<FeatureSet, BoxTypeId>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        let entries = CATALOG_ENTRIES
            .iter()
            .map(|(features, id)| (*features, BoxTypeId::new(*id)))
            .collect();
        Self { entries }
    }

    /// Exact-match lookup, no partial matching and no fallback
    pub fn is_valid(&self, features: &FeatureSet) -> bool {
        self.entries.contains_key(features)
    }

    pub fn type_of(&self, features: &FeatureSet) -> Result<BoxTypeId, CatalogError> {
        self.entries
            .get(features)
            .copied()
            .ok_or(CatalogError::NotFound(*features))
    }

    /// Convenience over raw values, used by callers validating form input
    pub fn is_box_can_be_made(
        &self,
        cardboard_grade: u8,
        number_of_colours: u8,
        reinforcement_bottom: bool,
        reinforcement_corners: bool,
    ) -> bool {
        self.is_valid(&FeatureSet::new(
            cardboard_grade,
            number_of_colours,
            reinforcement_bottom,
            reinforcement_corners,
        ))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feature sets classified as `box_type`, in no particular order
    pub fn feature_sets_of(&self, box_type: BoxTypeId) -> impl Iterator<Item = &FeatureSet> {
        self.entries
            .iter()
            .filter(move |(_, id)| **id == box_type)
            .map(|(features, _)| features)
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_seventeen_entries() {
        let catalog = FeatureCatalog::new();
        assert_eq!(catalog.len(), 17);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_every_listed_entry_is_valid_with_its_type() {
        let catalog = FeatureCatalog::new();
        for (features, id) in CATALOG_ENTRIES {
            assert!(catalog.is_valid(&features), "{} should be valid", features);
            assert_eq!(catalog.type_of(&features).unwrap().get(), id);
        }
    }

    #[test]
    fn test_unlisted_combinations_are_invalid() {
        let catalog = FeatureCatalog::new();
        let invalid = [
            FeatureSet::new(1, 1, false, false),
            FeatureSet::new(1, 2, false, false),
            FeatureSet::new(5, 0, false, false),
            FeatureSet::new(5, 1, false, false),
            FeatureSet::new(3, 3, false, false),
            FeatureSet::new(3, 2, false, true),
            FeatureSet::new(2, 2, true, true),
            FeatureSet::new(0, 0, false, false),
            FeatureSet::new(6, 2, true, true),
        ];
        for features in invalid {
            assert!(!catalog.is_valid(&features), "{} should be invalid", features);
        }
    }

    #[test]
    fn test_type_of_unknown_combination_fails() {
        let catalog = FeatureCatalog::new();
        let features = FeatureSet::new(1, 1, false, false);
        let result = catalog.type_of(&features);
        assert!(matches!(result, Err(CatalogError::NotFound(f)) if f == features));
    }

    #[test]
    fn test_is_box_can_be_made() {
        let catalog = FeatureCatalog::new();
        assert!(catalog.is_box_can_be_made(3, 2, true, false));
        assert!(!catalog.is_box_can_be_made(4, 0, false, false));
    }

    #[test]
    fn test_feature_sets_of_type() {
        let catalog = FeatureCatalog::new();
        assert_eq!(catalog.feature_sets_of(BoxTypeId::new(1)).count(), 3);
        assert_eq!(catalog.feature_sets_of(BoxTypeId::new(3)).count(), 4);
        assert_eq!(catalog.feature_sets_of(BoxTypeId::new(5)).count(), 3);
        assert!(catalog
            .feature_sets_of(BoxTypeId::new(5))
            .all(|f| f.reinforcement_bottom && f.reinforcement_corners));
    }
}
