use super::value_objects::FeatureSet;

// ============================================================================
// Catalog Lookup Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("No box type for feature set {0}")]
    NotFound(FeatureSet),
}
