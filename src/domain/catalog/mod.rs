// ============================================================================
// Catalog Domain - Feature Validation and Box Type Classification
// ============================================================================
//
// - Value objects (FeatureSet, BoxTypeId)
// - Errors (CatalogError)
// - Lookup table (FeatureCatalog)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod table;

pub use value_objects::*;
pub use errors::*;
pub use table::*;
