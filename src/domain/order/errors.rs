use crate::domain::catalog::{CatalogError, FeatureSet};

// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Box cannot be made with feature set {0}")]
    InvalidFeatureSet(FeatureSet),

    #[error("Dimensions out of range: {length} x {height} x {width} (each side must be within 0.3..=10.0 m)")]
    OutOfRange { length: f64, height: f64, width: f64 },

    #[error("Order is full: capacity of {capacity} boxes reached after inserting {inserted}")]
    CapacityExceeded { capacity: usize, inserted: usize },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl OrderError {
    /// Short label used for metrics and log fields
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::InvalidFeatureSet(_) => "invalid_feature_set",
            OrderError::OutOfRange { .. } => "out_of_range",
            OrderError::CapacityExceeded { .. } => "capacity_exceeded",
            OrderError::Catalog(_) => "catalog",
        }
    }
}
