//! Cardboard box ordering core.
//!
//! Validates feature combinations against a fixed catalog of box types,
//! prices boxes from their dimensions and features, and keeps an order
//! ledger of preview and confirmed boxes.

pub mod domain;
pub mod event_sourcing;
pub mod metrics;

pub use domain::catalog::{BoxTypeId, CatalogError, FeatureCatalog, FeatureSet};
pub use domain::order::{
    LedgerCommand, LedgerCommandHandler, LedgerConfig, LedgerEvent, OrderError, OrderLedger,
    OrderTotals, PricedBox,
};
pub use domain::shape::{is_size_valid, Dimensions};
