// ============================================================================
// Event Sourcing Infrastructure
// ============================================================================
//
// Generic event envelope and in-memory journal.
// Domain-specific code is in src/domain/
//
// ============================================================================

pub mod core;
pub mod store;

pub use self::core::*;
pub use self::store::*;
