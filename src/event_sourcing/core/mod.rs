// ============================================================================
// Event Sourcing Core - Generic Event Abstractions
// ============================================================================
//
// No domain-specific code lives here: the envelope works with any event
// type implementing `DomainEvent`.
//
// ============================================================================

pub mod event;

pub use event::{DomainEvent, EventEnvelope};
