// ============================================================================
// Event Sourcing Store - In-Memory Journal
// ============================================================================
//
// Nothing is persisted across runs; the journal lives as long as its owner.
//
// ============================================================================

pub mod event_journal;

pub use event_journal::EventJournal;
