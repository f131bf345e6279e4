// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Leaves first:
// - shape   - box dimensions, volume and surface area
// - catalog - feature sets and the box type lookup table
// - order   - priced boxes, the order ledger and its command handler
//
// Independent of the event journal and metrics apart from the command
// handler, which wires them in.
//
// ============================================================================

pub mod shape;
pub mod catalog;
pub mod order;
