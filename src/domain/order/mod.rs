// ============================================================================
// Order Domain - Box Pricing and the Order Ledger
// ============================================================================
//
// - Value objects (PricedBox, CostBreakdown, OrderTotals)
// - Pricing (fixed price table)
// - Commands (AddPreview, ConfirmAllPreview, ...)
// - Events (PreviewAdded, PreviewConfirmed, ...)
// - Errors (OrderError enum)
// - Aggregate (OrderLedger with the preview → confirmed lifecycle)
// - Command Handler (LedgerCommandHandler)
//
// ============================================================================

pub mod value_objects;
pub mod pricing;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;
pub mod command_handler;

// Re-export for convenience
pub use value_objects::*;
pub use pricing::{format_currency, CURRENCY_SYMBOL};
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
pub use command_handler::*;
