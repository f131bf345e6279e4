use crate::domain::catalog::FeatureSet;
use crate::domain::shape::Dimensions;

// ============================================================================
// Ledger Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum LedgerCommand {
    AddPreview {
        dimensions: Dimensions,
        features: FeatureSet,
        sealable_top: bool,
        count: usize,
    },
    ClearPreview,
    ClearConfirmed,
    ConfirmAllPreview,
    DeleteConfirmed {
        /// 1-based position among confirmed boxes
        position: usize,
    },
}

impl LedgerCommand {
    pub fn name(&self) -> &'static str {
        match self {
            LedgerCommand::AddPreview { .. } => "AddPreview",
            LedgerCommand::ClearPreview => "ClearPreview",
            LedgerCommand::ClearConfirmed => "ClearConfirmed",
            LedgerCommand::ConfirmAllPreview => "ConfirmAllPreview",
            LedgerCommand::DeleteConfirmed { .. } => "DeleteConfirmed",
        }
    }
}
