use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{BoxTypeId, FeatureSet};
use crate::domain::shape::Dimensions;
use crate::event_sourcing::core::DomainEvent;

// ============================================================================
// Ledger Events - Facts recorded after a command changed the ledger
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LedgerEvent {
    PreviewAdded(PreviewAdded),
    PreviewCleared(PreviewCleared),
    ConfirmedCleared(ConfirmedCleared),
    PreviewConfirmed(PreviewConfirmed),
    ConfirmedBoxDeleted(ConfirmedBoxDeleted),
}

impl LedgerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LedgerEvent::PreviewAdded(_) => "PreviewAdded",
            LedgerEvent::PreviewCleared(_) => "PreviewCleared",
            LedgerEvent::ConfirmedCleared(_) => "ConfirmedCleared",
            LedgerEvent::PreviewConfirmed(_) => "PreviewConfirmed",
            LedgerEvent::ConfirmedBoxDeleted(_) => "ConfirmedBoxDeleted",
        }
    }
}

impl DomainEvent for LedgerEvent {
    fn event_name(&self) -> &'static str {
        self.name()
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Boxes appended as previews; `count` is what actually went in
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewAdded {
    pub box_type: BoxTypeId,
    pub features: FeatureSet,
    pub sealable_top: bool,
    pub dimensions: Dimensions,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewCleared {
    pub removed: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfirmedCleared {
    pub removed: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewConfirmed {
    pub confirmed: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfirmedBoxDeleted {
    pub position: usize,
    pub box_id: Uuid,
    pub box_type: BoxTypeId,
}
