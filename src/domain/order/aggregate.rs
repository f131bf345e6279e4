use serde::{Deserialize, Serialize};

use crate::domain::catalog::{FeatureCatalog, FeatureSet};
use crate::domain::shape::{self, Dimensions};
use super::errors::OrderError;
use super::value_objects::{OrderTotals, PricedBox};

// ============================================================================
// Order Ledger - Preview / Confirmed Box List
// ============================================================================
//
// Invariants:
// 1. Insertion order is preserved by every operation
// 2. len() <= capacity at all times; inserts past it are rejected one by one
// 3. Every stored box was classified by the ledger's own catalog
// 4. Boxes are never deduplicated, whatever their feature equality says
//
// Not thread-safe on its own: see `LedgerCommandHandler` for the locked
// wrapper.
//
// ============================================================================

pub const DEFAULT_CAPACITY: usize = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Maximum number of boxes, preview and confirmed together
    pub capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl LedgerConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

#[derive(Debug, Clone)]
pub struct OrderLedger {
    boxes: Vec<PricedBox>,
    catalog: FeatureCatalog,
    config: LedgerConfig,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            boxes: Vec::new(),
            catalog: FeatureCatalog::new(),
            config,
        }
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Validation queries
    // ------------------------------------------------------------------------

    pub fn is_box_can_be_made(
        &self,
        cardboard_grade: u8,
        number_of_colours: u8,
        reinforcement_bottom: bool,
        reinforcement_corners: bool,
    ) -> bool {
        self.catalog.is_box_can_be_made(
            cardboard_grade,
            number_of_colours,
            reinforcement_bottom,
            reinforcement_corners,
        )
    }

    pub fn is_size_valid(&self, length: f64, height: f64, width: f64) -> bool {
        shape::is_size_valid(length, height, width)
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Append `count` unconfirmed boxes and return how many were added.
    ///
    /// A zero count is a no-op. Boxes are appended one at a time: when the
    /// ledger fills up mid-batch the boxes already appended stay and the
    /// error reports how many made it in.
    pub fn add_preview(
        &mut self,
        dimensions: Dimensions,
        features: FeatureSet,
        sealable_top: bool,
        count: usize,
    ) -> Result<usize, OrderError> {
        if count == 0 {
            return Ok(0);
        }
        if !self.catalog.is_valid(&features) {
            return Err(OrderError::InvalidFeatureSet(features));
        }
        let box_type = self.catalog.type_of(&features)?;

        for inserted in 0..count {
            if self.boxes.len() >= self.config.capacity {
                tracing::warn!(
                    capacity = self.config.capacity,
                    inserted = inserted,
                    requested = count,
                    "Ledger capacity reached, rejecting remaining boxes"
                );
                return Err(OrderError::CapacityExceeded {
                    capacity: self.config.capacity,
                    inserted,
                });
            }
            self.boxes
                .push(PricedBox::with_type(dimensions, features, sealable_top, box_type));
        }

        tracing::debug!(
            box_type = %box_type,
            count = count,
            ledger_size = self.boxes.len(),
            "Preview boxes added"
        );
        Ok(count)
    }

    /// Remove every unconfirmed box, returning how many were removed
    pub fn clear_preview(&mut self) -> usize {
        let before = self.boxes.len();
        self.boxes.retain(PricedBox::is_confirmed);
        before - self.boxes.len()
    }

    /// Remove every confirmed box, returning how many were removed
    pub fn clear_confirmed(&mut self) -> usize {
        let before = self.boxes.len();
        self.boxes.retain(|b| !b.is_confirmed());
        before - self.boxes.len()
    }

    /// Confirm every preview box in ledger order, returning how many flipped
    pub fn confirm_all_preview(&mut self) -> usize {
        let mut confirmed = 0;
        for priced in self.boxes.iter_mut().filter(|b| !b.is_confirmed()) {
            priced.toggle_confirmed();
            confirmed += 1;
        }
        confirmed
    }

    /// Delete the confirmed box at 1-based `position` among confirmed boxes.
    ///
    /// Positions outside `1..=count_confirmed()` are ignored and leave the
    /// ledger untouched; `None` is returned in that case.
    pub fn delete_confirmed(&mut self, position: usize) -> Option<PricedBox> {
        if position == 0 || position > self.count_confirmed() {
            tracing::debug!(position = position, "Ignoring deletion outside confirmed range");
            return None;
        }

        let index = self
            .boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_confirmed())
            .nth(position - 1)
            .map(|(index, _)| index)?;

        Some(self.boxes.remove(index))
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn boxes(&self) -> &[PricedBox] {
        &self.boxes
    }

    pub fn preview_boxes(&self) -> impl Iterator<Item = &PricedBox> {
        self.boxes.iter().filter(|b| !b.is_confirmed())
    }

    pub fn confirmed_boxes(&self) -> impl Iterator<Item = &PricedBox> {
        self.boxes.iter().filter(|b| b.is_confirmed())
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn count_preview(&self) -> usize {
        self.preview_boxes().count()
    }

    pub fn count_confirmed(&self) -> usize {
        self.confirmed_boxes().count()
    }

    pub fn is_preview_empty(&self) -> bool {
        !self.boxes.iter().any(|b| !b.is_confirmed())
    }

    /// True when NO preview boxes remain.
    ///
    /// The name reads the other way round; kept for callers that drive the
    /// preview form off it. Prefer [`OrderLedger::is_preview_empty`].
    pub fn has_preview_pending(&self) -> bool {
        self.is_preview_empty()
    }

    pub fn is_any_confirmed(&self) -> bool {
        self.boxes.iter().any(PricedBox::is_confirmed)
    }

    /// True once no further box can be inserted, i.e. the next insert
    /// would be the one past capacity.
    ///
    /// This is the reachable form of a `len() >= 5001` check: inserts stop
    /// at capacity, so the ledger never holds a 5001st box.
    pub fn is_full(&self) -> bool {
        self.boxes.len() >= self.config.capacity
    }

    /// The most recently added box, if it is still a preview
    pub fn last_preview(&self) -> Option<&PricedBox> {
        self.boxes.last().filter(|b| !b.is_confirmed())
    }

    pub fn last_preview_size_info(&self) -> String {
        self.last_preview()
            .map(PricedBox::size_information)
            .unwrap_or_default()
    }

    pub fn last_preview_feature_info(&self) -> String {
        self.last_preview()
            .map(PricedBox::features_information)
            .unwrap_or_default()
    }

    pub fn last_preview_price_info(&self) -> String {
        self.last_preview()
            .map(PricedBox::cost_breakdown_information)
            .unwrap_or_default()
    }

    pub fn preview_total(&self) -> f64 {
        self.preview_boxes().map(PricedBox::total_cost).sum()
    }

    pub fn confirmed_total(&self) -> f64 {
        self.confirmed_boxes().map(PricedBox::total_cost).sum()
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            preview_count: self.count_preview(),
            preview_total: self.preview_total(),
            confirmed_count: self.count_confirmed(),
            confirmed_total: self.confirmed_total(),
        }
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
