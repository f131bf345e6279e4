use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use crate::domain::catalog::value_objects::yes_no;
use crate::domain::catalog::{BoxTypeId, FeatureCatalog, FeatureSet};
use crate::domain::shape::Dimensions;
use super::errors::OrderError;
use super::pricing::{self, format_currency};

// ============================================================================
// Order Value Objects
// ============================================================================

/// A single box in the ledger, priced from its dimensions and features.
///
/// Equality and hashing only look at the classifying [`FeatureSet`]; the
/// ledger never relies on them and keeps every physical box separately,
/// told apart by `id`.
#[derive(Debug, Clone, Serialize)]
pub struct PricedBox {
    id: Uuid,
    dimensions: Dimensions,
    features: FeatureSet,
    sealable_top: bool,
    box_type: BoxTypeId,
    confirmed: bool,
}

impl PricedBox {
    /// Classify `features` through the catalog and build an unconfirmed box
    pub fn new(
        catalog: &FeatureCatalog,
        dimensions: Dimensions,
        features: FeatureSet,
        sealable_top: bool,
    ) -> Result<Self, OrderError> {
        if !catalog.is_valid(&features) {
            return Err(OrderError::InvalidFeatureSet(features));
        }
        let box_type = catalog.type_of(&features)?;
        Ok(Self::with_type(dimensions, features, sealable_top, box_type))
    }

    /// Build from an already resolved box type. Callers must have taken
    /// `box_type` from the catalog for exactly these `features`.
    pub(crate) fn with_type(
        dimensions: Dimensions,
        features: FeatureSet,
        sealable_top: bool,
        box_type: BoxTypeId,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            dimensions,
            features,
            sealable_top,
            box_type,
            confirmed: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn sealable_top(&self) -> bool {
        self.sealable_top
    }

    pub fn box_type(&self) -> BoxTypeId {
        self.box_type
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Flip the confirmation flag; two calls restore the original state
    pub fn toggle_confirmed(&mut self) {
        self.confirmed = !self.confirmed;
    }

    // ------------------------------------------------------------------------
    // Pricing
    // ------------------------------------------------------------------------

    pub fn base_cost(&self) -> f64 {
        pricing::base_cost(self.features.cardboard_grade, self.dimensions.surface_area())
    }

    pub fn colour_cost(&self) -> f64 {
        self.base_cost() * pricing::colour_rate(self.features.number_of_colours)
    }

    pub fn reinforcement_bottom_cost(&self) -> f64 {
        pricing::surcharge(
            self.base_cost(),
            pricing::REINFORCEMENT_BOTTOM_RATE,
            self.features.reinforcement_bottom,
        )
    }

    pub fn reinforcement_corners_cost(&self) -> f64 {
        pricing::surcharge(
            self.base_cost(),
            pricing::REINFORCEMENT_CORNERS_RATE,
            self.features.reinforcement_corners,
        )
    }

    pub fn sealable_top_cost(&self) -> f64 {
        pricing::surcharge(self.base_cost(), pricing::SEALABLE_TOP_RATE, self.sealable_top)
    }

    pub fn total_cost(&self) -> f64 {
        self.cost_breakdown().total
    }

    pub fn cost_breakdown(&self) -> CostBreakdown {
        let base = self.base_cost();
        let colour = self.colour_cost();
        let reinforcement_bottom = self.reinforcement_bottom_cost();
        let reinforcement_corners = self.reinforcement_corners_cost();
        let sealable_top = self.sealable_top_cost();

        CostBreakdown {
            base,
            colour,
            reinforcement_bottom,
            reinforcement_corners,
            sealable_top,
            total: base + colour + reinforcement_bottom + reinforcement_corners + sealable_top,
        }
    }

    // ------------------------------------------------------------------------
    // Text summaries
    // ------------------------------------------------------------------------

    pub fn features_information(&self) -> String {
        [
            format!("Box Type: {}", self.box_type),
            format!("Cardboard grade: {}", self.features.cardboard_grade),
            format!("Number of colours: {}", self.features.number_of_colours),
            format!("Reinforcement Bottom: {}", yes_no(self.features.reinforcement_bottom)),
            format!("Reinforcement Corners: {}", yes_no(self.features.reinforcement_corners)),
            format!("Sealable top: {}", yes_no(self.sealable_top)),
        ]
        .join("\n")
    }

    pub fn size_information(&self) -> String {
        let d = &self.dimensions;
        [
            format!("Box length(m): {:.3}", d.length),
            format!("Box height(m): {:.3}", d.height),
            format!("Box width(m): {:.3}", d.width),
            format!("Box Volume(\u{33A5}): {:.3}", d.volume()),
            format!("Box Surface Area(\u{33A1}): {:.3}", d.surface_area()),
        ]
        .join("\n")
    }

    pub fn cost_breakdown_information(&self) -> String {
        self.cost_breakdown().to_string()
    }
}

impl PartialEq for PricedBox {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl Eq for PricedBox {}

impl Hash for PricedBox {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.features.hash(state);
    }
}

/// Cost of one box, split by surcharge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub base: f64,
    pub colour: f64,
    pub reinforcement_bottom: f64,
    pub reinforcement_corners: f64,
    pub sealable_top: f64,
    pub total: f64,
}

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Base: {}", format_currency(self.base))?;
        writeln!(f, "Colour: {}", format_currency(self.colour))?;
        writeln!(f, "Reinforcement Bottom: {}", format_currency(self.reinforcement_bottom))?;
        writeln!(f, "Reinforcement Corners: {}", format_currency(self.reinforcement_corners))?;
        writeln!(f, "Sealable top: {}", format_currency(self.sealable_top))?;
        write!(f, "Price per box: {}", format_currency(self.total))
    }
}

/// Counts and prices of both ledger subsets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub preview_count: usize,
    pub preview_total: f64,
    pub confirmed_count: usize,
    pub confirmed_total: f64,
}

impl fmt::Display for OrderTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Preview boxes: {}", self.preview_count)?;
        writeln!(f, "Preview price: {}", format_currency(self.preview_total))?;
        writeln!(f, "Confirmed boxes: {}", self.confirmed_count)?;
        write!(f, "Order price: {}", format_currency(self.confirmed_total))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn create_test_box(features: FeatureSet, sealable_top: bool) -> PricedBox {
        PricedBox::new(
            &FeatureCatalog::new(),
            Dimensions::new(2.0, 2.0, 2.0),
            features,
            sealable_top,
        )
        .unwrap()
    }

    #[test]
    fn test_worked_example_pricing() {
        let priced = create_test_box(FeatureSet::new(3, 2, true, false), true);

        assert_close(priced.base_cost(), 19.68);
        assert_close(priced.colour_cost(), 2.952);
        assert_close(priced.reinforcement_bottom_cost(), 2.5584);
        assert_close(priced.reinforcement_corners_cost(), 0.0);
        assert_close(priced.sealable_top_cost(), 1.968);
        assert_close(priced.total_cost(), 27.1584);
        assert_eq!(format_currency(priced.total_cost()), "£27.16");
    }

    #[test]
    fn test_total_is_sum_of_parts_for_every_catalog_entry() {
        let catalog = FeatureCatalog::new();
        for (features, _) in crate::domain::catalog::CATALOG_ENTRIES {
            for sealable_top in [false, true] {
                let priced = PricedBox::new(
                    &catalog,
                    Dimensions::new(1.2, 0.7, 3.4),
                    features,
                    sealable_top,
                )
                .unwrap();

                let expected = priced.base_cost()
                    + priced.colour_cost()
                    + priced.reinforcement_bottom_cost()
                    + priced.reinforcement_corners_cost()
                    + priced.sealable_top_cost();
                assert_close(priced.total_cost(), expected);
            }
        }
    }

    #[test]
    fn test_surcharges_do_not_compound() {
        let priced = create_test_box(FeatureSet::new(5, 2, true, true), true);
        let base = priced.base_cost();

        assert_close(base, 36.0);
        assert_close(priced.total_cost(), base * (1.0 + 0.15 + 0.13 + 0.12 + 0.10));
    }

    #[test]
    fn test_invalid_feature_set_rejected() {
        let features = FeatureSet::new(1, 2, false, false);
        let result = PricedBox::new(
            &FeatureCatalog::new(),
            Dimensions::new(1.0, 1.0, 1.0),
            features,
            false,
        );
        assert!(matches!(result, Err(OrderError::InvalidFeatureSet(f)) if f == features));
    }

    #[test]
    fn test_box_type_matches_catalog() {
        let catalog = FeatureCatalog::new();
        let features = FeatureSet::new(4, 2, true, false);
        let priced = create_test_box(features, false);

        assert_eq!(priced.box_type(), catalog.type_of(priced.features()).unwrap());
        assert_eq!(priced.box_type().get(), 4);
    }

    #[test]
    fn test_toggle_confirmed() {
        let mut priced = create_test_box(FeatureSet::new(2, 0, false, false), false);
        assert!(!priced.is_confirmed());

        priced.toggle_confirmed();
        assert!(priced.is_confirmed());

        priced.toggle_confirmed();
        assert!(!priced.is_confirmed());
    }

    #[test]
    fn test_equality_ignores_everything_but_features() {
        let catalog = FeatureCatalog::new();
        let features = FeatureSet::new(3, 1, false, false);
        let a = PricedBox::new(&catalog, Dimensions::new(1.0, 1.0, 1.0), features, false).unwrap();
        let mut b = PricedBox::new(&catalog, Dimensions::new(9.0, 0.5, 2.0), features, true).unwrap();
        b.toggle_confirmed();

        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());

        let c = create_test_box(FeatureSet::new(3, 0, false, false), false);
        assert_ne!(a, c);
    }

    #[test]
    fn test_features_information() {
        let priced = create_test_box(FeatureSet::new(3, 2, true, false), true);
        let expected = "Box Type: 4\n\
                        Cardboard grade: 3\n\
                        Number of colours: 2\n\
                        Reinforcement Bottom: yes\n\
                        Reinforcement Corners: no\n\
                        Sealable top: yes";
        assert_eq!(priced.features_information(), expected);
    }

    #[test]
    fn test_size_information() {
        let priced = create_test_box(FeatureSet::new(1, 0, false, false), false);
        let info = priced.size_information();

        assert!(info.starts_with("Box length(m): 2.000\n"));
        assert!(info.contains("Box width(m): 2.000"));
        assert!(info.contains("): 8.000"));
        assert!(info.ends_with("): 24.000"));
    }

    #[test]
    fn test_cost_breakdown_information() {
        let priced = create_test_box(FeatureSet::new(3, 2, true, false), true);
        let expected = "Base: £19.68\n\
                        Colour: £2.95\n\
                        Reinforcement Bottom: £2.56\n\
                        Reinforcement Corners: £0.00\n\
                        Sealable top: £1.97\n\
                        Price per box: £27.16";
        assert_eq!(priced.cost_breakdown_information(), expected);
    }

    #[test]
    fn test_cost_breakdown_serialization() {
        let breakdown = create_test_box(FeatureSet::new(2, 1, false, false), false).cost_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: CostBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }

    #[test]
    fn test_order_totals_serialization_keeps_every_bit() {
        let totals = OrderTotals {
            preview_count: 0,
            preview_total: 0.0,
            confirmed_count: 2,
            confirmed_total: 2.0 * 27.1584,
        };
        let json = serde_json::to_string(&totals).unwrap();
        let deserialized: OrderTotals = serde_json::from_str(&json).unwrap();
        assert_eq!(totals, deserialized);
        assert_eq!(deserialized.confirmed_total.to_bits(), (2.0 * 27.1584f64).to_bits());
    }

    #[test]
    fn test_order_totals_display() {
        let totals = OrderTotals {
            preview_count: 2,
            preview_total: 10.0,
            confirmed_count: 3,
            confirmed_total: 81.4752,
        };
        assert_eq!(
            totals.to_string(),
            "Preview boxes: 2\nPreview price: £10.00\nConfirmed boxes: 3\nOrder price: £81.48"
        );
    }
}
