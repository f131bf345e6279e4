use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Catalog Value Objects
// ============================================================================

/// The four manufacturing features that decide validity and box type.
///
/// Sealable top is absent: it is priced but never classified.
/// Fields stay raw integers so that out-of-catalog combinations (grade 7,
/// three colours, ...) remain representable and can be rejected by lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureSet {
    pub cardboard_grade: u8,
    pub number_of_colours: u8,
    pub reinforcement_bottom: bool,
    pub reinforcement_corners: bool,
}

impl FeatureSet {
    pub const fn new(
        cardboard_grade: u8,
        number_of_colours: u8,
        reinforcement_bottom: bool,
        reinforcement_corners: bool,
    ) -> Self {
        Self {
            cardboard_grade,
            number_of_colours,
            reinforcement_bottom,
            reinforcement_corners,
        }
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(grade {}, colours {}, bottom {}, corners {})",
            self.cardboard_grade,
            self.number_of_colours,
            yes_no(self.reinforcement_bottom),
            yes_no(self.reinforcement_corners),
        )
    }
}

/// Box type identifier, 1 through 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoxTypeId(u8);

impl BoxTypeId {
    pub(crate) const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for BoxTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
