use serde::{Deserialize, Serialize};

// ============================================================================
// Shape Geometry - Rectangular Solid
// ============================================================================
//
// Pure geometry for box dimensions (metres). No state, no failure modes:
// range checking is a caller concern and lives in `is_size_valid`.
//
// ============================================================================

/// Smallest accepted side, inclusive (metres)
pub const MIN_SIDE: f64 = 0.3;

/// Largest accepted side, inclusive (metres)
pub const MAX_SIDE: f64 = 10.0;

/// Box dimensions in metres. Immutable once a box is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub height: f64,
    pub width: f64,
}

impl Dimensions {
    pub fn new(length: f64, height: f64, width: f64) -> Self {
        Self { length, height, width }
    }

    pub fn volume(&self) -> f64 {
        volume(self.length, self.height, self.width)
    }

    pub fn surface_area(&self) -> f64 {
        surface_area(self.length, self.height, self.width)
    }

    pub fn is_valid(&self) -> bool {
        is_size_valid(self.length, self.height, self.width)
    }
}

pub fn volume(length: f64, height: f64, width: f64) -> f64 {
    length * height * width
}

pub fn surface_area(length: f64, height: f64, width: f64) -> f64 {
    2.0 * (length * width + length * height + width * height)
}

/// True iff every side lies within [`MIN_SIDE`, `MAX_SIDE`].
///
/// NaN fails every comparison and is therefore rejected.
pub fn is_size_valid(length: f64, height: f64, width: f64) -> bool {
    [length, height, width]
        .iter()
        .all(|side| (MIN_SIDE..=MAX_SIDE).contains(side))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_and_surface_area() {
        let dims = Dimensions::new(2.0, 2.0, 2.0);
        assert_eq!(dims.volume(), 8.0);
        assert_eq!(dims.surface_area(), 24.0);
    }

    #[test]
    fn test_surface_area_uneven_sides() {
        // 2 * (1*3 + 1*2 + 3*2) = 22
        assert_eq!(surface_area(1.0, 2.0, 3.0), 22.0);
        assert_eq!(volume(1.0, 2.0, 3.0), 6.0);
    }

    #[test]
    fn test_size_bounds_are_inclusive() {
        assert!(is_size_valid(0.3, 0.3, 0.3));
        assert!(is_size_valid(10.0, 10.0, 10.0));
        assert!(is_size_valid(0.3, 5.0, 10.0));
    }

    #[test]
    fn test_size_out_of_range() {
        assert!(!is_size_valid(0.29, 1.0, 1.0));
        assert!(!is_size_valid(1.0, 10.01, 1.0));
        assert!(!is_size_valid(1.0, 1.0, 0.0));
        assert!(!is_size_valid(1.0, 1.0, -2.0));
        assert!(!is_size_valid(f64::NAN, 1.0, 1.0));
        assert!(!Dimensions::new(11.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_dimensions_serialization() {
        let dims = Dimensions::new(1.5, 0.5, 2.25);
        let json = serde_json::to_string(&dims).unwrap();
        let deserialized: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(dims, deserialized);
    }
}
