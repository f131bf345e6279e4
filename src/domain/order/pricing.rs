// ============================================================================
// Price Table
// ============================================================================
//
// Single fixed price table. Every surcharge is a fraction of the base cost
// and is computed independently, never on top of another surcharge.
//
// ============================================================================

pub const CURRENCY_SYMBOL: &str = "£";

pub const COLOUR_RATE_ONE: f64 = 0.12;
pub const COLOUR_RATE_TWO: f64 = 0.15;
pub const REINFORCEMENT_BOTTOM_RATE: f64 = 0.13;
pub const REINFORCEMENT_CORNERS_RATE: f64 = 0.12;
pub const SEALABLE_TOP_RATE: f64 = 0.10;

/// Price per square metre of cardboard; unknown grades cost nothing
pub fn grade_rate(cardboard_grade: u8) -> f64 {
    match cardboard_grade {
        1 => 0.55,
        2 => 0.65,
        3 => 0.82,
        4 => 0.98,
        5 => 1.50,
        _ => 0.0,
    }
}

pub fn colour_rate(number_of_colours: u8) -> f64 {
    match number_of_colours {
        1 => COLOUR_RATE_ONE,
        2 => COLOUR_RATE_TWO,
        _ => 0.0,
    }
}

pub fn base_cost(cardboard_grade: u8, surface_area: f64) -> f64 {
    surface_area * grade_rate(cardboard_grade)
}

pub(crate) fn surcharge(base_cost: f64, rate: f64, applies: bool) -> f64 {
    if applies {
        base_cost * rate
    } else {
        0.0
    }
}

/// Two-decimal currency string, e.g. `£27.16`
pub fn format_currency(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_rates() {
        assert_eq!(grade_rate(1), 0.55);
        assert_eq!(grade_rate(5), 1.50);
        assert_eq!(grade_rate(0), 0.0);
        assert_eq!(grade_rate(6), 0.0);
    }

    #[test]
    fn test_base_cost_depends_on_grade_and_area_only() {
        assert!((base_cost(3, 24.0) - 19.68).abs() < 1e-9);
        assert_eq!(base_cost(9, 24.0), 0.0);
    }

    #[test]
    fn test_colour_rates() {
        assert_eq!(colour_rate(0), 0.0);
        assert_eq!(colour_rate(1), 0.12);
        assert_eq!(colour_rate(2), 0.15);
        assert_eq!(colour_rate(3), 0.0);
    }

    #[test]
    fn test_surcharge_only_when_applied() {
        assert_eq!(surcharge(10.0, 0.5, false), 0.0);
        assert_eq!(surcharge(10.0, 0.5, true), 5.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(27.1584), "£27.16");
        assert_eq!(format_currency(0.0), "£0.00");
    }
}
