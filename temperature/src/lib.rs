/// Freezing point of water on the Fahrenheit scale.
pub const FREEZING_POINT_FAHRENHEIT: f64 = 32.0;

/// Convert a whole-degree Fahrenheit reading to Celsius.
///
/// The reading is widened to `f64` before the subtraction, so every `i32`
/// input is valid and the division never truncates.
pub fn fahrenheit_to_celsius(fahrenheit: i32) -> f64 {
    (f64::from(fahrenheit) - FREEZING_POINT_FAHRENHEIT) * 5.0 / 9.0
}

/// Convert a Celsius temperature back to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FREEZING_POINT_FAHRENHEIT
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn freezing_point_maps_to_zero() {
        assert!(fahrenheit_to_celsius(32).abs() < TOLERANCE);
    }

    #[test]
    fn boiling_point_maps_to_one_hundred() {
        assert!((fahrenheit_to_celsius(212) - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn scales_cross_at_minus_forty() {
        assert!((fahrenheit_to_celsius(-40) + 40.0).abs() < TOLERANCE);
    }

    #[test]
    fn extreme_readings_stay_finite() {
        // would overflow if the subtraction happened in i32 math
        assert!(fahrenheit_to_celsius(i32::MIN).is_finite());
        assert!(fahrenheit_to_celsius(i32::MAX).is_finite());
    }
}
