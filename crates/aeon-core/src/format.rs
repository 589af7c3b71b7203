//! Numeric display helpers.
//!
//! Calculator outputs span some sixty orders of magnitude, so display
//! switches to exponential notation outside a comfortable plain-decimal
//! range.

/// Round to `decimals` places, half away from zero.
pub fn round_to(num: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (num * factor).round() / factor
}

/// Exponential rendering with `decimals` mantissa places, e.g. `1.99e30`.
pub fn scientific(num: f64, decimals: u8) -> String {
    format!("{:.*e}", usize::from(decimals), num)
}

/// Format a value for display.
///
/// Magnitudes below `1e-3` or at least `1e6` render exponentially; the
/// rest render as plain decimals rounded to `decimals` places, with
/// trailing zeros dropped.
pub fn format_number(num: f64, decimals: u8) -> String {
    if num.abs() < 1e-3 || num.abs() >= 1e6 {
        scientific(num, decimals)
    } else {
        format!("{}", round_to(num, decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert!((round_to(1.2345, 2) - 1.23).abs() < 1e-12);
        assert!((round_to(1.235, 1) - 1.2).abs() < 1e-12);
        assert!((round_to(-1.236, 2) + 1.24).abs() < 1e-12);
    }

    #[test]
    fn test_plain_range_trims_zeros() {
        assert_eq!(format_number(1234.567, 2), "1234.57");
        assert_eq!(format_number(1234.5, 2), "1234.5");
        assert_eq!(format_number(1234.0, 2), "1234");
        assert_eq!(format_number(0.5, 2), "0.5");
    }

    #[test]
    fn test_large_magnitudes_go_exponential() {
        assert_eq!(format_number(1.989e30, 2), "1.99e30");
        assert_eq!(format_number(1e6, 2), "1.00e6");
        assert_eq!(format_number(999_999.0, 2), "999999");
    }

    #[test]
    fn test_small_magnitudes_go_exponential() {
        assert_eq!(format_number(0.0005, 2), "5.00e-4");
        assert_eq!(format_number(-0.0005, 2), "-5.00e-4");
        // Exactly 1e-3 stays plain
        assert_eq!(format_number(0.001, 3), "0.001");
    }

    #[test]
    fn test_scientific_mantissa_places() {
        assert_eq!(scientific(2950.0, 3), "2.950e3");
        assert_eq!(scientific(0.0, 2), "0.00e0");
    }
}
