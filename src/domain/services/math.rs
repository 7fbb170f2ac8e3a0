//! Numeric helpers shared by the dimension scorers.
//!
//! Every helper is total: zero ranges, zero divisors and empty weight
//! vectors collapse to 0.0 instead of producing NaN or infinity.

/// Number of decimal places kept by [`round`].
pub const SCORE_PRECISION: i32 = 3;

/// Bound `value` to `[lo, hi]`. NaN maps to `lo`.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return lo;
    }
    value.max(lo).min(hi)
}

/// Map `value` from `[min, max]` onto `[0, 1]`, clamping outside the range.
///
/// Returns 0.0 when the range is empty.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return 0.0;
    }
    clamp((value - min) / range, 0.0, 1.0)
}

/// `numerator / denominator`, or 0.0 when the denominator is zero.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `Σ(value·weight) / Σ(weight)`, or 0.0 when the weights sum to zero.
///
/// Pairs beyond the shorter of the two slices are ignored.
pub fn weighted_average(values: &[f64], weights: &[f64]) -> f64 {
    let (weighted_sum, weight_sum) = values
        .iter()
        .zip(weights)
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value * weight, total + weight)
        });

    safe_divide(weighted_sum, weight_sum)
}

/// Round to [`SCORE_PRECISION`] decimal places.
pub fn round(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds_value() {
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.2, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.4, 0.0, 1.0), 0.4);
    }

    #[test]
    fn test_clamp_nan_maps_to_lower_bound() {
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_normalize_within_range() {
        assert_eq!(normalize(50.0, 0.0, 100.0), 0.5);
        assert_eq!(normalize(0.05, 0.0, 0.1), 0.5);
    }

    #[test]
    fn test_normalize_clamps_outside_range() {
        assert_eq!(normalize(250.0, 0.0, 100.0), 1.0);
        assert_eq!(normalize(-10.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_normalize_zero_range_returns_zero() {
        assert_eq!(normalize(5.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(3.0, 4.0), 0.75);
        assert_eq!(safe_divide(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_weighted_average() {
        let avg = weighted_average(&[1.0, 0.0], &[0.6, 0.4]);
        assert!((avg - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_average_does_not_require_normalized_weights() {
        let avg = weighted_average(&[0.2, 0.8], &[2.0, 2.0]);
        assert!((avg - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_average_zero_weights_returns_zero() {
        assert_eq!(weighted_average(&[0.9, 0.9], &[0.0, 0.0]), 0.0);
        assert_eq!(weighted_average(&[], &[]), 0.0);
    }

    #[test]
    fn test_round_to_three_decimals() {
        assert_eq!(round(0.12345), 0.123);
        assert_eq!(round(0.5546), 0.555);
        assert_eq!(round(1.0), 1.0);
    }
}
