//! Numeric value generators.

use crate::GeneratorError;
use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64, GeneratorError> {
    if max < min {
        return Err(GeneratorError::InvalidBounds(format!(
            "int_range max {max} is less than min {min}"
        )));
    }
    Ok(rng.random_range(min..=max))
}

/// Generate a random float in the given range (inclusive).
pub fn float_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<f64, GeneratorError> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(GeneratorError::InvalidBounds(format!(
            "float_range [{min}, {max}] is not a finite, ordered range"
        )));
    }
    if min == max {
        return Ok(min);
    }
    if (max - min).is_finite() {
        return Ok(rng.random_range(min..=max));
    }
    // Width overflows f64; sample around the midpoint in half-widths instead
    let mid = min / 2.0 + max / 2.0;
    let half_width = max / 2.0 - min / 2.0;
    let offset = rng.random_range(-1.0f64..=1.0) * half_width;
    Ok((mid + offset).clamp(min, max))
}

/// Generate a random float that fits a `DECIMAL(precision, scale)` column.
///
/// The value has at most `precision - scale` integral digits and exactly
/// `scale` fractional digits before float rounding, and may be negative.
pub fn float_digits<R: Rng + ?Sized>(
    rng: &mut R,
    precision: u8,
    scale: u8,
) -> Result<f64, GeneratorError> {
    if precision == 0 || precision > 18 || scale > precision {
        return Err(GeneratorError::InvalidBounds(format!(
            "float_digits precision {precision} / scale {scale}"
        )));
    }
    let limit = 10i64.pow(precision as u32) - 1;
    let units = rng.random_range(-limit..=limit);
    Ok(units as f64 / 10f64.powi(scale as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..500 {
            let v = int_range(&mut rng, 10, 12).unwrap();
            assert!((10..=12).contains(&v));
            seen_min |= v == 10;
            seen_max |= v == 12;
        }

        assert!(seen_min && seen_max, "both bounds should be reachable");
    }

    #[test]
    fn test_int_range_single_value() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(int_range(&mut rng, 5, 5).unwrap(), 5);
    }

    #[test]
    fn test_int_range_rejects_inverted_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            int_range(&mut rng, 2, 1),
            Err(GeneratorError::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_float_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = float_range(&mut rng, 0.0, 100.0).unwrap();
            assert!((0.0..=100.0).contains(&v));
        }
        assert!(float_range(&mut rng, f64::NAN, 1.0).is_err());
        assert!(float_range(&mut rng, 2.0, 1.0).is_err());
    }

    #[test]
    fn test_float_range_full_width() {
        let mut rng = StdRng::seed_from_u64(42);

        for (min, max) in [(-1e308, 1e308), (f64::MIN, f64::MAX), (-f64::MAX, 0.0)] {
            for _ in 0..100 {
                let v = float_range(&mut rng, min, max).unwrap();
                assert!(v.is_finite());
                assert!((min..=max).contains(&v), "{v} outside [{min}, {max}]");
            }
        }
    }

    #[test]
    fn test_float_digits_fit_precision_and_scale() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let v = float_digits(&mut rng, 5, 2).unwrap();
            assert!(v.abs() <= 999.99, "{v} exceeds DECIMAL(5,2)");
            let scaled = (v * 100.0).round();
            assert!((v * 100.0 - scaled).abs() < 1e-6, "{v} has more than 2 decimals");
        }
    }

    #[test]
    fn test_float_digits_rejects_bad_scale() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(float_digits(&mut rng, 2, 3).is_err());
        assert!(float_digits(&mut rng, 0, 0).is_err());
    }
}
