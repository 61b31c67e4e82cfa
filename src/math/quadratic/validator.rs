use crate::math::quadratic::analyzer::{
    classify_roots,
    discriminant,
    vertex
};
use crate::math::quadratic::coefficientset::CoefficientSet;
use crate::math::quadratic::quadraticerror::QuadraticError;
use crate::math::quadratic::range::Range;

pub const MIN_SAMPLE_COUNT: usize = 2;

/// Minimum spacing between neighbouring samples, in units in the last place
/// of the largest bound. Covers the rounding of `min + i·step`.
pub const MIN_SAMPLE_SPACING_ULPS: f64 = 4.0;

fn check_finite(field: &'static str, value: f64) -> Result<f64, QuadraticError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuadraticError::NonFiniteInputError { field, value })
    }
}

fn check_leading(a: f64) -> Result<(), QuadraticError> {
    if a == 0.0 {
        Err(QuadraticError::DegenerateInputError { field: "a", value: a })
    } else {
        Ok(())
    }
}

fn check_bounds(min: f64, max: f64) -> Result<(), QuadraticError> {
    // `max - min` can overflow even when both bounds are finite.
    if min < max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(QuadraticError::InvalidRangeError { min, max })
    }
}

/// Finite coefficients can still overflow once squared or divided; every
/// quantity the analysis reports must stay finite.
fn check_derived(coefficients: &CoefficientSet) -> Result<(), QuadraticError> {
    let (a, b, c) = (coefficients.a(), coefficients.b(), coefficients.c());
    check_finite("b²", b * b)?;
    check_finite("4ac", 4.0 * a * c)?;
    let disc = check_finite("discriminant", discriminant(coefficients))?;
    let extremum = vertex(coefficients);
    check_finite("vertex.x", extremum.x())?;
    check_finite("vertex.y", extremum.y())?;
    for root in classify_roots(coefficients, disc, extremum.x()).roots() {
        check_finite("roots", root)?;
    }
    Ok(())
}

fn unit_in_last_place(x: f64) -> f64 {
    let magnitude = x.abs();
    let above = f64::from_bits(magnitude.to_bits() + 1);
    if above.is_finite() {
        above - magnitude
    } else {
        magnitude - f64::from_bits(magnitude.to_bits() - 1)
    }
}

/// Validates a raw coefficient triple together with its sampling range.
///
/// All five values are checked for finiteness first, then the leading
/// coefficient, then the derived quantities, then the ordering of the bounds.
pub fn validate(a: f64,
                b: f64,
                c: f64,
                min: f64,
                max: f64) -> Result<(CoefficientSet, Range), QuadraticError> {
    check_finite("a", a)?;
    check_finite("b", b)?;
    check_finite("c", c)?;
    check_finite("min", min)?;
    check_finite("max", max)?;
    check_leading(a)?;
    let coefficients = CoefficientSet::new(a, b, c);
    check_derived(&coefficients)?;
    check_bounds(min, max)?;
    log::debug!("validated f(x) = {}x² + {}x + {} on [{}, {}]", a, b, c, min, max);
    Ok((coefficients, Range::new(min, max)))
}

pub fn validate_coefficients(a: f64, b: f64, c: f64) -> Result<CoefficientSet, QuadraticError> {
    check_finite("a", a)?;
    check_finite("b", b)?;
    check_finite("c", c)?;
    check_leading(a)?;
    let coefficients = CoefficientSet::new(a, b, c);
    check_derived(&coefficients)?;
    Ok(coefficients)
}

pub fn validate_range(min: f64, max: f64) -> Result<Range, QuadraticError> {
    check_finite("min", min)?;
    check_finite("max", max)?;
    check_bounds(min, max)?;
    Ok(Range::new(min, max))
}

pub fn validate_sample_count(count: usize) -> Result<usize, QuadraticError> {
    if count < MIN_SAMPLE_COUNT {
        Err(QuadraticError::InvalidSampleCountError { count })
    } else {
        Ok(count)
    }
}

/// Checks that `range` is wide enough to hold `count` distinct, strictly
/// increasing abscissae; a range only a few ulps wide is rejected as an
/// `InvalidRangeError`.
pub fn validate_sampling(range: &Range, count: usize) -> Result<usize, QuadraticError> {
    let count = validate_sample_count(count)?;
    let step = range.width() / (count - 1) as f64;
    let ulp = unit_in_last_place(f64::max(range.min().abs(), range.max().abs()));
    if step > MIN_SAMPLE_SPACING_ULPS * ulp {
        Ok(count)
    } else {
        Err(QuadraticError::InvalidRangeError { min: range.min(), max: range.max() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_parabola() {
        let (coefs, range) = validate(2.0, -4.0, 1.0, -10.0, 10.0).unwrap();
        assert_eq!((coefs.a(), coefs.b(), coefs.c()), (2.0, -4.0, 1.0));
        assert_eq!((range.min(), range.max()), (-10.0, 10.0));
    }

    #[test]
    fn zero_leading_coefficient_is_degenerate() {
        for &(b, c) in &[(0.0, 0.0), (3.0, -1.0), (-2.5, 7.0)] {
            let error = validate(0.0, b, c, -10.0, 10.0).unwrap_err();
            assert_eq!(error, QuadraticError::DegenerateInputError { field: "a", value: 0.0 });
        }
        // -0.0 == 0.0
        assert!(matches!(
            validate_coefficients(-0.0, 1.0, 1.0),
            Err(QuadraticError::DegenerateInputError { field: "a", .. })
        ));
    }

    #[test]
    fn inverted_or_empty_range_is_rejected() {
        assert_eq!(
            validate(1.0, 0.0, 0.0, 5.0, -5.0).unwrap_err(),
            QuadraticError::InvalidRangeError { min: 5.0, max: -5.0 }
        );
        assert!(matches!(validate_range(3.0, 3.0), Err(QuadraticError::InvalidRangeError { .. })));
        assert!(matches!(
            validate_range(-f64::MAX, f64::MAX),
            Err(QuadraticError::InvalidRangeError { .. })
        ));
    }

    #[test]
    fn non_finite_values_report_their_field() {
        let cases = [
            (validate(f64::NAN, 1.0, 1.0, -1.0, 1.0), "a"),
            (validate(1.0, f64::INFINITY, 1.0, -1.0, 1.0), "b"),
            (validate(1.0, 1.0, f64::NEG_INFINITY, -1.0, 1.0), "c"),
            (validate(1.0, 1.0, 1.0, f64::NAN, 1.0), "min"),
            (validate(1.0, 1.0, 1.0, -1.0, f64::INFINITY), "max"),
        ];
        for (result, expected_field) in cases {
            match result {
                Err(QuadraticError::NonFiniteInputError { field, .. }) => assert_eq!(field, expected_field),
                other => panic!("expected NonFiniteInputError for {}, got {:?}", expected_field, other)
            }
        }
    }

    #[test]
    fn finiteness_is_checked_before_degeneracy() {
        assert!(matches!(
            validate(0.0, f64::NAN, 1.0, -1.0, 1.0),
            Err(QuadraticError::NonFiniteInputError { field: "b", .. })
        ));
    }

    #[test]
    fn sample_count_needs_two_points() {
        assert_eq!(validate_sample_count(0), Err(QuadraticError::InvalidSampleCountError { count: 0 }));
        assert_eq!(validate_sample_count(1), Err(QuadraticError::InvalidSampleCountError { count: 1 }));
        assert_eq!(validate_sample_count(2), Ok(2));
    }

    #[test]
    fn overflowing_derived_quantities_are_rejected() {
        assert_eq!(
            validate_coefficients(1.0, 1e200, 0.0),
            Err(QuadraticError::NonFiniteInputError { field: "b²", value: f64::INFINITY })
        );
        assert!(matches!(
            validate(1e200, 0.0, 1e200, -1.0, 1.0),
            Err(QuadraticError::NonFiniteInputError { field: "4ac", .. })
        ));
        // finite b² and 4ac, but -b/(2a) overflows
        assert!(matches!(
            validate_coefficients(1e-300, 1e10, 0.0),
            Err(QuadraticError::NonFiniteInputError { field: "vertex.x", .. })
        ));
        assert!(validate_coefficients(1.0, 1e150, 0.0).is_ok());
    }

    #[test]
    fn range_must_leave_room_between_samples() {
        let next_after_one = f64::from_bits(1f64.to_bits() + 1);
        let range = validate_range(1.0, next_after_one).unwrap();
        assert_eq!(
            validate_sampling(&range, 3),
            Err(QuadraticError::InvalidRangeError { min: 1.0, max: next_after_one })
        );
        assert_eq!(
            validate_sampling(&range, 1),
            Err(QuadraticError::InvalidSampleCountError { count: 1 })
        );
        let narrow = validate_range(1.0, 1.0 + 1e-9).unwrap();
        assert_eq!(validate_sampling(&narrow, 400), Ok(400));
        let wide = validate_range(-10.0, 10.0).unwrap();
        assert_eq!(validate_sampling(&wide, 400), Ok(400));
    }
}
