use crate::math::curve::curve::Curve;
use crate::math::curve::point2d::Point2D;
use crate::math::quadratic::quadraticerror::QuadraticError;
use crate::math::quadratic::range::Range;
use crate::math::quadratic::validator::validate_sampling;
use crate::plot::sampleseries::SampleSeries;

/// Evaluates `curve` at `count` evenly spaced abscissae spanning `range`
/// inclusively: `x_i = min + i·(max − min)/(count − 1)`.
///
/// The last abscissa is pinned to `max` so the series always ends exactly on
/// the upper bound. Identical inputs give bit-identical output. A range too
/// narrow to hold `count` distinct abscissae is an `InvalidRangeError`.
pub fn sample<C>(curve: &C, range: &Range, count: usize) -> Result<SampleSeries, QuadraticError>
    where C: Curve {
    let count = validate_sampling(range, count)?;
    let last = count - 1;
    let step = range.width() / last as f64;

    let points: Vec<Point2D> = (0..count)
        .map(|i| {
            let x = if i == last {
                range.max()
            } else {
                range.min() + i as f64 * step
            };
            Point2D::new(x, curve.value(x))
        })
        .collect();

    log::debug!("sampled {} points on [{}, {}]", points.len(), range.min(), range.max());
    Ok(SampleSeries::new(points))
}
