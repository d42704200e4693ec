//! Normalized positions relative to reference lines.
//!
//! - `linear_position`: projection coefficient along a segment, saturated to `[0,1]`.
//! - `planar_position`: two such coefficients; x along `start–end`, y along the
//!   axis from `zero` to its foot on line `start–end`. The two axes need not be
//!   orthogonal, so the result can be skewed.

use nalgebra::Vector2;

use super::util::{clamp_unit, dot, magnitude2, projection};

/// Projection coefficient of `position` onto `start → end`, clamped into `[0,1]`.
///
/// Pre: `start != end`. A zero-length segment gives NaN before clamping,
/// which `clamp_unit` maps to `0.0`.
pub fn linear_position(start: Vector2<f64>, end: Vector2<f64>, position: Vector2<f64>) -> f64 {
    let base = end - start;
    let rel = position - start;
    clamp_unit(dot(rel, base) / magnitude2(base))
}

/// Normalized 2D coordinate of `position` in the frame spanned by `start–end`
/// and the perpendicular through `zero`. Both components are in `[0,1]`.
pub fn planar_position(
    start: Vector2<f64>,
    end: Vector2<f64>,
    zero: Vector2<f64>,
    position: Vector2<f64>,
) -> Vector2<f64> {
    let along = linear_position(start, end, position);
    let zero_proj = projection(start, end, zero);
    let across = linear_position(zero, zero_proj, position);
    Vector2::new(along, across)
}
