use nalgebra::Vector2;

/// Inner product.
#[inline]
pub fn dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.x + a.y * b.y
}

/// Squared Euclidean length, `dot(p, p)`.
#[inline]
pub fn magnitude2(p: Vector2<f64>) -> f64 {
    dot(p, p)
}

/// `from + (to - from) * t`. `t` is not clamped.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Component-wise `lerp` between two points.
#[inline]
pub fn lerp_point(from: Vector2<f64>, to: Vector2<f64>, t: f64) -> Vector2<f64> {
    Vector2::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t))
}

/// Orthogonal projection of `p` onto the infinite line through `a` and `b`.
///
/// Pre: `a != b` (otherwise the result is NaN).
pub fn projection(a: Vector2<f64>, b: Vector2<f64>, p: Vector2<f64>) -> Vector2<f64> {
    let base = b - a;
    let rel = p - a;
    base * (dot(rel, base) / magnitude2(base)) + a
}

/// Clamp into `[0,1]`; NaN maps to the lower bound.
#[inline]
pub fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// True when `p` lies exactly on one of the four edges of the unit square.
#[inline]
pub fn on_unit_boundary(p: Vector2<f64>) -> bool {
    p.x == 0.0 || p.x == 1.0 || p.y == 0.0 || p.y == 1.0
}
