//! Triangle containment and snapping.
//!
//! - `is_inside_triangle`: edge-sign test, winding independent, boundary counts as inside.
//! - `snap_to_triangle`: identity for inside points; otherwise the closest of
//!   the three vertices and the accepted edge projections.
//!
//! Candidate order is A, B, C, AB, BC, CA and a candidate replaces the current
//! best only when strictly closer, so exact ties resolve to the earliest one.

use nalgebra::Vector2;

use super::types::{EdgeTest, SnapCandidate, SnapCfg};
use super::util::{dot, magnitude2};

/// Signed area test of `p` against the directed line `u → v` (times two).
#[inline]
pub fn edge_sign(p: Vector2<f64>, u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    (p.x - v.x) * (u.y - v.y) - (u.x - v.x) * (p.y - v.y)
}

/// True unless the three edge signs contain both a strictly negative and a
/// strictly positive value. Points on an edge are inside.
pub fn is_inside_triangle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
) -> bool {
    let s = [edge_sign(p, a, b), edge_sign(p, b, c), edge_sign(p, c, a)];
    let has_neg = s.iter().any(|&v| v < 0.0);
    let has_pos = s.iter().any(|&v| v > 0.0);
    !(has_neg && has_pos)
}

/// Projection of `p` onto edge `u → v`, if accepted by `test`.
fn edge_candidate(
    u: Vector2<f64>,
    v: Vector2<f64>,
    p: Vector2<f64>,
    test: EdgeTest,
) -> Option<SnapCandidate> {
    let base = v - u;
    let rel = p - u;
    let t = dot(rel, base) / magnitude2(base);
    let proj = base * t;
    let accepted = match test {
        EdgeTest::Exact => (0.0..=1.0).contains(&t),
        EdgeTest::AxisSign => {
            (base.x < 0.0) == (proj.x < 0.0)
                && (base.y < 0.0) == (proj.y < 0.0)
                && magnitude2(proj) <= magnitude2(base)
        }
    };
    accepted.then(|| SnapCandidate {
        target: proj + u,
        distance: (proj - rel).norm(),
    })
}

/// Snap `p` onto triangle `abc` with the default (exact) edge test.
pub fn snap_to_triangle(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
) -> Vector2<f64> {
    snap_to_triangle_with(a, b, c, p, SnapCfg::default())
}

/// Snap `p` onto triangle `abc`.
///
/// Post: returns `p` bit-for-bit when `is_inside_triangle(a, b, c, p)`;
/// otherwise a vertex or a point on an edge.
pub fn snap_to_triangle_with(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    p: Vector2<f64>,
    cfg: SnapCfg,
) -> Vector2<f64> {
    if is_inside_triangle(a, b, c, p) {
        return p;
    }
    let mut best = SnapCandidate::vertex(a, p);
    best.keep_min(Some(SnapCandidate::vertex(b, p)));
    best.keep_min(Some(SnapCandidate::vertex(c, p)));
    best.keep_min(edge_candidate(a, b, p, cfg.edge_test));
    best.keep_min(edge_candidate(b, c, p, cfg.edge_test));
    best.keep_min(edge_candidate(c, a, p, cfg.edge_test));
    best.target
}
