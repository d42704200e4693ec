//! Small value types used by the triangle routines.
//!
//! - `Triangle`: three vertices; order only affects the winding of edge signs.
//! - `EdgeTest`, `SnapCfg`: how edge projections are accepted while snapping.
//! - `SnapCandidate`: one vertex/edge candidate with its distance to the query.
//! - `UnitEdges`: which edges of the unit square a vertex set touches.

use nalgebra::Vector2;

/// How an edge projection is accepted as a snap candidate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeTest {
    /// Accept iff the projection parameter `t = dot(p−u, v−u)/‖v−u‖²` is in `[0,1]`.
    #[default]
    Exact,
    /// Legacy check: the projection agrees in sign with `v−u` on each axis and
    /// `‖proj‖² <= ‖v−u‖²`. Equivalent to `Exact` in exact arithmetic; under
    /// rounding the two can disagree only where `t` is within rounding of `0` or `1`.
    AxisSign,
}

/// Snapping configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapCfg {
    pub edge_test: EdgeTest,
}

impl SnapCfg {
    #[inline]
    pub fn legacy() -> Self {
        Self {
            edge_test: EdgeTest::AxisSign,
        }
    }
}

/// Candidate target for a snap plus its distance to the query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapCandidate {
    pub target: Vector2<f64>,
    pub distance: f64,
}

impl SnapCandidate {
    #[inline]
    pub fn vertex(vertex: Vector2<f64>, p: Vector2<f64>) -> Self {
        Self {
            target: vertex,
            distance: (vertex - p).norm(),
        }
    }

    /// Keep `other` only if strictly closer; the first-seen candidate wins ties.
    #[inline]
    pub fn keep_min(&mut self, other: Option<SnapCandidate>) {
        if let Some(c) = other {
            if c.distance < self.distance {
                *self = c;
            }
        }
    }
}

/// Triangle by its three vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn from_array(v: [Vector2<f64>; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        [self.a, self.b, self.c]
    }

    /// Edges in candidate order: AB, BC, CA.
    #[inline]
    pub fn edges(&self) -> [(Vector2<f64>, Vector2<f64>); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        super::is_inside_triangle(self.a, self.b, self.c, p)
    }

    #[inline]
    pub fn snap(&self, p: Vector2<f64>, cfg: SnapCfg) -> Vector2<f64> {
        super::snap_to_triangle_with(self.a, self.b, self.c, p, cfg)
    }
}

/// Unit-square edges touched by a set of points (exact comparisons).
///
/// `top` is `y = 0` and `bottom` is `y = 1` (screen orientation).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitEdges {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl UnitEdges {
    pub fn of(points: &[Vector2<f64>]) -> Self {
        let mut e = Self::default();
        for p in points {
            e.left |= p.x == 0.0;
            e.right |= p.x == 1.0;
            e.top |= p.y == 0.0;
            e.bottom |= p.y == 1.0;
        }
        e
    }

    #[inline]
    pub fn covers_all(&self) -> bool {
        self.left && self.right && self.top && self.bottom
    }
}
