//! Curated API for the CLI and the Python bindings (UNSTABLE).
//!
//! Prefer these re-exports over reaching into submodules, so callers keep
//! working when the module layout moves.

// 2D geometry core
pub use crate::geom2::{
    dot, is_inside_triangle, lerp, lerp_point, linear_position, magnitude2, planar_position,
    projection, snap_to_triangle, snap_to_triangle_with, EdgeTest, SnapCandidate, SnapCfg,
    Triangle, UnitEdges,
};
// Random unit triangles
pub use crate::geom2::rand::{
    draw_unit_triangle, draw_unit_triangle_replay, draw_unit_triangle_with_shape,
    random_unit_triangle, ReplayToken as TriangleReplay, ShapeStrategy,
};
// Toggle model
pub use crate::switch::{
    CheckState, CornersError, IndicatorRect, SwitchCfg, SwitchEvent, TriStateSwitch,
};
