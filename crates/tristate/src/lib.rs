//! Geometry for a three-state toggle whose handle moves inside a triangle.
//!
//! Layout
//! - `geom2`: pure 2D helpers (projection, normalized positions, triangle
//!   containment and snapping, random unit triangles).
//! - `switch`: headless model of the toggle that consumes `geom2` results.
//! - `api`: curated re-exports for callers (CLI, Python bindings).
//!
//! All points are `nalgebra::Vector2<f64>` in the normalized `[0,1]²` space of
//! the switch indicator unless a function says otherwise.

pub mod api;
pub mod geom2;
pub mod switch;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{EdgeTest, SnapCfg, Triangle};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_unit_triangle, draw_unit_triangle_replay, random_unit_triangle, ReplayToken,
    };
    pub use crate::geom2::{
        is_inside_triangle, lerp, linear_position, planar_position, snap_to_triangle,
        snap_to_triangle_with, EdgeTest, SnapCfg, Triangle, UnitEdges,
    };
    pub use crate::switch::{CheckState, SwitchCfg, SwitchEvent, TriStateSwitch};
    pub use nalgebra::Vector2 as Vec2;
}
