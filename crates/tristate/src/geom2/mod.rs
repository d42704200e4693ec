//! 2D geometry behind the triangular toggle.
//!
//! Purpose
//! - Map a raw drag point onto normalized linear/planar coordinates relative
//!   to reference lines.
//! - Decide triangle membership and snap outside points to the nearest point
//!   of the triangle.
//! - Draw random triangles inscribed in the unit square for tests and fixtures.
//!
//! Numerics
//! - Plain IEEE-754 `f64`; degenerate inputs (zero-length segments, collinear
//!   triangles) are not guarded and may yield NaN/Inf. `clamp_unit` maps NaN to
//!   `0.0` so normalized outputs stay inside `[0,1]`.
//!
//! Code cross-refs: `Triangle`, `SnapCfg`, `EdgeTest`, `rand::ReplayToken`

mod position;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use position::{linear_position, planar_position};
pub use triangle::{edge_sign, is_inside_triangle, snap_to_triangle, snap_to_triangle_with};
pub use types::{EdgeTest, SnapCandidate, SnapCfg, Triangle, UnitEdges};
pub use util::{clamp_unit, dot, lerp, lerp_point, magnitude2, on_unit_boundary, projection};
