//! Geometry bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{from_vec2, parse_edge_test, to_vec2, Pt};
use pyo3::prelude::*;
use tristate::api::{self as geo, SnapCfg, TriangleReplay};

#[pyfunction]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    geo::lerp(from, to, t)
}

#[pyfunction]
pub fn linear_position(start: Pt, end: Pt, position: Pt) -> f64 {
    geo::linear_position(to_vec2(start), to_vec2(end), to_vec2(position))
}

#[pyfunction]
pub fn planar_position(start: Pt, end: Pt, zero: Pt, position: Pt) -> Pt {
    from_vec2(geo::planar_position(
        to_vec2(start),
        to_vec2(end),
        to_vec2(zero),
        to_vec2(position),
    ))
}

#[pyfunction]
pub fn is_inside_triangle(a: Pt, b: Pt, c: Pt, position: Pt) -> bool {
    geo::is_inside_triangle(to_vec2(a), to_vec2(b), to_vec2(c), to_vec2(position))
}

#[pyfunction]
#[pyo3(signature = (a, b, c, position, edge_test = None))]
pub fn snap_to_triangle(a: Pt, b: Pt, c: Pt, position: Pt, edge_test: Option<&str>) -> PyResult<Pt> {
    let cfg = SnapCfg {
        edge_test: parse_edge_test(edge_test)?,
    };
    Ok(from_vec2(geo::snap_to_triangle_with(
        to_vec2(a),
        to_vec2(b),
        to_vec2(c),
        to_vec2(position),
        cfg,
    )))
}

/// Random unit triangle; reproducible when `seed` is given.
#[pyfunction]
#[pyo3(signature = (seed = None, index = 0))]
pub fn random_unit_triangle(seed: Option<u64>, index: u64) -> (Pt, Pt, Pt) {
    let t = match seed {
        Some(seed) => geo::draw_unit_triangle_replay(TriangleReplay { seed, index }),
        None => geo::random_unit_triangle(),
    };
    (from_vec2(t.a), from_vec2(t.b), from_vec2(t.c))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(lerp, m)?)?;
    m.add_function(wrap_pyfunction!(linear_position, m)?)?;
    m.add_function(wrap_pyfunction!(planar_position, m)?)?;
    m.add_function(wrap_pyfunction!(is_inside_triangle, m)?)?;
    m.add_function(wrap_pyfunction!(snap_to_triangle, m)?)?;
    m.add_function(wrap_pyfunction!(random_unit_triangle, m)?)?;
    Ok(())
}
