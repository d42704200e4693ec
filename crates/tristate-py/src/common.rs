use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tristate::api::EdgeTest;

pub type Pt = (f64, f64);

#[inline]
pub fn to_vec2(p: Pt) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

#[inline]
pub fn from_vec2(v: Vector2<f64>) -> Pt {
    (v.x, v.y)
}

/// `"exact"` (default) or `"axis_sign"`.
pub fn parse_edge_test(name: Option<&str>) -> PyResult<EdgeTest> {
    match name.unwrap_or("exact") {
        "exact" => Ok(EdgeTest::Exact),
        "axis_sign" => Ok(EdgeTest::AxisSign),
        other => Err(PyValueError::new_err(format!(
            "unknown edge test {other:?}; expected \"exact\" or \"axis_sign\""
        ))),
    }
}
