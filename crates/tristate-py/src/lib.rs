//! PyO3 bindings for the `tristate` geometry functions.
//!
//! Notes
//! - Keep bindings thin: points cross the boundary as `(x, y)` tuples and all
//!   logic stays in the Rust crate.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn tristate_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    m.add("__version__", tristate::VERSION)?;
    Ok(())
}
