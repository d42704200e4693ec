//! Headless model of the three-state toggle.
//!
//! Purpose
//! - Hold the toggle's handle position, check state and corner triangle, and
//!   turn pointer input into state changes using `geom2`.
//! - Report property changes as queued `SwitchEvent`s instead of callbacks, so
//!   any UI layer can forward them.
//!
//! Code cross-refs: `geom2::{snap_to_triangle_with, UnitEdges}`

mod model;
mod types;

pub use model::{NextCheckStateFn, TriStateSwitch};
pub use types::{CheckState, CornersError, IndicatorRect, SwitchCfg, SwitchEvent};

#[cfg(test)]
mod tests;
