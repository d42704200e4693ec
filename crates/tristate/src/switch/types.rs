//! Value types for the toggle model: states, events, config and errors.

use nalgebra::Vector2;
use std::fmt;

use crate::geom2::SnapCfg;

/// Discrete state of the toggle, one per triangle corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CheckState {
    #[default]
    Unchecked,
    PartiallyChecked,
    Checked,
}

impl CheckState {
    pub const ALL: [CheckState; 3] = [
        CheckState::Unchecked,
        CheckState::PartiallyChecked,
        CheckState::Checked,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            CheckState::Unchecked => 0,
            CheckState::PartiallyChecked => 1,
            CheckState::Checked => 2,
        }
    }

    /// Cyclic successor: unchecked → partially → checked → unchecked.
    #[inline]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 3]
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckState::Unchecked => "unchecked",
            CheckState::PartiallyChecked => "partially-checked",
            CheckState::Checked => "checked",
        };
        f.write_str(s)
    }
}

/// Property change notifications, queued until `take_events`.
///
/// A kind already pending is not queued again, so an undrained queue holds at
/// most one entry per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchEvent {
    PositionChanged,
    VisualPositionChanged,
    CheckStateChanged,
    CheckedChanged,
    CornersChanged,
    NextCheckStateChanged,
}

/// Indicator rectangle in item-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl IndicatorRect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Per-component tolerance for "same point" checks on positions and corners.
pub(crate) const FUZZY_EPS: f64 = 1e-12;
/// Pointer travel in pixels, per axis, before a press turns into a drag.
pub(crate) const DRAG_THRESHOLD: f64 = 10.0;

/// Toggle configuration.
#[derive(Clone, Copy, Debug)]
pub struct SwitchCfg {
    /// Per-component tolerance for "same point" checks.
    pub fuzzy_eps: f64,
    /// Pointer travel (pixels, per axis) before a press turns into a drag.
    pub drag_threshold: f64,
    pub snap: SnapCfg,
}

impl Default for SwitchCfg {
    fn default() -> Self {
        Self {
            fuzzy_eps: FUZZY_EPS,
            drag_threshold: DRAG_THRESHOLD,
            snap: SnapCfg::default(),
        }
    }
}

/// Reasons a corner configuration is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum CornersError {
    WrongCount { got: usize },
    Coincident { first: usize, second: usize },
    OffBoundary { corner: Vector2<f64> },
    EdgesUncovered,
}

impl fmt::Display for CornersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCount { got } => write!(f, "expected 3 corners, got {got}"),
            Self::Coincident { first, second } => {
                write!(f, "corners {first} and {second} coincide")
            }
            Self::OffBoundary { corner } => write!(
                f,
                "corner ({}, {}) is not on the unit square boundary",
                corner.x, corner.y
            ),
            Self::EdgesUncovered => {
                write!(f, "corners must touch all four edges of the unit square")
            }
        }
    }
}

impl std::error::Error for CornersError {}
