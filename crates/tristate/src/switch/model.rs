//! Toggle state machine: position, check state, corners and pointer drags.
//!
//! The handle position lives in normalized indicator coordinates and is kept
//! inside the corner triangle by `geom2::snap_to_triangle_with`. Pointer input
//! arrives in item-local pixels and is mapped through the indicator rectangle.

use nalgebra::Vector2;
use std::fmt;
use tracing::{debug, trace};

use super::types::{CheckState, CornersError, IndicatorRect, SwitchCfg, SwitchEvent};
use crate::geom2::{clamp_unit, on_unit_boundary, snap_to_triangle_with, UnitEdges};

/// Callback deciding the state after a click (receives the current state).
pub type NextCheckStateFn = Box<dyn Fn(CheckState) -> CheckState + Send + Sync>;

fn default_corners() -> [Vector2<f64>; 3] {
    [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
    ]
}

#[inline]
fn fuzzy_eq(a: Vector2<f64>, b: Vector2<f64>, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

#[inline]
fn in_unit_square(p: Vector2<f64>) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}

/// Headless three-state toggle.
pub struct TriStateSwitch {
    cfg: SwitchCfg,
    corners: [Vector2<f64>; 3], // indexed by CheckState::index
    position: Vector2<f64>,
    check_state: CheckState,
    mirrored: bool,
    indicator: Option<IndicatorRect>,
    press_point: Option<Vector2<f64>>,
    grabbed: bool,
    next_check_state_fn: Option<NextCheckStateFn>,
    events: Vec<SwitchEvent>, // pending, one per kind
}

impl Default for TriStateSwitch {
    fn default() -> Self {
        Self::with_cfg(SwitchCfg::default())
    }
}

impl fmt::Debug for TriStateSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriStateSwitch")
            .field("corners", &self.corners)
            .field("position", &self.position)
            .field("check_state", &self.check_state)
            .field("mirrored", &self.mirrored)
            .field("grabbed", &self.grabbed)
            .finish_non_exhaustive()
    }
}

impl TriStateSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: SwitchCfg) -> Self {
        Self {
            cfg,
            corners: default_corners(),
            position: Vector2::zeros(),
            check_state: CheckState::Unchecked,
            mirrored: false,
            indicator: None,
            press_point: None,
            grabbed: false,
            next_check_state_fn: None,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &SwitchCfg {
        &self.cfg
    }

    /// Corners in state order: unchecked, partially checked, checked.
    #[inline]
    pub fn corners(&self) -> [Vector2<f64>; 3] {
        self.corners
    }

    #[inline]
    pub fn corner(&self, state: CheckState) -> Vector2<f64> {
        self.corners[state.index()]
    }

    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    /// Position as drawn: x is flipped when mirrored.
    pub fn visual_position(&self) -> Vector2<f64> {
        if self.mirrored {
            Vector2::new(1.0 - self.position.x, self.position.y)
        } else {
            self.position
        }
    }

    #[inline]
    pub fn check_state(&self) -> CheckState {
        self.check_state
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.check_state == CheckState::Checked
    }

    #[inline]
    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press_point.is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.grabbed
    }

    /// Drain queued change notifications in order of first emission.
    ///
    /// Notifications of a kind already pending are coalesced, so callers that
    /// drain rarely see each kind once and read the current values.
    pub fn take_events(&mut self) -> Vec<SwitchEvent> {
        std::mem::take(&mut self.events)
    }

    fn notify(&mut self, event: SwitchEvent) {
        if !self.events.contains(&event) {
            self.events.push(event);
        }
    }

    pub fn set_indicator(&mut self, indicator: Option<IndicatorRect>) {
        self.indicator = indicator;
    }

    pub fn set_mirrored(&mut self, mirrored: bool) {
        if self.mirrored == mirrored {
            return;
        }
        self.mirrored = mirrored;
        self.notify(SwitchEvent::VisualPositionChanged);
    }

    pub fn set_next_check_state(&mut self, f: Option<NextCheckStateFn>) {
        self.next_check_state_fn = f;
        self.notify(SwitchEvent::NextCheckStateChanged);
    }

    /// Move the handle: snap onto the corner triangle, clamp into `[0,1]²`.
    pub fn set_position(&mut self, position: Vector2<f64>) {
        let [a, b, c] = self.corners;
        let snapped = snap_to_triangle_with(a, b, c, position, self.cfg.snap);
        let clamped = Vector2::new(clamp_unit(snapped.x), clamp_unit(snapped.y));
        if fuzzy_eq(self.position, clamped, self.cfg.fuzzy_eps) {
            return;
        }
        self.position = clamped;
        self.notify(SwitchEvent::PositionChanged);
        self.notify(SwitchEvent::VisualPositionChanged);
    }

    pub fn set_check_state(&mut self, state: CheckState) {
        if self.check_state == state {
            return;
        }
        let was_checked = self.is_checked();
        trace!(from = %self.check_state, to = %state, "check state");
        self.check_state = state;
        self.notify(SwitchEvent::CheckStateChanged);
        if self.is_checked() != was_checked {
            self.notify(SwitchEvent::CheckedChanged);
        }
        self.set_position(self.corner(state));
    }

    /// Two-state entry point: `true` → checked, `false` → unchecked.
    pub fn set_checked(&mut self, checked: bool) {
        if self.is_checked() == checked {
            return;
        }
        self.set_check_state(if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        });
    }

    /// Nearest corner to `position`; ties go to unchecked, then partially checked.
    pub fn position_to_check_state(&self, position: Vector2<f64>) -> (CheckState, Vector2<f64>) {
        let [u, p, c] = self.corners.map(|corner| (position - corner).norm());
        let state = if u <= p && u <= c {
            CheckState::Unchecked
        } else if p <= c {
            CheckState::PartiallyChecked
        } else {
            CheckState::Checked
        };
        (state, self.corner(state))
    }

    /// Advance after a click. During a drag the nearest corner wins and the
    /// handle is forced onto it; otherwise the callback (if any) or the cyclic
    /// successor decides.
    pub fn next_check_state(&mut self) {
        if self.grabbed {
            let (state, corner) = self.position_to_check_state(self.position);
            self.set_check_state(state);
            // The state may be unchanged; still settle the handle on the corner.
            self.set_position(corner);
            return;
        }
        let next = match &self.next_check_state_fn {
            Some(f) => f(self.check_state),
            None => self.check_state.next(),
        };
        self.set_check_state(next);
    }

    /// Replace the corners. Each must lie on the unit square boundary, all
    /// three must be distinct, and together they must touch all four edges.
    /// On rejection nothing changes.
    pub fn set_corners(&mut self, corners: &[Vector2<f64>]) -> Result<(), CornersError> {
        let checked = self.validate_corners(corners);
        let new = match checked {
            Ok(new) => new,
            Err(err) => {
                debug!(error = %err, ?corners, "rejected corners");
                return Err(err);
            }
        };
        self.corners = new;
        self.set_position(self.corner(self.check_state));
        self.notify(SwitchEvent::CornersChanged);
        Ok(())
    }

    fn validate_corners(&self, corners: &[Vector2<f64>]) -> Result<[Vector2<f64>; 3], CornersError> {
        let new: [Vector2<f64>; 3] = corners
            .try_into()
            .map_err(|_| CornersError::WrongCount { got: corners.len() })?;
        for (first, second) in [(0, 1), (1, 2), (2, 0)] {
            if fuzzy_eq(new[first], new[second], self.cfg.fuzzy_eps) {
                return Err(CornersError::Coincident { first, second });
            }
        }
        if let Some(&corner) = new.iter().find(|&&p| !on_unit_boundary(p)) {
            return Err(CornersError::OffBoundary { corner });
        }
        if !UnitEdges::of(&new).covers_all() {
            return Err(CornersError::EdgesUncovered);
        }
        Ok(new)
    }

    /// Map an item-local pixel point into normalized indicator coordinates.
    pub fn position_at(&self, point: Vector2<f64>) -> Vector2<f64> {
        let pos = match self.indicator {
            Some(r) => Vector2::new((point.x - r.x) / r.width, (point.y - r.y) / r.height),
            None => Vector2::zeros(),
        };
        if self.mirrored {
            Vector2::new(1.0 - pos.x, pos.y)
        } else {
            pos
        }
    }

    /// A drag may start only if the press or the current point is over the indicator.
    pub fn can_drag(&self, point: Vector2<f64>) -> bool {
        let pressed_inside = self
            .press_point
            .is_some_and(|press| in_unit_square(self.position_at(press)));
        pressed_inside || in_unit_square(self.position_at(point))
    }

    pub fn press(&mut self, point: Vector2<f64>) {
        self.press_point = Some(point);
        self.grabbed = false;
    }

    /// Pointer motion while pressed. Starts a drag past the threshold, then
    /// follows the pointer.
    pub fn move_to(&mut self, point: Vector2<f64>) {
        let Some(press) = self.press_point else {
            return;
        };
        if !self.grabbed && self.can_drag(point) {
            let d = point - press;
            self.grabbed =
                d.x.abs() > self.cfg.drag_threshold || d.y.abs() > self.cfg.drag_threshold;
            if self.grabbed {
                trace!(x = point.x, y = point.y, "drag started");
            }
        }
        if self.grabbed {
            self.set_position(self.position_at(point));
        }
    }

    /// Pointer release: counts as a click, then drops any drag grab.
    pub fn release(&mut self) {
        if self.press_point.take().is_none() {
            return;
        }
        self.next_check_state();
        self.grabbed = false;
    }

    /// Abort the press without a click.
    pub fn cancel(&mut self) {
        self.press_point = None;
        self.grabbed = false;
    }
}
