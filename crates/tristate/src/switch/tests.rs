use super::*;
use nalgebra::{vector, Vector2};

fn close(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a - b).norm() < 1e-12
}

fn with_indicator() -> TriStateSwitch {
    let mut sw = TriStateSwitch::new();
    sw.set_indicator(Some(IndicatorRect::new(10.0, 10.0, 100.0, 100.0)));
    sw
}

#[test]
fn defaults() {
    let sw = TriStateSwitch::new();
    assert_eq!(sw.check_state(), CheckState::Unchecked);
    assert_eq!(sw.position(), vector![0.0, 0.0]);
    assert_eq!(
        sw.corners(),
        [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0]]
    );
    assert!(!sw.is_checked());
}

#[test]
fn check_state_cycle_and_display() {
    assert_eq!(CheckState::Unchecked.next(), CheckState::PartiallyChecked);
    assert_eq!(CheckState::PartiallyChecked.next(), CheckState::Checked);
    assert_eq!(CheckState::Checked.next(), CheckState::Unchecked);
    assert_eq!(CheckState::PartiallyChecked.to_string(), "partially-checked");
}

#[test]
fn set_check_state_moves_handle_and_notifies() {
    let mut sw = TriStateSwitch::new();
    sw.set_check_state(CheckState::Checked);
    assert_eq!(sw.position(), vector![1.0, 1.0]);
    assert_eq!(
        sw.take_events(),
        vec![
            SwitchEvent::CheckStateChanged,
            SwitchEvent::CheckedChanged,
            SwitchEvent::PositionChanged,
            SwitchEvent::VisualPositionChanged,
        ]
    );
    sw.set_check_state(CheckState::Checked);
    assert!(sw.take_events().is_empty());
}

#[test]
fn partial_state_does_not_touch_checked_flag() {
    let mut sw = TriStateSwitch::new();
    sw.set_check_state(CheckState::PartiallyChecked);
    let events = sw.take_events();
    assert!(events.contains(&SwitchEvent::CheckStateChanged));
    assert!(!events.contains(&SwitchEvent::CheckedChanged));
    assert_eq!(sw.position(), vector![1.0, 0.0]);
}

#[test]
fn set_checked_maps_to_two_states() {
    let mut sw = TriStateSwitch::new();
    sw.set_check_state(CheckState::PartiallyChecked);
    sw.set_checked(false);
    assert_eq!(sw.check_state(), CheckState::PartiallyChecked);
    sw.set_checked(true);
    assert_eq!(sw.check_state(), CheckState::Checked);
    sw.set_checked(false);
    assert_eq!(sw.check_state(), CheckState::Unchecked);
}

#[test]
fn next_check_state_cycles_without_callback() {
    let mut sw = TriStateSwitch::new();
    let mut seen = Vec::new();
    for _ in 0..3 {
        sw.next_check_state();
        seen.push(sw.check_state());
    }
    assert_eq!(
        seen,
        vec![
            CheckState::PartiallyChecked,
            CheckState::Checked,
            CheckState::Unchecked
        ]
    );
}

#[test]
fn next_check_state_uses_callback() {
    let mut sw = TriStateSwitch::new();
    sw.set_next_check_state(Some(Box::new(|s| match s {
        CheckState::Unchecked => CheckState::Checked,
        _ => CheckState::Unchecked,
    })));
    assert_eq!(sw.take_events(), vec![SwitchEvent::NextCheckStateChanged]);
    sw.next_check_state();
    assert_eq!(sw.check_state(), CheckState::Checked);
    sw.next_check_state();
    assert_eq!(sw.check_state(), CheckState::Unchecked);
}

#[test]
fn set_position_snaps_into_triangle() {
    let mut sw = TriStateSwitch::new();
    sw.set_position(vector![0.2, 0.6]);
    assert!(close(sw.position(), vector![0.4, 0.4]));
    sw.take_events();
    // Far outside the unit square: nearest corner, then clamped.
    sw.set_position(vector![5.0, 5.0]);
    assert_eq!(sw.position(), vector![1.0, 1.0]);
    sw.take_events();
    sw.set_position(vector![1.0, 1.0]);
    assert!(sw.take_events().is_empty());
}

#[test]
fn position_to_check_state_prefers_earlier_corner_on_tie() {
    let sw = TriStateSwitch::new();
    assert_eq!(
        sw.position_to_check_state(vector![0.5, 0.0]),
        (CheckState::Unchecked, vector![0.0, 0.0])
    );
    assert_eq!(
        sw.position_to_check_state(vector![0.9, 0.1]).0,
        CheckState::PartiallyChecked
    );
    assert_eq!(
        sw.position_to_check_state(vector![0.6, 0.6]).0,
        CheckState::Checked
    );
}

#[test]
fn rejected_corners_leave_state_untouched() {
    let mut sw = TriStateSwitch::new();
    let before = sw.corners();
    assert_eq!(
        sw.set_corners(&[vector![0.0, 0.0], vector![1.0, 1.0]]),
        Err(CornersError::WrongCount { got: 2 })
    );
    assert_eq!(
        sw.set_corners(&[vector![0.0, 0.0], vector![0.0, 0.0], vector![1.0, 1.0]]),
        Err(CornersError::Coincident { first: 0, second: 1 })
    );
    assert_eq!(
        sw.set_corners(&[vector![0.0, 0.0], vector![0.5, 0.5], vector![1.0, 1.0]]),
        Err(CornersError::OffBoundary {
            corner: vector![0.5, 0.5]
        })
    );
    assert_eq!(
        sw.set_corners(&[vector![0.0, 0.0], vector![1.0, 0.0], vector![0.5, 0.0]]),
        Err(CornersError::EdgesUncovered)
    );
    assert_eq!(sw.corners(), before);
    assert!(sw.take_events().is_empty());
}

#[test]
fn accepted_corners_reposition_handle() {
    let mut sw = TriStateSwitch::new();
    let corners = [vector![0.0, 1.0], vector![0.5, 0.0], vector![1.0, 1.0]];
    sw.set_corners(&corners).unwrap();
    assert_eq!(sw.corners(), corners);
    assert_eq!(sw.position(), vector![0.0, 1.0]);
    assert_eq!(
        sw.take_events(),
        vec![
            SwitchEvent::PositionChanged,
            SwitchEvent::VisualPositionChanged,
            SwitchEvent::CornersChanged,
        ]
    );
}

#[test]
fn corners_error_messages() {
    assert_eq!(
        CornersError::WrongCount { got: 4 }.to_string(),
        "expected 3 corners, got 4"
    );
    assert_eq!(
        CornersError::EdgesUncovered.to_string(),
        "corners must touch all four edges of the unit square"
    );
}

#[test]
fn mirroring_flips_visual_x() {
    let mut sw = TriStateSwitch::new();
    sw.set_position(vector![0.75, 0.25]);
    sw.take_events();
    sw.set_mirrored(true);
    assert_eq!(sw.take_events(), vec![SwitchEvent::VisualPositionChanged]);
    assert_eq!(sw.visual_position(), vector![0.25, 0.25]);
    assert_eq!(sw.position(), vector![0.75, 0.25]);
    sw.set_mirrored(true);
    assert!(sw.take_events().is_empty());
}

#[test]
fn position_at_maps_pixels_through_indicator() {
    let mut sw = with_indicator();
    assert_eq!(sw.position_at(vector![60.0, 35.0]), vector![0.5, 0.25]);
    sw.set_mirrored(true);
    assert_eq!(sw.position_at(vector![35.0, 60.0]), vector![0.75, 0.5]);
    sw.set_indicator(None);
    assert_eq!(sw.position_at(vector![35.0, 60.0]), vector![1.0, 0.0]);
}

#[test]
fn drag_settles_on_nearest_corner() {
    let mut sw = with_indicator();
    sw.press(vector![15.0, 15.0]);
    sw.move_to(vector![105.0, 50.0]);
    assert!(sw.is_dragging());
    assert!(close(sw.position(), vector![0.95, 0.4]));
    sw.release();
    assert!(!sw.is_dragging());
    assert!(!sw.is_pressed());
    assert_eq!(sw.check_state(), CheckState::PartiallyChecked);
    assert_eq!(sw.position(), vector![1.0, 0.0]);
}

#[test]
fn drag_back_to_same_state_still_settles_handle() {
    let mut sw = with_indicator();
    sw.press(vector![12.0, 12.0]);
    sw.move_to(vector![40.0, 20.0]);
    assert!(sw.is_dragging());
    assert!(sw.position() != vector![0.0, 0.0]);
    sw.release();
    assert_eq!(sw.check_state(), CheckState::Unchecked);
    assert_eq!(sw.position(), vector![0.0, 0.0]);
}

#[test]
fn small_motion_is_a_click() {
    let mut sw = with_indicator();
    sw.press(vector![15.0, 15.0]);
    sw.move_to(vector![18.0, 20.0]);
    assert!(!sw.is_dragging());
    sw.release();
    assert_eq!(sw.check_state(), CheckState::PartiallyChecked);
}

#[test]
fn drag_outside_indicator_does_not_grab() {
    let mut sw = with_indicator();
    sw.press(vector![200.0, 200.0]);
    assert!(!sw.can_drag(vector![300.0, 300.0]));
    sw.move_to(vector![300.0, 300.0]);
    assert!(!sw.is_dragging());
    assert_eq!(sw.position(), vector![0.0, 0.0]);
    // Reaching the indicator makes the drag possible.
    assert!(sw.can_drag(vector![50.0, 50.0]));
}

#[test]
fn cancel_and_stray_events_are_ignored() {
    let mut sw = with_indicator();
    sw.move_to(vector![80.0, 20.0]);
    sw.release();
    assert_eq!(sw.check_state(), CheckState::Unchecked);
    sw.press(vector![15.0, 15.0]);
    sw.move_to(vector![90.0, 20.0]);
    sw.cancel();
    assert!(!sw.is_pressed());
    assert_eq!(sw.check_state(), CheckState::Unchecked);
}

#[test]
fn default_cfg_uses_crate_tolerances() {
    use super::types::{DRAG_THRESHOLD, FUZZY_EPS};
    let cfg = SwitchCfg::default();
    assert_eq!(cfg.fuzzy_eps, FUZZY_EPS);
    assert_eq!(cfg.drag_threshold, DRAG_THRESHOLD);
    // Motion of exactly the threshold is still a click.
    let mut sw = with_indicator();
    sw.press(vector![15.0, 15.0]);
    sw.move_to(vector![15.0 + DRAG_THRESHOLD, 15.0]);
    assert!(!sw.is_dragging());
}

#[test]
fn undrained_events_stay_bounded() {
    let mut sw = with_indicator();
    for k in 0..500 {
        sw.set_check_state(CheckState::ALL[k % 3]);
        sw.set_mirrored(k % 2 == 0);
        sw.set_position(vector![0.9, (k % 10) as f64 / 20.0]);
    }
    let events = sw.take_events();
    assert_eq!(
        events,
        vec![
            SwitchEvent::VisualPositionChanged,
            SwitchEvent::PositionChanged,
            SwitchEvent::CheckStateChanged,
            SwitchEvent::CheckedChanged,
        ]
    );
    assert!(sw.take_events().is_empty());
    // After a drain the same kinds are reported again.
    sw.set_mirrored(!sw.is_mirrored());
    assert_eq!(sw.take_events(), vec![SwitchEvent::VisualPositionChanged]);
}
