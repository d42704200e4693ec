//! Replay a straight-line drag across the indicator and print the handle path.
//!
//! Usage:
//!   cargo run -p tristate --example drag_trace
//!   cargo run -p tristate --example drag_trace -- 17
//!
//! The optional argument is a replay seed; the corners come from a random unit
//! triangle so the snapping is exercised on a non-default shape.

use nalgebra::Vector2;
use tristate::geom2::rand::{draw_unit_triangle_replay, ReplayToken};
use tristate::switch::{IndicatorRect, TriStateSwitch};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let tri = draw_unit_triangle_replay(ReplayToken { seed, index: 0 });
    let mut sw = TriStateSwitch::new();
    sw.set_indicator(Some(IndicatorRect::new(0.0, 0.0, 200.0, 200.0)));
    if let Err(err) = sw.set_corners(&tri.vertices()) {
        eprintln!("corners rejected: {err}");
        return;
    }
    println!("corners: {:?}", sw.corners());
    let from = Vector2::new(-20.0, 100.0);
    let to = Vector2::new(220.0, 60.0);
    sw.press(from);
    for k in 0..=12 {
        let t = k as f64 / 12.0;
        sw.move_to(from + (to - from) * t);
        let p = sw.position();
        println!("t={t:.2} handle=({:.3}, {:.3}) dragging={}", p.x, p.y, sw.is_dragging());
    }
    sw.release();
    let p = sw.position();
    println!("released: state={} handle=({:.3}, {:.3})", sw.check_state(), p.x, p.y);
}
