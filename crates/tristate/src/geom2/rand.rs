//! Random triangles inscribed in the unit square (fixtures for snap/containment tests).
//!
//! Model
//! - Every vertex lies on the boundary of `[0,1]²` and the three vertices touch
//!   all four edges between them.
//! - Pick a shape strategy, apply 0–3 quarter turns about `(0.5, 0.5)`, then
//!   shuffle the vertex order.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG;
//!   `random_unit_triangle` seeds from OS entropy instead.
//!
//! Code cross-refs: `Triangle`, `UnitEdges`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::Triangle;

/// How the vertices are first placed on the square's edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeStrategy {
    /// Two vertices on the left edge, one on the right; two of them are then
    /// pushed to the top and bottom edges.
    TwoOnOneEdge,
    /// One vertex each on left, top and right; the left or right one is then
    /// pushed to the bottom edge.
    ThreeEdges,
}

impl ShapeStrategy {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            ShapeStrategy::TwoOnOneEdge
        } else {
            ShapeStrategy::ThreeEdges
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Quarter turn about the square's center. Boundary coordinates stay exact.
#[inline]
fn rotate90(p: Vector2<f64>) -> Vector2<f64> {
    let q = p - Vector2::new(0.5, 0.5);
    Vector2::new(-q.y, q.x) + Vector2::new(0.5, 0.5)
}

/// Draw a unit triangle with a fixed shape strategy.
pub fn draw_unit_triangle_with_shape<R: Rng + ?Sized>(
    rng: &mut R,
    shape: ShapeStrategy,
) -> Triangle {
    let mut v: [Vector2<f64>; 3] = match shape {
        ShapeStrategy::TwoOnOneEdge => {
            let mut v = [
                Vector2::new(0.0, rng.gen::<f64>()),
                Vector2::new(0.0, rng.gen::<f64>()),
                Vector2::new(1.0, rng.gen::<f64>()),
            ];
            // any two out of three == drop one
            let skip = rng.gen_range(0..3usize);
            let mut pair = [0usize; 2];
            for (slot, k) in pair.iter_mut().zip((0..3).filter(|&k| k != skip)) {
                *slot = k;
            }
            if rng.gen_bool(0.5) {
                pair.swap(0, 1);
            }
            v[pair[0]].y = 0.0;
            v[pair[1]].y = 1.0;
            v
        }
        ShapeStrategy::ThreeEdges => {
            let mut v = [
                Vector2::new(0.0, rng.gen::<f64>()),
                Vector2::new(rng.gen::<f64>(), 0.0),
                Vector2::new(1.0, rng.gen::<f64>()),
            ];
            let side = if rng.gen_bool(0.5) { 0 } else { 2 };
            v[side].y = 1.0;
            v
        }
    };
    let turns = rng.gen_range(0..4u32);
    for _ in 0..turns {
        for p in v.iter_mut() {
            *p = rotate90(*p);
        }
    }
    v.shuffle(rng);
    Triangle::from_array(v)
}

/// Draw a unit triangle; the shape strategy is picked uniformly.
pub fn draw_unit_triangle<R: Rng + ?Sized>(rng: &mut R) -> Triangle {
    let shape = ShapeStrategy::sample(rng);
    draw_unit_triangle_with_shape(rng, shape)
}

/// Reproducible draw: the same token always yields the same triangle.
pub fn draw_unit_triangle_replay(tok: ReplayToken) -> Triangle {
    let mut rng = tok.to_std_rng();
    draw_unit_triangle(&mut rng)
}

/// Non-reproducible draw from a freshly entropy-seeded RNG.
pub fn random_unit_triangle() -> Triangle {
    let mut rng = StdRng::from_entropy();
    draw_unit_triangle(&mut rng)
}
