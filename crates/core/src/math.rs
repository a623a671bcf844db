//! # Numeric helpers
//!
//! Stateless free functions for random sampling, distances, and angles.
//! All random helpers take an explicit `Rng` so callers (and tests) can
//! supply a seeded generator.
//!
//! The `atan2` wrappers preserve their historical argument orders exactly;
//! the orders are not symmetric and callers depend on them.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

/// Multiply a radian value by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Multiply a degree value by this to get radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// A full turn in radians.
pub const TWO_PI: f32 = PI * 2.0;

/// Returns an integer drawn uniformly from the range spanned by `a` and `b`,
/// inclusive of both endpoints. The bounds may be given in either order.
///
/// A degenerate range returns its single value: `random_range(rng, 1, 1)`
/// is always `1`.
pub fn random_range(rng: &mut impl Rng, a: i32, b: i32) -> i32 {
    let min = a.min(b);
    let max = a.max(b);
    rng.random_range(min..=max)
}

/// Returns `1` or `-1` with roughly equal probability.
pub fn rand_pos_neg(rng: &mut impl Rng) -> i32 {
    if rng.random::<f32>() > 0.5 {
        1
    } else {
        -1
    }
}

/// Approximates a normal-ish distribution over [0,1] by averaging `samples`
/// uniform draws (central limit theorem). More samples narrow the
/// distribution around 0.5. A `samples` of 0 falls back to 3.
pub fn rand_cl(rng: &mut impl Rng, samples: u32) -> f32 {
    let n = if samples == 0 { 3 } else { samples };
    let mut sum = 0.0;
    for _ in 0..n {
        sum += rng.random::<f32>();
    }
    sum / n as f32
}

/// Box–Muller transform, filtered to [0,1].
///
/// A raw Box–Muller deviate is unbounded; this rejects and redraws until
/// the value lands in [0,1], which skews the distribution. The filtering
/// is kept for compatibility with the behavior callers already rely on.
pub fn rand_bm(rng: &mut impl Rng) -> f32 {
    loop {
        let mut a: f32 = 0.0;
        while a == 0.0 {
            a = rng.random();
        }
        let mut b: f32 = 0.0;
        while b == 0.0 {
            b = rng.random();
        }
        let n = (-2.0 * a.ln()).sqrt() * (TWO_PI * b).cos();
        if (0.0..=1.0).contains(&n) {
            return n;
        }
    }
}

/// Euclidean distance between two coordinate pairs.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x1 - x2).hypot(y1 - y2)
}

/// Euclidean distance between two points.
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Folds the axis deltas together before taking the absolute value.
/// This is not a true Manhattan distance (the deltas can cancel); the
/// historical behavior is preserved as-is.
pub fn manhattan(x: f32, y: f32, x2: f32, y2: f32) -> f32 {
    ((x - x2) + (y - y2)).abs()
}

/// `atan2(y, x)` — the angle of the vector `(x, y)`. Note the y-first
/// argument order.
pub fn vec_to_angle(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// `atan2(y1 - y2, x1 - x2)` — the angle from `(x2, y2)` to `(x1, y1)`.
pub fn angle_to(x1: f32, x2: f32, y1: f32, y2: f32) -> f32 {
    (y1 - y2).atan2(x1 - x2)
}

/// The angle from `b` to `a`, as [`angle_to`] but for points.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    (a.y - b.y).atan2(a.x - b.x)
}
