//! # Simple region tests
//!
//! Axis-aligned rectangle and circle value types with point-containment
//! tests. Both are permissive about their inputs: a rectangle with
//! negative extents or a circle with a negative radius is accepted as-is
//! and simply contains nothing sensible.
//!
//! Containment is strict on both shapes: points exactly on the boundary
//! are outside.

use crate::math;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a top-left origin.
///
/// `is_inside` assumes positive extents; the signs of `w` and `h` are not
/// validated.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rectangle {
    /// Creates a rectangle from its top-left corner and extents.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Tests if a point is strictly inside the rectangle.
    ///
    /// Points on the boundary are excluded.
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.x + self.w && y > self.y && y < self.y + self.h
    }

    /// Returns the center point of the rectangle.
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// A circle described by its center and radius.
///
/// `radius >= 0` is expected but not enforced; a negative radius contains
/// no points.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    /// Creates a circle from its center and radius.
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Tests if a point is strictly inside the circle.
    ///
    /// A point at exactly `radius` from the center is excluded.
    pub fn is_inside(&self, x: f32, y: f32) -> bool {
        math::distance(self.x, self.y, x, y) < self.radius
    }

    /// Returns the center point of the circle.
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
