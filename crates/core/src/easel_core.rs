//! # Geometry and value types for Easel
//!
//! This crate provides the platform-free core of the Easel canvas helpers:
//! a 2D vector, numeric and random-sampling helpers, simple region tests
//! (rectangle, circle), and an HSLA color value object.
//!
//! Nothing in this crate touches a drawing surface; everything is a plain
//! owned value that can be tested without a host environment.

pub mod color;
pub mod math;
pub mod shapes;
pub mod vector;

pub use color::Color;
pub use shapes::{Circle, Rectangle};
pub use vector::{Heading, Vector};
