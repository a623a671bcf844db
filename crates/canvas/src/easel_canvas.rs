//! # Canvas lifecycle and pointer tracking for Easel
//!
//! This crate holds everything that touches a drawing surface: the
//! [`Surface`] trait that abstracts the host's 2D context, the
//! [`Canvas`] wrapper that manages sizing, clearing, and cursor state,
//! shape-drawing helpers, and the [`PointerTracker`] velocity estimator.
//!
//! No platform backend ships here. Hosts implement [`Surface`] over
//! whatever 2D context they have; tests use a recording stub.

pub mod canvas;
pub mod draw;
pub mod pointer;
pub mod surface;

pub use canvas::Canvas;
pub use pointer::PointerTracker;
pub use surface::{Cursor, Surface};
