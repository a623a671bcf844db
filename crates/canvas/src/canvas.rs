//! # Canvas lifecycle wrapper
//!
//! [`Canvas`] owns a [`Surface`] and tracks the extent the host gave it.
//! It handles the chores that surround per-frame drawing: sizing,
//! clearing, cursor visibility, a frame-rate estimate, and multiline
//! text layout. Everything else is drawn by the caller directly against
//! the surface.

use crate::surface::{Cursor, Surface};
use anyhow::{bail, Result};
use glam::Vec2;
use log::{debug, trace};

/// Line spacing used by `draw_multiline` when the caller passes a
/// non-positive spacing.
const DEFAULT_LINE_SPACING: f32 = 10.0;

/// A sized drawing canvas over a host surface.
pub struct Canvas<S: Surface> {
    surface: S,
    width: f32,
    height: f32,
    historic_time: Option<f64>,
}

impl<S: Surface> Canvas<S> {
    /// Creates a canvas over `surface` with the given extent.
    ///
    /// Dimensions must be finite numbers; this is the one sizing input
    /// the wrapper refuses. Zero or negative extents are accepted as-is,
    /// like every other degenerate geometry input in this library.
    pub fn new(surface: S, width: f32, height: f32) -> Result<Self> {
        check_extent(width, height)?;
        Ok(Self {
            surface,
            width,
            height,
            historic_time: None,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Sets the canvas extent.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        check_extent(width, height)?;
        self.width = width;
        self.height = height;
        debug!("canvas resized to {width}x{height}");
        Ok(())
    }

    /// Resizes to a host-measured extent (window or parent element size).
    pub fn fit(&mut self, extent: Vec2) -> Result<()> {
        self.resize(extent.x, extent.y)
    }

    /// Clears the full canvas extent.
    pub fn clear(&mut self) {
        trace!("canvas cleared");
        self.surface.clear_rect(0.0, 0.0, self.width, self.height);
    }

    /// Hides the pointer over the canvas.
    pub fn hide_pointer(&mut self) {
        self.surface.set_cursor(Cursor::None);
    }

    /// Restores the host's normal pointer.
    pub fn show_pointer(&mut self) {
        self.surface.set_cursor(Cursor::Default);
    }

    /// Returns an approximation of frames per second from successive
    /// timestamps in milliseconds.
    ///
    /// The first call, and any call with a non-increasing timestamp,
    /// reports 0.
    pub fn fps(&mut self, timestamp_ms: f64) -> u32 {
        let dt = self.historic_time.map(|t| timestamp_ms - t);
        self.historic_time = Some(timestamp_ms);
        match dt {
            Some(dt) if dt > 0.0 && dt.is_finite() => (1000.0 / dt).floor() as u32,
            _ => 0,
        }
    }

    /// Draws each line of text below the previous one, starting at
    /// `(x, y)` and stepping `spacing` pixels per line. Non-positive
    /// spacing falls back to 10 pixels.
    pub fn draw_multiline(&mut self, lines: &[&str], x: f32, y: f32, spacing: f32) {
        let spacing = if spacing > 0.0 {
            spacing
        } else {
            DEFAULT_LINE_SPACING
        };
        for (i, line) in lines.iter().enumerate() {
            self.surface.fill_text(line, x, y + spacing * i as f32);
        }
    }
}

fn check_extent(width: f32, height: f32) -> Result<()> {
    if !width.is_finite() || !height.is_finite() {
        bail!("canvas extent must be finite, got {width}x{height}");
    }
    Ok(())
}
