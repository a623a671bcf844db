//! # Drawing-surface abstraction
//!
//! The [`Surface`] trait is the seam between the geometry core and the
//! host's actual 2D drawing context. It covers the operations the canvas
//! helpers consume: rect and circle strokes/fills, text, and the small
//! set of style properties. Hosts adapt their context behind it; the
//! canvas wrapper and shape helpers stay unit-testable without one.

use easel_core::Color;
use strum_macros::Display;

/// Pointer cursor styles, rendered as CSS cursor names.
#[derive(Default, Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Cursor {
    /// The host's normal arrow cursor
    #[default]
    Default,
    /// Hidden cursor, for canvases that draw their own
    None,
    /// Precision crosshair
    Crosshair,
    /// Hand/pointer cursor for interactive regions
    Pointer,
}

/// A host 2D drawing context.
///
/// Coordinates are in surface pixels with a top-left origin, matching the
/// geometry types in `easel_core`. Style setters are sticky: a color or
/// line width applies to every subsequent operation until changed.
pub trait Surface {
    /// Clears a rectangular region to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Strokes a rectangle outline with the current stroke style.
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Fills a rectangle with the current fill style.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Strokes a full circle with the current stroke style.
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32);

    /// Draws text at a baseline position with the current fill style and
    /// font.
    fn fill_text(&mut self, text: &str, x: f32, y: f32);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_font(&mut self, font: &str);

    /// Sets the pointer cursor shown over the surface.
    fn set_cursor(&mut self, cursor: Cursor);
}
