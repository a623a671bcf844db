//! Shape drawing helpers.
//!
//! The geometry types in `easel_core` know nothing about surfaces; these
//! free functions bridge them to a [`Surface`]. Each helper sets the
//! style it needs and issues the matching stroke or fill call.

use crate::surface::Surface;
use easel_core::{Circle, Color, Rectangle};

/// Strokes a rectangle outline.
pub fn outline_rect(surface: &mut impl Surface, rect: &Rectangle, line_width: f32, color: Color) {
    surface.set_stroke_color(color);
    surface.set_line_width(line_width);
    surface.stroke_rect(rect.x, rect.y, rect.w, rect.h);
}

/// Fills a rectangle.
pub fn fill_rect(surface: &mut impl Surface, rect: &Rectangle, color: Color) {
    surface.set_fill_color(color);
    surface.fill_rect(rect.x, rect.y, rect.w, rect.h);
}

/// Strokes a circle outline.
pub fn outline_circle(surface: &mut impl Surface, circle: &Circle, color: Color) {
    surface.set_stroke_color(color);
    surface.stroke_circle(circle.x, circle.y, circle.radius);
}
