//! # HSLA color value object
//!
//! A plain channel holder with no clamping, blending, or RGB conversion.
//! Channels follow CSS conventions: `h` in [0,360), `s` and `l` in
//! [0,100], `a` in [0,1] — expected but never enforced. Out-of-range
//! values pass straight through to whatever consumes the rendered string.

use crate::math;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSLA color.
///
/// The default is opaque black. `Display` renders the CSS `hsla(...)`
/// form; [`Color::parse`] reads it back.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Color {
    /// Creates a color from its channels.
    pub fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn hue(&self) -> f32 {
        self.h
    }

    pub fn saturation(&self) -> f32 {
        self.s
    }

    pub fn lightness(&self) -> f32 {
        self.l
    }

    pub fn alpha(&self) -> f32 {
        self.a
    }

    /// Set hue, 0-360 degrees.
    pub fn set_hue(&mut self, h: f32) {
        self.h = h;
    }

    /// Set saturation, 0-100%.
    pub fn set_saturation(&mut self, s: f32) {
        self.s = s;
    }

    /// Set lightness, 0-100%.
    pub fn set_lightness(&mut self, l: f32) {
        self.l = l;
    }

    /// Set alpha, 0.0-1.0.
    pub fn set_alpha(&mut self, a: f32) {
        self.a = a;
    }

    /// Randomizes all channels, including alpha.
    ///
    /// Channels are drawn as inclusive integers (`h` in 0..=360, `s` and
    /// `l` in 0..=100) and alpha in thousandths, matching the original
    /// sampling.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> &mut Self {
        self.h = math::random_range(rng, 0, 360) as f32;
        self.s = math::random_range(rng, 0, 100) as f32;
        self.l = math::random_range(rng, 0, 100) as f32;
        self.a = math::random_range(rng, 0, 1000) as f32 / 1000.0;
        self
    }

    /// Parses the `hsla(h,s%,l%,a)` string form.
    ///
    /// The `%` suffixes on saturation and lightness are optional. Returns
    /// `None` for anything else; no named colors, no hex, no rgb().
    pub fn parse(value: &str) -> Option<Self> {
        let content = value.trim().strip_prefix("hsla(")?.strip_suffix(')')?;
        let parts: Vec<&str> = content.split(',').collect();
        if parts.len() != 4 {
            return None;
        }

        let h = parts[0].trim().parse::<f32>().ok()?;
        let s = parse_percent(parts[1])?;
        let l = parse_percent(parts[2])?;
        let a = parts[3].trim().parse::<f32>().ok()?;

        Some(Self::new(h, s, l, a))
    }
}

/// Parse a channel which may carry a trailing `%`.
fn parse_percent(value: &str) -> Option<f32> {
    let value = value.trim();
    let digits = value.strip_suffix('%').unwrap_or(value);
    digits.parse::<f32>().ok()
}

impl Default for Color {
    /// Opaque black, matching the original constructor's fallback.
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({},{}%,{}%,{})", self.h, self.s, self.l, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default().to_string(), "hsla(0,0%,0%,1)");
        assert_eq!(Color::default(), Color::black());
    }

    #[test]
    fn test_display_keeps_fractions() {
        let c = Color::new(210.0, 50.0, 62.5, 0.25);
        assert_eq!(c.to_string(), "hsla(210,50%,62.5%,0.25)");
    }

    #[test]
    fn test_parse_round_trip() {
        let c = Color::new(120.0, 80.0, 40.0, 0.5);
        assert_eq!(Color::parse(&c.to_string()), Some(c));
        assert_eq!(
            Color::parse("hsla(0, 0%, 0%, 1)"),
            Some(Color::black())
        );
        // Percent suffixes are optional
        assert_eq!(
            Color::parse("hsla(10,20,30,1)"),
            Some(Color::new(10.0, 20.0, 30.0, 1.0))
        );
    }

    #[test]
    fn test_parse_rejects_other_forms() {
        assert_eq!(Color::parse("#ff0000"), None);
        assert_eq!(Color::parse("rgb(1,2,3)"), None);
        assert_eq!(Color::parse("hsla(1,2%,3%)"), None);
    }

    #[test]
    fn test_out_of_range_channels_pass_through() {
        let c = Color::new(720.0, 150.0, -5.0, 2.0);
        assert_eq!(c.to_string(), "hsla(720,150%,-5%,2)");
    }

    #[test]
    fn test_randomize_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = Color::black();
        for _ in 0..200 {
            c.randomize(&mut rng);
            assert!((0.0..=360.0).contains(&c.h));
            assert!((0.0..=100.0).contains(&c.s));
            assert!((0.0..=100.0).contains(&c.l));
            assert!((0.0..=1.0).contains(&c.a));
        }
    }

    #[test]
    fn test_setters() {
        let mut c = Color::black();
        c.set_hue(15.0);
        c.set_saturation(30.0);
        c.set_lightness(45.0);
        c.set_alpha(0.75);
        assert_eq!(c, Color::new(15.0, 30.0, 45.0, 0.75));
    }
}
