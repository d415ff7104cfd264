// SPDX-License-Identifier: MIT

//! RGB and RGBA colors.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::convert::round1;
use crate::error::{ColorError, Result};
use crate::parse::{parse_color, parse_opaque};
use crate::value::{Color, ColorKind, ColorValue};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit RGB color. Text form: `rgb(r, g, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// The channels as a tuple.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }
}

impl ColorValue for Rgb {
    fn kind(&self) -> ColorKind {
        ColorKind::Rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn from_color(color: Color) -> Self {
        color.to_rgb()
    }

    fn red(&self) -> u8 {
        self.red
    }

    fn green(&self) -> u8 {
        self.green
    }

    fn blue(&self) -> u8 {
        self.blue
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_opaque(s).map(|c| c.to_rgb())
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

// ─── Rgba ────────────────────────────────────────────────────────────────────

/// An 8-bit RGB color with an alpha channel in `[0, 1]`.
///
/// Text form: `rgba(r, g, b, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    rgb: Rgb,
    alpha: f64,
}

impl Rgba {
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Result<Self> {
        Self::from_rgb(Rgb::new(red, green, blue), alpha)
    }

    /// Attach an alpha channel to an RGB color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    pub fn from_rgb(rgb: Rgb, alpha: f64) -> Result<Self> {
        let alpha = ColorError::check_range("alpha", alpha, 0.0, 1.0)?;
        Ok(Self { rgb, alpha })
    }

    /// Caller guarantees `alpha` is already in range.
    pub(crate) const fn from_parts(rgb: Rgb, alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// Random channels; alpha is drawn in `[0, 1]` at one decimal.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let rgb = Rgb::random_with(rng);
        Self::from_parts(rgb, round1(rng.random::<f64>()))
    }

    /// A copy with a different alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Self::from_rgb(self.rgb, alpha)
    }
}

impl ColorValue for Rgba {
    fn kind(&self) -> ColorKind {
        ColorKind::Rgba
    }

    fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    fn from_color(color: Color) -> Self {
        color.to_rgba()
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_rgba(&self) -> Rgba {
        *self
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb.channels();
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s).map(|c| c.to_rgba())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::hex::Hex;
    use crate::hsl::Hsl;

    // ── Rgb ─────────────────────────────────────────────────────────

    #[test]
    fn rgb_channels() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (10, 20, 30));
        assert_eq!(rgb.channels(), (10, 20, 30));
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(10, 20, 30).to_string(), "rgb(10, 20, 30)");
    }

    #[test]
    fn rgb_from_string() {
        assert_eq!("rgb(10, 20, 30)".parse::<Rgb>().unwrap(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn rgb_from_rgba_string_drops_alpha() {
        let rgb: Rgb = "rgba(100, 200, 150, 0.5)".parse().unwrap();
        assert_eq!(rgb.to_string(), "rgb(100, 200, 150)");
    }

    #[test]
    fn rgb_ignores_an_out_of_range_alpha() {
        let rgb: Rgb = "rgba(1, 2, 3, 5)".parse().unwrap();
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        assert!("rgba(1, 2, 3, 5)".parse::<Rgba>().is_err());
    }

    #[test]
    fn rgb_to_hex_pads() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), Hex::new(0x00, 0x0a, 0xff));
        assert_eq!(Rgb::new(0, 10, 255).to_hex().to_string(), "#000aff");
    }

    #[test]
    fn rgb_black_to_hsl() {
        let hsl = Rgb::new(0, 0, 0).to_hsl();
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 0.0).unwrap());
    }

    #[test]
    fn rgb_to_hsl_to_rgb() {
        let rgb = Rgb::new(70, 195, 135);
        assert_eq!(rgb.to_hsl().to_rgb(), rgb);
    }

    #[test]
    fn rgb_to_rgb_is_identity() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb.to_rgb(), rgb);
    }

    // ── Rgba ────────────────────────────────────────────────────────

    #[test]
    fn rgba_validates_alpha() {
        assert!(Rgba::new(0, 0, 0, 0.0).is_ok());
        assert!(Rgba::new(0, 0, 0, 1.0).is_ok());
        assert!(matches!(
            Rgba::new(0, 0, 0, 1.5),
            Err(ColorError::OutOfRange { field: "alpha", .. })
        ));
        assert!(Rgba::new(0, 0, 0, -0.1).is_err());
    }

    #[test]
    fn rgba_display_and_parse() {
        let rgba = Rgba::new(100, 200, 150, 0.5).unwrap();
        assert_eq!(rgba.to_string(), "rgba(100, 200, 150, 0.5)");
        assert_eq!(rgba.to_string().parse::<Rgba>().unwrap(), rgba);
    }

    #[test]
    fn rgba_from_rgb_string_is_opaque() {
        let rgba: Rgba = "rgb(1, 2, 3)".parse().unwrap();
        assert!((rgba.alpha() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rgba_from_hex_with_alpha() {
        let rgba: Rgba = "#ffffff80".parse().unwrap();
        assert_eq!(rgba.to_rgb(), Rgb::new(255, 255, 255));
        assert!((rgba.alpha() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rgba_to_rgb_keeps_channel_order() {
        let rgba = Rgba::new(10, 20, 30, 0.3).unwrap();
        assert_eq!(rgba.to_rgb(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn rgba_to_hsla_keeps_alpha_and_channel_order() {
        let rgba = Rgba::new(112, 58, 38, 0.3).unwrap();
        let hsla = rgba.to_hsla();
        assert!((hsla.hue() - 16.2).abs() < 1e-9);
        assert!((hsla.saturation() - 49.3).abs() < 1e-9);
        assert!((hsla.lightness() - 29.4).abs() < 1e-9);
        assert!((hsla.alpha() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn rgba_with_alpha() {
        let rgba = Rgba::new(1, 2, 3, 0.3).unwrap();
        let other = rgba.with_alpha(0.9).unwrap();
        assert!((other.alpha() - 0.9).abs() < f64::EPSILON);
        assert!((rgba.alpha() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn rgba_random_alpha_is_one_decimal() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let rgba = Rgba::random_with(&mut rng);
            let a = rgba.alpha();
            assert!((0.0..=1.0).contains(&a));
            assert!(((a * 10.0).round() - a * 10.0).abs() < 1e-9);
        }
    }
}
