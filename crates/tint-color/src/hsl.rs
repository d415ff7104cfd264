// SPDX-License-Identifier: MIT

//! HSL and HSLA colors.
//!
//! Hue is in degrees `[0, 360]`, saturation and lightness are percentages
//! `[0, 100]`. Construction validates every channel; values are taken on
//! the percentage scale exactly as given, so `0.5` saturation means half a
//! percent, not fifty.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::convert::{hsl_to_rgb, rgb_to_hsl, round1};
use crate::error::{ColorError, Result};
use crate::parse::{parse_color, parse_hex, parse_opaque};
use crate::rgb::Rgb;
use crate::value::{Color, ColorKind, ColorValue};

/// Lightness at or below which a color counts as dark.
pub const DARKNESS_THRESHOLD: f64 = 15.0;

/// Lightness at or above which a color counts as bright.
pub const BRIGHTNESS_THRESHOLD: f64 = 90.0;

pub const MAX_HUE: f64 = 360.0;
pub const MAX_PERCENT: f64 = 100.0;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in hue/saturation/lightness. Text form: `hsl(h, s%, l%)`.
///
/// ```
/// use tint_color::{ColorValue, Hsl};
///
/// let hsl = Hsl::new(151.0, 51.0, 52.0).unwrap();
/// assert_eq!(hsl.to_hex().to_string(), "#46c387");
/// assert_eq!(hsl.to_string(), "hsl(151, 51%, 52%)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] naming the first channel outside
    /// its range.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Result<Self> {
        Ok(Self {
            hue: ColorError::check_range("hue", hue, 0.0, MAX_HUE)?,
            saturation: ColorError::check_range("saturation", saturation, 0.0, MAX_PERCENT)?,
            lightness: ColorError::check_range("lightness", lightness, 0.0, MAX_PERCENT)?,
        })
    }

    /// Build from 8-bit channels. Output is rounded to one decimal.
    #[must_use]
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        let (hue, saturation, lightness) = rgb_to_hsl(red, green, blue);
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Parse hex notation only.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Parse`] for an invalid hex code.
    pub fn from_hex(s: &str) -> Result<Self> {
        let parts = parse_hex(s)?;
        Ok(Self::from_rgb(parts.red, parts.green, parts.blue))
    }

    /// A random color over the full range, with integer channels.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: f64::from(rng.random_range(0..=360u16)),
            saturation: f64::from(rng.random_range(0..=100u8)),
            lightness: f64::from(rng.random_range(0..=100u8)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.saturation
    }

    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.lightness
    }

    /// The `(red, green, blue)` triple.
    #[must_use]
    pub fn channels(self) -> (u8, u8, u8) {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }

    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `hue` is outside `[0, 360]`.
    pub fn with_hue(self, hue: f64) -> Result<Self> {
        Self::new(hue, self.saturation, self.lightness)
    }

    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `saturation` is outside `[0, 100]`.
    pub fn with_saturation(self, saturation: f64) -> Result<Self> {
        Self::new(self.hue, saturation, self.lightness)
    }

    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `lightness` is outside `[0, 100]`.
    pub fn with_lightness(self, lightness: f64) -> Result<Self> {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Set lightness, clamping into `[0, 100]`.
    #[must_use]
    pub fn with_lightness_clamped(self, lightness: f64) -> Self {
        Self {
            lightness: lightness.clamp(0.0, MAX_PERCENT),
            ..self
        }
    }
}

impl ColorValue for Hsl {
    fn kind(&self) -> ColorKind {
        ColorKind::Hsl
    }

    fn to_rgb(&self) -> Rgb {
        self.channels().into()
    }

    fn from_color(color: Color) -> Self {
        color.to_hsl()
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_opaque(s).map(|c| c.to_hsl())
    }
}

// ─── Hsla ────────────────────────────────────────────────────────────────────

/// HSL with an alpha channel in `[0, 1]`. Text form: `hsla(h, s%, l%, a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    hsl: Hsl,
    alpha: f64,
}

impl Hsla {
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] naming the first channel outside
    /// its range.
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Result<Self> {
        Self::from_hsl(Hsl::new(hue, saturation, lightness)?, alpha)
    }

    /// Attach an alpha channel to an HSL color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    pub fn from_hsl(hsl: Hsl, alpha: f64) -> Result<Self> {
        let alpha = ColorError::check_range("alpha", alpha, 0.0, 1.0)?;
        Ok(Self { hsl, alpha })
    }

    /// Caller guarantees `alpha` is already in range.
    pub(crate) const fn from_parts(hsl: Hsl, alpha: f64) -> Self {
        Self { hsl, alpha }
    }

    /// Random channels; alpha is drawn in `[0, 1]` at one decimal.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hsl = Hsl::random_with(rng);
        Self::from_parts(hsl, round1(rng.random::<f64>()))
    }

    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hsl.hue
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.hsl.saturation
    }

    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.hsl.lightness
    }

    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Result<Self> {
        Self::from_hsl(self.hsl, alpha)
    }
}

impl ColorValue for Hsla {
    fn kind(&self) -> ColorKind {
        ColorKind::Hsla
    }

    fn to_rgb(&self) -> Rgb {
        self.hsl.to_rgb()
    }

    fn from_color(color: Color) -> Self {
        color.to_hsla()
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_hsl(&self) -> Hsl {
        self.hsl
    }

    fn to_hsla(&self) -> Hsla {
        *self
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.hsl;
        write!(f, "hsla({hue}, {saturation}%, {lightness}%, {})", self.alpha)
    }
}

impl FromStr for Hsla {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s).map(|c| c.to_hsla())
    }
}
