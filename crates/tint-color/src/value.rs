// SPDX-License-Identifier: MIT
//
// The shared color capability.
//
// Five concrete models (Hex, Rgb, Rgba, Hsl, Hsla) all implement one
// narrow trait, `ColorValue`, whose only required methods are "give me
// your RGB", "what kind are you" and "build yourself from any color".
// Luminance, contrast, lighten/darken and conversion to the other four
// models are written once as provided methods on top of those three.
//
// `Color` is the closed sum of the five models, used wherever the model is
// only known at run time (parsing, `convert_to`).

use std::fmt;
use std::str::FromStr;

use crate::contrast;
use crate::error::{ColorError, Result};
use crate::hex::Hex;
use crate::hsl::{BRIGHTNESS_THRESHOLD, DARKNESS_THRESHOLD, Hsl, Hsla};
use crate::parse::parse_color;
use crate::rgb::{Rgb, Rgba};

// ─── ColorKind ───────────────────────────────────────────────────────────────

/// The five color models, used to pick a conversion target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl ColorKind {
    /// Lowercase model name, as accepted by [`ColorKind::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        }
    }

    /// Resolve a model by name (case-insensitive).
    ///
    /// Path-qualified names such as `tint::Hsl` resolve by their last
    /// segment.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let simple = name.rsplit("::").next().unwrap_or(name).trim();
        let lower = simple.to_ascii_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All color models.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgb, Self::Rgba, Self::Hsl, Self::Hsla]
    }

    /// Whether colors of this model carry an alpha channel.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla)
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorKind {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ColorError::UnknownKind(s.to_owned()))
    }
}

// ─── ColorValue ──────────────────────────────────────────────────────────────

/// Behavior shared by every color model.
///
/// Implementors provide [`to_rgb`](Self::to_rgb), [`kind`](Self::kind) and
/// [`from_color`](Self::from_color); models with an alpha channel also
/// override [`alpha`](Self::alpha). Models override a `to_*` method when
/// they can answer it without a round trip through RGB (an `Hsl` is
/// already an `Hsl`).
pub trait ColorValue: Copy + fmt::Display {
    /// Which model this value is in.
    fn kind(&self) -> ColorKind;

    /// The 8-bit RGB form of this color.
    fn to_rgb(&self) -> Rgb;

    /// Convert any color into this model, keeping alpha if both sides
    /// have it.
    fn from_color(color: Color) -> Self;

    /// Opacity in `[0, 1]`; `1.0` for models without alpha.
    fn alpha(&self) -> f64 {
        1.0
    }

    fn red(&self) -> u8 {
        self.to_rgb().red()
    }

    fn green(&self) -> u8 {
        self.to_rgb().green()
    }

    fn blue(&self) -> u8 {
        self.to_rgb().blue()
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    fn to_hex(&self) -> Hex {
        let rgb = self.to_rgb();
        Hex::new(rgb.red(), rgb.green(), rgb.blue())
    }

    /// Convert to RGBA, carrying over this color's alpha.
    fn to_rgba(&self) -> Rgba {
        Rgba::from_parts(self.to_rgb(), self.alpha())
    }

    /// Convert to RGBA with an explicit alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    fn to_rgba_with_alpha(&self, alpha: f64) -> Result<Rgba> {
        Rgba::from_rgb(self.to_rgb(), alpha)
    }

    fn to_hsl(&self) -> Hsl {
        let rgb = self.to_rgb();
        Hsl::from_rgb(rgb.red(), rgb.green(), rgb.blue())
    }

    /// Convert to HSLA, carrying over this color's alpha.
    fn to_hsla(&self) -> Hsla {
        Hsla::from_parts(self.to_hsl(), self.alpha())
    }

    /// Convert to HSLA with an explicit alpha.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] if `alpha` is outside `[0, 1]`.
    fn to_hsla_with_alpha(&self, alpha: f64) -> Result<Hsla> {
        Hsla::from_hsl(self.to_hsl(), alpha)
    }

    /// Convert to the model named by `kind`.
    fn convert_to(&self, kind: ColorKind) -> Color {
        match kind {
            ColorKind::Hex => Color::Hex(self.to_hex()),
            ColorKind::Rgb => Color::Rgb(self.to_rgb()),
            ColorKind::Rgba => Color::Rgba(self.to_rgba()),
            ColorKind::Hsl => Color::Hsl(self.to_hsl()),
            ColorKind::Hsla => Color::Hsla(self.to_hsla()),
        }
    }

    /// Convert to a model given by name, e.g. `"hsl"` or `"tint::Rgba"`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownKind`] if the name is not a color model.
    fn convert_to_named(&self, name: &str) -> Result<Color> {
        Ok(self.convert_to(name.parse()?))
    }

    // ─── Perceptual metrics ──────────────────────────────────────────────

    /// WCAG relative luminance in `[0, 1]`.
    fn luminance(&self) -> f64 {
        contrast::relative_luminance(self)
    }

    /// WCAG contrast ratio against `other`, in `[1, 21]`.
    fn contrast<C: ColorValue>(&self, other: &C) -> f64 {
        contrast::contrast_ratio(self, other)
    }

    /// Whether text in `foreground` is legible on this color.
    ///
    /// `variance` lowers the WCAG AA threshold of 4.5 by that much.
    fn is_legible_with_foreground<C: ColorValue>(&self, foreground: &C, variance: f64) -> bool {
        contrast::is_legible(self, foreground, variance)
    }

    /// Whether text in this color is legible on `background`.
    fn is_legible_with_background<C: ColorValue>(&self, background: &C, variance: f64) -> bool {
        contrast::is_legible(background, self, variance)
    }

    fn is_dark(&self) -> bool {
        self.to_hsl().lightness() <= DARKNESS_THRESHOLD
    }

    fn is_bright(&self) -> bool {
        self.to_hsl().lightness() >= BRIGHTNESS_THRESHOLD
    }

    // ─── Lightness adjustments ───────────────────────────────────────────

    /// Decrease HSL lightness by `amount` percentage points (clamped).
    #[must_use]
    fn darken(&self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Increase HSL lightness by `amount` percentage points (clamped),
    /// returning the same model with alpha preserved.
    #[must_use]
    fn lighten(&self, amount: f64) -> Self {
        let hsl = self.to_hsl();
        let adjusted = hsl.with_lightness_clamped(hsl.lightness() + amount);
        Self::from_color(Color::Hsla(Hsla::from_parts(adjusted, self.alpha())))
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color in any of the five models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Rgba(Rgba),
    Hsl(Hsl),
    Hsla(Hsla),
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            Color::Hex($c) => $body,
            Color::Rgb($c) => $body,
            Color::Rgba($c) => $body,
            Color::Hsl($c) => $body,
            Color::Hsla($c) => $body,
        }
    };
}

impl ColorValue for Color {
    fn kind(&self) -> ColorKind {
        dispatch!(self, c => c.kind())
    }

    fn to_rgb(&self) -> Rgb {
        dispatch!(self, c => c.to_rgb())
    }

    fn from_color(color: Color) -> Self {
        color
    }

    fn alpha(&self) -> f64 {
        dispatch!(self, c => c.alpha())
    }

    fn to_hex(&self) -> Hex {
        dispatch!(self, c => c.to_hex())
    }

    fn to_rgba(&self) -> Rgba {
        dispatch!(self, c => c.to_rgba())
    }

    fn to_hsl(&self) -> Hsl {
        dispatch!(self, c => c.to_hsl())
    }

    fn to_hsla(&self) -> Hsla {
        dispatch!(self, c => c.to_hsla())
    }

    fn lighten(&self, amount: f64) -> Self {
        dispatch!(self, c => Self::from(c.lighten(amount)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

macro_rules! color_from {
    ($($model:ident),*) => {
        $(
            impl From<$model> for Color {
                fn from(c: $model) -> Self {
                    Self::$model(c)
                }
            }
        )*
    };
}

color_from!(Hex, Rgb, Rgba, Hsl, Hsla);

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Every model serializes as its canonical string and deserializes through
// the same grammar as `FromStr`.

macro_rules! serde_via_str {
    ($($ty:ty),*) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

serde_via_str!(Hex, Rgb, Rgba, Hsl, Hsla, Color);
