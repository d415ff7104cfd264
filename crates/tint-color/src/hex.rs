// SPDX-License-Identifier: MIT

//! Hexadecimal colors (`#rrggbb`).

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{ColorError, Result};
use crate::parse::{parse_hex, parse_opaque};
use crate::rgb::Rgb;
use crate::value::{Color, ColorKind, ColorValue};

/// A color written as three hex byte pairs.
///
/// Input accepts the shorthand forms described in [`crate::parse`];
/// output is always six lowercase digits.
///
/// ```
/// use tint_color::{ColorValue, Hex};
///
/// let hex: Hex = "#123".parse().unwrap();
/// assert_eq!(hex.to_string(), "#112233");
/// assert_eq!(hex.red(), 0x11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex {
    red: u8,
    green: u8,
    blue: u8,
}

impl Hex {
    #[inline]
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse hex notation only (no `rgb()`/`hsl()` functions).
    ///
    /// A trailing alpha pair is accepted and dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Parse`] for anything but 1–4, 6 or 8 hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let parts = parse_hex(s)?;
        Ok(Self::new(parts.red, parts.green, parts.blue))
    }

    /// A uniformly random color.
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    /// The six digits without the leading `#`.
    #[must_use]
    pub fn digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl ColorValue for Hex {
    fn kind(&self) -> ColorKind {
        ColorKind::Hex
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    fn from_color(color: Color) -> Self {
        color.to_hex()
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

    fn to_hex(&self) -> Hex {
        *self
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_opaque(s).map(|c| c.to_hex())
    }
}
