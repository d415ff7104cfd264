// SPDX-License-Identifier: MIT

//! # tint-color — color values, conversions and WCAG metrics
//!
//! Five immutable color models that convert into one another:
//!
//! ```text
//! Hex ─┐               ┌─ Hsl
//!      ├── Rgb (u8) ───┤
//! Rgba ┘               └─ Hsla
//! ```
//!
//! - **[`hex`]** — `#rrggbb`, with shorthand expansion on input
//! - **[`rgb`]** — `Rgb` and `Rgba` (alpha in `[0, 1]`)
//! - **[`hsl`]** — `Hsl` and `Hsla`, validated on construction
//! - **[`value`]** — the shared [`ColorValue`] capability and the [`Color`] sum type
//! - **[`parse`]** — the CSS-like grammar behind every `FromStr`
//! - **[`contrast`]** — WCAG luminance, contrast ratio, legibility
//! - **[`convert`]** — the RGB ↔ HSL math
//!
//! Every value is `Copy`; "modifying" operations such as
//! [`ColorValue::lighten`] return a new value.
//!
//! ```
//! use tint_color::{ColorValue, Hex, Hsl};
//!
//! let hsl: Hsl = "hsl(151, 51%, 52%)".parse().unwrap();
//! assert_eq!(hsl.to_hex().to_string(), "#46c387");
//!
//! let white = Hex::new(0xff, 0xff, 0xff);
//! assert!(hsl.darken(30.0).is_legible_with_background(&white, 0.0));
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]
// Every fallible constructor documents its error in one line.
#![allow(clippy::missing_errors_doc)]

pub mod contrast;
pub mod convert;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod parse;
pub mod rgb;
pub mod value;

pub use error::{ColorError, Result};
pub use hex::Hex;
pub use hsl::{Hsl, Hsla};
pub use rgb::{Rgb, Rgba};
pub use value::{Color, ColorKind, ColorValue};
