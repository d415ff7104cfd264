// SPDX-License-Identifier: MIT
//
// tint — color values, conversions, WCAG metrics and random colors.
//
// This is the facade crate that re-exports the workspace members:
//
//   tint-color → Hex/Rgb/Rgba/Hsl/Hsla, parsing, conversion, contrast
//   tint-gen   → seeded bounded generation, ranked random colors
//
// Most users only need the prelude:
//
//   use tint::prelude::*;
//
//   let brand: Hsl = "hsl(151, 51%, 52%)".parse()?;
//   assert_eq!(brand.to_hex().to_string(), "#46c387");

//! Color values, conversions, WCAG metrics and random colors.
//!
//! See [`tint_color`] for the value types and [`tint_gen`] for generation.

pub use tint_color as color;
pub use tint_gen as generate;

pub use tint_color::{
    Color, ColorError, ColorKind, ColorValue, Hex, Hsl, Hsla, Result, Rgb, Rgba,
};
pub use tint_gen::{ColorGenerator, Generator, GeneratorConfig};

/// The types and traits most callers need.
pub mod prelude {
    pub use tint_color::{Color, ColorKind, ColorValue, Hex, Hsl, Hsla, Rgb, Rgba};
    pub use tint_gen::{ColorGenerator, Generator, GeneratorConfig, Ranker};
}

/// A pleasant random color: the best of `sample_size` candidates under the
/// default ranking (no grays, no near-blacks, no washed-out colors, vivid
/// mid-lightness preferred).
///
/// # Errors
///
/// Returns [`ColorError::Exhausted`] when `sample_size` is zero.
pub fn random_color(sample_size: usize) -> Result<Hsl> {
    ColorGenerator::default()
        .with_sample_size(sample_size)
        .generate()
}
