// SPDX-License-Identifier: MIT

//! WCAG relative luminance and contrast ratio.
//!
//! These are free functions over any [`ColorValue`], so every color model
//! gets them without its own copy. The [`ColorValue`] trait exposes them as
//! methods (`color.luminance()`, `a.contrast(&b)`).
//!
//! - Normal text needs a contrast ratio of at least 4.5:1 (WCAG AA).
//! - The ratio is symmetric and always in `[1, 21]`.

use crate::value::ColorValue;

/// WCAG AA threshold for body text.
pub const LEGIBILITY_THRESHOLD: f64 = 4.5;

/// Linearize one sRGB channel (0–255) per WCAG 2.0.
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.0.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance<C: ColorValue>(color: &C) -> f64 {
    let rgb = color.to_rgb();
    let r = linearize(rgb.red());
    let g = linearize(rgb.green());
    let b = linearize(rgb.blue());
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
#[must_use]
pub fn contrast_ratio<A, B>(a: &A, b: &B) -> f64
where
    A: ColorValue,
    B: ColorValue,
{
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether `foreground` text is legible on `background`.
///
/// `variance` relaxes the 4.5:1 threshold by that many ratio points.
#[must_use]
pub fn is_legible<B, F>(background: &B, foreground: &F, variance: f64) -> bool
where
    B: ColorValue,
    F: ColorValue,
{
    contrast_ratio(background, foreground) >= LEGIBILITY_THRESHOLD - variance
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
