// SPDX-License-Identifier: MIT
//
// Color model math — the numeric core every color type delegates to.
//
// Two conversions matter: 8-bit RGB → HSL (the standard max/min/delta
// derivation) and HSL → 8-bit RGB (chroma, second-largest component and
// lightness offset by 60° sector). Everything else in the crate is built
// by composing these two with hex encoding.
//
// HSL output is rounded to one decimal place so that values print the way
// people write them (`hsl(16.2, 49.3%, 29.4%)`) and compare equal in tests.

/// Round to one decimal place.
#[inline]
#[must_use]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places.
#[inline]
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ─── RGB → HSL ───────────────────────────────────────────────────────────────

/// Convert 8-bit RGB channels to `(hue, saturation, lightness)`.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness in `[0, 100]`,
/// all rounded to one decimal. Achromatic input (all channels equal) yields
/// hue 0 and saturation 0 without dividing by a zero delta.
#[must_use]
pub fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> (f64, f64, f64) {
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);

    let r = f64::from(red) / 255.0;
    let g = f64::from(green) / 255.0;
    let b = f64::from(blue) / 255.0;
    let hi = f64::from(max) / 255.0;
    let lo = f64::from(min) / 255.0;

    let lightness = (hi + lo) / 2.0;

    if max == min {
        return (0.0, 0.0, round1(lightness * 100.0));
    }

    let delta = hi - lo;
    let sector = if max == red {
        ((g - b) / delta) % 6.0
    } else if max == green {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    let hue = round1(hue);
    let hue = if hue >= 360.0 { 0.0 } else { hue };

    let saturation = (delta / (1.0 - 2.0f64.mul_add(lightness, -1.0).abs())).min(1.0);

    (hue, round1(saturation * 100.0), round1(lightness * 100.0))
}

// ─── HSL → RGB ───────────────────────────────────────────────────────────────

/// Convert `(hue, saturation, lightness)` to 8-bit RGB channels.
///
/// Hue is taken modulo 360, so `360.0` behaves like `0.0`. Saturation and
/// lightness are percentages.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = saturation / 100.0;
    let l = lightness / 100.0;
    let h = hue.rem_euclid(360.0) / 60.0;

    let chroma = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    // Safe: h is in [0, 6) after rem_euclid.
    let (r, g, b) = match h.floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    (to_u8(r + m), to_u8(g + m), to_u8(b + m))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}
