// SPDX-License-Identifier: MIT

//! CSS-like color string parsing.
//!
//! One grammar serves every color type. Patterns are tried in order and the
//! first match wins:
//!
//! | Form                      | Example                     |
//! |---------------------------|-----------------------------|
//! | hex, 1–4, 6 or 8 digits   | `#1`, `#f0`, `#123`, `#46c387`, `#ffffff80` |
//! | `rgb()` / `rgba()`        | `rgb(10, 20, 30)`, `rgba(1, 2, 3, 0.5)` |
//! | `hsl()` / `hsla()`        | `hsl(180, 90%, 45%)`, `hsla(0, 0, 0, 50%)` |
//!
//! Short hex forms expand each digit `round(6 / len)` times and keep the
//! first six digits, so `#12` becomes `#111222` and `#1234` becomes
//! `#112233`. Only eight digits carry alpha. Five and seven digit forms are
//! rejected.
//!
//! [`parse_color`] keeps the model the text was written in and validates
//! alpha. [`parse_opaque`] is for models without alpha and ignores it.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{ColorError, Result};
use crate::hex::Hex;
use crate::hsl::{Hsl, Hsla};
use crate::rgb::{Rgb, Rgba};
use crate::value::{Color, ColorValue};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{1,8})$").expect("hex pattern is valid")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^
        rgba?\(\s*
        (\d+)\s*,\s*
        (\d+)\s*,\s*
        (\d+)\s*
        (?:,\s*([\d.]+)\s*(%)?\s*)?
        \)$",
    )
    .expect("rgb pattern is valid")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^
        hsla?\(\s*
        ([\d.]+)\s*,\s*
        ([\d.]+)%?\s*,\s*
        ([\d.]+)%?\s*
        (?:,\s*([\d.]+)\s*(%)?\s*)?
        \)$",
    )
    .expect("hsl pattern is valid")
});

/// Hex digits and optional alpha decoded from a hex color string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexParts {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Present only when the input had eight digits.
    pub alpha: Option<f64>,
}

/// A matched notation whose alpha has not been validated yet.
enum Parsed<'a> {
    Hex(Hex, Option<f64>),
    Rgb(Rgb, Option<RawAlpha<'a>>),
    Hsl(Hsl, Option<RawAlpha<'a>>),
}

/// The unparsed fourth argument of a color function.
struct RawAlpha<'a> {
    text: &'a str,
    percent: bool,
}

impl RawAlpha<'_> {
    fn value(&self, input: &str) -> Result<f64> {
        let value = number(self.text, input)?;
        Ok(if self.percent { value / 100.0 } else { value })
    }
}

impl Parsed<'_> {
    /// Keep the written model, validating any alpha.
    fn into_color(self, input: &str) -> Result<Color> {
        Ok(match self {
            Self::Hex(hex, None) => Color::Hex(hex),
            Self::Hex(hex, Some(alpha)) => Color::Rgba(Rgba::from_rgb(hex.to_rgb(), alpha)?),
            Self::Rgb(rgb, None) => Color::Rgb(rgb),
            Self::Rgb(rgb, Some(alpha)) => Color::Rgba(Rgba::from_rgb(rgb, alpha.value(input)?)?),
            Self::Hsl(hsl, None) => Color::Hsl(hsl),
            Self::Hsl(hsl, Some(alpha)) => Color::Hsla(Hsla::from_hsl(hsl, alpha.value(input)?)?),
        })
    }

    /// Drop any alpha without looking at it.
    const fn into_opaque(self) -> Color {
        match self {
            Self::Hex(hex, _) => Color::Hex(hex),
            Self::Rgb(rgb, _) => Color::Rgb(rgb),
            Self::Hsl(hsl, _) => Color::Hsl(hsl),
        }
    }
}

/// Parse any supported color notation.
///
/// # Errors
///
/// Returns [`ColorError::Parse`] when no grammar matches or a matched hex
/// string has an illegal digit count, and [`ColorError::OutOfRange`] when
/// a matched function has a channel (alpha included) outside its domain.
pub fn parse_color(input: &str) -> Result<Color> {
    parse_raw(input)?.into_color(input)
}

/// Parse any supported color notation for a model without alpha.
///
/// A fourth function argument or a hex alpha pair is accepted and ignored,
/// so `rgba(1, 2, 3, 5)` reads as `rgb(1, 2, 3)`.
///
/// # Errors
///
/// As [`parse_color`], except that alpha is never checked.
pub fn parse_opaque(input: &str) -> Result<Color> {
    parse_raw(input).map(Parsed::into_opaque)
}

fn parse_raw(input: &str) -> Result<Parsed<'_>> {
    let trimmed = input.trim();

    if let Some(caps) = HEX_RE.captures(trimmed) {
        // Five and seven digits fall through; no other grammar accepts
        // them either, so they end up as a parse error below.
        if !matches!(caps[1].len(), 5 | 7) {
            let parts = parse_hex(trimmed)?;
            let hex = Hex::new(parts.red, parts.green, parts.blue);
            return Ok(Parsed::Hex(hex, parts.alpha));
        }
    }

    if let Some(caps) = RGB_RE.captures(trimmed) {
        let rgb = Rgb::new(
            channel(&caps[1], "red", input)?,
            channel(&caps[2], "green", input)?,
            channel(&caps[3], "blue", input)?,
        );
        return Ok(Parsed::Rgb(rgb, raw_alpha(&caps)));
    }

    if let Some(caps) = HSL_RE.captures(trimmed) {
        let hsl = Hsl::new(
            number(&caps[1], input)?,
            number(&caps[2], input)?,
            number(&caps[3], input)?,
        )?;
        return Ok(Parsed::Hsl(hsl, raw_alpha(&caps)));
    }

    Err(ColorError::parse(
        input,
        "expected a hex code or an rgb, rgba, hsl or hsla function",
    ))
}

/// Parse a hex color string, expanding shorthand forms.
///
/// Accepts an optional leading `#` followed by 1–4, 6 or 8 hex digits.
/// Only the eight digit form carries alpha.
///
/// # Errors
///
/// Returns [`ColorError::Parse`] for empty input, non-hex characters, or
/// a digit count of 5 or 7.
pub fn parse_hex(input: &str) -> Result<HexParts> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if digits.is_empty() {
        return Err(ColorError::parse(input, "hex code has no digits"));
    }
    if digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::parse(input, "not a hex code"));
    }
    if matches!(digits.len(), 5 | 7) {
        return Err(ColorError::parse(
            input,
            "hex code with 5 or 7 digits is ambiguous",
        ));
    }

    let expanded = expand_shorthand(digits.as_bytes());
    let byte = |i: usize| {
        parse_hex_byte(&expanded[i..i + 2])
            .ok_or_else(|| ColorError::parse(input, "not a hex code"))
    };

    let alpha = if digits.len() == 8 {
        Some(crate::convert::round2(f64::from(byte(6)?) / 255.0))
    } else {
        None
    };

    Ok(HexParts {
        red: byte(0)?,
        green: byte(2)?,
        blue: byte(4)?,
        alpha,
    })
}

/// Repeat each digit of a short form and keep the first six digits.
///
/// `a` → `aaaaaa`, `ab` → `aaabbb`, `abc` → `aabbcc`, `abcd` → `aabbcc`.
/// Six and eight digit input is returned unchanged.
fn expand_shorthand(digits: &[u8]) -> Vec<u8> {
    if digits.len() >= 5 {
        return digits.to_vec();
    }
    let times = match digits.len() {
        1 => 6,
        2 => 3,
        // round(6 / 3) and round(6 / 4) are both 2.
        _ => 2,
    };
    digits
        .iter()
        .flat_map(|&d| std::iter::repeat_n(d, times))
        .take(6)
        .collect()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

fn number(text: &str, input: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| ColorError::parse(input, "malformed number"))
}

fn channel(text: &str, field: &'static str, input: &str) -> Result<u8> {
    let value: u32 = text
        .parse()
        .map_err(|_| ColorError::parse(input, "malformed number"))?;
    u8::try_from(value).map_err(|_| ColorError::OutOfRange {
        field,
        value: f64::from(value),
        min: 0.0,
        max: 255.0,
    })
}

fn raw_alpha<'a>(caps: &Captures<'a>) -> Option<RawAlpha<'a>> {
    caps.get(4).map(|m| RawAlpha {
        text: m.as_str(),
        percent: caps.get(5).is_some(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hex_str(input: &str) -> String {
        let p = parse_hex(input).unwrap();
        format!("#{:02x}{:02x}{:02x}", p.red, p.green, p.blue)
    }

    // ── Hex ─────────────────────────────────────────────────────────

    #[test]
    fn expands_single_digit() {
        assert_eq!(hex_str("#1"), "#111111");
    }

    #[test]
    fn expands_two_digits() {
        assert_eq!(hex_str("#12"), "#111222");
        assert_eq!(hex_str("#f0"), "#fff000");
    }

    #[test]
    fn expands_three_digits() {
        assert_eq!(hex_str("#123"), "#112233");
    }

    #[test]
    fn four_digits_drop_the_fourth() {
        let p = parse_hex("#1230").unwrap();
        assert_eq!((p.red, p.green, p.blue), (0x11, 0x22, 0x33));
        assert_eq!(p.alpha, None);
    }

    #[test]
    fn four_digit_hex_is_an_opaque_hex() {
        assert_eq!(parse_color("#1234").unwrap(), Color::Hex(Hex::new(0x11, 0x22, 0x33)));
        let rgba: Rgba = "#1230".parse().unwrap();
        assert!((rgba.alpha() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn eight_digits_carry_alpha() {
        let p = parse_hex("#123123ff").unwrap();
        assert_eq!((p.red, p.green, p.blue), (0x12, 0x31, 0x23));
        assert_eq!(p.alpha, Some(1.0));
        assert_eq!(parse_hex("ffffff80").unwrap().alpha, Some(0.5));
    }

    #[test]
    fn six_digits_without_hash() {
        assert_eq!(hex_str("46C387"), "#46c387");
        assert_eq!(parse_hex("46C387").unwrap().alpha, None);
    }

    #[test]
    fn rejects_ambiguous_lengths() {
        assert!(parse_hex("#12345").is_err());
        assert!(parse_hex("#1234567").is_err());
    }

    #[test]
    fn rejects_empty_and_garbage() {
        for bad in ["", "#", "hello world", "#12g", "#123456789"] {
            assert!(parse_hex(bad).is_err(), "{bad:?} should not parse");
        }
    }

    // ── Generic grammar ─────────────────────────────────────────────

    #[test]
    fn hex_without_alpha_stays_hex() {
        assert!(matches!(parse_color("#f0").unwrap(), Color::Hex(_)));
    }

    #[test]
    fn hex_with_alpha_becomes_rgba() {
        let Color::Rgba(rgba) = parse_color("#ffffff15").unwrap() else {
            panic!("expected rgba");
        };
        assert_eq!((rgba.red(), rgba.green(), rgba.blue()), (255, 255, 255));
        assert!((rgba.alpha() - 0.08).abs() < 1e-9);
    }

    #[test]
    fn rgb_function() {
        let color = parse_color("rgb(10, 20, 30)").unwrap();
        assert_eq!(color, Color::Rgb(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn rgb_function_tolerates_whitespace_and_case() {
        let color = parse_color("  RGB( 10 ,20,   30 ) ").unwrap();
        assert_eq!(color, Color::Rgb(Rgb::new(10, 20, 30)));
    }

    #[test]
    fn rgba_function() {
        let color = parse_color("rgba(100, 200, 150, 0.5)").unwrap();
        assert_eq!(color, Color::Rgba(Rgba::new(100, 200, 150, 0.5).unwrap()));
    }

    #[test]
    fn rgba_percent_alpha() {
        let Color::Rgba(rgba) = parse_color("rgba(1, 2, 3, 25%)").unwrap() else {
            panic!("expected rgba");
        };
        assert!((rgba.alpha() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn rgb_channel_over_255_is_out_of_range() {
        let err = parse_color("rgb(300, 0, 0)").unwrap_err();
        assert!(matches!(err, ColorError::OutOfRange { field: "red", .. }));
    }

    #[test]
    fn hsl_function_with_and_without_percent() {
        let expected = Color::Hsl(Hsl::new(180.0, 90.0, 45.0).unwrap());
        assert_eq!(parse_color("hsl(180, 90%, 45%)").unwrap(), expected);
        assert_eq!(parse_color("hsl(180, 90, 45)").unwrap(), expected);
    }

    #[test]
    fn hsla_function() {
        let color = parse_color("hsla(151, 51%, 52%, 0.3)").unwrap();
        let expected = Hsla::new(151.0, 51.0, 52.0, 0.3).unwrap();
        assert_eq!(color, Color::Hsla(expected));
    }

    #[test]
    fn hsl_out_of_range() {
        assert!(matches!(
            parse_color("hsl(400, 50%, 50%)").unwrap_err(),
            ColorError::OutOfRange { field: "hue", .. }
        ));
    }

    #[test]
    fn malformed_number_is_parse_error() {
        assert!(matches!(
            parse_color("hsl(1.2.3, 50%, 50%)").unwrap_err(),
            ColorError::Parse { .. }
        ));
    }

    #[test]
    fn unknown_notation_echoes_input() {
        let err = parse_color("cmyk(0, 0, 0, 0)").unwrap_err();
        assert!(err.to_string().contains("cmyk(0, 0, 0, 0)"));
    }

    #[test]
    fn out_of_range_alpha_fails_for_alpha_models() {
        assert!(matches!(
            parse_color("rgba(1, 2, 3, 5)").unwrap_err(),
            ColorError::OutOfRange { field: "alpha", .. }
        ));
        assert!("hsla(10, 20%, 30%, 50)".parse::<Hsla>().is_err());
    }

    #[test]
    fn alpha_less_models_ignore_the_fourth_argument() {
        assert_eq!("rgba(1, 2, 3, 5)".parse::<Rgb>().unwrap(), Rgb::new(1, 2, 3));
        assert_eq!("rgba(1, 2, 3, 5)".parse::<Hex>().unwrap(), Hex::new(1, 2, 3));
        assert_eq!(
            "hsla(10, 20%, 30%, 50)".parse::<Hsl>().unwrap(),
            Hsl::new(10.0, 20.0, 30.0).unwrap()
        );
        assert_eq!(
            parse_opaque("hsla(10, 20%, 30%, 1.2.3)").unwrap(),
            Color::Hsl(Hsl::new(10.0, 20.0, 30.0).unwrap())
        );
    }

    #[test]
    fn alpha_less_models_drop_hex_alpha() {
        assert_eq!(parse_opaque("#ffffff80").unwrap(), Color::Hex(Hex::new(255, 255, 255)));
    }

    #[test]
    fn five_digit_hex_is_rejected_by_generic_parser() {
        assert!(parse_color("#12345").is_err());
    }
}
