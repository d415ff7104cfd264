// SPDX-License-Identifier: MIT

//! Error types shared by every tint crate.

use thiserror::Error;

/// Result alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Everything that can go wrong when building, parsing, converting or
/// generating colors.
///
/// All variants are raised synchronously at the point of bad input. Nothing
/// here is transient, so callers never need to retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// The input matched none of the accepted color grammars.
    #[error("cannot parse color `{input}`: {reason}")]
    Parse { input: String, reason: &'static str },

    /// A constructor argument fell outside its legal domain.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// `convert_to_named` was given a name that is not a color model.
    #[error("cannot convert to unknown color model `{0}`")]
    UnknownKind(String),

    /// A `[min, max]` generation range is malformed.
    #[error("invalid {channel} range: {reason}")]
    InvalidRange { channel: &'static str, reason: String },

    /// A count argument (batch size, sample size) is not usable.
    #[error("{what} must be greater than zero, got {value}")]
    InvalidCount { what: &'static str, value: usize },

    /// Ranked generation had no candidates to pick from.
    #[error("no good colors found in a sample of {sample_size}")]
    Exhausted { sample_size: usize },
}

impl ColorError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason,
        }
    }

    /// Check `value` against `[min, max]`, naming `field` on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::OutOfRange`] when `value` is outside the range
    /// or not finite.
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
        if value.is_finite() && (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}
