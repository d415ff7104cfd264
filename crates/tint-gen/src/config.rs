//! Channel ranges for bounded generation.
//!
//! A [`GeneratorConfig`] holds one inclusive `[min, max]` range per HSL
//! channel. It can be built in code or loaded from TOML, where each range is
//! either a single number or a two-element array:
//!
//! ```toml
//! hue = [180, 240]
//! saturation = 80
//! lightness = [40, 60]
//! ```
//!
//! Missing keys keep their defaults. Ranges are validated before a
//! generator will use them.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tint_color::{ColorError, Result};

// ─── Channel ────────────────────────────────────────────────────────────────

/// One of the three HSL channels a range applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
        }
    }

    /// The largest value a range on this channel may reach.
    #[must_use]
    pub const fn upper_bound(self) -> u16 {
        match self {
            Self::Hue => 360,
            Self::Saturation | Self::Lightness => 100,
        }
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hue, Self::Saturation, Self::Lightness]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── ChannelRange ───────────────────────────────────────────────────────────

/// An inclusive `[min, max]` range of integer channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RangeRepr", into = "[u16; 2]")]
pub struct ChannelRange {
    min: u16,
    max: u16,
}

impl ChannelRange {
    /// An unchecked range. Use [`validate`](Self::validate) before drawing.
    #[must_use]
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// A range that only contains `value`.
    #[must_use]
    pub const fn single(value: u16) -> Self {
        Self::new(value, value)
    }

    #[must_use]
    pub const fn min(self) -> u16 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> u16 {
        self.max
    }

    #[must_use]
    pub const fn contains(self, value: u16) -> bool {
        self.min <= value && value <= self.max
    }

    /// Check this range against `channel`'s domain.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRange`] naming the channel when
    /// `min > max` or `max` exceeds the channel's upper bound.
    pub fn validate(self, channel: Channel) -> Result<Self> {
        if self.min > self.max {
            return Err(ColorError::InvalidRange {
                channel: channel.name(),
                reason: format!("min {} is greater than max {}", self.min, self.max),
            });
        }
        if self.max > channel.upper_bound() {
            return Err(ColorError::InvalidRange {
                channel: channel.name(),
                reason: format!("max {} exceeds {}", self.max, channel.upper_bound()),
            });
        }
        Ok(self)
    }
}

impl From<u16> for ChannelRange {
    fn from(value: u16) -> Self {
        Self::single(value)
    }
}

impl From<(u16, u16)> for ChannelRange {
    fn from((min, max): (u16, u16)) -> Self {
        Self::new(min, max)
    }
}

impl From<[u16; 2]> for ChannelRange {
    fn from([min, max]: [u16; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<ChannelRange> for [u16; 2] {
    fn from(range: ChannelRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RangeRepr {
    Single(u16),
    Pair([u16; 2]),
}

impl From<RangeRepr> for ChannelRange {
    fn from(repr: RangeRepr) -> Self {
        match repr {
            RangeRepr::Single(value) => Self::single(value),
            RangeRepr::Pair(pair) => pair.into(),
        }
    }
}

// ─── GeneratorConfig ────────────────────────────────────────────────────────

/// Default hue range: the whole wheel.
pub const DEFAULT_HUE: ChannelRange = ChannelRange::new(0, 360);
/// Default saturation range.
pub const DEFAULT_SATURATION: ChannelRange = ChannelRange::new(50, 90);
/// Default lightness range.
pub const DEFAULT_LIGHTNESS: ChannelRange = ChannelRange::new(50, 70);

/// Per-channel bounds for random HSL generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub hue: ChannelRange,
    pub saturation: ChannelRange,
    pub lightness: ChannelRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            hue: DEFAULT_HUE,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
        }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub fn with_hue(mut self, range: impl Into<ChannelRange>) -> Self {
        self.hue = range.into();
        self
    }

    #[must_use]
    pub fn with_saturation(mut self, range: impl Into<ChannelRange>) -> Self {
        self.saturation = range.into();
        self
    }

    #[must_use]
    pub fn with_lightness(mut self, range: impl Into<ChannelRange>) -> Self {
        self.lightness = range.into();
        self
    }

    /// The range configured for `channel`.
    #[must_use]
    pub const fn range(&self, channel: Channel) -> ChannelRange {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }

    /// Check every range, reporting the first bad channel.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidRange`] for the first invalid range.
    pub fn validate(&self) -> Result<()> {
        for &channel in Channel::all() {
            self.range(channel).validate(channel)?;
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed TOML or unknown keys, and
    /// [`ConfigError::Invalid`] when a range fails validation.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Failure to load a [`GeneratorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid generator config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ColorError),
}
