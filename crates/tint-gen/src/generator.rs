//! Bounded random HSL generation.
//!
//! A [`Generator`] draws integer hue, saturation and lightness values from
//! the ranges in its [`GeneratorConfig`]. Every operation takes an optional
//! seed; with a seed the result is reproducible. Batch operations derive one
//! seed per element as `"{seed}_{index}"`, so element `i` of a batch is the
//! same whether the batch was collected eagerly or walked lazily.

use tint_color::{ColorError, Hsl, Result};
use tracing::debug;

use crate::config::{Channel, ChannelRange, GeneratorConfig};
use crate::random::RandomSource;

/// Random HSL colors within configurable bounds.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
    random: RandomSource,
}

impl Generator {
    /// A generator with the default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator with custom bounds.
    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            random: RandomSource::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replace the default range of each channel given as `Some`.
    ///
    /// The new configuration is validated as a whole before it is stored;
    /// on error the previous bounds stay in place.
    pub fn set_defaults(
        &mut self,
        hue: Option<ChannelRange>,
        saturation: Option<ChannelRange>,
        lightness: Option<ChannelRange>,
    ) -> Result<()> {
        let config = GeneratorConfig {
            hue: hue.unwrap_or(self.config.hue),
            saturation: saturation.unwrap_or(self.config.saturation),
            lightness: lightness.unwrap_or(self.config.lightness),
        };
        config.validate()?;
        debug!(
            hue = %config.hue,
            saturation = %config.saturation,
            lightness = %config.lightness,
            "generator defaults updated"
        );
        self.config = config;
        Ok(())
    }

    /// One color within the configured bounds.
    pub fn one(&mut self, seed: Option<&str>) -> Result<Hsl> {
        let bounds = self.config;
        self.draw(&bounds, non_empty(seed))
    }

    /// One color within `bounds`, ignoring the configured defaults.
    pub fn one_within(&mut self, bounds: &GeneratorConfig, seed: Option<&str>) -> Result<Hsl> {
        bounds.validate()?;
        self.draw(bounds, non_empty(seed))
    }

    /// `n` colors within the configured bounds.
    pub fn many(&mut self, n: usize, seed: Option<&str>) -> Result<Vec<Hsl>> {
        self.many_lazily(n, seed).collect()
    }

    /// `n` colors within `bounds`.
    pub fn many_within(
        &mut self,
        n: usize,
        bounds: &GeneratorConfig,
        seed: Option<&str>,
    ) -> Result<Vec<Hsl>> {
        self.many_lazily_within(n, bounds, seed)?.collect()
    }

    /// `n` colors within the configured bounds, drawn on demand.
    pub fn many_lazily(&mut self, n: usize, seed: Option<&str>) -> ManyLazily<'_> {
        let bounds = self.config;
        ManyLazily::new(self, bounds, n, seed)
    }

    /// `n` colors within `bounds`, drawn on demand.
    pub fn many_lazily_within(
        &mut self,
        n: usize,
        bounds: &GeneratorConfig,
        seed: Option<&str>,
    ) -> Result<ManyLazily<'_>> {
        bounds.validate()?;
        Ok(ManyLazily::new(self, *bounds, n, seed))
    }

    /// `n` colors whose hues are spread evenly around the wheel.
    ///
    /// Saturation and lightness are drawn once from the configured bounds and
    /// shared by every color. Hues are multiples of `360 / n`, emitted from
    /// the outside of the index window inwards (last, first, second to last,
    /// second, ...), so neighbours in the output sit far apart on the wheel.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidCount`] when `n` is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn maximize_hue_difference(&mut self, n: usize, seed: Option<&str>) -> Result<Vec<Hsl>> {
        if n == 0 {
            return Err(ColorError::InvalidCount {
                what: "color count",
                value: n,
            });
        }
        let seed = non_empty(seed);
        let bounds = self.config;
        let saturation = self.channel(&bounds, Channel::Saturation, seed)?;
        let lightness = self.channel(&bounds, Channel::Lightness, seed)?;
        let step = 360.0 / n as f64;

        let mut colors = Vec::with_capacity(n);
        let (mut start, mut end) = (0, n - 1);
        let mut from_end = true;
        loop {
            let index = if from_end { end } else { start };
            colors.push(Hsl::new(index as f64 * step, saturation, lightness)?);
            if start == end {
                break;
            }
            if from_end {
                end -= 1;
            } else {
                start += 1;
            }
            from_end = !from_end;
        }
        Ok(colors)
    }

    /// Element `index` of a batch seeded with `seed`.
    fn nth(&mut self, bounds: &GeneratorConfig, seed: Option<&str>, index: usize) -> Result<Hsl> {
        match seed {
            Some(seed) => self.draw(bounds, Some(&format!("{seed}_{index}"))),
            None => self.draw(bounds, None),
        }
    }

    fn draw(&mut self, bounds: &GeneratorConfig, seed: Option<&str>) -> Result<Hsl> {
        let hue = self.channel(bounds, Channel::Hue, seed)?;
        let saturation = self.channel(bounds, Channel::Saturation, seed)?;
        let lightness = self.channel(bounds, Channel::Lightness, seed)?;
        Hsl::new(hue, saturation, lightness)
    }

    fn channel(
        &mut self,
        bounds: &GeneratorConfig,
        channel: Channel,
        seed: Option<&str>,
    ) -> Result<f64> {
        let range = bounds.range(channel);
        let value = self
            .random
            .between(u32::from(range.min()), u32::from(range.max()), seed)?;
        Ok(f64::from(value))
    }
}

/// An empty seed behaves like no seed at all.
fn non_empty(seed: Option<&str>) -> Option<&str> {
    seed.filter(|s| !s.is_empty())
}

/// Lazy batch returned by [`Generator::many_lazily`].
///
/// Yields exactly `n` items; each draw happens when the item is requested.
#[derive(Debug)]
pub struct ManyLazily<'a> {
    generator: &'a mut Generator,
    bounds: GeneratorConfig,
    seed: Option<String>,
    next: usize,
    len: usize,
}

impl<'a> ManyLazily<'a> {
    fn new(
        generator: &'a mut Generator,
        bounds: GeneratorConfig,
        len: usize,
        seed: Option<&str>,
    ) -> Self {
        Self {
            generator,
            bounds,
            seed: non_empty(seed).map(str::to_owned),
            next: 0,
            len,
        }
    }
}

impl Iterator for ManyLazily<'_> {
    type Item = Result<Hsl>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.generator.nth(&self.bounds, self.seed.as_deref(), index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ManyLazily<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn in_bounds(hsl: Hsl, config: &GeneratorConfig) -> bool {
        let check = |value: f64, range: ChannelRange| {
            value >= f64::from(range.min()) && value <= f64::from(range.max())
        };
        check(hsl.hue(), config.hue)
            && check(hsl.saturation(), config.saturation)
            && check(hsl.lightness(), config.lightness)
    }

    fn is_integer(v: f64) -> bool {
        (v - v.round()).abs() < f64::EPSILON
    }

    #[test]
    fn one_respects_default_bounds() {
        let mut generator = Generator::new();
        for _ in 0..200 {
            let color = generator.one(None).unwrap();
            assert!(in_bounds(color, generator.config()), "{color}");
            assert!(is_integer(color.hue()));
            assert!(is_integer(color.saturation()));
            assert!(is_integer(color.lightness()));
        }
    }

    #[test]
    fn seeded_one_is_reproducible() {
        let a = Generator::new().one(Some("my_seed")).unwrap();
        let b = Generator::new().one(Some("my_seed")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn one_within_uses_given_bounds() {
        let bounds = GeneratorConfig::default()
            .with_hue(200)
            .with_saturation(10)
            .with_lightness((20, 21));
        let mut generator = Generator::new();
        for _ in 0..50 {
            let color = generator.one_within(&bounds, None).unwrap();
            assert!((color.hue() - 200.0).abs() < f64::EPSILON);
            assert!((color.saturation() - 10.0).abs() < f64::EPSILON);
            assert!(in_bounds(color, &bounds));
        }
    }

    #[test]
    fn one_within_rejects_inverted_bounds() {
        let bounds = GeneratorConfig::default().with_hue((300, 100));
        assert!(matches!(
            Generator::new().one_within(&bounds, None),
            Err(ColorError::InvalidRange { channel: "hue", .. })
        ));
    }

    #[test]
    fn with_config_validates() {
        let bad = GeneratorConfig::default().with_saturation((0, 150));
        assert!(Generator::with_config(bad).is_err());
        assert!(Generator::with_config(GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn set_defaults_changes_later_draws() {
        let mut generator = Generator::new();
        generator
            .set_defaults(Some(ChannelRange::single(120)), None, Some(ChannelRange::new(30, 31)))
            .unwrap();
        assert_eq!(generator.config().saturation, crate::config::DEFAULT_SATURATION);
        let color = generator.one(None).unwrap();
        assert!((color.hue() - 120.0).abs() < f64::EPSILON);
        assert!(color.lightness() >= 30.0 && color.lightness() <= 31.0);
    }

    #[test]
    fn rejected_defaults_keep_previous_config() {
        let mut generator = Generator::new();
        let before = *generator.config();
        assert!(generator.set_defaults(None, Some(ChannelRange::new(90, 10)), None).is_err());
        assert_eq!(*generator.config(), before);
    }

    #[test]
    fn many_returns_n_colors() {
        let mut generator = Generator::new();
        assert_eq!(generator.many(10, None).unwrap().len(), 10);
        assert!(generator.many(0, None).unwrap().is_empty());
    }

    #[test]
    fn seeded_many_is_reproducible() {
        let a = Generator::new().many(10, Some("x")).unwrap();
        let b = Generator::new().many(10, Some("x")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_batch_elements_use_indexed_seeds() {
        let mut generator = Generator::new();
        let batch = generator.many(3, Some("x")).unwrap();
        let second = generator.one(Some("x_1")).unwrap();
        assert_eq!(batch[1], second);
    }

    #[test]
    fn lazy_and_eager_batches_agree() {
        let mut generator = Generator::new();
        let eager = generator.many(8, Some("palette")).unwrap();
        let lazy: Vec<Hsl> = generator
            .many_lazily(8, Some("palette"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn lazy_batch_reports_its_length() {
        let mut generator = Generator::new();
        let mut lazy = generator.many_lazily(4, None);
        assert_eq!(lazy.len(), 4);
        lazy.next();
        assert_eq!(lazy.len(), 3);
        assert_eq!(lazy.count(), 3);
    }

    #[test]
    fn many_within_validates_before_drawing() {
        let mut generator = Generator::new();
        let bad = GeneratorConfig::default().with_lightness((0, 500));
        assert!(generator.many_within(3, &bad, None).is_err());
        assert!(generator.many_lazily_within(3, &bad, None).is_err());
    }

    #[test]
    fn many_within_respects_bounds() {
        let bounds = GeneratorConfig::default().with_hue((10, 20));
        let mut generator = Generator::new();
        for color in generator.many_within(50, &bounds, Some("bounded")).unwrap() {
            assert!(in_bounds(color, &bounds), "{color}");
        }
    }

    #[test]
    fn empty_seed_is_unseeded() {
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("a")), Some("a"));
    }

    #[test]
    fn hue_difference_of_four() {
        let colors = Generator::new().maximize_hue_difference(4, None).unwrap();
        let hues: Vec<f64> = colors.iter().map(|c| c.hue()).collect();
        assert_eq!(hues, vec![270.0, 0.0, 180.0, 90.0]);
    }

    #[test]
    fn hue_difference_shares_saturation_and_lightness() {
        let colors = Generator::new().maximize_hue_difference(5, None).unwrap();
        assert_eq!(colors.len(), 5);
        let first = colors[0];
        for color in &colors {
            assert!((color.saturation() - first.saturation()).abs() < f64::EPSILON);
            assert!((color.lightness() - first.lightness()).abs() < f64::EPSILON);
        }
        let hues: Vec<f64> = colors.iter().map(|c| c.hue()).collect();
        assert_eq!(hues, vec![288.0, 0.0, 216.0, 72.0, 144.0]);
    }

    #[test]
    fn hue_difference_of_one() {
        let colors = Generator::new().maximize_hue_difference(1, None).unwrap();
        assert_eq!(colors.len(), 1);
        assert!(colors[0].hue().abs() < f64::EPSILON);
    }

    #[test]
    fn hue_difference_of_zero_is_an_error() {
        assert!(matches!(
            Generator::new().maximize_hue_difference(0, None),
            Err(ColorError::InvalidCount { value: 0, .. })
        ));
    }

    #[test]
    fn seeded_hue_difference_is_reproducible() {
        let a = Generator::new().maximize_hue_difference(6, Some("wheel")).unwrap();
        let b = Generator::new().maximize_hue_difference(6, Some("wheel")).unwrap();
        assert_eq!(a, b);
    }
}
