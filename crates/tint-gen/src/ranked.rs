//! Ranked random color generation.
//!
//! [`ColorGenerator`] draws a population of unconstrained random HSL colors,
//! scores each with its [`Pipeline`], and returns the best one. The first
//! candidate to reach the top score wins; later candidates must score
//! strictly higher to replace it.

use rand::Rng;
use tint_color::{ColorError, Hsl, Result};
use tracing::debug;

use crate::rank::{Pipeline, Rankeable, Ranker};
use crate::rankers::{
    DejectBrightColors, DejectDarkColors, DejectGrayishColors, PrioritizeFlashyColors,
};

/// Candidates drawn per generated color unless configured otherwise.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Picks the best-scoring color from a random sample.
#[derive(Debug)]
pub struct ColorGenerator {
    pipeline: Pipeline,
    sample_size: usize,
}

impl ColorGenerator {
    /// A generator with the given rankers and sample size.
    #[must_use]
    pub fn new(rankers: Vec<Box<dyn Ranker>>, sample_size: usize) -> Self {
        Self {
            pipeline: Pipeline::new(rankers),
            sample_size,
        }
    }

    /// A generator with no rankers: every candidate ties, so the first wins.
    #[must_use]
    pub fn unranked(sample_size: usize) -> Self {
        Self::new(Vec::new(), sample_size)
    }

    /// Append a ranker to the pipeline.
    #[must_use]
    pub fn with_ranker(mut self, ranker: impl Ranker + 'static) -> Self {
        self.pipeline.push(ranker);
        self
    }

    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    #[must_use]
    pub const fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[must_use]
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// The best color from a fresh random sample.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Exhausted`] when the sample size is zero.
    pub fn generate(&self) -> Result<Hsl> {
        self.generate_with(&mut rand::rng())
    }

    /// Like [`generate`](Self::generate), drawing candidates from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Hsl> {
        let population = (0..self.sample_size).map(|_| Hsl::random_with(rng));
        self.select(population).map_err(|_| ColorError::Exhausted {
            sample_size: self.sample_size,
        })
    }

    /// Score every color in `population` and return the best.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Exhausted`] when `population` is empty.
    pub fn select<I>(&self, population: I) -> Result<Hsl>
    where
        I: IntoIterator<Item = Hsl>,
    {
        let mut best: Option<Rankeable> = None;
        let mut seen = 0usize;
        for color in population {
            seen += 1;
            let ranked = self.pipeline.rank(color);
            match best {
                Some(current) if !ranked.better_than(&current) => {}
                _ => best = Some(ranked),
            }
        }
        let best = best.ok_or(ColorError::Exhausted { sample_size: seen })?;
        debug!(
            color = %best.color(),
            score = best.score(),
            candidates = seen,
            "selected ranked color"
        );
        Ok(best.color())
    }

    /// `times` independently generated colors.
    pub fn many(&self, times: usize) -> Result<Vec<Hsl>> {
        (0..times).map(|_| self.generate()).collect()
    }
}

impl Default for ColorGenerator {
    /// Grayish, dark and bright colors are penalized and flashy ones
    /// rewarded, over a sample of [`DEFAULT_SAMPLE_SIZE`].
    fn default() -> Self {
        Self::unranked(DEFAULT_SAMPLE_SIZE)
            .with_ranker(DejectGrayishColors)
            .with_ranker(DejectDarkColors)
            .with_ranker(DejectBrightColors)
            .with_ranker(PrioritizeFlashyColors)
    }
}
