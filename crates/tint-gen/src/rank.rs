//! Scored candidates and the ranker pipeline.
//!
//! A [`Rankeable`] pairs a candidate color with an integer score that starts
//! at zero. A [`Pipeline`] runs every [`Ranker`] over it in order; each
//! ranker may add or remove points based on the color's HSL channels.

use std::fmt;

use tint_color::Hsl;

/// The unit score adjustment.
pub const POINT: i64 = 1;

/// A candidate color and its running score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rankeable {
    color: Hsl,
    score: i64,
}

impl Rankeable {
    #[must_use]
    pub const fn new(color: Hsl) -> Self {
        Self { color, score: 0 }
    }

    pub const fn add(&mut self, points: i64) -> &mut Self {
        self.score += points;
        self
    }

    pub const fn remove(&mut self, points: i64) -> &mut Self {
        self.score -= points;
        self
    }

    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn color(&self) -> Hsl {
        self.color
    }

    /// Strictly higher score.
    #[must_use]
    pub const fn better_than(&self, other: &Self) -> bool {
        self.score > other.score
    }

    #[must_use]
    pub const fn equal_to(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

/// A scoring rule applied to every candidate.
///
/// Closures taking `&mut Rankeable` are rankers too.
pub trait Ranker {
    fn rank(&self, rankeable: &mut Rankeable);
}

impl<F> Ranker for F
where
    F: Fn(&mut Rankeable),
{
    fn rank(&self, rankeable: &mut Rankeable) {
        self(rankeable);
    }
}

/// Rankers applied in insertion order.
#[derive(Default)]
pub struct Pipeline {
    rankers: Vec<Box<dyn Ranker>>,
}

impl Pipeline {
    #[must_use]
    pub fn new(rankers: Vec<Box<dyn Ranker>>) -> Self {
        Self { rankers }
    }

    pub fn push(&mut self, ranker: impl Ranker + 'static) {
        self.rankers.push(Box::new(ranker));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rankers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rankers.is_empty()
    }

    /// Score `color` with every ranker.
    #[must_use]
    pub fn rank(&self, color: Hsl) -> Rankeable {
        let mut rankeable = Rankeable::new(color);
        for ranker in &self.rankers {
            ranker.rank(&mut rankeable);
        }
        rankeable
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("rankers", &self.rankers.len())
            .finish()
    }
}
