//! Built-in rankers.
//!
//! | Ranker                     | Condition                          | Score  |
//! |----------------------------|------------------------------------|--------|
//! | [`DejectGrayishColors`]    | saturation ≤ 30                    | −1     |
//! | [`DejectDarkColors`]       | lightness ≤ 15                     | −100   |
//! | [`DejectBrightColors`]     | lightness ≥ 85 or saturation < 15  | −1     |
//! | [`PrioritizeFlashyColors`] | 50 < saturation < 90, 50 < l < 70  | +2     |
//! | [`PrioritizeHueRange`]     | from ≤ hue ≤ to                    | +bonus |

use crate::rank::{POINT, Rankeable, Ranker};

/// Penalize low-saturation colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DejectGrayishColors;

impl Ranker for DejectGrayishColors {
    fn rank(&self, rankeable: &mut Rankeable) {
        if rankeable.color().saturation() <= 30.0 {
            rankeable.remove(POINT);
        }
    }
}

/// Effectively exclude near-black colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DejectDarkColors;

impl Ranker for DejectDarkColors {
    fn rank(&self, rankeable: &mut Rankeable) {
        if rankeable.color().lightness() <= 15.0 {
            rankeable.remove(100 * POINT);
        }
    }
}

/// Penalize washed-out colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DejectBrightColors;

impl Ranker for DejectBrightColors {
    fn rank(&self, rankeable: &mut Rankeable) {
        let color = rankeable.color();
        if color.lightness() >= 85.0 || color.saturation() < 15.0 {
            rankeable.remove(POINT);
        }
    }
}

/// Reward vivid mid-lightness colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrioritizeFlashyColors;

impl Ranker for PrioritizeFlashyColors {
    fn rank(&self, rankeable: &mut Rankeable) {
        let color = rankeable.color();
        let saturation = color.saturation();
        let lightness = color.lightness();
        if saturation > 50.0 && saturation < 90.0 && lightness > 50.0 && lightness < 70.0 {
            rankeable.add(2 * POINT);
        }
    }
}

/// Reward hues inside `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrioritizeHueRange {
    from: f64,
    to: f64,
    bonus: i64,
}

impl PrioritizeHueRange {
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            bonus: POINT,
        }
    }

    #[must_use]
    pub const fn with_bonus(mut self, bonus: i64) -> Self {
        self.bonus = bonus;
        self
    }
}

impl Ranker for PrioritizeHueRange {
    fn rank(&self, rankeable: &mut Rankeable) {
        let hue = rankeable.color().hue();
        if hue >= self.from && hue <= self.to {
            rankeable.add(self.bonus);
        }
    }
}
