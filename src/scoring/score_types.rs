//! Bounded score type
//!
//! Every published score is an integer in `[5, 100]`. Formulas work in
//! `f64`; [`Score::from_raw`] rounds half up and clamps once at the end.

use serde::{Deserialize, Serialize};

use crate::metrics::round_half_up;

/// Integer score clamped to `[Score::MIN, Score::MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u32);

impl Score {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 100;

    /// Round a raw formula value and clamp it into range
    ///
    /// ```rust
    /// # use codegauge::scoring::Score;
    /// assert_eq!(Score::from_raw(72.5).value(), 73);
    /// assert_eq!(Score::from_raw(-12.0).value(), 5);
    /// assert_eq!(Score::from_raw(180.0).value(), 100);
    /// ```
    pub fn from_raw(raw: f64) -> Self {
        let rounded = round_half_up(raw).clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(rounded as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rounding_before_clamp() {
        assert_eq!(Score::from_raw(4.5).value(), 5);
        assert_eq!(Score::from_raw(99.5).value(), 100);
        assert_eq!(Score::from_raw(55.49).value(), 55);
    }

    proptest! {
        #[test]
        fn score_always_in_bounds(raw in -1.0e6..1.0e6f64) {
            let score = Score::from_raw(raw).value();
            prop_assert!((Score::MIN..=Score::MAX).contains(&score));
        }
    }
}
