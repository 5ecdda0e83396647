//! The digital safety score register and its level bands.

use serde::{Deserialize, Serialize};

/// A digital safety score, always within `[0, 100]`.
///
/// The clamp is applied on every construction and mutation, so a
/// stored or computed value can never leave the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetyScore(u8);

impl SafetyScore {
    /// Upper bound of the score range.
    pub const MAX: u8 = 100;

    /// Create a score, clamping `value` into `[0, 100]`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        let clamped = if value < 0 {
            0
        } else if value > Self::MAX as i64 {
            Self::MAX as i64
        } else {
            value
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(clamped as u8)
    }

    /// The raw score value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Apply a signed delta, clamping the result into `[0, 100]`.
    #[must_use]
    pub const fn adjusted(self, delta: i32) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// The level band this score falls into.
    #[must_use]
    pub const fn level(self) -> Level {
        Level::for_score(self.0)
    }
}

/// Experience bands over the safety score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Score below 25.
    Beginner,
    /// Score 25 through 49.
    Intermediate,
    /// Score 50 through 74.
    Advanced,
    /// Score 75 and above.
    Expert,
}

impl Level {
    /// Map a raw score to its band.
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        if score < 25 {
            Self::Beginner
        } else if score < 50 {
            Self::Intermediate
        } else if score < 75 {
            Self::Advanced
        } else {
            Self::Expert
        }
    }

    /// Encouragement message shown alongside the score.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Beginner => "Keep learning! Every step counts towards better digital safety.",
            Self::Intermediate => "Great progress! You're building solid digital safety skills.",
            Self::Advanced => "Excellent! You have strong digital safety knowledge.",
            Self::Expert => "Outstanding! You're a digital safety expert!",
        }
    }

    /// The lowercase identifier, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_range() {
        assert_eq!(SafetyScore::new(-10).value(), 0);
        assert_eq!(SafetyScore::new(0).value(), 0);
        assert_eq!(SafetyScore::new(57).value(), 57);
        assert_eq!(SafetyScore::new(100).value(), 100);
        assert_eq!(SafetyScore::new(100_000).value(), 100);
    }

    #[test]
    fn adjusted_clamps_at_both_ends() {
        assert_eq!(SafetyScore::new(0).adjusted(-1).value(), 0);
        assert_eq!(SafetyScore::new(99).adjusted(5).value(), 100);
        assert_eq!(SafetyScore::new(50).adjusted(-60).value(), 0);
        assert_eq!(SafetyScore::new(50).adjusted(2).value(), 52);
    }

    #[test]
    fn arbitrary_delta_sequences_stay_in_range() {
        let mut score = SafetyScore::default();
        for delta in [5, -1, 2, -100, 200, 17, -3, i32::MAX, i32::MIN, 50] {
            score = score.adjusted(delta);
            assert!(score.value() <= SafetyScore::MAX);
        }
    }

    #[test]
    fn level_boundaries_are_exact() {
        assert_eq!(Level::for_score(0), Level::Beginner);
        assert_eq!(Level::for_score(24), Level::Beginner);
        assert_eq!(Level::for_score(25), Level::Intermediate);
        assert_eq!(Level::for_score(49), Level::Intermediate);
        assert_eq!(Level::for_score(50), Level::Advanced);
        assert_eq!(Level::for_score(74), Level::Advanced);
        assert_eq!(Level::for_score(75), Level::Expert);
        assert_eq!(Level::for_score(100), Level::Expert);
    }

    #[test]
    fn messages_are_distinct() {
        let messages = [
            Level::Beginner.message(),
            Level::Intermediate.message(),
            Level::Advanced.message(),
            Level::Expert.message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn score_serializes_as_plain_number() {
        let json = serde_json::to_string(&SafetyScore::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
