//! Progress-affecting events and their score deltas.

use serde::{Deserialize, Serialize};

/// Bonus points for finishing a quiz, scaled by the percent of
/// questions answered correctly.
#[must_use]
pub const fn completion_bonus(percent_correct: u8) -> i32 {
    if percent_correct >= 80 {
        5
    } else if percent_correct >= 60 {
        3
    } else {
        1
    }
}

/// Something the user did that affects their safety score or module
/// completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressEvent {
    /// Answered a quiz question correctly.
    QuizCorrect,
    /// Answered a quiz question incorrectly.
    QuizIncorrect,
    /// Uploaded an image for variation analysis.
    ImageUpload,
    /// Finished a whole quiz; bonus scales with the percent correct.
    QuizCompleted {
        /// Percent of questions answered correctly, 0-100.
        percent_correct: u8,
    },
    /// Finished a named learning module. Carries no score delta; the
    /// tracker records the module name so it is only rewarded once.
    ModuleCompleted {
        /// Module identifier, e.g. `"phishing_protection"`.
        module: String,
    },
}

impl ProgressEvent {
    /// The signed score change this event causes.
    #[must_use]
    pub const fn delta(&self) -> i32 {
        match self {
            Self::QuizCorrect => 2,
            Self::QuizIncorrect => -1,
            Self::ImageUpload => 5,
            Self::QuizCompleted { percent_correct } => completion_bonus(*percent_correct),
            Self::ModuleCompleted { .. } => 0,
        }
    }
}
