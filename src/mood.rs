//! Discrete mood buckets derived from a polarity score.

use serde::{Deserialize, Serialize};

/// Five-bucket mood label for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

/// Mood family used when no category keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodFamily {
    Positive,
    Neutral,
    Negative,
}

impl Mood {
    /// All moods, most positive first.
    pub const ALL: [Mood; 5] = [
        Mood::VeryPositive,
        Mood::Positive,
        Mood::Neutral,
        Mood::Negative,
        Mood::VeryNegative,
    ];

    /// Bucket a compound polarity score.
    ///
    /// Thresholds are checked top-down: `>= 0.5`, `>= 0.1`, `> -0.1`,
    /// `> -0.5`, otherwise very negative. NaN lands in the very negative bucket
    /// because it fails every comparison.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Mood::VeryPositive
        } else if score >= 0.1 {
            Mood::Positive
        } else if score > -0.1 {
            Mood::Neutral
        } else if score > -0.5 {
            Mood::Negative
        } else {
            Mood::VeryNegative
        }
    }

    /// Wire label, e.g. `"very positive"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::VeryPositive => "very positive",
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
            Mood::VeryNegative => "very negative",
        }
    }

    /// Collapse into the fallback pool family.
    #[must_use]
    pub fn family(self) -> MoodFamily {
        match self {
            Mood::VeryPositive | Mood::Positive => MoodFamily::Positive,
            Mood::Neutral => MoodFamily::Neutral,
            Mood::Negative | Mood::VeryNegative => MoodFamily::Negative,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
