//! Emotional category matching and continuation detection.
//!
//! Categories are tested in a fixed priority order and the first keyword set
//! with any substring hit wins. Self-worth language is checked first; the
//! rest are ordered so that broader vocabularies lose ties to narrower ones
//! (e.g. "tired" resolves to sadness before sleep).

use serde::{Deserialize, Serialize};

/// Topic bucket used to pick a reply pool, independent of mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SelfWorth,
    Anxiety,
    Loneliness,
    Anger,
    Sadness,
    Sleep,
    Work,
    Relationship,
}

impl Category {
    /// Categories in matching priority order.
    pub const PRIORITY: [Category; 8] = [
        Category::SelfWorth,
        Category::Anxiety,
        Category::Loneliness,
        Category::Anger,
        Category::Sadness,
        Category::Sleep,
        Category::Work,
        Category::Relationship,
    ];

    /// Wire name, e.g. `"self_worth"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::SelfWorth => "self_worth",
            Category::Anxiety => "anxiety",
            Category::Loneliness => "loneliness",
            Category::Anger => "anger",
            Category::Sadness => "sadness",
            Category::Sleep => "sleep",
            Category::Work => "work",
            Category::Relationship => "relationship",
        }
    }

    /// Trigger phrases for this category.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::SelfWorth => SELF_WORTH,
            Category::Anxiety => ANXIETY,
            Category::Loneliness => LONELINESS,
            Category::Anger => ANGER,
            Category::Sadness => SADNESS,
            Category::Sleep => SLEEP,
            Category::Work => WORK,
            Category::Relationship => RELATIONSHIP,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Keyword tables ──────────────────────────────────────────────────────

const SELF_WORTH: &[&str] = &[
    "worthless",
    "not good enough",
    "failure",
    "loser",
    "stupid",
    "ugly",
    "nobody likes me",
    "everyone hates me",
    "i'm a burden",
];

const ANXIETY: &[&str] = &[
    "anxious",
    "nervous",
    "worried",
    "panic",
    "overthinking",
    "stressed",
    "overwhelmed",
    "racing thoughts",
    "can't stop thinking",
    "fear",
    "scared",
    "uneasy",
    "restless",
    "heart racing",
    "can't breathe",
    "tight chest",
    "dizzy",
    "shaking",
];

const LONELINESS: &[&str] = &[
    "lonely",
    "alone",
    "isolated",
    "nobody",
    "left out",
    "disconnected",
    "empty",
    "no one understands",
    "by myself",
    "abandoned",
    "unwanted",
    "no friends",
    "everyone else",
    "no one cares",
];

const ANGER: &[&str] = &[
    "angry",
    "mad",
    "furious",
    "rage",
    "irritated",
    "frustrated",
    "annoyed",
    "resentful",
    "bitter",
    "hostile",
    "livid",
    "pissed",
    "hate",
    "can't stand",
];

const SADNESS: &[&str] = &[
    "sad",
    "depressed",
    "down",
    "hopeless",
    "tired of",
    "exhausted",
    "empty",
    "numb",
    "worthless",
    "guilty",
    "shame",
    "tears",
    "crying",
    "can't stop crying",
    "melancholy",
    "nothing matters",
    "what's the point",
    "no point",
    "give up",
];

const SLEEP: &[&str] = &[
    "can't sleep",
    "insomnia",
    "tired",
    "exhausted",
    "restless",
    "wake up",
    "sleeping",
    "waking up",
    "nightmares",
    "sleep schedule",
];

const WORK: &[&str] = &[
    "work",
    "job",
    "boss",
    "colleague",
    "deadline",
    "pressure",
    "overwhelmed at work",
    "workplace",
    "coworker",
    "manager",
    "project",
    "meeting",
];

const RELATIONSHIP: &[&str] = &[
    "partner",
    "boyfriend",
    "girlfriend",
    "spouse",
    "friend",
    "family",
    "relationship",
    "breakup",
    "divorce",
    "argument",
    "fight",
    "conflict",
    "cheating",
    "trust",
    "communication",
    "misunderstand",
];

/// Short acknowledgments that mark a message as continuing the last exchange.
const CONTINUATION_PHRASES: &[&str] = &[
    "yes",
    "no",
    "maybe",
    "i don't know",
    "i think",
    "i feel like",
    "that's true",
    "exactly",
    "right",
    "also",
    "and",
    "but",
];

// ── Matching ────────────────────────────────────────────────────────────

/// First category, in priority order, with a keyword contained in `text`.
///
/// Matching is case-insensitive substring search.
#[must_use]
pub fn match_category(text: &str) -> Option<Category> {
    let lowered = text.to_lowercase();
    Category::PRIORITY
        .into_iter()
        .find(|category| category.keywords().iter().any(|kw| lowered.contains(kw)))
}

/// Whether the opening `window_chars` characters contain an acknowledgment
/// phrase. History presence is checked by the caller.
#[must_use]
pub fn looks_like_continuation(text: &str, window_chars: usize) -> bool {
    let lowered = text.to_lowercase();
    let head: String = lowered.chars().take(window_chars).collect();
    CONTINUATION_PHRASES
        .iter()
        .any(|phrase| head.contains(phrase))
}
