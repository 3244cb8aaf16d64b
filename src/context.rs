//! Context extraction: personalization signals mined from the current
//! message and the caller-supplied history.
//!
//! Extraction is deterministic and side-effect free. A [`ContextRecord`] is
//! built fresh for every request and never mutated afterwards.

use crate::config::ContextConfig;
use crate::conversation::{Turn, user_texts};
use serde::{Deserialize, Serialize};

// ── Phrase tables ───────────────────────────────────────────────────────

/// Relation phrases; the leading possessive is stripped when recorded.
const PEOPLE: &[&str] = &[
    "my partner",
    "my boyfriend",
    "my girlfriend",
    "my spouse",
    "my friend",
    "my boss",
    "my colleague",
    "my family",
    "my mom",
    "my dad",
    "my sister",
    "my brother",
    "my parent",
];

const TIME_PHRASES: &[&str] = &[
    "today",
    "yesterday",
    "this week",
    "lately",
    "recently",
    "always",
    "never",
    "for months",
    "for weeks",
    "for years",
    "since",
];

const INTENSIFIERS: &[&str] = &[
    "really",
    "extremely",
    "very",
    "so much",
    "incredibly",
    "completely",
    "totally",
    "absolutely",
    "terribly",
    "awfully",
];

/// (theme, keywords) in reporting order.
const THEMES: &[(Theme, &[&str])] = &[
    (
        Theme::Work,
        &["work", "job", "boss", "colleague", "deadline", "office"],
    ),
    (
        Theme::Relationships,
        &["partner", "friend", "family", "relationship", "argument"],
    ),
    (
        Theme::Health,
        &["sleep", "tired", "sick", "pain", "headache"],
    ),
    (
        Theme::Anxiety,
        &["anxious", "worried", "nervous", "panic", "stressed"],
    ),
    (
        Theme::Depression,
        &["sad", "depressed", "hopeless", "empty", "numb"],
    ),
];

// ── Types ───────────────────────────────────────────────────────────────

/// How emphatic the message is, from the number of intensity adverbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    #[default]
    Low,
    Moderate,
    High,
}

impl Intensity {
    /// 0 → low, 1 → moderate, 2 or more → high.
    #[must_use]
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Intensity::Low,
            1 => Intensity::Moderate,
            _ => Intensity::High,
        }
    }
}

/// Topic that keeps coming up across a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Work,
    Relationships,
    Health,
    Anxiety,
    Depression,
}

impl Theme {
    /// Wire name, e.g. `"relationships"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Work => "work",
            Theme::Relationships => "relationships",
            Theme::Health => "health",
            Theme::Anxiety => "anxiety",
            Theme::Depression => "depression",
        }
    }
}

/// Personalization signals for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRecord {
    /// Relations named in the message, without the possessive ("boss").
    pub mentioned_people: Vec<String>,
    /// Temporal phrases found in the message, in table order.
    pub time_references: Vec<String>,
    /// Themes with enough keyword hits across history and message.
    pub recurring_themes: Vec<Theme>,
    /// Lowercased text of the latest user turns, oldest first.
    pub previous_topics: Vec<String>,
    /// Emphasis level of the message.
    pub intensity: Intensity,
}

impl ContextRecord {
    /// Whether any time reference names a duration ("for months", ...).
    #[must_use]
    pub fn has_duration_reference(&self) -> bool {
        self.time_references.iter().any(|t| t.contains("for"))
    }

    /// Whether the message is highly intense.
    #[must_use]
    pub fn is_intense(&self) -> bool {
        self.intensity == Intensity::High
    }
}

// ── Extraction ──────────────────────────────────────────────────────────

/// Build the context record for `text` given an optional history.
///
/// Recurring themes and previous topics are only computed when a non-empty
/// history is supplied.
#[must_use]
pub fn extract_context(text: &str, history: &[Turn], config: &ContextConfig) -> ContextRecord {
    let lowered = text.to_lowercase();

    let mentioned_people = PEOPLE
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .map(|phrase| phrase.strip_prefix("my ").unwrap_or(phrase).to_owned())
        .collect();

    let time_references = TIME_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .map(|phrase| (*phrase).to_owned())
        .collect();

    let intensifier_hits = INTENSIFIERS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();

    let mut record = ContextRecord {
        mentioned_people,
        time_references,
        intensity: Intensity::from_count(intensifier_hits),
        ..ContextRecord::default()
    };

    if history.is_empty() {
        return record;
    }

    let user_messages = user_texts(history);

    let mut corpus = user_messages.join(" ");
    if !corpus.is_empty() {
        corpus.push(' ');
    }
    corpus.push_str(&lowered);

    record.recurring_themes = THEMES
        .iter()
        .filter(|(_, keywords)| {
            keywords.iter().filter(|kw| corpus.contains(*kw)).count()
                >= config.recurring_theme_threshold
        })
        .map(|(theme, _)| *theme)
        .collect();

    let start = user_messages
        .len()
        .saturating_sub(config.previous_topic_window);
    record.previous_topics = user_messages[start..].to_vec();

    tracing::debug!(
        people = record.mentioned_people.len(),
        time_refs = record.time_references.len(),
        themes = ?record.recurring_themes,
        intensity = ?record.intensity,
        "context extracted"
    );

    record
}
