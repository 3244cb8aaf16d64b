//! Polarity scoring: text → compound score in `[-1.0, 1.0]`.
//!
//! The reply engine only depends on the [`PolarityScorer`] trait. The crate
//! ships [`LexiconScorer`], a valence-lexicon scorer with a handful of
//! heuristics (boosters, negation, contrast, shouting, exclamation marks)
//! that is good enough to bucket short chat messages into moods.
//!
//! Any closure `Fn(&str) -> f64` is also a scorer, which keeps tests simple.

use std::collections::HashMap;

/// Opaque sentiment primitive consumed by the mood classifier.
///
/// Implementations must be total and deterministic. Scores outside
/// `[-1.0, 1.0]` are clamped by the caller.
pub trait PolarityScorer: Send + Sync {
    /// Compound polarity of `text`.
    fn score(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

// ── Heuristic constants ─────────────────────────────────────────────────

/// Magnitude added to a sentiment word preceded by a booster.
const BOOSTER_INCREMENT: f64 = 0.293;

/// Multiplier applied when a negator precedes a sentiment word.
const NEGATION_SCALAR: f64 = -0.74;

/// Magnitude added to an all-caps sentiment word in mixed-case text.
const SHOUT_INCREMENT: f64 = 0.733;

/// Magnitude added per exclamation mark.
const EXCLAMATION_INCREMENT: f64 = 0.292;

/// Exclamation marks beyond this count are ignored.
const MAX_EXCLAMATIONS: usize = 4;

/// How many preceding tokens are searched for a negator.
const NEGATION_WINDOW: usize = 3;

/// Normalisation constant for the compound score.
const ALPHA: f64 = 15.0;

// ── Word tables ─────────────────────────────────────────────────────────

const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "so",
    "incredibly",
    "completely",
    "totally",
    "absolutely",
    "terribly",
    "awfully",
    "deeply",
    "especially",
    "hugely",
    "super",
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "without",
    "hardly", "barely",
];

const LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("glad", 2.0),
    ("love", 3.2),
    ("loved", 2.9),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("awesome", 3.1),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("nice", 1.8),
    ("better", 1.9),
    ("best", 3.2),
    ("calm", 1.3),
    ("relaxed", 2.2),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("grateful", 2.0),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("proud", 2.1),
    ("excited", 1.4),
    ("joy", 2.8),
    ("peaceful", 2.2),
    ("okay", 0.9),
    ("fine", 0.8),
    ("fun", 2.3),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("confident", 2.2),
    ("safe", 1.9),
    ("smile", 1.5),
    ("laugh", 2.6),
    ("beautiful", 2.9),
    ("blessed", 2.9),
    ("optimistic", 1.3),
    ("strong", 2.3),
    ("care", 2.2),
    ("support", 1.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("improve", 1.9),
    ("helpful", 1.8),
    // negative
    ("bad", -2.5),
    ("sad", -2.1),
    ("unhappy", -1.8),
    ("depressed", -2.3),
    ("depression", -1.9),
    ("hopeless", -2.0),
    ("worthless", -1.9),
    ("lonely", -1.5),
    ("alone", -1.0),
    ("isolated", -1.3),
    ("angry", -2.3),
    ("mad", -2.2),
    ("furious", -2.7),
    ("hate", -2.7),
    ("hated", -3.2),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("worst", -3.1),
    ("anxious", -1.0),
    ("anxiety", -0.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("nervous", -1.1),
    ("scared", -1.9),
    ("afraid", -2.0),
    ("fear", -2.2),
    ("panic", -2.3),
    ("stressed", -1.4),
    ("stress", -1.8),
    ("overwhelmed", -1.5),
    ("tired", -1.9),
    ("exhausted", -1.5),
    ("hurt", -2.4),
    ("pain", -2.3),
    ("cry", -2.1),
    ("crying", -2.1),
    ("tears", -0.9),
    ("upset", -1.6),
    ("frustrated", -1.5),
    ("annoyed", -1.6),
    ("irritated", -1.5),
    ("miserable", -2.2),
    ("empty", -0.8),
    ("numb", -1.1),
    ("guilty", -1.8),
    ("shame", -2.1),
    ("ashamed", -2.1),
    ("failure", -2.3),
    ("stupid", -2.4),
    ("ugly", -2.3),
    ("loser", -2.4),
    ("burden", -1.5),
    ("broken", -1.4),
    ("lost", -1.3),
    ("sick", -2.0),
    ("problem", -1.7),
    ("problems", -1.7),
    ("difficult", -1.5),
    ("struggle", -1.3),
    ("struggling", -1.4),
    ("suffering", -2.1),
    ("abandoned", -2.1),
    ("rejected", -1.9),
    ("bitter", -1.8),
    ("resentful", -2.1),
    ("restless", -1.1),
    ("nightmares", -1.7),
];

// ── Lexicon scorer ──────────────────────────────────────────────────────

/// Valence-lexicon polarity scorer.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Build the scorer from the built-in word table.
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
        }
    }

    /// Valence of a single lowercased word, if it carries any.
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.get(word).copied()
    }
}

struct Token {
    lower: String,
    shouting: bool,
}

fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');
            if trimmed.is_empty() {
                return None;
            }
            let has_letters = trimmed.chars().any(char::is_alphabetic);
            let shouting = has_letters && !trimmed.chars().any(char::is_lowercase);
            Some(Token {
                lower: trimmed.to_lowercase(),
                shouting,
            })
        })
        .collect()
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        // Shouting only means something when the rest of the text is not.
        let mixed_case = tokens.iter().any(|t| t.shouting) && tokens.iter().any(|t| !t.shouting);
        let contrast_at = tokens.iter().position(|t| t.lower == "but");

        let mut sum = 0.0_f64;
        let mut hits = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence(&token.lower) else {
                continue;
            };
            hits += 1;
            let direction = valence.signum();

            if token.shouting && mixed_case {
                valence += SHOUT_INCREMENT * direction;
            }
            if i > 0 && BOOSTERS.contains(&tokens[i - 1].lower.as_str()) {
                valence += BOOSTER_INCREMENT * direction;
            }
            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negator(&t.lower)) {
                valence *= NEGATION_SCALAR;
            }
            if let Some(pivot) = contrast_at {
                if i < pivot {
                    valence *= 0.5;
                } else if i > pivot {
                    valence *= 1.5;
                }
            }
            sum += valence;
        }

        if hits == 0 || sum == 0.0 {
            return 0.0;
        }

        let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
        sum += bangs * EXCLAMATION_INCREMENT * sum.signum();

        normalize(sum)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer::new().score(text)
    }

    #[test]
    fn empty_and_neutral_text_score_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("The table is brown."), 0.0);
    }

    #[test]
    fn positive_word_scores_positive() {
        let s = score("I am happy");
        assert!(s >= 0.5, "expected very positive, got {s}");
    }

    #[test]
    fn negative_word_scores_negative() {
        let s = score("I feel hopeless and sad");
        assert!(s <= -0.5, "expected very negative, got {s}");
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = score("I am happy");
        let negated = score("I am not happy");
        assert!(negated < 0.0, "negated should be negative, got {negated}");
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn contraction_negates() {
        assert!(score("I don't feel good") < 0.0);
    }

    #[test]
    fn booster_increases_magnitude() {
        assert!(score("I am really sad") < score("I am sad"));
        assert!(score("I am very happy") > score("I am happy"));
    }

    #[test]
    fn contrast_weights_the_second_clause() {
        let s = score("The day was good but I feel terrible");
        assert!(s < 0.0, "second clause should dominate, got {s}");
    }

    #[test]
    fn exclamation_adds_emphasis() {
        assert!(score("I am happy!!") > score("I am happy"));
    }

    #[test]
    fn shouting_adds_emphasis_in_mixed_case() {
        assert!(score("I feel ANGRY today") < score("I feel angry today"));
        // All-caps text is not treated as shouting.
        assert!((score("I FEEL ANGRY") - score("i feel angry")).abs() < 1e-12);
    }

    #[test]
    fn score_is_bounded() {
        let text = "great ".repeat(200);
        let s = score(&text);
        assert!((-1.0..=1.0).contains(&s));
        let text = "worst ".repeat(200);
        let s = score(&text);
        assert!((-1.0..=1.0).contains(&s));
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = "I'm so tired but kind of hopeful!";
        assert_eq!(score(text), score(text));
    }

    #[test]
    fn closures_are_scorers() {
        let fixed = |_: &str| 0.42;
        assert_eq!(fixed.score("anything"), 0.42);
    }
}
