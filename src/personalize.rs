//! Personalization: context-derived clauses spliced into a base reply.
//!
//! Clauses are gathered from the [`ContextRecord`] in a fixed order (person,
//! time reference, recurring theme, previous topic, intensity). At most one
//! clause comes from each trigger. The first `max_spliced_clauses` are then
//! inserted after the template's first sentence, with probability
//! `personalize_probability`.

use crate::config::{ContextConfig, ReplyConfig};
use crate::context::{ContextRecord, Theme};
use rand::Rng;

const SENTENCE_BREAK: &str = ". ";

const RECENT_PHRASES: &[&str] = &["lately", "recently", "this week"];
const LONG_STANDING_PHRASES: &[&str] = &["always", "for months", "for years"];

const RECENT_CLAUSE: &str = "I notice this has been coming up more recently.";
const LONG_STANDING_CLAUSE: &str =
    "It sounds like this has been a long-standing challenge for you.";
const WORK_THEME_CLAUSE: &str =
    "I'm also noticing work stress has been a recurring theme in our conversations.";
const RELATIONSHIP_THEME_CLAUSE: &str =
    "Relationship challenges seem to be something you've been navigating.";
const CONTINUITY_CLAUSE: &str = "Building on what you shared earlier,";
const INTENSITY_CLAUSE: &str = "I can really feel the intensity of what you're experiencing.";

// ── Clause building ─────────────────────────────────────────────────────

/// Personalization clauses eligible for `text`, in splice order.
#[must_use]
pub fn personalization_clauses(
    text: &str,
    ctx: &ContextRecord,
    config: &ContextConfig,
) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut clauses = Vec::new();

    if let Some(clause) = ctx.mentioned_people.first().and_then(|p| person_clause(p)) {
        clauses.push(clause);
    }

    if let Some(clause) = ctx.time_references.first().and_then(|t| time_clause(t)) {
        clauses.push(clause.to_owned());
    }

    if let Some(clause) = ctx
        .recurring_themes
        .first()
        .and_then(|theme| theme_clause(*theme, &lowered))
    {
        clauses.push(clause.to_owned());
    }

    if let Some(topic) = ctx.previous_topics.last()
        && topic
            .split_whitespace()
            .take(config.topic_overlap_words)
            .any(|word| lowered.contains(word))
    {
        clauses.push(CONTINUITY_CLAUSE.to_owned());
    }

    if ctx.is_intense() {
        clauses.push(INTENSITY_CLAUSE.to_owned());
    }

    clauses
}

fn person_clause(person: &str) -> Option<String> {
    match person {
        "partner" | "boyfriend" | "girlfriend" | "spouse" => {
            Some(format!("When it comes to your {person},"))
        }
        "boss" | "colleague" => Some(format!("In your work relationship with your {person},")),
        "friend" | "family" => Some(format!("With your {person},")),
        _ => None,
    }
}

fn time_clause(reference: &str) -> Option<&'static str> {
    if RECENT_PHRASES.contains(&reference) {
        Some(RECENT_CLAUSE)
    } else if LONG_STANDING_PHRASES.contains(&reference) {
        Some(LONG_STANDING_CLAUSE)
    } else {
        None
    }
}

/// Only named when the message doesn't already say it.
fn theme_clause(theme: Theme, lowered: &str) -> Option<&'static str> {
    match theme {
        Theme::Work if !lowered.contains("work") => Some(WORK_THEME_CLAUSE),
        Theme::Relationships if !lowered.contains("relationship") => {
            Some(RELATIONSHIP_THEME_CLAUSE)
        }
        _ => None,
    }
}

// ── Splicing ────────────────────────────────────────────────────────────

/// Split `template` at its first sentence break into (head, tail).
///
/// The break itself is dropped. Returns `None` when there is no break.
#[must_use]
pub fn split_first_sentence(template: &str) -> Option<(&str, &str)> {
    template.split_once(SENTENCE_BREAK)
}

/// Insert up to `max_clauses` clauses after the first sentence of `template`.
///
/// Returns `None` when there is nothing to insert or no sentence break.
#[must_use]
pub fn splice(template: &str, clauses: &[String], max_clauses: usize) -> Option<String> {
    if clauses.is_empty() || max_clauses == 0 {
        return None;
    }
    let (head, tail) = split_first_sentence(template)?;
    let inserted = clauses[..clauses.len().min(max_clauses)].join(" ");
    Some(format!("{head}{SENTENCE_BREAK}{inserted} {tail}"))
}

/// Result of the personalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personalized {
    pub text: String,
    /// Whether any clause was spliced in.
    pub spliced: bool,
}

/// Run the personalization step on a rendered template.
///
/// When clauses are eligible, one draw decides whether to splice them; the
/// template is returned unchanged otherwise.
pub fn personalize<R: Rng + ?Sized>(
    template: &str,
    text: &str,
    ctx: &ContextRecord,
    reply: &ReplyConfig,
    context: &ContextConfig,
    rng: &mut R,
) -> Personalized {
    let unchanged = || Personalized {
        text: template.to_owned(),
        spliced: false,
    };

    let clauses = personalization_clauses(text, ctx, context);
    if clauses.is_empty() {
        return unchanged();
    }

    if rng.r#gen::<f64>() >= reply.personalize_probability {
        tracing::debug!(clauses = clauses.len(), "personalization skipped by draw");
        return unchanged();
    }

    match splice(template, &clauses, reply.max_spliced_clauses) {
        Some(text) => Personalized {
            text,
            spliced: true,
        },
        None => unchanged(),
    }
}
