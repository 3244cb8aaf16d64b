//! Reply template pools and uniform selection.
//!
//! Pools are immutable `'static` data. A few templates carry a slot that is
//! filled from the request's [`ContextRecord`] when the template is rendered
//! (a lead chosen by duration references, or an emphasis inserted for
//! highly intense messages). Rendering happens at selection time, before the
//! separate personalization step.

mod pools;

use crate::category::Category;
use crate::context::ContextRecord;
use crate::mood::MoodFamily;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A reply template, possibly with a context-driven slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Fixed text.
    Plain(&'static str),
    /// `head` + (`emphasis` if intensity is high) + `tail`.
    Intensified {
        head: &'static str,
        emphasis: &'static str,
        tail: &'static str,
    },
    /// (`lasting` if a duration was mentioned, else `brief`) + `tail`.
    Lasting {
        lasting: &'static str,
        brief: &'static str,
        tail: &'static str,
    },
}

impl Template {
    /// Render the template against the request context.
    #[must_use]
    pub fn render(&self, ctx: &ContextRecord) -> Cow<'static, str> {
        match *self {
            Template::Plain(text) => Cow::Borrowed(text),
            Template::Intensified {
                head,
                emphasis,
                tail,
            } => {
                let emphasis = if ctx.is_intense() { emphasis } else { "" };
                Cow::Owned(format!("{head}{emphasis}{tail}"))
            }
            Template::Lasting {
                lasting,
                brief,
                tail,
            } => {
                let lead = if ctx.has_duration_reference() {
                    lasting
                } else {
                    brief
                };
                Cow::Owned(format!("{lead}{tail}"))
            }
        }
    }
}

/// Which pool a reply is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PoolKey {
    Category(Category),
    Mood(MoodFamily),
}

/// The template pool for `key`.
#[must_use]
pub fn pool(key: PoolKey) -> &'static [Template] {
    match key {
        PoolKey::Category(Category::SelfWorth) => pools::SELF_WORTH,
        PoolKey::Category(Category::Anxiety) => pools::ANXIETY,
        PoolKey::Category(Category::Loneliness) => pools::LONELINESS,
        PoolKey::Category(Category::Anger) => pools::ANGER,
        PoolKey::Category(Category::Sadness) => pools::SADNESS,
        PoolKey::Category(Category::Sleep) => pools::SLEEP,
        PoolKey::Category(Category::Work) => pools::WORK,
        PoolKey::Category(Category::Relationship) => pools::RELATIONSHIP,
        PoolKey::Mood(MoodFamily::Positive) => pools::POSITIVE,
        PoolKey::Mood(MoodFamily::Negative) => pools::NEGATIVE,
        PoolKey::Mood(MoodFamily::Neutral) => pools::NEUTRAL,
    }
}

/// Pick one template from the pool uniformly at random and render it.
pub fn select_template<R: Rng + ?Sized>(
    key: PoolKey,
    ctx: &ContextRecord,
    rng: &mut R,
) -> String {
    let templates = pool(key);
    templates
        .choose(rng)
        .map(|template| template.render(ctx).into_owned())
        // Pools are non-empty const slices, choose only returns None on empty slices
        .unwrap_or_default()
}

/// Pick a continuation follow-up quoting `excerpt`.
pub fn select_follow_up<R: Rng + ?Sized>(excerpt: &str, rng: &mut R) -> String {
    match pools::FOLLOW_UPS.choose(rng) {
        Some((lead, question)) => format!("{lead} {excerpt}... {question}"),
        None => format!("{excerpt}..."),
    }
}

/// Pick a voice reply from the pool matching `label`.
///
/// Labels mentioning sadness, tiredness or low energy draw from the
/// low-energy pool; anxious, excited or high-energy labels from the
/// high-energy pool; anything else from the balanced pool.
pub fn select_voice_reply<R: Rng + ?Sized>(label: &str, rng: &mut R) -> String {
    let templates = voice_pool(label);
    templates
        .choose(rng)
        .map(|text| (*text).to_owned())
        .unwrap_or_default()
}

/// The voice pool selected by `label`.
#[must_use]
pub fn voice_pool(label: &str) -> &'static [&'static str] {
    let label = label.to_lowercase();
    if ["sad", "tired", "low energy"]
        .iter()
        .any(|needle| label.contains(needle))
    {
        pools::VOICE_LOW
    } else if ["anxious", "high energy", "excited"]
        .iter()
        .any(|needle| label.contains(needle))
    {
        pools::VOICE_HIGH
    } else {
        pools::VOICE_BALANCED
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::context::Intensity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn all_keys() -> Vec<PoolKey> {
        let mut keys: Vec<PoolKey> = Category::PRIORITY.into_iter().map(PoolKey::Category).collect();
        keys.extend([
            PoolKey::Mood(MoodFamily::Positive),
            PoolKey::Mood(MoodFamily::Neutral),
            PoolKey::Mood(MoodFamily::Negative),
        ]);
        keys
    }

    #[test]
    fn pools_hold_between_two_and_ten_templates() {
        for key in all_keys() {
            let n = pool(key).len();
            assert!((2..=10).contains(&n), "{key:?} has {n} templates");
        }
    }

    #[test]
    fn selection_comes_from_the_pool() {
        let ctx = ContextRecord::default();
        let mut rng = StdRng::seed_from_u64(7);
        for key in all_keys() {
            let rendered: Vec<String> = pool(key)
                .iter()
                .map(|t| t.render(&ctx).into_owned())
                .collect();
            for _ in 0..20 {
                let picked = select_template(key, &ctx, &mut rng);
                assert!(rendered.contains(&picked), "{key:?}: {picked}");
            }
        }
    }

    #[test]
    fn selection_covers_the_whole_pool() {
        let ctx = ContextRecord::default();
        let mut rng = StdRng::seed_from_u64(11);
        let key = PoolKey::Category(Category::Anxiety);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(select_template(key, &ctx, &mut rng));
        }
        assert_eq!(seen.len(), pool(key).len());
    }

    #[test]
    fn intensified_template_inserts_emphasis_only_when_high() {
        let template = Template::Intensified {
            head: "Anger",
            emphasis: " can be really intense",
            tail: ", and it matters.",
        };
        let calm = ContextRecord::default();
        assert_eq!(template.render(&calm), "Anger, and it matters.");

        let intense = ContextRecord {
            intensity: Intensity::High,
            ..ContextRecord::default()
        };
        assert_eq!(
            template.render(&intense),
            "Anger can be really intense, and it matters."
        );
    }

    #[test]
    fn lasting_template_switches_lead_on_duration() {
        let template = Template::Lasting {
            lasting: "Long. ",
            brief: "Short. ",
            tail: "Rest.",
        };
        let brief = ContextRecord {
            time_references: vec!["lately".into()],
            ..ContextRecord::default()
        };
        assert_eq!(template.render(&brief), "Short. Rest.");

        let lasting = ContextRecord {
            time_references: vec!["for months".into()],
            ..ContextRecord::default()
        };
        assert_eq!(template.render(&lasting), "Long. Rest.");
    }

    #[test]
    fn follow_up_quotes_the_excerpt() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let reply = select_follow_up("Tell me more about that.", &mut rng);
            assert!(reply.contains("Tell me more about that...."));
        }
    }

    /// First sentence of every template, rendered without context.
    const FIRST_SENTENCES: &[(PoolKey, &[&str])] = &[
        (
            PoolKey::Category(Category::SelfWorth),
            &[
                "I want to pause here for a moment",
                "Those thoughts about yourself are really painful, and I'm sorry you're experiencing them",
                "I hear how much pain you're in, and I want you to know that your worth isn't determined by your thoughts or feelings",
            ],
        ),
        (
            PoolKey::Category(Category::Anxiety),
            &[
                "I can hear how overwhelming this feels for you right now",
                "Your anxiety is valid, and you're not weak for feeling this way",
                "It sounds like your mind is racing with 'what ifs' right now",
                "Anxiety can make you feel like you're losing control, but you're not",
                "I hear you, and I want you to know that anxiety doesn't define you, it's something you're experiencing",
                "Anxiety often shows up when we're trying to control things we can't control",
            ],
        ),
        (
            PoolKey::Category(Category::Loneliness),
            &[
                "Loneliness is one of the most painful human experiences, and I'm sorry you're feeling it so deeply right now",
                "Feeling alone while carrying heavy emotions is incredibly difficult",
                "Loneliness can make you feel invisible, but you're not",
                "I hear how isolating this feels",
                "Your loneliness is real, and it hurts",
                "Loneliness can feel like a void",
            ],
        ),
        (
            PoolKey::Category(Category::Anger),
            &[
                "Anger is often a signal that something important to you feels threatened or disrespected",
                "I hear the intensity in what you're sharing",
                "Your anger is valid",
                "Anger can be protective, it's your system saying 'this isn't okay.' But when it's too intense, it can cloud your judgment",
                "Anger, and it's telling you something important",
            ],
        ),
        (
            PoolKey::Category(Category::Sadness),
            &[
                "I'm really sorry you're feeling this low",
                "It sounds like you're carrying a lot of heaviness inside",
                "I'm really glad you're putting words to how low you feel, that takes courage",
                "Your sadness is real, and it matters",
                "I hear how exhausted you are",
                "Depression, and I want you to know that what you're feeling is valid",
                "When depression is really heavy, it can make you feel like nothing will ever change",
            ],
        ),
        (
            PoolKey::Category(Category::Sleep),
            &[
                "Sleep issues can really impact everything else in your life",
                "Sleep problems and mental health are closely connected, they feed into each other",
                "Sleep and mental health are deeply connected",
            ],
        ),
        (
            PoolKey::Category(Category::Work),
            &[
                "Work stress can be overwhelming, especially when it feels like there's no escape",
                "Work pressure can make you feel like you're never doing enough",
                "Work stress, especially when it feels like there's no end in sight",
            ],
        ),
        (
            PoolKey::Category(Category::Relationship),
            &[
                "Relationship struggles can be some of the most painful experiences",
                "Relationship problems can make you feel stuck or hopeless",
                "Relationship challenges, especially when it's with someone you care about",
            ],
        ),
        (
            PoolKey::Mood(MoodFamily::Positive),
            &[
                "I'm genuinely happy to hear that there are some bright spots in your life right now",
                "It sounds like there's some lightness in your experience, and that's wonderful",
                "I'm glad you're experiencing some positive moments",
                "I'm genuinely happy to hear you're experiencing some positive moments",
            ],
        ),
        (
            PoolKey::Mood(MoodFamily::Negative),
            &[
                "Things sound really heavy for you right now",
                "You're going through a lot, and it makes sense that you feel this way",
                "I hear how difficult this is for you",
                "When things feel really heavy, it can be hard to see a way forward",
            ],
        ),
        (
            PoolKey::Mood(MoodFamily::Neutral),
            &[
                "Thank you for opening up and sharing this with me",
                "I'm here with you",
                "I appreciate you sharing this",
                "Thank you for trusting me with this",
                "I'm listening, and I hear you",
                "Thank you for sharing this",
            ],
        ),
    ];

    fn first_sentence(text: &str) -> &str {
        crate::personalize::split_first_sentence(text)
            .map(|(head, _)| head)
            .unwrap_or_else(|| panic!("no sentence break in {text:?}"))
    }

    #[test]
    fn every_template_breaks_after_its_first_sentence() {
        let ctx = ContextRecord::default();
        for (key, expected) in FIRST_SENTENCES {
            let heads: Vec<String> = pool(*key)
                .iter()
                .map(|t| first_sentence(&t.render(&ctx)).to_owned())
                .collect();
            assert_eq!(heads, *expected, "{key:?}");
        }
    }

    #[test]
    fn slot_variants_break_after_the_same_sentence() {
        let intense = ContextRecord {
            intensity: Intensity::High,
            ..ContextRecord::default()
        };
        let neutral = pool(PoolKey::Mood(MoodFamily::Neutral))[5].render(&intense);
        assert_eq!(
            first_sentence(&neutral),
            "Thank you for sharing this, I can hear how important this is to you"
        );
        let anger = pool(PoolKey::Category(Category::Anger))[4].render(&intense);
        assert_eq!(
            first_sentence(&anger),
            "Anger can be really intense, and it's telling you something important"
        );

        let lasting = ContextRecord {
            time_references: vec!["for weeks".into()],
            ..ContextRecord::default()
        };
        let negative = pool(PoolKey::Mood(MoodFamily::Negative))[3].render(&lasting);
        assert_eq!(
            first_sentence(&negative),
            "When things feel really heavy, especially when it's been going on for a while, \
             it can be hard to see a way forward"
        );
    }

    #[test]
    fn clause_lands_after_the_whole_first_sentence() {
        let Template::Plain(text) = pool(PoolKey::Category(Category::Sadness))[2] else {
            panic!("expected a plain template");
        };
        let clause = vec!["I can really feel the intensity of what you're experiencing.".to_owned()];
        let spliced = crate::personalize::splice(text, &clause, 2).unwrap();
        assert!(spliced.starts_with(
            "I'm really glad you're putting words to how low you feel, that takes courage. \
             I can really feel the intensity of what you're experiencing. \
             Depression can make you feel numb"
        ));
    }

    #[test]
    fn voice_pool_routing() {
        assert_eq!(
            voice_pool("very low energy / very short recording"),
            pools::VOICE_LOW
        );
        assert_eq!(voice_pool("feeling sad"), pools::VOICE_LOW);
        assert_eq!(
            voice_pool("high energy / long or loud recording"),
            pools::VOICE_HIGH
        );
        assert_eq!(voice_pool("excited"), pools::VOICE_HIGH);
        assert_eq!(voice_pool("low to moderate energy"), pools::VOICE_BALANCED);
        assert_eq!(voice_pool("moderate energy"), pools::VOICE_BALANCED);
        assert_eq!(voice_pool(""), pools::VOICE_BALANCED);
    }
}
