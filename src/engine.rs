//! Reply engine: ties scoring, matching, selection and personalization
//! together for a single request.
//!
//! The engine holds only read-only state (configuration and a scorer), so a
//! single instance can serve concurrent requests behind an `Arc`. Every
//! random decision draws from the caller's RNG.

use crate::category::{Category, looks_like_continuation, match_category};
use crate::config::SolaceConfig;
use crate::context::extract_context;
use crate::conversation::{Turn, last_bot_text};
use crate::mood::{Mood, MoodFamily};
use crate::personalize::personalize;
use crate::polarity::{LexiconScorer, PolarityScorer};
use crate::responses::{PoolKey, select_follow_up, select_template, select_voice_reply};
use crate::voice::{VoiceFeatures, classify_voice};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum ReplySource {
    /// Follow-up to the previous bot turn.
    Continuation,
    /// Pool of a matched category.
    Category(Category),
    /// Pool of the mood family when no category matched.
    MoodFallback(MoodFamily),
}

/// A generated reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
    /// Whether personalization clauses were spliced in.
    pub personalized: bool,
}

/// Reply to a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub mood: Mood,
    pub sentiment_score: f64,
    pub reply: String,
    pub source: ReplySource,
    pub personalized: bool,
}

/// Reply to a voice upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceReply {
    pub mood: String,
    pub energy: f64,
    pub tempo: f64,
    pub reply: String,
}

/// Stateless reply engine.
pub struct ReplyEngine {
    config: SolaceConfig,
    scorer: Box<dyn PolarityScorer>,
}

impl std::fmt::Debug for ReplyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for ReplyEngine {
    fn default() -> Self {
        Self::new(SolaceConfig::default())
    }
}

impl ReplyEngine {
    /// Create an engine using the built-in lexicon scorer.
    #[must_use]
    pub fn new(config: SolaceConfig) -> Self {
        Self::with_scorer(config, LexiconScorer::new())
    }

    /// Create an engine with a custom polarity scorer.
    pub fn with_scorer(config: SolaceConfig, scorer: impl PolarityScorer + 'static) -> Self {
        Self {
            config,
            scorer: Box::new(scorer),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SolaceConfig {
        &self.config
    }

    /// Score `text` and bucket it into a mood.
    ///
    /// Scores outside `[-1, 1]` from a custom scorer are clamped; NaN is
    /// treated as neutral.
    #[must_use]
    pub fn classify_mood(&self, text: &str) -> (Mood, f64) {
        let raw = self.scorer.score(text);
        let score = if raw.is_nan() {
            0.0
        } else {
            raw.clamp(-1.0, 1.0)
        };
        let mood = Mood::from_score(score);
        tracing::debug!(score, %mood, "mood classified");
        (mood, score)
    }

    /// Produce a reply for `text`.
    ///
    /// Order of precedence: continuation follow-up, matched category, mood
    /// family fallback. `history` is assumed validated and already trimmed.
    pub fn generate_reply<R: Rng + ?Sized>(
        &self,
        text: &str,
        mood: Mood,
        history: &[Turn],
        rng: &mut R,
    ) -> Reply {
        let reply_cfg = &self.config.reply;

        if !history.is_empty()
            && looks_like_continuation(text, reply_cfg.continuation_window_chars)
            && let Some(previous) = last_bot_text(history)
            && rng.r#gen::<f64>() < reply_cfg.continuation_probability
        {
            let excerpt: String = previous
                .chars()
                .take(reply_cfg.continuation_excerpt_chars)
                .collect();
            tracing::debug!("continuation follow-up");
            return Reply {
                text: select_follow_up(&excerpt, rng),
                source: ReplySource::Continuation,
                personalized: false,
            };
        }

        let ctx = extract_context(text, history, &self.config.context);

        let (key, source) = match match_category(text) {
            Some(category) => (PoolKey::Category(category), ReplySource::Category(category)),
            None => {
                let family = mood.family();
                (PoolKey::Mood(family), ReplySource::MoodFallback(family))
            }
        };

        let template = select_template(key, &ctx, rng);

        // Anxiety replies are returned as written.
        if source == ReplySource::Category(Category::Anxiety) {
            tracing::debug!(?source, "reply selected");
            return Reply {
                text: template,
                source,
                personalized: false,
            };
        }

        let out = personalize(
            &template,
            text,
            &ctx,
            reply_cfg,
            &self.config.context,
            rng,
        );
        tracing::debug!(?source, personalized = out.spliced, "reply selected");
        Reply {
            text: out.text,
            source,
            personalized: out.spliced,
        }
    }

    /// Classify and reply to a chat message in one call.
    pub fn respond<R: Rng + ?Sized>(&self, text: &str, history: &[Turn], rng: &mut R) -> ChatReply {
        let (mood, sentiment_score) = self.classify_mood(text);
        let reply = self.generate_reply(text, mood, history, rng);
        ChatReply {
            mood,
            sentiment_score,
            reply: reply.text,
            source: reply.source,
            personalized: reply.personalized,
        }
    }

    /// Energy features of a voice upload.
    #[must_use]
    pub fn classify_voice(&self, audio: &[u8]) -> VoiceFeatures {
        classify_voice(audio)
    }

    /// Classify a voice upload and pick a reply for its energy label.
    pub fn voice_reply<R: Rng + ?Sized>(&self, audio: &[u8], rng: &mut R) -> VoiceReply {
        let features = self.classify_voice(audio);
        let reply = select_voice_reply(&features.mood, rng);
        VoiceReply {
            mood: features.mood,
            energy: features.energy,
            tempo: features.tempo,
            reply,
        }
    }
}
