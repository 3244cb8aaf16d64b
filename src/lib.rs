//! Solace: rule-based mood classification and personalized replies for a
//! supportive chat companion.
//!
//! A message flows through a fixed pipeline:
//! Polarity score → Mood → Category (or continuation) → Template → Personalization
//!
//! # Architecture
//!
//! - **Polarity**: a lexicon scorer behind the [`PolarityScorer`] trait
//! - **Mood**: five buckets from the polarity score
//! - **Context**: people, time references, intensity and recurring themes
//!   mined from the message and caller-supplied history
//! - **Category**: keyword sets checked in a fixed priority order
//! - **Responses**: immutable template pools, chosen uniformly at random
//! - **Personalize**: context clauses spliced after the first sentence
//! - **Voice**: an energy bucket from upload size alone
//!
//! The core is synchronous and holds no mutable state; the only async code
//! is the stdio host bridge in [`host`].

pub mod category;
pub mod config;
pub mod context;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod host;
pub mod mood;
pub mod personalize;
pub mod polarity;
pub mod responses;
pub mod voice;

pub use config::SolaceConfig;
pub use conversation::{Role, Turn};
pub use engine::{ChatReply, Reply, ReplyEngine, ReplySource, VoiceReply};
pub use error::{Result, SolaceError};
pub use mood::Mood;
pub use polarity::{LexiconScorer, PolarityScorer};
