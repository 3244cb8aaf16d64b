//! Command dispatch for the host bridge.
//!
//! [`HostHandler`] validates request payloads at the boundary (history
//! turns, base64 audio) and hands clean values to the [`ReplyEngine`].
//! Every failure becomes an error [`ResponseEnvelope`]; nothing here aborts
//! the bridge.

use crate::conversation::{parse_history, recent_turns};
use crate::engine::ReplyEngine;
use crate::error::{Result, SolaceError};
use crate::host::contract::{
    ChatRequest, CommandEnvelope, CommandName, HealthStatus, ResponseEnvelope, VoiceRequest,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Dispatches command envelopes to the reply engine.
#[derive(Debug)]
pub struct HostHandler {
    engine: ReplyEngine,
    rng: StdRng,
}

impl HostHandler {
    /// Handler drawing randomness from an entropy-seeded generator.
    #[must_use]
    pub fn new(engine: ReplyEngine) -> Self {
        Self::with_rng(engine, StdRng::from_entropy())
    }

    /// Handler with an explicit generator.
    #[must_use]
    pub fn with_rng(engine: ReplyEngine, rng: StdRng) -> Self {
        Self { engine, rng }
    }

    /// The engine serving requests.
    #[must_use]
    pub fn engine(&self) -> &ReplyEngine {
        &self.engine
    }

    /// Handle one envelope, always producing a response.
    pub fn handle(&mut self, envelope: &CommandEnvelope) -> ResponseEnvelope {
        match self.dispatch(envelope) {
            Ok(payload) => ResponseEnvelope::ok(envelope.id.clone(), payload),
            Err(e) => {
                tracing::warn!(
                    id = %envelope.id,
                    command = envelope.command.as_str(),
                    error = %e,
                    "command rejected"
                );
                ResponseEnvelope::error(envelope.id.clone(), e.to_string())
            }
        }
    }

    fn dispatch(&mut self, envelope: &CommandEnvelope) -> Result<serde_json::Value> {
        envelope.validate()?;
        match envelope.command {
            CommandName::ChatReply => self.chat_reply(&envelope.payload),
            CommandName::VoiceAnalyze => self.voice_analyze(&envelope.payload),
            CommandName::HostHealth | CommandName::HostStop => to_value(&HealthStatus::default()),
        }
    }

    fn chat_reply(&mut self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let request: ChatRequest = serde_json::from_value(payload.clone())
            .map_err(|e| SolaceError::Payload(format!("invalid chat.reply payload: {e}")))?;
        let history = parse_history(&request.conversation_history)?;
        let history = recent_turns(&history, self.engine.config().history.max_turns);

        let reply = self.engine.respond(&request.message, history, &mut self.rng);
        tracing::debug!(mood = %reply.mood, source = ?reply.source, "chat reply");
        to_value(&reply)
    }

    fn voice_analyze(&mut self, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let request: VoiceRequest = serde_json::from_value(payload.clone())
            .map_err(|e| SolaceError::Payload(format!("invalid voice.analyze payload: {e}")))?;
        let audio = STANDARD
            .decode(request.audio_base64.trim())
            .map_err(|e| SolaceError::Payload(format!("audio_base64 is not valid base64: {e}")))?;

        let reply = self.engine.voice_reply(&audio, &mut self.rng);
        to_value(&reply)
    }
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| SolaceError::Bridge(format!("failed to serialize payload: {e}")))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    fn handler() -> HostHandler {
        HostHandler::with_rng(ReplyEngine::default(), StdRng::seed_from_u64(21))
    }

    #[test]
    fn health_reports_ok() {
        let resp = handler().handle(&CommandEnvelope::new("h", CommandName::HostHealth, json!({})));
        assert!(resp.ok);
        assert_eq!(resp.payload["status"], "ok");
    }

    #[test]
    fn chat_reply_has_mood_score_and_reply() {
        let env = CommandEnvelope::new(
            "c1",
            CommandName::ChatReply,
            json!({"message": "I feel really anxious about my exam"}),
        );
        let resp = handler().handle(&env);
        assert!(resp.ok, "{:?}", resp.error);
        assert_eq!(resp.id, "c1");
        assert!(resp.payload["mood"].is_string());
        assert!(resp.payload["sentiment_score"].is_number());
        assert!(!resp.payload["reply"].as_str().unwrap().is_empty());
        assert_eq!(resp.payload["source"]["name"], "anxiety");
    }

    #[test]
    fn malformed_history_is_rejected_with_index() {
        let env = CommandEnvelope::new(
            "c2",
            CommandName::ChatReply,
            json!({"message": "yes", "conversation_history": [{"role": "user"}]}),
        );
        let resp = handler().handle(&env);
        assert!(!resp.ok);
        assert!(resp.error.unwrap().contains("index 0"));
    }

    #[test]
    fn missing_message_is_a_payload_error() {
        let env = CommandEnvelope::new("c3", CommandName::ChatReply, json!({}));
        let resp = handler().handle(&env);
        assert!(!resp.ok);
        assert!(resp.error.unwrap().contains("chat.reply"));
    }

    #[test]
    fn voice_analyze_decodes_base64() {
        let audio = vec![0u8; 90 * 1024];
        let env = CommandEnvelope::new(
            "v1",
            CommandName::VoiceAnalyze,
            json!({"audio_base64": STANDARD.encode(&audio)}),
        );
        let resp = handler().handle(&env);
        assert!(resp.ok, "{:?}", resp.error);
        assert_eq!(resp.payload["mood"], "moderate energy");
        assert_eq!(resp.payload["tempo"], 100.0);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let env = CommandEnvelope::new(
            "v2",
            CommandName::VoiceAnalyze,
            json!({"audio_base64": "***not base64***"}),
        );
        let resp = handler().handle(&env);
        assert!(!resp.ok);
        assert!(resp.error.unwrap().contains("base64"));
    }
}
