//! Versioned command/response envelopes for the stdio host bridge.

use serde::{Deserialize, Serialize};

/// Contract version for host envelopes.
pub const CONTRACT_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONTRACT_VERSION
}

/// Command set understood by the host bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandName {
    #[serde(rename = "chat.reply")]
    ChatReply,
    #[serde(rename = "voice.analyze")]
    VoiceAnalyze,
    #[serde(rename = "host.health")]
    HostHealth,
    #[serde(rename = "host.stop")]
    HostStop,
}

impl CommandName {
    /// Render command name to wire format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChatReply => "chat.reply",
            Self::VoiceAnalyze => "voice.analyze",
            Self::HostHealth => "host.health",
            Self::HostStop => "host.stop",
        }
    }

    /// Parse a command name from wire format.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "chat.reply" => Some(Self::ChatReply),
            "voice.analyze" => Some(Self::VoiceAnalyze),
            "host.health" => Some(Self::HostHealth),
            "host.stop" => Some(Self::HostStop),
            _ => None,
        }
    }
}

/// A command envelope from caller -> host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    #[serde(default = "default_version")]
    pub v: u32,
    pub id: String,
    pub command: CommandName,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl CommandEnvelope {
    /// Build a command envelope at the current contract version.
    #[must_use]
    pub fn new(id: impl Into<String>, command: CommandName, payload: serde_json::Value) -> Self {
        Self {
            v: CONTRACT_VERSION,
            id: id.into(),
            command,
            payload,
        }
    }

    /// Validate envelope version and required identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolaceError::Payload`] describing the first problem.
    pub fn validate(&self) -> crate::Result<()> {
        if self.v != CONTRACT_VERSION {
            return Err(crate::SolaceError::Payload(format!(
                "unsupported contract version {}; expected {}",
                self.v, CONTRACT_VERSION
            )));
        }
        if self.id.trim().is_empty() {
            return Err(crate::SolaceError::Payload("id cannot be empty".to_owned()));
        }
        Ok(())
    }
}

/// A response envelope from host -> caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub v: u32,
    pub id: String,
    pub ok: bool,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Build a successful response envelope.
    #[must_use]
    pub fn ok(id: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            v: CONTRACT_VERSION,
            id: id.into(),
            ok: true,
            payload,
            error: None,
        }
    }

    /// Build an error response envelope.
    #[must_use]
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            v: CONTRACT_VERSION,
            id: id.into(),
            ok: false,
            payload: serde_json::Value::Null,
            error: Some(message.into()),
        }
    }
}

// ── Payloads ────────────────────────────────────────────────────────────

/// `chat.reply` request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Raw turns, validated by [`crate::conversation::parse_history`].
    #[serde(default)]
    pub conversation_history: serde_json::Value,
}

/// `voice.analyze` request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRequest {
    /// Uploaded audio, standard base64.
    pub audio_base64: String,
}

/// `host.health` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "ok".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn command_names_round_trip_through_wire_form() {
        for name in [
            CommandName::ChatReply,
            CommandName::VoiceAnalyze,
            CommandName::HostHealth,
            CommandName::HostStop,
        ] {
            assert_eq!(CommandName::parse(name.as_str()), Some(name));
            let json = serde_json::to_value(name).unwrap();
            assert_eq!(json, json!(name.as_str()));
        }
        assert_eq!(CommandName::parse("runtime.start"), None);
    }

    #[test]
    fn version_and_payload_default_when_omitted() {
        let env: CommandEnvelope =
            serde_json::from_value(json!({"id": "1", "command": "host.health"})).unwrap();
        assert_eq!(env.v, CONTRACT_VERSION);
        assert!(env.payload.is_null());
        assert!(env.validate().is_ok());
    }

    #[test]
    fn validate_rejects_wrong_version_and_blank_id() {
        let mut env = CommandEnvelope::new("req", CommandName::HostHealth, json!({}));
        env.v = 9;
        assert!(env.validate().unwrap_err().to_string().contains("version 9"));

        let env = CommandEnvelope::new("  ", CommandName::HostHealth, json!({}));
        assert!(env.validate().is_err());
    }

    #[test]
    fn error_response_omits_payload_content() {
        let resp = ResponseEnvelope::error("req-1", "bad");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "bad");
        assert!(json["payload"].is_null());
    }

    #[test]
    fn ok_response_has_no_error_field() {
        let resp = ResponseEnvelope::ok("req-1", json!({"status": "ok"}));
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn chat_request_history_is_optional() {
        let req: ChatRequest = serde_json::from_value(json!({"message": "hi"})).unwrap();
        assert!(req.conversation_history.is_null());
    }
}
