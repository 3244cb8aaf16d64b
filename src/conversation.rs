//! Conversation turns supplied by the caller with each request.
//!
//! History is request-scoped: nothing here is stored between calls. The
//! boundary validates raw JSON with [`parse_history`] so the core can assume
//! every turn is well formed.

use crate::error::{Result, SolaceError};
use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "assistant")]
    Bot,
}

impl Role {
    /// Parse a wire role name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Role::User),
            "bot" | "assistant" => Some(Role::Bot),
            _ => None,
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// A user-authored turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// A bot-authored turn.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }
}

/// Validate a raw JSON history.
///
/// `null` is an empty history. Anything else must be an array of objects
/// with a string `role` (`user`, `bot` or `assistant`) and a string `content`.
///
/// # Errors
///
/// Returns [`SolaceError::InvalidTurn`] for the first malformed entry, or for
/// index 0 when the value is not an array at all.
pub fn parse_history(raw: &serde_json::Value) -> Result<Vec<Turn>> {
    let items = match raw {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Array(items) => items,
        other => {
            return Err(SolaceError::InvalidTurn {
                index: 0,
                reason: format!("history must be an array, got {}", json_kind(other)),
            });
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_turn(index, item))
        .collect()
}

fn parse_turn(index: usize, item: &serde_json::Value) -> Result<Turn> {
    let invalid = |reason: String| SolaceError::InvalidTurn { index, reason };

    let obj = item
        .as_object()
        .ok_or_else(|| invalid(format!("expected an object, got {}", json_kind(item))))?;

    let role_raw = obj
        .get("role")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| invalid("missing string field `role`".to_owned()))?;
    let role = Role::parse(role_raw).ok_or_else(|| invalid(format!("unknown role `{role_raw}`")))?;

    let content = obj
        .get("content")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| invalid("missing string field `content`".to_owned()))?;

    Ok(Turn {
        role,
        content: content.to_owned(),
    })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// The last `max_turns` turns of `history`, oldest first.
#[must_use]
pub fn recent_turns(history: &[Turn], max_turns: usize) -> &[Turn] {
    let start = history.len().saturating_sub(max_turns);
    &history[start..]
}

/// Lowercased content of every user turn, in order.
pub(crate) fn user_texts(history: &[Turn]) -> Vec<String> {
    history
        .iter()
        .filter(|turn| turn.role == Role::User)
        .map(|turn| turn.content.to_lowercase())
        .collect()
}

/// Content of the most recent bot turn with non-empty text.
pub(crate) fn last_bot_text(history: &[Turn]) -> Option<&str> {
    history
        .iter()
        .rev()
        .find(|turn| turn.role == Role::Bot)
        .map(|turn| turn.content.as_str())
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn null_history_is_empty() {
        assert!(parse_history(&serde_json::Value::Null).unwrap().is_empty());
    }

    #[test]
    fn parses_well_formed_turns() {
        let raw = json!([
            {"role": "user", "content": "I can't sleep"},
            {"role": "assistant", "content": "That sounds hard."},
            {"role": "bot", "content": "Tell me more."},
        ]);
        let turns = parse_history(&raw).unwrap();
        assert_eq!(
            turns,
            vec![
                Turn::user("I can't sleep"),
                Turn::bot("That sounds hard."),
                Turn::bot("Tell me more."),
            ]
        );
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_history(&json!({"role": "user"})).unwrap_err();
        assert!(matches!(err, SolaceError::InvalidTurn { index: 0, .. }));
    }

    #[test]
    fn rejects_missing_content_with_index() {
        let raw = json!([
            {"role": "user", "content": "hi"},
            {"role": "bot"},
        ]);
        match parse_history(&raw).unwrap_err() {
            SolaceError::InvalidTurn { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("content"));
            }
            other => panic!("expected InvalidTurn, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let raw = json!([{"role": "system", "content": "x"}]);
        let err = parse_history(&raw).unwrap_err();
        assert!(err.to_string().contains("unknown role `system`"));
    }

    #[test]
    fn rejects_non_string_content() {
        let raw = json!([{"role": "user", "content": 42}]);
        assert!(parse_history(&raw).is_err());
    }

    #[test]
    fn recent_turns_keeps_the_tail() {
        let history: Vec<Turn> = (0..5).map(|i| Turn::user(format!("m{i}"))).collect();
        let recent = recent_turns(&history, 2);
        assert_eq!(recent, &[Turn::user("m3"), Turn::user("m4")]);
        assert_eq!(recent_turns(&history, 10).len(), 5);
    }

    #[test]
    fn last_bot_text_skips_user_turns() {
        let history = vec![
            Turn::bot("first"),
            Turn::user("hello"),
            Turn::bot("second"),
            Turn::user("again"),
        ];
        assert_eq!(last_bot_text(&history), Some("second"));
        assert_eq!(last_bot_text(&[Turn::user("only me")]), None);
    }

    #[test]
    fn empty_bot_text_counts_as_absent() {
        let history = vec![Turn::bot("earlier"), Turn::bot("")];
        assert_eq!(last_bot_text(&history), None);
    }

    #[test]
    fn serde_round_trip_uses_lowercase_roles() {
        let json = serde_json::to_string(&Turn::bot("ok")).unwrap();
        assert_eq!(json, r#"{"role":"bot","content":"ok"}"#);
    }
}
