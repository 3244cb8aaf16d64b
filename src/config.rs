//! Configuration for the reply engine and the host bridge.
//!
//! Every default reproduces the engine's stock behaviour, so an empty or
//! missing config file yields the standard companion.

use crate::error::{Result, SolaceError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    /// Reply selection and personalization settings.
    pub reply: ReplyConfig,
    /// Context extraction settings.
    pub context: ContextConfig,
    /// Conversation history trimming applied at the boundary.
    pub history: HistoryConfig,
}

/// Reply selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    /// Chance that eligible personalization clauses are spliced into a reply.
    pub personalize_probability: f64,
    /// Chance that a detected continuation is answered with a follow-up.
    pub continuation_probability: f64,
    /// Maximum number of clauses spliced into a single reply.
    pub max_spliced_clauses: usize,
    /// Number of leading characters scanned for acknowledgment phrases.
    pub continuation_window_chars: usize,
    /// Number of characters of the previous bot turn quoted in a follow-up.
    pub continuation_excerpt_chars: usize,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            personalize_probability: 0.7,
            continuation_probability: 0.5,
            max_spliced_clauses: 2,
            continuation_window_chars: 20,
            continuation_excerpt_chars: 50,
        }
    }
}

/// Context extraction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Distinct theme keywords needed before a theme counts as recurring.
    pub recurring_theme_threshold: usize,
    /// How many of the latest user turns are kept as previous topics.
    pub previous_topic_window: usize,
    /// Leading words of the latest topic checked for overlap with the message.
    pub topic_overlap_words: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            recurring_theme_threshold: 2,
            previous_topic_window: 3,
            topic_overlap_words: 3,
        }
    }
}

/// History trimming settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Most recent turns kept from a caller-supplied history.
    pub max_turns: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_turns: 10 }
    }
}

impl SolaceConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| SolaceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SolaceError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/solace/config.toml`.
    pub fn default_config_path() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join("solace").join("config.toml"),
            None => PathBuf::from("/tmp/solace-config/config.toml"),
        }
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SolaceError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        check_probability("reply.personalize_probability", self.reply.personalize_probability)?;
        check_probability(
            "reply.continuation_probability",
            self.reply.continuation_probability,
        )?;
        check_nonzero("reply.max_spliced_clauses", self.reply.max_spliced_clauses)?;
        check_nonzero(
            "reply.continuation_window_chars",
            self.reply.continuation_window_chars,
        )?;
        check_nonzero(
            "context.recurring_theme_threshold",
            self.context.recurring_theme_threshold,
        )?;
        check_nonzero(
            "context.previous_topic_window",
            self.context.previous_topic_window,
        )?;
        check_nonzero("history.max_turns", self.history.max_turns)?;
        Ok(())
    }
}

fn check_probability(field: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SolaceError::Config(format!(
            "{field} must be within 0.0..=1.0, got {value}"
        )))
    }
}

fn check_nonzero(field: &str, value: usize) -> Result<()> {
    if value == 0 {
        Err(SolaceError::Config(format!("{field} must be greater than zero")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_config_matches_stock_behaviour() {
        let config = SolaceConfig::default();
        assert_eq!(config.reply.personalize_probability, 0.7);
        assert_eq!(config.reply.continuation_probability, 0.5);
        assert_eq!(config.reply.max_spliced_clauses, 2);
        assert_eq!(config.reply.continuation_window_chars, 20);
        assert_eq!(config.reply.continuation_excerpt_chars, 50);
        assert_eq!(config.context.recurring_theme_threshold, 2);
        assert_eq!(config.context.previous_topic_window, 3);
        assert_eq!(config.history.max_turns, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = SolaceConfig::default();
        config.reply.personalize_probability = 0.25;
        config.history.max_turns = 4;
        config.save_to_file(&path).unwrap();

        let loaded = SolaceConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[reply]\ncontinuation_probability = 1.0\n").unwrap();

        let loaded = SolaceConfig::from_file(&path).unwrap();
        assert_eq!(loaded.reply.continuation_probability, 1.0);
        assert_eq!(loaded.reply.personalize_probability, 0.7);
        assert_eq!(loaded.context, ContextConfig::default());
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = SolaceConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(SolaceError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();
        let result = SolaceConfig::from_file(&path);
        assert!(matches!(result, Err(SolaceError::Config(_))));
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let mut config = SolaceConfig::default();
        config.reply.personalize_probability = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reply.personalize_probability"));
    }

    #[test]
    fn zero_history_window_is_rejected() {
        let mut config = SolaceConfig::default();
        config.history.max_turns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = SolaceConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("solace"));
    }
}
