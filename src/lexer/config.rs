//! Lexer configuration

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TugResult};

pub const DEFAULT_COMMENT_MARKER: &str = "--";
pub const DEFAULT_DIRECTIVE_PREFIX: char = ':';

/// Markers the lexer and extractors look for.
///
/// Missing fields fall back to the SQL defaults when loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Prefix that turns a line into a comment
    pub comment_marker: String,
    /// First character of a directive word
    pub directive_prefix: char,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER.to_owned(),
            directive_prefix: DEFAULT_DIRECTIVE_PREFIX,
        }
    }
}

impl LexerConfig {
    /// Build and validate a configuration
    pub fn new(comment_marker: impl Into<String>, directive_prefix: char) -> TugResult<Self> {
        let config = Self {
            comment_marker: comment_marker.into(),
            directive_prefix,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON, e.g. `{"comment_marker": "#"}`
    pub fn from_json(json: &str) -> TugResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TugResult<()> {
        let marker = &self.comment_marker;
        if marker.is_empty() {
            return Err(ConfigError::EmptyCommentMarker.into());
        }
        if marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInCommentMarker {
                marker: marker.clone(),
            }
            .into());
        }
        if self.directive_prefix.is_whitespace() {
            return Err(ConfigError::WhitespacePrefix {
                prefix: self.directive_prefix,
            }
            .into());
        }
        if marker.starts_with(self.directive_prefix) {
            return Err(ConfigError::PrefixCollidesWithMarker {
                prefix: self.directive_prefix,
                marker: marker.clone(),
            }
            .into());
        }
        Ok(())
    }
}
