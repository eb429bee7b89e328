//! Unified error handling.
//!
//! Lexing and extraction never fail: a line always becomes a token and an
//! extractor that does not match returns `None`. The errors here cover the
//! ambient surface around the core: configuring the lexer, parsing tag codes
//! and dumping tokens.

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TugError {
    /// Invalid lexer configuration
    #[error("invalid lexer configuration: {0}")]
    Config(#[from] ConfigError),

    /// A one-letter tag code that names no tag
    #[error("unknown token tag code: '{code}'")]
    UnknownTag { code: String },

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(String),
}

/// Details of a rejected [`LexerConfig`](crate::lexer::LexerConfig)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("comment marker must not be empty")]
    EmptyCommentMarker,

    #[error("comment marker {marker:?} contains whitespace")]
    WhitespaceInCommentMarker { marker: String },

    #[error("directive prefix {prefix:?} is whitespace")]
    WhitespacePrefix { prefix: char },

    #[error("directive prefix {prefix:?} collides with comment marker {marker:?}")]
    PrefixCollidesWithMarker { prefix: char, marker: String },
}

impl From<serde_json::Error> for TugError {
    fn from(err: serde_json::Error) -> Self {
        TugError::Json(err.to_string())
    }
}

/// Result alias used across the crate
pub type TugResult<T> = Result<T, TugError>;
