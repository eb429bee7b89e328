//! TugSQL lexer library
//!
//! Turns annotated SQL source into position-tagged tokens for a downstream
//! query compiler.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{ConfigError, TugError, TugResult};
pub use lexer::{
    lex, lex_comment, lex_name, lex_result, DirectiveParts, Lexer, LexerConfig, NameParts,
    Position, ResultParts, Tag, Token,
};
