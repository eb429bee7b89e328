//! Lexical analysis for TugSQL.
//!
//! Source text is first split into one token per line by [`Lexer`]. Comment
//! lines can then be taken apart by [`lex_comment`], and the segment it
//! leaves behind by [`lex_name`] or [`lex_result`], depending on which
//! directive the caller is reading. Every sub-token carries the position of
//! its first character in the original source.

pub mod config;
pub mod directive;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod line;
pub mod name;
pub mod position;
pub mod result;
mod scan;
pub mod token;

pub use config::LexerConfig;
pub use directive::{lex_comment, lex_comment_with, DirectiveParts};
pub use lexer::{format_tokens, lex, lex_with, tokens_to_json, Lexer};
pub use name::{lex_name, lex_name_with, NameParts};
pub use position::{advance, Position};
pub use result::{lex_result, lex_result_with, ResultParts};
pub use token::{Tag, Token};
