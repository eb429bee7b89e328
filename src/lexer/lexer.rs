//! Line lexer

use super::config::LexerConfig;
use super::line::Lines;
use super::position::Position;
use super::scan::trim_advance;
use super::token::{Tag, Token};
use crate::error::TugResult;

/// Splits TugSQL source into one token per line.
///
/// Each line is tagged [`Tag::Comment`] when its trimmed text starts with the
/// comment marker and [`Tag::Query`] otherwise. A token's position is the
/// first non-whitespace character of its line.
pub struct Lexer<'a> {
    lines: Lines<'a>,
    position: Position,
    config: LexerConfig,
}

impl<'a> Lexer<'a> {
    /// Lexer with the default configuration, starting after `start`
    pub fn new(source: &'a str, start: Position) -> Self {
        Self::with_config(source, start, LexerConfig::default())
    }

    pub fn with_config(source: &'a str, start: Position, config: LexerConfig) -> Self {
        Self {
            lines: Lines::new(source),
            position: start,
            config,
        }
    }

    /// Drain the lexer into a vector
    pub fn collect_tokens(self) -> Vec<Token> {
        self.collect()
    }

    fn categorize(&self, line: &str) -> Token {
        let (text, position) = trim_advance(line, &self.position);
        let tag = if text.starts_with(self.config.comment_marker.as_str()) {
            Tag::Comment
        } else {
            Tag::Query
        };
        Token::text(tag, text, position)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.position = self.position.advance_lines(1);
        let token = self.categorize(line);
        log::trace!("lexed {}", token);
        Some(token)
    }
}

/// Tokenize `source` with the default configuration
pub fn lex(source: &str, start: Position) -> Vec<Token> {
    Lexer::new(source, start).collect_tokens()
}

/// Tokenize `source` with an explicit configuration
pub fn lex_with(source: &str, start: Position, config: &LexerConfig) -> Vec<Token> {
    Lexer::with_config(source, start, config.clone()).collect_tokens()
}

/// Debugging aid: one token per line
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON dump of a token stream
pub fn tokens_to_json(tokens: &[Token]) -> TugResult<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
