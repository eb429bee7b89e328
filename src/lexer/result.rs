//! Result segments: `:keyword rest`

use super::config::LexerConfig;
use super::scan::{directive, trim_advance, width};
use super::token::{Tag, Token};

/// A segment split into its leading directive and the verbatim remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultParts {
    pub keyword: Token,
    /// Everything after the keyword, leading whitespace included
    pub rest: Token,
}

/// Split a segment using the default configuration
pub fn lex_result(token: &Token) -> Option<ResultParts> {
    lex_result_with(token, &LexerConfig::default())
}

/// Split a segment token that opens with a directive.
///
/// Unlike [`lex_name`](super::name::lex_name) the remainder is not
/// separated from the keyword by whitespace: `":raw stuff"` leaves
/// `" stuff"`.
pub fn lex_result_with(token: &Token, config: &LexerConfig) -> Option<ResultParts> {
    let (text, start) = trim_advance(token.value()?, &token.position);
    let Ok((rest, keyword)) = directive(text, config.directive_prefix) else {
        log::debug!("no result directive in {}", token);
        return None;
    };

    let rest_at = start.advance_cols(width(keyword));
    let rest = (!rest.is_empty()).then(|| rest.to_owned());
    Some(ResultParts {
        keyword: Token::text(Tag::Keyword, keyword, start),
        rest: Token::new(Tag::Segment, rest, rest_at),
    })
}
