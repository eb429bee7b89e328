//! Named segments: `name :keyword rest`

use nom::{combinator::opt, IResult};

use super::config::LexerConfig;
use super::scan::{directive, trim_advance, whitespace, width, word};
use super::token::{Tag, Token};

/// A segment split into a name, an optional directive and the remainder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub name: Token,
    /// Absent payload when no directive follows the name
    pub keyword: Token,
    /// Absent payload when nothing follows
    pub rest: Token,
}

struct NameMatch<'a> {
    name: &'a str,
    name_ws: &'a str,
    keyword: Option<&'a str>,
    keyword_ws: &'a str,
    rest: &'a str,
}

fn named_segment<'a>(input: &'a str, prefix: char) -> IResult<&'a str, NameMatch<'a>> {
    let (input, name) = word(input)?;
    let (input, name_ws) = whitespace(input)?;
    let (input, keyword) = opt(|i: &'a str| directive(i, prefix))(input)?;
    let (rest, keyword_ws) = whitespace(input)?;
    Ok((
        "",
        NameMatch {
            name,
            name_ws,
            keyword,
            keyword_ws,
            rest,
        },
    ))
}

/// Split a segment using the default configuration
pub fn lex_name(token: &Token) -> Option<NameParts> {
    lex_name_with(token, &LexerConfig::default())
}

/// Split a segment token into `name`, `keyword` and `rest`.
///
/// The keyword position is where a directive would start even when there is
/// none, so a missing keyword and the rest share a column.
pub fn lex_name_with(token: &Token, config: &LexerConfig) -> Option<NameParts> {
    let (text, start) = trim_advance(token.value()?, &token.position);
    let Ok((_, m)) = named_segment(text, config.directive_prefix) else {
        log::debug!("no name in {}", token);
        return None;
    };

    let keyword_at = start.advance_cols(width(m.name) + width(m.name_ws));
    let rest_at = keyword_at.advance_cols(m.keyword.map_or(0, width) + width(m.keyword_ws));
    let rest = (!m.rest.is_empty()).then(|| m.rest.to_owned());
    Some(NameParts {
        name: Token::text(Tag::Name, m.name, start),
        keyword: Token::new(Tag::Keyword, m.keyword.map(str::to_owned), keyword_at),
        rest: Token::new(Tag::Segment, rest, rest_at),
    })
}
