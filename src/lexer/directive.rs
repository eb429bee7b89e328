//! Directive comments: `-- :keyword rest`

use nom::IResult;

use super::config::LexerConfig;
use super::scan::{directive, marker, whitespace, width};
use super::token::{Tag, Token};

/// A comment split into its directive word and the text after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveParts {
    /// The directive word, prefix included
    pub keyword: Token,
    /// Text after the directive; empty rather than absent when nothing follows
    pub rest: Token,
}

struct DirectiveMatch<'a> {
    lead: usize,
    keyword: &'a str,
    internal: usize,
    rest: &'a str,
}

fn directive_comment<'a>(
    input: &'a str,
    config: &LexerConfig,
) -> IResult<&'a str, DirectiveMatch<'a>> {
    let (input, comment) = marker(input, &config.comment_marker)?;
    let (input, lead_ws) = whitespace(input)?;
    let (input, keyword) = directive(input, config.directive_prefix)?;
    let (rest, internal_ws) = whitespace(input)?;
    Ok((
        "",
        DirectiveMatch {
            lead: width(comment) + width(lead_ws),
            keyword,
            internal: width(internal_ws),
            rest,
        },
    ))
}

/// Split a comment token using the default configuration
pub fn lex_comment(token: &Token) -> Option<DirectiveParts> {
    lex_comment_with(token, &LexerConfig::default())
}

/// Split a comment token into `keyword` and `rest`.
///
/// Returns `None` when the comment does not open with a directive word,
/// e.g. plain prose such as `-- fetch users`.
pub fn lex_comment_with(token: &Token, config: &LexerConfig) -> Option<DirectiveParts> {
    let text = token.value()?;
    let Ok((_, m)) = directive_comment(text, config) else {
        log::debug!("no directive in {}", token);
        return None;
    };

    let keyword_at = token.position.advance_cols(m.lead);
    let rest_at = keyword_at.advance_cols(width(m.keyword) + m.internal);
    Some(DirectiveParts {
        keyword: Token::text(Tag::Keyword, m.keyword, keyword_at),
        rest: Token::text(Tag::Segment, m.rest, rest_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::position::Position;

    fn tok(comment: &str) -> Token {
        Token::text(Tag::Comment, comment, Position::at("<literal>", 1, 1))
    }

    fn at(col: usize) -> Position {
        Position::at("<literal>", 1, col)
    }

    #[test]
    fn test_works() {
        let parts = lex_comment(&tok("-- :foo bar baz")).unwrap();
        assert_eq!(parts.keyword, Token::text(Tag::Keyword, ":foo", at(4)));
        assert_eq!(parts.rest, Token::text(Tag::Segment, "bar baz", at(9)));
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(lex_comment(&tok("-- foobar baz")), None);
    }

    #[test]
    fn test_not_a_comment() {
        assert_eq!(lex_comment(&tok("select 1")), None);
    }

    #[test]
    fn test_internal_keyword() {
        assert_eq!(lex_comment(&tok("-- stuff :foo bar")), None);
    }

    #[test]
    fn test_bare_prefix() {
        assert_eq!(lex_comment(&tok("-- : foo")), None);
    }

    #[test]
    fn test_absent_payload() {
        let token = Token::absent(Tag::Comment, at(1));
        assert_eq!(lex_comment(&token), None);
    }

    #[test]
    fn test_keyword_only() {
        let parts = lex_comment(&tok("-- :foo")).unwrap();
        assert_eq!(parts.keyword, Token::text(Tag::Keyword, ":foo", at(4)));
        assert_eq!(parts.rest, Token::text(Tag::Segment, "", at(8)));
    }

    #[test]
    fn test_no_space() {
        let parts = lex_comment(&tok("--:foo")).unwrap();
        assert_eq!(parts.keyword, Token::text(Tag::Keyword, ":foo", at(3)));
        assert_eq!(parts.rest, Token::text(Tag::Segment, "", at(7)));
    }

    #[test]
    fn test_custom_config() {
        let config = LexerConfig::new("#", '@').unwrap();
        let parts = lex_comment_with(&tok("# @name foo"), &config).unwrap();
        assert_eq!(parts.keyword, Token::text(Tag::Keyword, "@name", at(3)));
        assert_eq!(parts.rest, Token::text(Tag::Segment, "foo", at(9)));
    }
}
