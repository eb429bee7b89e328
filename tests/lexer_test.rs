//! Line lexer tests
//!
//! Covers line splitting, comment/query classification and the positions the
//! lexer assigns, including blank lines and surrounding whitespace.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use tugsql::lexer::{lex, lex_with, tokens_to_json, Lexer, LexerConfig, Position, Tag, Token};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn at(line: usize, col: usize) -> Position {
        Position::at("<literal>", line, col)
    }

    const USERNAME_COMMENT: &str = "-- :name username_for_id :1";
    const USERNAME_QUERY: &str = "select username from users where user_id = :user_id";

    #[test]
    fn test_basic_file() {
        init();
        let source = include_str!("sql/basic.sql");
        let tokens = lex(source.trim(), Position::literal());

        assert_eq!(
            tokens,
            vec![
                Token::text(Tag::Comment, USERNAME_COMMENT, at(1, 1)),
                Token::text(Tag::Query, USERNAME_QUERY, at(2, 1)),
            ]
        );
    }

    #[test]
    fn test_leading_comment_whitespace() {
        init();
        let source = format!("   {USERNAME_COMMENT}\n{USERNAME_QUERY}");

        assert_eq!(
            lex(&source, Position::literal()),
            vec![
                Token::text(Tag::Comment, USERNAME_COMMENT, at(1, 4)),
                Token::text(Tag::Query, USERNAME_QUERY, at(2, 1)),
            ]
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        init();
        let source = format!(" {USERNAME_COMMENT}  \n {USERNAME_QUERY}  ");

        assert_eq!(
            lex(&source, Position::literal()),
            vec![
                Token::text(Tag::Comment, USERNAME_COMMENT, at(1, 2)),
                Token::text(Tag::Query, USERNAME_QUERY, at(2, 2)),
            ]
        );
    }

    #[test]
    fn test_blank_lines() {
        init();
        let source = format!("{USERNAME_COMMENT}  \n\n{USERNAME_QUERY}  ");

        assert_eq!(
            lex(&source, Position::literal()),
            vec![
                Token::text(Tag::Comment, USERNAME_COMMENT, at(1, 1)),
                Token::text(Tag::Query, "", at(2, 1)),
                Token::text(Tag::Query, USERNAME_QUERY, at(3, 1)),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        init();
        let tokens = lex("-- :name foo\r\nselect 1\r\n", Position::new("u"));

        assert_eq!(
            tokens,
            vec![
                Token::text(Tag::Comment, "-- :name foo", Position::at("u", 1, 1)),
                Token::text(Tag::Query, "select 1", Position::at("u", 2, 1)),
                Token::text(Tag::Query, "", Position::at("u", 3, 1)),
            ]
        );
    }

    #[test]
    fn test_empty_source_is_one_blank_line() {
        init();
        assert_eq!(
            lex("", Position::literal()),
            vec![Token::text(Tag::Query, "", at(1, 1))]
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("select 1" ; "single line")]
    #[test_case("a\nb\nc" ; "three lines")]
    #[test_case("a\n" ; "trailing break")]
    #[test_case("\n\n\n" ; "only breaks")]
    #[test_case("  -- :name x\n\tselect 1\n\n" ; "mixed")]
    fn test_one_token_per_line(source: &str) {
        let tokens = lex(source, Position::literal());
        assert_eq!(tokens.len(), source.matches('\n').count() + 1);

        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position.line(), i + 1);
            let text = token.value().unwrap();
            let expected = if text.starts_with("--") {
                Tag::Comment
            } else {
                Tag::Query
            };
            assert_eq!(token.tag, expected);
        }
    }

    #[test_case("-- :name foo" ; "comment")]
    #[test_case("select 1" ; "query")]
    #[test_case("" ; "blank")]
    fn test_relexing_trimmed_line_is_stable(line: &str) {
        let padded = format!("  {line}  ");
        let first = lex(&padded, Position::literal()).remove(0);
        let second = lex(first.value().unwrap(), Position::literal()).remove(0);

        assert_eq!(first.tag, second.tag);
        assert_eq!(first.value, second.value);
    }

    #[test]
    fn test_source_name_is_carried() {
        let tokens: Vec<Token> = Lexer::new("a\nb", Position::new("queries/users.sql")).collect();
        assert!(tokens
            .iter()
            .all(|t| t.position.source() == "queries/users.sql"));
    }

    #[test]
    fn test_custom_comment_marker() {
        let config = LexerConfig::new("#", ':').unwrap();
        let tokens = lex_with("  # :name foo\n-- select", Position::literal(), &config);

        assert_eq!(tokens[0], Token::text(Tag::Comment, "# :name foo", at(1, 3)));
        assert_eq!(tokens[1], Token::text(Tag::Query, "-- select", at(2, 1)));
    }

    #[test]
    fn test_json_dump() {
        let tokens = vec![
            Token::text(Tag::Query, "select 1", Position::at("u", 2, 1)),
            Token::absent(Tag::Segment, Position::at("u", 2, 9)),
        ];
        let json: serde_json::Value = serde_json::from_str(&tokens_to_json(&tokens).unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"tag": "Q", "value": "select 1", "position": {"source": "u", "line": 2, "col": 1}},
                {"tag": "S", "value": null, "position": {"source": "u", "line": 2, "col": 9}},
            ])
        );
    }
}
