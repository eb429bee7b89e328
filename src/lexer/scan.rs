//! Shared `nom` parsers for the extractors

use nom::{
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::recognize,
    sequence::pair,
    IResult,
};

use super::position::Position;

/// Width of `text` in columns
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Trim both ends of `text` and move `position` past the leading whitespace
pub fn trim_advance<'a>(text: &'a str, position: &Position) -> (&'a str, Position) {
    let trimmed = text.trim_start();
    let position = position.advance_cols(width(text) - width(trimmed));
    (trimmed.trim_end(), position)
}

/// Any run of whitespace, possibly empty
pub fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

/// A non-empty run of non-whitespace
pub fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// The comment marker itself
pub fn marker<'a>(input: &'a str, marker: &str) -> IResult<&'a str, &'a str> {
    tag(marker)(input)
}

/// `prefix` followed by at least one non-whitespace character
pub fn directive(input: &str, prefix: char) -> IResult<&str, &str> {
    recognize(pair(char(prefix), word))(input)
}
