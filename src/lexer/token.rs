//! Token definitions

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::position::Position;
use crate::error::TugError;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    /// A whole line starting with the comment marker
    #[serde(rename = "C")]
    Comment,
    /// A whole line of query text
    #[serde(rename = "Q")]
    Query,
    /// A directive word such as `:name`
    #[serde(rename = "K")]
    Keyword,
    /// A query name
    #[serde(rename = "N")]
    Name,
    /// Remainder text still awaiting extraction
    #[serde(rename = "S")]
    Segment,
}

impl Tag {
    /// One-letter code used in dumps
    pub fn code(self) -> char {
        match self {
            Tag::Comment => 'C',
            Tag::Query => 'Q',
            Tag::Keyword => 'K',
            Tag::Name => 'N',
            Tag::Segment => 'S',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Tag {
    type Err = TugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Tag::Comment),
            "Q" => Ok(Tag::Query),
            "K" => Ok(Tag::Keyword),
            "N" => Ok(Tag::Name),
            "S" => Ok(Tag::Segment),
            _ => Err(TugError::UnknownTag {
                code: s.to_owned(),
            }),
        }
    }
}

/// A tagged slice of source text and where it begins.
///
/// `value` is `None` when an optional component was missing from the
/// source, which is not the same thing as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub tag: Tag,
    pub value: Option<String>,
    pub position: Position,
}

impl Token {
    pub fn new(tag: Tag, value: Option<String>, position: Position) -> Self {
        Self {
            tag,
            value,
            position,
        }
    }

    /// A token whose payload is present
    pub fn text(tag: Tag, value: impl Into<String>, position: Position) -> Self {
        Self::new(tag, Some(value.into()), position)
    }

    /// A token whose payload is absent
    pub fn absent(tag: Tag, position: Position) -> Self {
        Self::new(tag, None, position)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({:?}) @ {}", self.tag, value, self.position),
            None => write!(f, "{}(-) @ {}", self.tag, self.position),
        }
    }
}
