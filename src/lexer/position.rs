//! Source positions

use serde::Serialize;
use std::fmt;

/// Source identifier used for text that did not come from a file
pub const LITERAL_SOURCE: &str = "<literal>";

/// A location in a named source unit.
///
/// Line 0 means "no line consumed yet"; the lexer advances to line 1 before
/// it looks at the first line. Columns are 1-based and count characters.
/// Positions never change in place: every move produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    source: String,
    line: usize,
    col: usize,
}

impl Position {
    /// Start of `source`: line 0, column 1
    pub fn new(source: impl Into<String>) -> Self {
        Self::at(source, 0, 1)
    }

    /// Start of an in-memory source unit
    pub fn literal() -> Self {
        Self::new(LITERAL_SOURCE)
    }

    /// An explicit position. A column of 0 is clamped to 1.
    pub fn at(source: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            source: source.into(),
            line,
            col: col.max(1),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Move `lines` lines down or, when `lines` is 0, `cols` columns right.
    ///
    /// Moving to another line resets the column to 1 and ignores `cols`.
    pub fn advance(&self, lines: usize, cols: usize) -> Self {
        let col = if lines == 0 { self.col + cols } else { 1 };
        Self {
            source: self.source.clone(),
            line: self.line + lines,
            col,
        }
    }

    pub fn advance_lines(&self, lines: usize) -> Self {
        self.advance(lines, 0)
    }

    pub fn advance_cols(&self, cols: usize) -> Self {
        self.advance(0, cols)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::literal()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.col)
    }
}

/// Free-function form of [`Position::advance`]
pub fn advance(position: &Position, lines: usize, cols: usize) -> Position {
    position.advance(lines, cols)
}
