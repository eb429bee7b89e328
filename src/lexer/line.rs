//! Line splitting

use logos::{Lexer as LogosLexer, Logos};

/// Raw pieces of source text: runs of text and the breaks between them
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum LineToken {
    #[token("\n")]
    Break,

    #[regex(r"[^\n]+")]
    Text,
}

/// Iterator over the lines of a source text.
///
/// Splits on `\n` only; `n` breaks give `n + 1` lines, so an empty source is
/// one empty line and a trailing break leaves a trailing empty line.
pub struct Lines<'a> {
    inner: LogosLexer<'a, LineToken>,
    finished: bool,
}

impl<'a> Lines<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: LineToken::lexer(source),
            finished: false,
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = "";
        loop {
            match self.inner.next() {
                Some(Ok(LineToken::Break)) => return Some(line),
                // every non-break character belongs to a text run
                Some(Ok(LineToken::Text)) | Some(Err(())) => line = self.inner.slice(),
                None => {
                    self.finished = true;
                    return Some(line);
                }
            }
        }
    }
}
