//! The tokenizer turns source text into a flat stream of tokens, each carrying
//! its text and the line and column it starts at. Whitespace and comments are
//! dropped, but newlines are kept as tokens since the grammar uses them as
//! separators. Characters which cannot start any token are collected into a
//! side list of lexical errors instead of stopping the tokenizer.

mod token;

#[cfg(test)]
mod tests;

use babel17_common::message::{Location, Messages, Position};
use log::{info, trace};
use logos::Logos;

pub use self::token::TokenKind;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,

    /// 1-based line of the first character.
    pub line: usize,

    /// 1-based column of the first character, counted in characters.
    pub column: usize,
}

impl Token {
    pub fn start(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The position of the last character of this token. For an empty token
    /// this is one column before its start.
    pub fn end(&self) -> Position {
        let length = self.text.chars().count();
        Position::new(self.line, self.column + length - 1)
    }
}

/// The result of tokenization: every recognized token in order, plus the start
/// of every run of unrecognized characters.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tokens {
    pub tokens: Vec<Token>,
    pub errors: Vec<Position>,
}

impl Tokens {
    /// A lexical error for every run of invalid characters, in source order.
    pub fn messages(&self) -> Messages {
        let mut messages = Messages::new();
        for at in self.errors.iter().copied() {
            messages.at(Location::point(at)).lex_error();
        }

        messages
    }
}

pub fn lex(source: &str) -> Tokens {
    info!("lexing {} bytes", source.len());

    let lines = LineIndex::new(source);
    let mut result = Tokens::default();
    let mut last_error_end = None;

    for (kind, span) in TokenKind::lexer(source).spanned() {
        if kind == TokenKind::Error {
            // Neighbouring invalid characters are reported once.
            if last_error_end != Some(span.start) {
                result.errors.push(lines.position(source, span.start));
            }

            last_error_end = Some(span.end);
            continue;
        }

        let Position { line, column } = lines.position(source, span.start);
        result.tokens.push(Token {
            kind,
            text: source[span].to_string(),
            line,
            column,
        });
    }

    trace!(
        "done lexing, {} tokens and {} errors",
        result.tokens.len(),
        result.errors.len()
    );

    result
}

/// The byte offset of the beginning of every line.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();

        Self { starts }
    }

    fn position(&self, source: &str, offset: usize) -> Position {
        let line = match self.starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };

        let column = source[self.starts[line]..offset].chars().count() + 1;
        Position::new(line + 1, column)
    }
}
