//! Decoding of numeric and string literal tokens into their values.

#[cfg(test)]
mod tests;

use std::ops::Range;

use babel17_common::message::{Location, Messages, Position};
use num_bigint::BigInt;
use num_traits::Zero;

const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Code points rejected as surrogates. This reaches past the UTF-16 surrogate
/// range up to the start of the supplementary special-purpose plane.
const SURROGATES: Range<u32> = 0xD800..0xE0000;

/// Decode an integer literal in any of the four bases. The text must be a
/// valid `Num` token: a digit out of range for its base is a bug in the
/// tokenizer, and panics.
pub fn decode_integer(text: &str) -> BigInt {
    let (digits, base) = if let Some(digits) = text.strip_prefix("0x") {
        (digits, 16)
    } else if let Some(digits) = text.strip_prefix("0o") {
        (digits, 8)
    } else if let Some(digits) = text.strip_prefix("0b") {
        (digits, 2)
    } else {
        (text, 10)
    };

    digits.chars().fold(BigInt::zero(), |acc, c| {
        let digit = match c.to_digit(16) {
            Some(digit) if digit < base => digit,
            _ => panic!("digit {c:?} is invalid for base {base} in {text:?}"),
        };

        acc * base + digit
    })
}

/// Decode the text of a string token, quotes included. `origin` is the
/// position of the opening quote; diagnostics are located relative to it.
///
/// Decoding never stops early. Every malformed escape or bad code point is
/// reported and contributes nothing to the result.
pub fn decode_string(text: &str, origin: Position, msgs: &mut Messages) -> String {
    let chars: Vec<_> = text.chars().collect();
    let inner = match chars.len() {
        0..=2 => &[][..],
        len => &chars[1..len - 1],
    };

    let mut decoder = StringDecoder {
        chars: inner,
        index: 0,
        origin,
        msgs,
        result: String::with_capacity(inner.len()),
    };

    decoder.decode();
    decoder.result
}

struct StringDecoder<'a> {
    chars: &'a [char],
    index: usize,
    origin: Position,
    msgs: &'a mut Messages,
    result: String,
}

impl StringDecoder<'_> {
    fn decode(&mut self) {
        while let Some(c) = self.next() {
            let start = self.index - 1;

            if c != '\\' {
                self.push(u32::from(c), start);
                continue;
            }

            match self.next() {
                Some('u') => self.hex_escape(4, start),
                Some('U') => self.hex_escape(8, start),
                Some('\\') => self.push(0x5C, start),
                Some('"') => self.push(0x22, start),
                Some('n') => self.push(0x0A, start),
                Some('r') => self.push(0x0D, start),
                Some(selector) => {
                    let at = self.span(start);
                    self.msgs.at(at).literal_unknown_escape(selector);
                }
                None => {
                    let at = self.span(start);
                    self.msgs.at(at).literal_malformed_escape();
                }
            }
        }
    }

    /// Read exactly `digits` hexadecimal digits following `\u` or `\U`.
    fn hex_escape(&mut self, digits: usize, start: usize) {
        let mut value: u32 = 0;

        for _ in 0..digits {
            match self.peek().and_then(|c| c.to_digit(16)) {
                Some(digit) => {
                    self.index += 1;
                    value = value * 16 + digit;
                }

                None => {
                    let at = self.span(start);
                    self.msgs.at(at).literal_malformed_escape();
                    return;
                }
            }
        }

        self.push(value, start);
    }

    /// Append a code point that began at `start`, or report it if it is out of
    /// range.
    fn push(&mut self, code_point: u32, start: usize) {
        if code_point > MAX_CODE_POINT {
            let at = self.span(start);
            self.msgs.at(at).literal_invalid_code_point(code_point);
        } else if SURROGATES.contains(&code_point) {
            let at = self.span(start);
            self.msgs.at(at).literal_surrogate_code_point(code_point);
        } else if let Some(c) = char::from_u32(code_point) {
            self.result.push(c);
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.index += 1;
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// The source location of the characters from `start` up to the last one
    /// consumed. Column 1 of the literal is its opening quote, so the character
    /// at `index` sits at column `index + 2`.
    fn span(&self, start: usize) -> Location {
        let end = self.index.max(start + 1);
        Location::new(Position::new(1, start + 2), Position::new(1, end + 1))
            .relative_to(self.origin)
    }
}
