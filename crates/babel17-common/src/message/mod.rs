//! Diagnostics about the user's program. Every pass records problems into a
//! [`Messages`] log instead of stopping, so a single run reports as many
//! mistakes as it can find. Each pass has its own module of message
//! constructors, added as methods on [`MessageAdder`]:
//!
//! ```ignore
//! messages.at(location).lower_keyword_as_identifier();
//! ```

mod source;

mod lex;
mod literal;
mod lower;
mod render;

#[cfg(test)]
mod tests;

pub use source::{Location, Position};

/// A single problem with the program, located somewhere in the source.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Diagnostic {
    pub location: Location,

    /// A short code identifying the kind of problem.
    pub code: &'static str,

    pub message: String,
}

/// An ordered, append-only log of diagnostics. Diagnostics are kept in the
/// order they were detected and are never deduplicated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Messages {
    pub msgs: Vec<Diagnostic>,
}

impl Messages {
    pub fn new() -> Self {
        Self { msgs: Vec::new() }
    }

    #[must_use]
    pub fn at(&mut self, location: Location) -> MessageAdder {
        MessageAdder {
            msgs: self,
            at: location,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.msgs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.msgs.iter()
    }

    pub fn merge(&mut self, other: Messages) {
        self.msgs.extend(other.msgs);
    }
}

impl IntoIterator for Messages {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.msgs.into_iter()
    }
}

#[derive(Debug)]
pub struct MessageAdder<'a> {
    msgs: &'a mut Messages,
    at: Location,
}

impl<'a> MessageAdder<'a> {
    fn add(&mut self, code: &'static str, message: impl Into<String>) {
        self.msgs.msgs.push(Diagnostic {
            location: self.at,
            code,
            message: message.into(),
        });
    }
}
