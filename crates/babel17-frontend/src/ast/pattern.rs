use babel17_common::message::Location;
use num_bigint::BigInt;

use super::{Expr, Identifier, Located, Name};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Pattern {
    pub node: PatternNode,
    pub location: Location,
}

impl Pattern {
    pub fn new(node: PatternNode, location: Location) -> Self {
        Self { node, location }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.node, PatternNode::ParseError)
    }
}

impl Located for Pattern {
    fn location(&self) -> Location {
        self.location
    }

    fn widen(&mut self, other: Location) {
        self.location += other;
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PatternNode {
    Identifier(Name),
    Integer(BigInt),
    String(String),
    Nullary(NullaryPattern),

    /// `id as inner` binds the whole matched value to `id`.
    As {
        id: Identifier,
        inner: Box<Pattern>,
    },

    /// A pattern with a guard.
    If {
        inner: Box<Pattern>,
        guard: Box<Expr>,
    },

    /// `val expr` matches values equal to `expr`.
    Val(Box<Expr>),

    /// `?test` or `?test inner` matches values for which `test` holds.
    Predicate {
        test: Box<Expr>,
        inner: Option<Box<Pattern>>,
    },

    List {
        elements: Vec<Pattern>,
        tuple: bool,
    },

    /// `head :: tail`, right-nested for longer chains.
    Cons(Box<Pattern>, Box<Pattern>),

    Map(Vec<PatternEntry>),
    Set(Vec<Pattern>),

    Constructor {
        name: Name,
        arg: Option<Box<Pattern>>,
    },

    /// Placeholder for a subtree the recognizer could not parse.
    ParseError,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NullaryPattern {
    /// `_`
    Any,
    /// `...`
    Ellipsis,
    True,
    False,
    Infinity,
    NegativeInfinity,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PatternEntry {
    pub key: Pattern,
    pub value: Pattern,
    pub location: Location,
}
