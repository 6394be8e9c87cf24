//! Lowering turns the grammar-shaped concrete tree into the expression and
//! pattern trees of [`crate::ast`]. The recognizer cannot tell a lot of things
//! apart (is `{a}` a set, is `(x)` a vector, is `Foo x` a constructor
//! application), so this is where those questions are answered.
//!
//! Lowering never gives up on bad input. Problems are reported to the message
//! log, and a placeholder is put in the tree so the walk can go on.

mod expr;
mod location;
mod pattern;


use babel17_common::message::{Location, Messages, Position};
use log::{debug, info, trace};

use crate::ast::{Expr, Located};
use crate::cst::Node;
use crate::lex::{Token, Tokens};
use crate::literal;

pub use self::location::LocationTracker;

/// Words which may not be used as identifiers, compared case-insensitively.
pub const KEYWORDS: &[&str] = &[
    "as",
    "await",
    "begin",
    "case",
    "concurrent",
    "def",
    "do",
    "downto",
    "else",
    "elseif",
    "end",
    "exception",
    "external",
    "false",
    "for",
    "here",
    "if",
    "in",
    "infinity",
    "lazy",
    "match",
    "memoize",
    "module",
    "object",
    "package",
    "private",
    "protected",
    "public",
    "random",
    "root",
    "then",
    "this",
    "to",
    "true",
    "val",
    "while",
    "with",
    "yield",
];

/// The result of lowering a whole program. The tree is always present; the
/// program is valid exactly when `messages` is empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Program {
    pub root: Expr,
    pub messages: Messages,
}

/// Lower a concrete tree built from `tokens`. Lexical errors from the token
/// stream and the `syntax_errors` of the recognizer are reported ahead of any
/// problems found while lowering.
pub fn lower(tokens: &Tokens, tree: &Node, syntax_errors: &[Position]) -> Program {
    info!("lowering");

    let mut messages = tokens.messages();

    for at in syntax_errors.iter().copied() {
        messages.at(Location::point(at)).parse_syntax_error();
    }

    let mut lowerer = Lowerer::new(&tokens.tokens);
    let mut root = lowerer.lower_expr(tree);
    root.location += Location::START;

    messages.merge(lowerer.msgs);

    trace!("done lowering, {} messages", messages.len());

    Program { root, messages }
}

#[derive(Debug)]
pub struct Lowerer<'a> {
    pub msgs: Messages,
    locations: LocationTracker<'a>,
}

impl<'a> Lowerer<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            msgs: Messages::new(),
            locations: LocationTracker::new(tokens),
        }
    }

    /// Lower `node` with its location on top of the location stack.
    fn within<T>(&mut self, node: &Node, f: impl FnOnce(&mut Self, Location) -> T) -> T {
        let location = self.locations.locate(node);
        self.locations.enter(location);
        let result = f(self, location);
        self.locations.leave();
        result
    }

    /// The stand-in for a construct with a part which could not be parsed.
    fn placeholder(&self, node: &Node, location: Location) -> Expr {
        debug!("replacing erroneous {:?} at {location} with an empty block", node.tag);
        Expr::empty_block(location)
    }

    fn identifier(&mut self, node: &Node, location: Location) -> String {
        if KEYWORDS.contains(&node.text.to_lowercase().as_str()) {
            self.msgs.at(location).lower_keyword_as_identifier();
        }

        node.text.clone()
    }

    fn string(&mut self, node: &Node, location: Location) -> String {
        literal::decode_string(&node.text, location.start, &mut self.msgs)
    }

    /// Lower the children of a parenthesized list, telling a parenthesized
    /// item apart from a vector.
    fn round_list<T>(
        &mut self,
        node: &Node,
        mut lower: impl FnMut(&mut Self, &Node) -> T,
    ) -> Parenthesized<T> {
        let commas = child(node, 0);
        let items: Vec<_> = child(node, 1)
            .children
            .iter()
            .map(|item| lower(self, item))
            .collect();

        let trailing = commas.children.len();

        let items = if trailing == 0 {
            match <[T; 1]>::try_from(items) {
                Ok([item]) => return Parenthesized::Item(item),
                Err(items) => items,
            }
        } else {
            items
        };

        if trailing > 1 && items.len() == trailing {
            let at = self.locations.locate(&commas.children[trailing - 1]);
            self.msgs.at(at).lower_trailing_comma();
        }

        Parenthesized::Vector(items)
    }

    /// Lower the groups of a brace literal. If any group is a key and value
    /// pair the literal is a map, and every lone element in it is reported and
    /// dropped.
    fn braces<T: Located>(
        &mut self,
        node: &Node,
        mut lower: impl FnMut(&mut Self, &Node) -> T,
    ) -> Braces<T> {
        let is_map = node.children.iter().any(|group| group.children.len() != 1);

        let mut elements = Vec::new();
        let mut entries = Vec::new();

        for group in node.children.iter() {
            self.within(group, |this, location| {
                let mut items: Vec<_> = group.children.iter().map(|item| lower(this, item)).collect();

                match (is_map, items.len()) {
                    (false, _) => elements.extend(items.pop().map(|mut item| {
                        item.widen(location);
                        item
                    })),
                    (true, 1) => this.msgs.at(location).lower_mixed_set_and_map(),
                    (true, 2) => {
                        let value = items.pop();
                        let key = items.pop();
                        entries.extend(key.zip(value).map(|(key, value)| (key, value, location)));
                    }
                    (true, len) => panic!("map entry with {len} parts"),
                }
            });
        }

        if is_map {
            Braces::Map(entries)
        } else {
            Braces::Set(elements)
        }
    }
}

enum Parenthesized<T> {
    Item(T),
    Vector(Vec<T>),
}

enum Braces<T> {
    Set(Vec<T>),
    Map(Vec<(T, T, Location)>),
}

/// The `index`th child of `node`. The recognizer guarantees the shape of every
/// node it builds, so a missing child is a bug.
fn child(node: &Node, index: usize) -> &Node {
    node.children
        .get(index)
        .unwrap_or_else(|| panic!("{:?} node has no child {index}", node.tag))
}

/// The smallest location covering `location` and all of `parts`.
fn cover(location: Location, parts: impl IntoIterator<Item = Location>) -> Location {
    parts.into_iter().fold(location, Location::merge)
}

/// The locations of a run of lowered nodes.
fn locations<T: Located>(items: &[T]) -> impl Iterator<Item = Location> + '_ {
    items.iter().map(Located::location)
}
