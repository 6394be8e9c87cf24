use babel17_common::message::Location;

use super::{child, cover, locations, Braces, Lowerer, Parenthesized};
use crate::ast::{Identifier, NullaryPattern, Pattern, PatternEntry, PatternNode};
use crate::cst::{Node, Tag};
use crate::literal;

impl Lowerer<'_> {
    pub fn lower_pat(&mut self, node: &Node) -> Pattern {
        self.within(node, |this, location| this.pat(node, location))
    }

    fn pat(&mut self, node: &Node, location: Location) -> Pattern {
        let (node, location) = match node.tag {
            Tag::Id => (PatternNode::Identifier(self.identifier(node, location)), location),
            Tag::Num => (PatternNode::Integer(literal::decode_integer(&node.text)), location),
            Tag::String => (PatternNode::String(self.string(node, location)), location),

            Tag::Any => (PatternNode::Nullary(NullaryPattern::Any), location),
            Tag::Ellipsis => (PatternNode::Nullary(NullaryPattern::Ellipsis), location),
            Tag::True => (PatternNode::Nullary(NullaryPattern::True), location),
            Tag::False => (PatternNode::Nullary(NullaryPattern::False), location),
            Tag::Infinity => (PatternNode::Nullary(NullaryPattern::Infinity), location),

            Tag::Negate => {
                let inner = self.lower_pat(child(node, 0));
                if inner.is_error() {
                    return Pattern::new(PatternNode::ParseError, location);
                }

                let location = cover(location, [inner.location]);
                let node = match inner.node {
                    PatternNode::Integer(value) => PatternNode::Integer(-value),
                    PatternNode::Nullary(NullaryPattern::Infinity) => {
                        PatternNode::Nullary(NullaryPattern::NegativeInfinity)
                    }
                    other => panic!("pattern cannot be used in negation: {other:?}"),
                };

                (node, location)
            }

            Tag::As => {
                let id = self.lower_pat(child(node, 0));
                let inner = self.lower_pat(child(node, 1));

                let PatternNode::Identifier(name) = id.node else {
                    return Pattern::new(PatternNode::ParseError, location);
                };

                let location = cover(location, [id.location, inner.location]);
                let node = PatternNode::As {
                    id: Identifier {
                        name,
                        location: id.location,
                    },
                    inner: Box::new(inner),
                };

                (node, location)
            }

            Tag::IfPattern => {
                let inner = self.lower_pat(child(node, 0));
                if node.children.len() == 1 {
                    return inner;
                }

                let guard = self.lower_expr(child(node, 1));
                let location = cover(location, [inner.location, guard.location]);
                let node = PatternNode::If {
                    inner: Box::new(inner),
                    guard: Box::new(guard),
                };

                (node, location)
            }

            Tag::ValPattern => {
                let value = self.lower_expr(child(node, 0));
                let location = cover(location, [value.location]);
                (PatternNode::Val(Box::new(value)), location)
            }

            Tag::Predicate => {
                let test = self.lower_expr(child(node, 0));
                let inner = node.children.get(1).map(|inner| self.lower_pat(inner));

                let location = cover(
                    location,
                    std::iter::once(test.location).chain(inner.as_ref().map(|inner| inner.location)),
                );

                let node = PatternNode::Predicate {
                    test: Box::new(test),
                    inner: inner.map(Box::new),
                };

                (node, location)
            }

            Tag::RoundList => match self.round_list(node, Self::lower_pat) {
                Parenthesized::Item(mut pattern) => {
                    pattern.location += location;
                    return pattern;
                }

                Parenthesized::Vector(elements) => {
                    let location = cover(location, locations(&elements));
                    let node = PatternNode::List {
                        elements,
                        tuple: true,
                    };

                    (node, location)
                }
            },

            Tag::SquareList => {
                let elements = self.lower_pats(node);
                let location = cover(location, locations(&elements));
                let node = PatternNode::List {
                    elements,
                    tuple: false,
                };

                (node, location)
            }

            Tag::MapOrSet => match self.braces(node, Self::lower_pat) {
                Braces::Set(elements) => {
                    let location = cover(location, locations(&elements));
                    (PatternNode::Set(elements), location)
                }

                Braces::Map(entries) => {
                    let entries: Vec<_> = entries
                        .into_iter()
                        .map(|(key, value, at)| PatternEntry {
                            location: cover(at, [key.location, value.location]),
                            key,
                            value,
                        })
                        .collect();

                    let location = cover(location, entries.iter().map(|entry| entry.location));
                    (PatternNode::Map(entries), location)
                }
            },

            // `a :: b :: c` matches as `a :: (b :: c)`.
            Tag::ListCons => {
                let mut items = self.lower_pats(node).into_iter().rev();
                let Some(last) = items.next() else {
                    return Pattern::new(PatternNode::ParseError, location);
                };

                return items.fold(last, |tail, head| {
                    let location = head.location + tail.location;
                    Pattern::new(PatternNode::Cons(Box::new(head), Box::new(tail)), location)
                });
            }

            Tag::EmptyMap => (PatternNode::Map(Vec::new()), location),

            Tag::Constr => {
                let arg = node.children.first().map(|arg| self.lower_pat(arg));
                let location = cover(location, arg.as_ref().map(|arg| arg.location));
                let node = PatternNode::Constructor {
                    name: node.text.clone(),
                    arg: arg.map(Box::new),
                };

                (node, location)
            }

            _ => (PatternNode::ParseError, location),
        };

        Pattern::new(node, location)
    }

    fn lower_pats(&mut self, node: &Node) -> Vec<Pattern> {
        node.children.iter().map(|child| self.lower_pat(child)).collect()
    }
}
