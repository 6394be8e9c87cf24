use babel17_common::message::Location;

use super::{child, cover, locations, Braces, Lowerer, Parenthesized};
use crate::ast::{
    Arm, Attribute, AttributeKind, Block, Entry, Expr, ExprNode, Identifier, MemoId, ModulePath,
    Operator, Relation,
};
use crate::cst::{Node, Tag};
use crate::literal;

impl Lowerer<'_> {
    pub fn lower_expr(&mut self, node: &Node) -> Expr {
        self.within(node, |this, location| this.expr(node, location))
    }

    fn expr(&mut self, node: &Node, location: Location) -> Expr {
        let (node, location) = match node.tag {
            Tag::Program => return self.lower_expr(child(node, 0)),

            Tag::Block => {
                let statements = self.lower_exprs(node);
                let location = cover(location, locations(&statements));
                (ExprNode::Block(statements), location)
            }

            Tag::Val | Tag::Assign => {
                let pattern = self.lower_pat(child(node, 0));
                let value = self.lower_expr(child(node, 1));
                let location = cover(location, [pattern.location, value.location]);

                let node = ExprNode::Binding {
                    pattern,
                    mutable: node.tag == Tag::Assign,
                    value: Box::new(value),
                };

                (node, location)
            }

            Tag::Def => return self.def(node, location),

            Tag::Attribute => {
                let kind = match child(node, 0).tag {
                    Tag::Private => AttributeKind::Private,
                    Tag::Protected => AttributeKind::Protected,
                    Tag::Public => AttributeKind::Public,
                    tag => panic!("unknown attribute {tag:?}"),
                };

                let location = cover(location, [self.locations.locate(child(node, 0))]);
                (ExprNode::Attribute(kind), location)
            }

            Tag::Id => (ExprNode::Identifier(self.identifier(node, location)), location),

            Tag::Constr => {
                let node = ExprNode::Constructor {
                    name: node.text.clone(),
                    arg: None,
                };

                (node, location)
            }

            Tag::Num => (ExprNode::Integer(literal::decode_integer(&node.text)), location),
            Tag::String => (ExprNode::String(self.string(node, location)), location),

            Tag::True => (ExprNode::Nullary(Operator::True), location),
            Tag::False => (ExprNode::Nullary(Operator::False), location),
            Tag::This => (ExprNode::Nullary(Operator::This), location),
            Tag::Root => (ExprNode::Nullary(Operator::Root), location),
            Tag::ModuleKey => (ExprNode::Nullary(Operator::ModuleKey), location),
            Tag::Here => (ExprNode::Nullary(Operator::Here), location),
            Tag::Infinity => (ExprNode::Nullary(Operator::Infinity), location),

            Tag::Random => return self.unary(node, location, Operator::Random),
            Tag::Await => return self.unary(node, location, Operator::Await),
            Tag::Exception => return self.unary(node, location, Operator::Exception),
            Tag::Lazy => return self.unary(node, location, Operator::Lazy),
            Tag::Concurrent => return self.unary(node, location, Operator::Concurrent),
            Tag::Not => return self.unary(node, location, Operator::Not),
            Tag::Negate => return self.unary(node, location, Operator::Negate),

            Tag::Or => return self.binary(node, location, Operator::Or),
            Tag::And => return self.binary(node, location, Operator::And),
            Tag::PlusPlus => return self.binary(node, location, Operator::PlusPlus),
            Tag::MinusMinus => return self.binary(node, location, Operator::MinusMinus),
            Tag::TimesTimes => return self.binary(node, location, Operator::TimesTimes),
            Tag::To => return self.binary(node, location, Operator::To),
            Tag::Downto => return self.binary(node, location, Operator::Downto),
            Tag::Plus => return self.binary(node, location, Operator::Plus),
            Tag::Minus => return self.binary(node, location, Operator::Minus),
            Tag::Times => return self.binary(node, location, Operator::Times),
            Tag::Div => return self.binary(node, location, Operator::Div),
            Tag::Mod => return self.binary(node, location, Operator::Mod),

            Tag::Compare => return self.compare(node, location),

            Tag::ListCons => {
                let items = self.lower_exprs(node);
                let mut result = fold_right(items, Operator::Cons, location);
                result.location += location;
                return result;
            }

            Tag::Pow => {
                let items = self.lower_exprs(node);
                let mut result = fold_left(items, Operator::Pow, location);
                result.location += location;
                return result;
            }

            Tag::Apply => return self.apply(node, location),
            Tag::MessageSend => return self.message_send(node, location),

            Tag::EmptyMap => (ExprNode::Map(Vec::new()), location),

            Tag::SquareList => {
                let elements = self.lower_exprs(node);
                let location = cover(location, locations(&elements));
                let node = ExprNode::List {
                    elements,
                    tuple: false,
                };

                (node, location)
            }

            Tag::RoundList => match self.round_list(node, Self::lower_expr) {
                Parenthesized::Item(mut expr) => {
                    expr.location += location;
                    return expr;
                }

                Parenthesized::Vector(elements) => {
                    let location = cover(location, locations(&elements));
                    let node = ExprNode::List {
                        elements,
                        tuple: true,
                    };

                    (node, location)
                }
            },

            Tag::MapOrSet => match self.braces(node, Self::lower_expr) {
                Braces::Set(elements) => {
                    let location = cover(location, locations(&elements));
                    (ExprNode::Set(elements), location)
                }

                Braces::Map(entries) => {
                    let entries: Vec<_> = entries
                        .into_iter()
                        .map(|(key, value, at)| Entry {
                            location: cover(at, [key.location, value.location]),
                            key,
                            value,
                        })
                        .collect();

                    let location = cover(location, entries.iter().map(|entry| entry.location));
                    (ExprNode::Map(entries), location)
                }
            },

            Tag::If => return self.if_chain(node, location),

            Tag::Begin => {
                let block = self.lower_block(child(node, 0));
                let location = cover(location, [block.location]);
                (ExprNode::Begin(block), location)
            }

            Tag::Object => {
                let block = self.lower_block(child(node, 0));
                let location = cover(location, [block.location]);
                (ExprNode::Object(block), location)
            }

            Tag::While => {
                let condition = Box::new(self.lower_expr(child(node, 0)));
                let body = self.lower_block(child(node, 1));
                let location = cover(location, [condition.location, body.location]);
                (ExprNode::While { condition, body }, location)
            }

            Tag::For => {
                let pattern = self.lower_pat(child(node, 0));
                let iterable = Box::new(self.lower_expr(child(node, 1)));
                let body = self.lower_block(child(node, 2));
                let location = cover(
                    location,
                    [pattern.location, iterable.location, body.location],
                );

                let node = ExprNode::For {
                    pattern,
                    iterable,
                    body,
                };

                (node, location)
            }

            Tag::Match => {
                let scrutinee = Box::new(self.lower_expr(child(node, 0)));
                let arms = self.arms(child(node, 1));
                let location = cover(
                    location,
                    std::iter::once(scrutinee.location).chain(arm_locations(&arms)),
                );

                (ExprNode::Match { scrutinee, arms }, location)
            }

            Tag::Lambda => {
                let arms = self.arms(child(node, 0));
                let location = cover(location, arm_locations(&arms));
                (ExprNode::Lambda(arms), location)
            }

            Tag::With => {
                let items = self.lower_exprs(node);
                if has_errors(&items) {
                    return self.placeholder(node, location);
                }

                let mut items = items.into_iter();
                let (Some(value), Some(control)) = (items.next(), items.next()) else {
                    panic!("with node needs a value and a control expression");
                };

                let location = cover(location, [value.location, control.location]);
                let node = ExprNode::With {
                    value: Box::new(value),
                    control: Box::new(control),
                };

                (node, location)
            }

            Tag::MemoStrong | Tag::MemoWeak => match self.memo_id(node, location) {
                Some(memo) => {
                    let location = memo.location;
                    (ExprNode::MemoizeId(memo), location)
                }

                None => (ExprNode::ParseError, location),
            },

            Tag::Memoize => {
                let ids: Vec<_> = self
                    .lower_exprs(node)
                    .into_iter()
                    .filter_map(|expr| match expr.node {
                        ExprNode::MemoizeId(memo) => Some(memo),
                        _ => None,
                    })
                    .collect();

                let location = cover(location, ids.iter().map(|memo| memo.location));
                (ExprNode::Memoize(ids), location)
            }

            Tag::Yield => {
                let value = self.lower_expr(child(node, 0));
                let location = cover(location, [value.location]);
                (ExprNode::Yield(Box::new(value)), location)
            }

            Tag::ModuleDecl | Tag::ModuleDef | Tag::Package => return self.module(node, location),

            _ => (ExprNode::ParseError, location),
        };

        Expr::new(node, location)
    }

    fn lower_exprs(&mut self, node: &Node) -> Vec<Expr> {
        node.children.iter().map(|child| self.lower_expr(child)).collect()
    }

    fn lower_block(&mut self, node: &Node) -> Block {
        self.lower_expr(node).into_block()
    }

    fn unary(&mut self, node: &Node, location: Location, op: Operator) -> Expr {
        let operand = self.lower_expr(child(node, 0));
        let location = cover(location, [operand.location]);
        Expr::new(ExprNode::Unary(op, Box::new(operand)), location)
    }

    fn binary(&mut self, node: &Node, location: Location, op: Operator) -> Expr {
        let left = self.lower_expr(child(node, 0));
        let right = self.lower_expr(child(node, 1));
        let location = cover(location, [left.location, right.location]);
        Expr::new(ExprNode::Binary(op, Box::new(left), Box::new(right)), location)
    }

    fn def(&mut self, node: &Node, location: Location) -> Expr {
        let first = self.lower_expr(child(node, 0));

        let (attribute, name, index) = match first.node {
            ExprNode::Attribute(kind) => {
                let attribute = Attribute {
                    kind,
                    location: first.location,
                };

                (attribute, self.lower_expr(child(node, 1)), 2)
            }

            _ => {
                let attribute = Attribute {
                    kind: AttributeKind::Default,
                    location,
                };

                (attribute, first, 1)
            }
        };

        let Some(name) = as_identifier(name) else {
            return Expr::new(ExprNode::ParseError, location);
        };

        let (pattern, body) = if index + 1 == node.children.len() {
            (None, self.lower_expr(child(node, index)))
        } else {
            let pattern = self.lower_pat(child(node, index));
            (Some(pattern), self.lower_expr(child(node, index + 1)))
        };

        let location = cover(
            location,
            [name.location, body.location]
                .into_iter()
                .chain(pattern.as_ref().map(|pattern| pattern.location)),
        );

        let node = ExprNode::Def {
            attribute,
            name,
            pattern,
            body: Box::new(body),
        };

        Expr::new(node, location)
    }

    /// A chain of operands separated by relations. A single operand is just
    /// that operand.
    fn compare(&mut self, node: &Node, location: Location) -> Expr {
        let first = self.lower_expr(child(node, 0));
        if node.children.len() == 1 {
            return first;
        }

        let mut rest = Vec::with_capacity(node.children.len() / 2);
        let mut valid = true;

        for pair in node.children[1..].chunks(2) {
            let [relation, operand] = pair else {
                valid = false;
                continue;
            };

            let operand = self.lower_expr(operand);
            match relation_of(relation.tag) {
                Some(relation) => rest.push((relation, operand)),
                None => valid = false,
            }
        }

        if !valid {
            return Expr::new(ExprNode::ParseError, location);
        }

        let location = cover(
            first.location,
            rest.iter().map(|(_, operand)| operand.location),
        );

        let node = ExprNode::Compare {
            first: Box::new(first),
            rest,
        };

        Expr::new(node, location)
    }

    /// Application is a left fold, except that a bare constructor at the head
    /// takes the next item as its argument.
    fn apply(&mut self, node: &Node, location: Location) -> Expr {
        let mut items = self.lower_exprs(node);

        if items.len() >= 2 {
            if let ExprNode::Constructor { arg: None, .. } = items[0].node {
                let arg = items.remove(1);
                let head = &mut items[0];
                head.location += arg.location;

                if let ExprNode::Constructor { arg: slot, .. } = &mut head.node {
                    *slot = Some(Box::new(arg));
                }
            }
        }

        let mut result = fold_left(items, Operator::Apply, location);
        result.location += location;
        result
    }

    fn message_send(&mut self, node: &Node, location: Location) -> Expr {
        let items = self.lower_exprs(node);
        if has_errors(&items) {
            return self.placeholder(node, location);
        }

        let mut items = items.into_iter();
        let Some(receiver) = items.next() else {
            return Expr::new(ExprNode::ParseError, location);
        };

        let messages: Vec<_> = items
            .map(|message| {
                as_identifier(message).unwrap_or_else(|| panic!("message must be an identifier"))
            })
            .collect();

        let location = cover(
            location,
            std::iter::once(receiver.location).chain(messages.iter().map(|id| id.location)),
        );

        let node = ExprNode::MessageSend {
            receiver: Box::new(receiver),
            messages,
        };

        Expr::new(node, location)
    }

    /// Conditions and branches come as one flat list. The first half (rounded
    /// up) are the conditions; the rest are the blocks.
    fn if_chain(&mut self, node: &Node, location: Location) -> Expr {
        let mut conditions = self.lower_exprs(node);
        if has_errors(&conditions) {
            return self.placeholder(node, location);
        }

        let blocks: Vec<_> = conditions
            .split_off((conditions.len() + 1) / 2)
            .into_iter()
            .map(Expr::into_block)
            .collect();

        let location = cover(
            location,
            locations(&conditions).chain(locations(&blocks)),
        );

        Expr::new(ExprNode::If { conditions, blocks }, location)
    }

    fn arms(&mut self, cases: &Node) -> Vec<Arm> {
        cases
            .children
            .iter()
            .map(|case| {
                self.within(case, |this, _| {
                    let pattern = this.lower_pat(child(case, 0));
                    let body = this.lower_block(child(case, 1));
                    Arm { pattern, body }
                })
            })
            .collect()
    }

    fn memo_id(&mut self, node: &Node, location: Location) -> Option<MemoId> {
        let id = as_identifier(self.lower_expr(child(node, 0)))?;
        Some(MemoId {
            strong: node.tag == Tag::MemoStrong,
            location: cover(location, [id.location]),
            id,
        })
    }

    fn module(&mut self, node: &Node, location: Location) -> Expr {
        let (attribute, path, body) = match (node.tag, &node.children[..]) {
            (Tag::ModuleDecl, [path]) => (None, path, None),
            (Tag::ModuleDecl, [attribute, path]) => (Some(attribute), path, None),
            (Tag::ModuleDef, [path, body]) => (None, path, Some(body)),
            (Tag::ModuleDef, [attribute, path, body]) => (Some(attribute), path, Some(body)),
            (Tag::Package, [path, body]) => (None, path, Some(body)),
            (tag, children) => panic!("{tag:?} node with {} children", children.len()),
        };

        let attribute = attribute.map(|attribute| self.lower_expr(attribute));
        let path = self.module_path(path);
        let body = body.map(|body| self.lower_expr(body));

        let attribute = match attribute {
            Some(expr) => match expr.node {
                ExprNode::Attribute(kind) => Some(Attribute {
                    kind,
                    location: expr.location,
                }),
                _ => return self.placeholder(node, location),
            },

            None if node.tag == Tag::Package => None,
            None => Some(Attribute {
                kind: AttributeKind::Default,
                location,
            }),
        };

        let Some(path) = path else {
            return self.placeholder(node, location);
        };

        let body = match body {
            Some(body) if body.is_error() => return self.placeholder(node, location),
            body => body.map(Expr::into_block),
        };

        let location = cover(
            location,
            std::iter::once(path.location)
                .chain(attribute.map(|attribute| attribute.location))
                .chain(body.as_ref().map(|body| body.location)),
        );

        let node = ExprNode::Module {
            attribute,
            path,
            body,
        };

        Expr::new(node, location)
    }

    /// The dotted name of a module. Parts which could not be parsed are left
    /// out.
    fn module_path(&mut self, node: &Node) -> Option<ModulePath> {
        if node.tag != Tag::ModulePath {
            self.lower_expr(node);
            return None;
        }

        self.within(node, |this, location| {
            let segments: Vec<_> = this
                .lower_exprs(node)
                .into_iter()
                .filter_map(as_identifier)
                .collect();

            let location = cover(location, segments.iter().map(|id| id.location));
            Some(ModulePath { segments, location })
        })
    }
}

fn has_errors(items: &[Expr]) -> bool {
    items.iter().any(Expr::is_error)
}

fn as_identifier(expr: Expr) -> Option<Identifier> {
    match expr.node {
        ExprNode::Identifier(name) => Some(Identifier {
            name,
            location: expr.location,
        }),
        _ => None,
    }
}

fn relation_of(tag: Tag) -> Option<Relation> {
    Some(match tag {
        Tag::Equal => Relation::Equal,
        Tag::NotEqual => Relation::NotEqual,
        Tag::Unrelated => Relation::Unrelated,
        Tag::Less => Relation::Less,
        Tag::LessEq => Relation::LessEq,
        Tag::Greater => Relation::Greater,
        Tag::GreaterEq => Relation::GreaterEq,
        _ => return None,
    })
}

fn arm_locations(arms: &[Arm]) -> impl Iterator<Item = Location> + '_ {
    arms.iter()
        .flat_map(|arm| [arm.pattern.location, arm.body.location])
}

/// `a op (b op (c op d))`. Every intermediate node covers exactly its operands.
fn fold_right(items: Vec<Expr>, op: Operator, location: Location) -> Expr {
    let mut items = items.into_iter().rev();
    let Some(last) = items.next() else {
        return Expr::new(ExprNode::ParseError, location);
    };

    items.fold(last, |tail, head| {
        let location = head.location + tail.location;
        Expr::new(ExprNode::Binary(op, Box::new(head), Box::new(tail)), location)
    })
}

/// `((a op b) op c) op d`. Every intermediate node covers exactly its
/// operands.
fn fold_left(items: Vec<Expr>, op: Operator, location: Location) -> Expr {
    let mut items = items.into_iter();
    let Some(first) = items.next() else {
        return Expr::new(ExprNode::ParseError, location);
    };

    items.fold(first, |left, right| {
        let location = left.location + right.location;
        Expr::new(ExprNode::Binary(op, Box::new(left), Box::new(right)), location)
    })
}
