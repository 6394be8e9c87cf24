//! The abstract syntax tree consumed by the evaluator. Expressions and patterns
//! are separate trees, though each may contain the other (a binding holds a
//! pattern, a guard pattern holds an expression). Every node owns its children
//! and carries its location.

mod pattern;

use babel17_common::message::Location;
use num_bigint::BigInt;

pub use self::pattern::{NullaryPattern, Pattern, PatternEntry, PatternNode};

pub type Name = String;

/// Anything with a location in the source.
pub trait Located {
    fn location(&self) -> Location;

    /// Grow the location of this node to also cover `other`.
    fn widen(&mut self, other: Location);
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Expr {
    pub node: ExprNode,
    pub location: Location,
}

impl Expr {
    pub fn new(node: ExprNode, location: Location) -> Self {
        Self { node, location }
    }

    /// A block with no statements, substituted for constructs whose parts
    /// could not be lowered.
    pub fn empty_block(location: Location) -> Self {
        Self::new(ExprNode::Block(Vec::new()), location)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.node, ExprNode::ParseError)
    }

    /// View this expression as a block, wrapping it in one if needed.
    pub fn into_block(self) -> Block {
        match self.node {
            ExprNode::Block(statements) => Block {
                statements,
                location: self.location,
            },

            _ => Block {
                location: self.location,
                statements: vec![self],
            },
        }
    }
}

impl Located for Expr {
    fn location(&self) -> Location {
        self.location
    }

    fn widen(&mut self, other: Location) {
        self.location += other;
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ExprNode {
    /// A sequence of statements.
    Block(Vec<Expr>),

    /// `begin ... end`
    Begin(Block),

    /// `object ... end`
    Object(Block),

    /// `val pattern = value` or, if `mutable`, the assignment `pattern = value`.
    Binding {
        pattern: Pattern,
        mutable: bool,
        value: Box<Expr>,
    },

    /// `def name pattern = body`. A bare definition has no pattern.
    Def {
        attribute: Attribute,
        name: Identifier,
        pattern: Option<Pattern>,
        body: Box<Expr>,
    },

    Attribute(AttributeKind),
    Identifier(Name),

    /// A constructor tag, possibly applied to a single argument.
    Constructor {
        name: Name,
        arg: Option<Box<Expr>>,
    },

    Integer(BigInt),
    String(String),

    Nullary(Operator),
    Unary(Operator, Box<Expr>),
    Binary(Operator, Box<Expr>, Box<Expr>),

    /// A chain of relations such as `a < b <= c`.
    Compare {
        first: Box<Expr>,
        rest: Vec<(Relation, Expr)>,
    },

    /// `receiver.a.b`
    MessageSend {
        receiver: Box<Expr>,
        messages: Vec<Identifier>,
    },

    /// Each condition is paired with the block at the same index.
    If {
        conditions: Vec<Expr>,
        blocks: Vec<Block>,
    },

    While {
        condition: Box<Expr>,
        body: Block,
    },

    For {
        pattern: Pattern,
        iterable: Box<Expr>,
        body: Block,
    },

    Match {
        scrutinee: Box<Expr>,
        arms: Vec<Arm>,
    },

    Lambda(Vec<Arm>),

    With {
        value: Box<Expr>,
        control: Box<Expr>,
    },

    /// A bracketed list, or a parenthesized vector if `tuple` is set.
    List {
        elements: Vec<Expr>,
        tuple: bool,
    },

    Map(Vec<Entry>),
    Set(Vec<Expr>),

    MemoizeId(MemoId),
    Memoize(Vec<MemoId>),

    Yield(Box<Expr>),

    /// A module declaration or definition. Packages have no attribute and
    /// declarations have no body.
    Module {
        attribute: Option<Attribute>,
        path: ModulePath,
        body: Option<Block>,
    },

    /// Placeholder for a subtree the recognizer could not parse.
    ParseError,
}

/// The body of a compound expression.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Block {
    pub statements: Vec<Expr>,
    pub location: Location,
}

impl Located for Block {
    fn location(&self) -> Location {
        self.location
    }

    fn widen(&mut self, other: Location) {
        self.location += other;
    }
}

/// A clause of a `match` or lambda.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Arm {
    pub pattern: Pattern,
    pub body: Block,
}

/// A `key: value` pair of a map literal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    pub key: Expr,
    pub value: Expr,
    pub location: Location,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Identifier {
    pub name: Name,
    pub location: Location,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Attribute {
    pub kind: AttributeKind,
    pub location: Location,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AttributeKind {
    /// No visibility was written out.
    Default,
    Private,
    Protected,
    Public,
}

/// A memoized identifier, either strongly or weakly held.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MemoId {
    pub strong: bool,
    pub id: Identifier,
    pub location: Location,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ModulePath {
    pub segments: Vec<Identifier>,
    pub location: Location,
}

/// The operation performed by a nullary, unary or binary node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    // Nullary
    True,
    False,
    This,
    Root,
    ModuleKey,
    Here,
    Infinity,

    // Unary
    Not,
    Negate,
    Random,
    Await,
    Exception,
    Lazy,
    Concurrent,

    // Binary
    Or,
    And,
    PlusPlus,
    MinusMinus,
    TimesTimes,
    To,
    Downto,
    Plus,
    Minus,
    Times,
    Div,
    Mod,
    Pow,
    Cons,
    Apply,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Relation {
    Equal,
    NotEqual,
    Unrelated,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}
