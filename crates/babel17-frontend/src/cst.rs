//! The concrete syntax tree is the grammar-shaped output of the recognizer. It
//! is very "dumb": every node is just a grammar tag, the text of the token it
//! was built from (if any), its children and the range of tokens it covers.
//! Working out what the tree actually means is the job of the lowering pass.

/// The closed set of grammar rules and tokens a concrete node can come from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tag {
    Program,
    Block,

    Val,
    Assign,
    Def,
    Attribute,
    Private,
    Protected,
    Public,

    Id,
    Constr,
    Num,
    String,

    True,
    False,
    This,
    Root,
    ModuleKey,
    Here,
    Infinity,

    Random,
    Await,
    Exception,
    Lazy,
    Concurrent,
    Not,
    Negate,

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

    /// A chain of operands separated by relation operators.
    Compare,
    Equal,
    NotEqual,
    Unrelated,
    Less,
    LessEq,
    Greater,
    GreaterEq,

    ListCons,
    Pow,
    Apply,
    MessageSend,

    EmptyMap,
    SquareList,
    /// A parenthesized list, with a [`Tag::Commas`] child followed by an
    /// [`Tag::Elements`] child.
    RoundList,
    Commas,
    Comma,
    Elements,
    /// A brace literal whose children are [`Tag::Entry`] groups of one
    /// (set element) or two (key and value) children.
    MapOrSet,
    Entry,

    If,
    Begin,
    Object,
    While,
    For,
    Match,
    Lambda,
    /// The clauses of a match or lambda, each a [`Tag::Case`] holding a
    /// pattern and a body.
    Cases,
    Case,
    With,

    MemoStrong,
    MemoWeak,
    Memoize,
    Yield,

    ModulePath,
    ModuleDecl,
    ModuleDef,
    Package,

    Any,
    Ellipsis,
    As,
    IfPattern,
    ValPattern,
    Predicate,

    /// A node the recognizer could not make sense of. It has already been
    /// reported as a syntax error.
    Error,
}

/// The indices of the first and last token a node covers. Either bound may be
/// missing, for instance for nodes the recognizer synthesized.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct TokenRange {
    pub start: Option<usize>,
    pub stop: Option<usize>,
}

impl TokenRange {
    pub fn new(start: usize, stop: usize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
        }
    }

    pub fn single(index: usize) -> Self {
        Self::new(index, index)
    }

    /// The smallest range covering both, treating missing bounds as unknown.
    fn join(self, other: TokenRange) -> Self {
        let pick = |a: Option<usize>, b: Option<usize>, f: fn(usize, usize) -> usize| match (a, b) {
            (Some(a), Some(b)) => Some(f(a, b)),
            (a, b) => a.or(b),
        };

        Self {
            start: pick(self.start, other.start, usize::min),
            stop: pick(self.stop, other.stop, usize::max),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Node {
    pub tag: Tag,

    /// The text of the token this node was built from. Empty for rule nodes.
    pub text: String,

    pub children: Vec<Node>,
    pub tokens: TokenRange,
}

impl Node {
    /// A node built from the single token at `index`.
    pub fn leaf(tag: Tag, index: usize, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
            children: Vec::new(),
            tokens: TokenRange::single(index),
        }
    }

    /// A rule node covering exactly the tokens of its children.
    pub fn branch(tag: Tag, children: Vec<Node>) -> Self {
        let tokens = children
            .iter()
            .map(|child| child.tokens)
            .reduce(TokenRange::join)
            .unwrap_or_default();

        Self {
            tag,
            text: String::new(),
            children,
            tokens,
        }
    }

    /// A rule node which covers no tokens of its own.
    pub fn synthetic(tag: Tag, children: Vec<Node>) -> Self {
        Self {
            tag,
            text: String::new(),
            children,
            tokens: TokenRange::default(),
        }
    }

    pub fn with_tokens(self, tokens: TokenRange) -> Self {
        Self { tokens, ..self }
    }
}
