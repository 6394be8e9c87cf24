use logos::{FilterResult, Lexer, Logos};

#[derive(Logos, Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    #[token("begin")]
    Begin,
    #[token("end")]
    End,
    #[token("object")]
    Object,
    #[token("with")]
    With,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("elseif")]
    Elseif,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("do")]
    Do,
    #[token("yield")]
    Yield,
    #[token("match")]
    Match,
    #[token("case")]
    Case,
    #[token("as")]
    As,
    #[token("val")]
    Val,
    #[token("def")]
    Def,
    #[token("in")]
    In,
    #[token("exception")]
    Exception,
    #[token("to")]
    To,
    #[token("downto")]
    Downto,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("concurrent")]
    Concurrent,
    #[token("choose")]
    Choose,
    #[token("lazy")]
    Lazy,
    #[token("memoize")]
    Memoize,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("this")]
    This,
    #[token("random")]
    Random,
    #[token("nil")]
    Nil,
    #[token("div")]
    Div,
    #[token("mod")]
    Mod,
    #[token("module")]
    Module,
    #[token("typedef")]
    Typedef,
    #[token("typeof")]
    Typeof,
    #[token("private")]
    Private,
    #[token("import")]
    Import,
    #[token("unittest")]
    Unittest,
    #[token("and")]
    And,
    #[token("not")]
    Not,
    #[token("or")]
    Or,
    #[token("root")]
    Root,
    #[token("native")]
    Native,
    #[token("force")]
    Force,

    #[token("==")]
    #[token("\u{2261}")]
    Equal,
    #[token("<>")]
    #[token("\u{2262}")]
    NotEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    #[token("\u{2264}")]
    LessEq,
    #[token(">")]
    Greater,
    #[token(">=")]
    #[token("\u{2265}")]
    GreaterEq,

    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Quotient,
    #[token("^")]
    Pow,
    #[token("~")]
    Relate,
    #[token(":>")]
    Convert,
    #[token("::")]
    #[token("\u{2237}")]
    DoubleColon,
    #[token("**")]
    TimesTimes,
    #[token("//")]
    QuotientQuotient,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("=>")]
    #[token("\u{21d2}")]
    DoubleArrow,
    #[token("->")]
    #[token("\u{2192}")]
    Arrow,
    #[token("...")]
    #[token("\u{2026}")]
    Ellipsis,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token("?")]
    QuestionMark,
    #[token("!")]
    ExclamationMark,
    #[token("=")]
    Assign,
    #[token("_")]
    Underscore,
    #[token(":")]
    Colon,

    #[token("(")]
    RoundOpen,
    #[token(")")]
    RoundClose,
    #[token("[")]
    SquareOpen,
    #[token("]")]
    SquareClose,
    #[token("{")]
    CurlyOpen,
    #[token("}")]
    CurlyClose,

    #[token("#log")]
    PragmaLog,
    #[token("#print")]
    PragmaPrint,
    #[token("#assert")]
    PragmaAssert,
    #[token("#profile")]
    PragmaProfile,
    #[token("#catch")]
    PragmaCatch,

    /// A capitalized name, used for constructors and module names.
    #[regex(r"[A-Z\x{c4}\x{d6}\x{dc}][A-Za-z\x{e4}\x{f6}\x{fc}\x{df}\x{c4}\x{d6}\x{dc}0-9_]*")]
    Constr,

    #[regex(r"[a-z\x{e4}\x{f6}\x{fc}\x{df}][A-Za-z\x{e4}\x{f6}\x{fc}\x{df}\x{c4}\x{d6}\x{dc}0-9_]*")]
    Id,

    #[regex(r"[0-9]+\.[0-9]+([eE][+\-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+\-]?[0-9]+")]
    Float,

    #[regex(r"[0-9]+")]
    #[regex(r"0x[0-9a-fA-F]+")]
    #[regex(r"0o[0-7]+")]
    #[regex(r"0b[01]+")]
    Num,

    // Any escape is accepted here; the literal decoder reports the unknown ones.
    #[regex(r#""([^"\\\n\r]|\\[^\n\r])*""#)]
    String,

    #[regex(r"[\n\r\x{85}\x{c}\x{2028}\x{2029}][ \t\n\r\x{85}\x{c}\x{2028}\x{2029}]*")]
    Newline,

    #[error]
    #[regex(r"[ \t]+", logos::skip)]
    #[regex(r"##[^\n\r\x{85}\x{c}\x{2028}\x{2029}]*", logos::skip)]
    #[token("#(", lex_block_comment)]
    Error,
}

/// Skip a block comment delimited by `#( ... )#`. Block comments do not nest,
/// and one that is never closed is an error.
fn lex_block_comment(lexer: &mut Lexer<TokenKind>) -> FilterResult<()> {
    match lexer.remainder().find(")#") {
        Some(end) => {
            lexer.bump(end + 2);
            FilterResult::Skip
        }

        None => {
            lexer.bump(lexer.remainder().len());
            FilterResult::Error
        }
    }
}
