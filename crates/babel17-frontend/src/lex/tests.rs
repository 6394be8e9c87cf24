use babel17_common::message::Position;

use super::{lex, TokenKind};

/// Check that the lexer produces the expected token kinds, and that no errors
/// are reported.
fn check(source: &str, expected: &[TokenKind]) {
    let tokens = lex(source);
    let kinds: Vec<_> = tokens.tokens.iter().map(|token| token.kind).collect();

    assert_eq!(expected, &kinds[..]);
    assert!(tokens.errors.is_empty());
}

#[test]
fn lex_keywords_and_names() {
    check(
        "val begin_x = Foo beginning",
        &[
            TokenKind::Val,
            TokenKind::Id,
            TokenKind::Assign,
            TokenKind::Constr,
            TokenKind::Id,
        ],
    );
}

#[test]
fn lex_numbers_in_every_base() {
    let tokens = lex("12 0x1aF 0o17 0b101 1.5e3 2e8");
    let texts: Vec<_> = tokens
        .tokens
        .iter()
        .map(|token| (token.kind, token.text.as_str()))
        .collect();

    assert_eq!(
        vec![
            (TokenKind::Num, "12"),
            (TokenKind::Num, "0x1aF"),
            (TokenKind::Num, "0o17"),
            (TokenKind::Num, "0b101"),
            (TokenKind::Float, "1.5e3"),
            (TokenKind::Float, "2e8"),
        ],
        texts
    );
}

#[test]
fn lex_unicode_operators() {
    check(
        "a \u{2261} b \u{2264} c \u{21d2} d \u{2026}",
        &[
            TokenKind::Id,
            TokenKind::Equal,
            TokenKind::Id,
            TokenKind::LessEq,
            TokenKind::Id,
            TokenKind::DoubleArrow,
            TokenKind::Id,
            TokenKind::Ellipsis,
        ],
    );
}

#[test]
fn lex_longest_operator_wins() {
    check(
        "<> <= < :> :: : ++ + -- ->",
        &[
            TokenKind::NotEqual,
            TokenKind::LessEq,
            TokenKind::Less,
            TokenKind::Convert,
            TokenKind::DoubleColon,
            TokenKind::Colon,
            TokenKind::PlusPlus,
            TokenKind::Plus,
            TokenKind::MinusMinus,
            TokenKind::Arrow,
        ],
    );
}

#[test]
fn lex_skips_comments() {
    check(
        "x ## a comment\n#( a (block) comment )# y",
        &[TokenKind::Id, TokenKind::Newline, TokenKind::Id],
    );
}

#[test]
fn lex_block_comments() {
    check("x #(a)# y", &[TokenKind::Id, TokenKind::Id]);
    check("x #( a (b) c )# y", &[TokenKind::Id, TokenKind::Id]);
    check("x #( ) ) # )# y", &[TokenKind::Id, TokenKind::Id]);
    check("x #( first )# y #( second )#", &[TokenKind::Id, TokenKind::Id]);
}

#[test]
fn lex_unterminated_block_comment() {
    let tokens = lex("x #( never closed )");
    let kinds: Vec<_> = tokens.tokens.iter().map(|token| token.kind).collect();

    assert_eq!(vec![TokenKind::Id], kinds);
    assert_eq!(vec![Position::new(1, 3)], tokens.errors);
}

#[test]
fn lex_strings_keep_escapes() {
    let tokens = lex(r#""a\nb" "\q""#);

    assert_eq!(2, tokens.tokens.len());
    assert_eq!(r#""a\nb""#, tokens.tokens[0].text);
    assert_eq!(TokenKind::String, tokens.tokens[1].kind);
}

#[test]
fn lex_positions_are_one_based() {
    let tokens = lex("val x =\n  \u{e4}b");
    let positions: Vec<_> = tokens.tokens.iter().map(|token| token.start()).collect();

    assert_eq!(
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(1, 7),
            Position::new(1, 8),
            Position::new(2, 3),
        ],
        positions
    );

    assert_eq!(Position::new(2, 4), tokens.tokens[4].end());
}

#[test]
fn lex_reports_invalid_characters_once_per_run() {
    let tokens = lex("a $$ b $");

    assert_eq!(2, tokens.tokens.len());
    assert_eq!(
        vec![Position::new(1, 3), Position::new(1, 8)],
        tokens.errors
    );
}
