use babel17_common::message::{Location, Messages, Position};
use num_bigint::BigInt;

use super::{decode_integer, decode_string};

fn decode(text: &str) -> (String, Messages) {
    let mut msgs = Messages::new();
    let result = decode_string(text, Position::new(3, 10), &mut msgs);
    (result, msgs)
}

fn codes(msgs: &Messages) -> Vec<&'static str> {
    msgs.iter().map(|msg| msg.code).collect()
}

#[test]
fn integers_in_every_base() {
    assert_eq!(BigInt::from(1234), decode_integer("1234"));
    assert_eq!(BigInt::from(0xff), decode_integer("0xff"));
    assert_eq!(BigInt::from(0xff), decode_integer("0xFF"));
    assert_eq!(BigInt::from(0o17), decode_integer("0o17"));
    assert_eq!(BigInt::from(0b101), decode_integer("0b101"));
    assert_eq!(BigInt::from(0), decode_integer("0"));
}

#[test]
fn integers_are_unbounded() {
    let text = "0x123456789abcdef0123456789abcdef";
    let value = decode_integer(text);

    assert_eq!("123456789abcdef0123456789abcdef", value.to_str_radix(16));
    assert_eq!(
        value,
        decode_integer(&value.to_str_radix(10)),
    );
}

#[test]
fn integers_render_back_in_their_own_base() {
    let decimal = "123456789012345678901234567890";
    assert_eq!(decimal, decode_integer(decimal).to_str_radix(10));

    let octal = "0o1234567012345670123456701234567";
    assert_eq!(octal, format!("0o{}", decode_integer(octal).to_str_radix(8)));

    let binary = "0b1011001110001111000011111000001111110000001";
    assert_eq!(binary, format!("0b{}", decode_integer(binary).to_str_radix(2)));
}

#[test]
#[should_panic]
fn digit_out_of_range_is_a_bug() {
    decode_integer("0b102");
}

#[test]
fn plain_strings_decode_to_themselves() {
    let (result, msgs) = decode("\"hello, w\u{f6}rld\"");

    assert_eq!("hello, w\u{f6}rld", result);
    assert!(msgs.is_empty());
}

#[test]
fn empty_string() {
    let (result, msgs) = decode(r#""""#);

    assert_eq!("", result);
    assert!(msgs.is_empty());
}

#[test]
fn simple_escapes() {
    let (result, msgs) = decode(r#""a\nb\r\\\"""#);

    assert_eq!("a\nb\r\\\"", result);
    assert!(msgs.is_empty());
}

#[test]
fn unicode_escapes() {
    let (result, msgs) = decode(r#""A\U00000042ä""#);

    assert_eq!("AB\u{e4}", result);
    assert!(msgs.is_empty());
}

#[test]
fn unknown_escape_is_located_on_both_characters() {
    let (result, msgs) = decode(r#""ab\qc""#);

    assert_eq!("abc", result);
    assert_eq!(vec!["EC00"], codes(&msgs));

    // The opening quote is at 3:10, so the backslash is at 3:13.
    assert_eq!(
        Location::new(Position::new(3, 13), Position::new(3, 14)),
        msgs.msgs[0].location
    );
    assert_eq!(
        "unknown escape character (codepoint = 113)",
        msgs.msgs[0].message
    );
}

#[test]
fn surrogate_band_boundaries() {
    let (_, msgs) = decode(r#""\uD7FF""#);
    assert!(msgs.is_empty());

    let (_, msgs) = decode(r#""\uD800""#);
    assert_eq!(vec!["EC02"], codes(&msgs));

    let (_, msgs) = decode(r#""\uDFFF""#);
    assert_eq!(vec!["EC02"], codes(&msgs));

    let (_, msgs) = decode(r#""\uE000""#);
    assert_eq!(vec!["EC02"], codes(&msgs));

    let (_, msgs) = decode(r#""\U000DFFFF""#);
    assert_eq!(vec!["EC02"], codes(&msgs));

    let (result, msgs) = decode(r#""\U000E0000""#);
    assert!(msgs.is_empty());
    assert_eq!("\u{e0000}", result);
}

#[test]
fn surrogate_band_applies_to_unescaped_characters() {
    let (result, msgs) = decode("\"a\u{1f600}b\"");

    assert_eq!("ab", result);
    assert_eq!(vec!["EC02"], codes(&msgs));
    assert_eq!(
        Location::point(Position::new(3, 12)),
        msgs.msgs[0].location
    );
}

#[test]
fn code_point_past_the_end_of_unicode() {
    let (result, msgs) = decode(r#""x\U00110000y""#);

    assert_eq!("xy", result);
    assert_eq!(vec!["EC01"], codes(&msgs));
    assert_eq!("invalid code point 1114112", msgs.msgs[0].message);
    assert_eq!(
        Location::new(Position::new(3, 12), Position::new(3, 21)),
        msgs.msgs[0].location
    );
}

#[test]
fn malformed_escapes() {
    let (result, msgs) = decode(r#""\u12g4""#);
    assert_eq!("g4", result);
    assert_eq!(vec!["EC03"], codes(&msgs));
    assert_eq!(
        Location::new(Position::new(3, 11), Position::new(3, 14)),
        msgs.msgs[0].location
    );

    let (result, msgs) = decode("\"ab\\\"");
    assert_eq!("ab", result);
    assert_eq!(vec!["EC03"], codes(&msgs));
}

#[test]
fn decoding_continues_after_an_error() {
    let (result, msgs) = decode(r#""\q1\uD800 2\z""#);

    assert_eq!("1 2", result);
    assert_eq!(vec!["EC00", "EC02", "EC00"], codes(&msgs));
}
