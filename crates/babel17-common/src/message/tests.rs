use codespan_reporting::files::SimpleFiles;

use super::{Location, Messages, Position};

fn location(start: (usize, usize), end: (usize, usize)) -> Location {
    Location::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

#[test]
fn merge_covers_both() {
    let a = location((1, 4), (1, 8));
    let b = location((2, 1), (2, 3));

    assert_eq!(location((1, 4), (2, 3)), a + b);
    assert_eq!(a + b, b + a);
}

#[test]
fn merge_of_nested_is_outer() {
    let outer = location((1, 1), (3, 10));
    let inner = location((2, 2), (2, 5));

    assert_eq!(outer, outer + inner);
    assert!(outer.contains(inner));
    assert!(!inner.contains(outer));
}

#[test]
fn sum_of_locations() {
    let total: Location = [
        location((2, 5), (2, 6)),
        location((1, 3), (1, 3)),
        location((4, 1), (4, 9)),
    ]
    .into_iter()
    .sum();

    assert_eq!(location((1, 3), (4, 9)), total);
}

#[test]
fn reversed_location_is_invalid() {
    assert!(location((1, 1), (1, 1)).is_valid());
    assert!(location((1, 1), (2, 1)).is_valid());
    assert!(!location((1, 5), (1, 4)).is_valid());
    assert!(!location((2, 1), (1, 9)).is_valid());
}

#[test]
fn relative_shifts_first_line_columns() {
    let origin = Position::new(3, 10);
    let relative = location((1, 2), (1, 4));

    assert_eq!(location((3, 11), (3, 13)), relative.relative_to(origin));
}

#[test]
fn messages_keep_order_and_duplicates() {
    let mut messages = Messages::new();
    let at = location((1, 1), (1, 2));

    messages.at(at).lower_trailing_comma();
    messages.at(at).lower_keyword_as_identifier();
    messages.at(at).lower_trailing_comma();

    let codes: Vec<_> = messages.iter().map(|diagnostic| diagnostic.code).collect();
    assert_eq!(vec!["EP01", "EP00", "EP01"], codes);
    assert_eq!(3, messages.len());
}

#[test]
fn merge_appends() {
    let mut first = Messages::new();
    let mut second = Messages::new();

    first.at(location((1, 1), (1, 1))).lex_error();
    second.at(location((2, 1), (2, 1))).parse_syntax_error();
    first.merge(second);

    assert_eq!(2, first.len());
    assert_eq!("syntax error", first.msgs[1].message);
}

#[test]
fn report_labels_the_right_bytes() {
    let mut files = SimpleFiles::new();
    let file = files.add("main.b17", "val x = 1\nval \u{e4}bc = \"q\"\n");

    let mut messages = Messages::new();
    messages.at(location((2, 5), (2, 7))).lower_keyword_as_identifier();

    let report = messages.msgs[0].to_report(&files, file);
    let label = &report.labels[0];

    // The second line starts at byte 10, and `ä` is two bytes long.
    assert_eq!(14..18, label.range);
    assert_eq!(Some("EP00".to_string()), report.code);
}

#[test]
fn report_outside_file_is_empty() {
    let mut files = SimpleFiles::new();
    let file = files.add("main.b17", "x");

    let mut messages = Messages::new();
    messages.at(location((5, 1), (5, 2))).parse_syntax_error();

    let report = messages.msgs[0].to_report(&files, file);
    assert_eq!(0..0, report.labels[0].range);
}
