use super::MessageAdder;

const UNKNOWN_ESCAPE: &str = "EC00";
const INVALID_CODE_POINT: &str = "EC01";
const SURROGATE_CODE_POINT: &str = "EC02";
const MALFORMED_ESCAPE: &str = "EC03";

impl<'a> MessageAdder<'a> {
    pub fn literal_unknown_escape(&mut self, selector: char) {
        let code_point = u32::from(selector);
        self.add(
            UNKNOWN_ESCAPE,
            format!("unknown escape character (codepoint = {code_point})"),
        );
    }

    pub fn literal_invalid_code_point(&mut self, code_point: u32) {
        self.add(INVALID_CODE_POINT, format!("invalid code point {code_point}"));
    }

    pub fn literal_surrogate_code_point(&mut self, code_point: u32) {
        self.add(
            SURROGATE_CODE_POINT,
            format!("invalid code point (surrogate char) {code_point}"),
        );
    }

    /// A backslash at the very end of the literal, or a `\u`/`\U` escape that
    /// is not followed by enough hexadecimal digits.
    pub fn literal_malformed_escape(&mut self) {
        self.add(MALFORMED_ESCAPE, "malformed escape sequence");
    }
}
