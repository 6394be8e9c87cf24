use super::MessageAdder;

const KEYWORD_AS_IDENTIFIER: &str = "EP00";
const TRAILING_COMMA: &str = "EP01";
const MIXED_SET_AND_MAP: &str = "EP02";

impl<'a> MessageAdder<'a> {
    pub fn lower_keyword_as_identifier(&mut self) {
        self.add(KEYWORD_AS_IDENTIFIER, "cannot use keyword as identifier");
    }

    pub fn lower_trailing_comma(&mut self) {
        self.add(
            TRAILING_COMMA,
            "trailing comma notation is only for vectors of length 1",
        );
    }

    pub fn lower_mixed_set_and_map(&mut self) {
        self.add(
            MIXED_SET_AND_MAP,
            "mixing set and map elements is not allowed: map element expected",
        );
    }
}
