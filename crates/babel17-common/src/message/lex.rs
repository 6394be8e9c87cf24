use super::MessageAdder;

const LEXICAL_ERROR: &str = "EL00";
const SYNTAX_ERROR: &str = "ES00";

impl<'a> MessageAdder<'a> {
    pub fn lex_error(&mut self) {
        self.add(LEXICAL_ERROR, "lexical error");
    }

    pub fn parse_syntax_error(&mut self) {
        self.add(SYNTAX_ERROR, "syntax error");
    }
}
