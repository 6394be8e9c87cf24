use babel17_common::message::Location;

use crate::cst::Node;
use crate::lex::Token;

/// Works out where concrete nodes are in the source. Nodes that cover no
/// tokens (or whose tokens give a nonsensical span) are placed at the
/// innermost node currently being lowered, which is tracked on a stack.
#[derive(Debug)]
pub struct LocationTracker<'a> {
    tokens: &'a [Token],
    stack: Vec<Location>,
}

impl<'a> LocationTracker<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            stack: vec![Location::START],
        }
    }

    pub fn locate(&self, node: &Node) -> Location {
        let token = |index: Option<usize>| index.and_then(|index| self.tokens.get(index));

        let (first, last) = match (token(node.tokens.start), token(node.tokens.stop)) {
            (Some(first), Some(last)) => (first, last),
            (Some(only), None) | (None, Some(only)) => (only, only),
            (None, None) => return self.innermost(),
        };

        let location = Location::new(first.start(), last.end());
        if location.is_valid() {
            location
        } else {
            self.innermost()
        }
    }

    pub fn enter(&mut self, location: Location) {
        self.stack.push(location);
    }

    pub fn leave(&mut self) {
        self.stack.pop();
        assert!(!self.stack.is_empty(), "left more nodes than were entered");
    }

    pub fn innermost(&self) -> Location {
        self.stack.last().copied().unwrap_or(Location::START)
    }
}
