pub mod ast;
pub mod cst;
pub mod lex;
pub mod literal;
pub mod lower;

pub use lower::{lower, Program};
