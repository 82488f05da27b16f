#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A 1-based line/column pair into the source text. Columns count
/// characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}
