//! Lexical analysis for the plaintalk notation.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of positioned tokens. It handles:
//!
//! - Line-by-line scanning with a fixed-priority list of regex passes
//! - Claim tracking so overlapping matches resolve to the higher-priority pass
//! - The delimiter-boundary check that prevents partial-word matches
//! - Comment retraction of string literals opened inside a comment
//! - Token position tracking across lines

pub mod lexer;
pub mod tokens;
