use std::io::BufRead;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_KEYWORD_HANDLER, MK_TOKEN, MK_VALUE_HANDLER,
};

use super::tokens::{Token, TokenKind};

pub type PassHandler = fn(&mut LineScan, &Regex);

/// One pattern recognizer in the fixed pass order.
pub struct LexPass {
    pub kind: TokenKind,
    pub regex: Regex,
    pub handler: PassHandler,
}

lazy_static! {
    static ref DELIM_BEFORE: Regex = Regex::new(r#"[\s"]$"#).unwrap();
    static ref DELIM_AFTER: Regex = Regex::new(r#"^[\s"]"#).unwrap();
}

/// The recognizer list in priority order. Earlier passes claim their
/// spans first, which is how overlapping matches are resolved: a float
/// claims `3.14` before the integer pass ever sees the `3`.
pub fn passes() -> Vec<LexPass> {
    vec![
        LexPass {
            kind: TokenKind::String,
            regex: Regex::new("<<.*?>>").unwrap(),
            handler: string_handler,
        },
        LexPass {
            kind: TokenKind::Comment,
            regex: Regex::new("\".*").unwrap(),
            handler: comment_handler,
        },
        LexPass {
            kind: TokenKind::Float,
            regex: Regex::new(
                r"-?[0-9](?:[0-9]|_?[0-9])*\.[0-9](?:[0-9]|_?[0-9])*(?:e-?[0-9](?:[0-9]|_?[0-9])*)?",
            )
            .unwrap(),
            handler: MK_VALUE_HANDLER!(TokenKind::Float),
        },
        LexPass {
            kind: TokenKind::Integer,
            regex: Regex::new(r"-?[0-9](?:[0-9]|_?[0-9])*").unwrap(),
            handler: MK_VALUE_HANDLER!(TokenKind::Integer),
        },
        LexPass {
            kind: TokenKind::Assign,
            regex: Regex::new(r"should\s+be").unwrap(),
            handler: MK_KEYWORD_HANDLER!(TokenKind::Assign),
        },
        LexPass {
            kind: TokenKind::Say,
            regex: Regex::new("say").unwrap(),
            handler: MK_KEYWORD_HANDLER!(TokenKind::Say),
        },
        LexPass {
            kind: TokenKind::Answer,
            regex: Regex::new(r"the\s+answer\s+is").unwrap(),
            handler: MK_KEYWORD_HANDLER!(TokenKind::Answer),
        },
        LexPass {
            kind: TokenKind::Identifier,
            regex: Regex::new(
                r"[_\p{Sm}\p{Sc}\p{Sk}\p{So}\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Lo}][_\p{Sm}\p{Sc}\p{Sk}\p{So}\p{Lu}\p{Ll}\p{Lt}\p{Lm}\p{Lo}\p{Nd}]*",
            )
            .unwrap(),
            handler: MK_VALUE_HANDLER!(TokenKind::Identifier),
        },
        LexPass {
            kind: TokenKind::WS,
            regex: Regex::new(r"\s+").unwrap(),
            handler: whitespace_handler,
        },
    ]
}

/// Spans on the current line already consumed by a higher-priority pass.
/// Intervals are inclusive byte ranges; the overlap test checks endpoint
/// containment, so a candidate is rejected as soon as either of its ends
/// falls inside a claimed span.
struct ClaimSet {
    spans: Vec<(usize, usize)>,
}

impl ClaimSet {
    fn new() -> ClaimSet {
        ClaimSet { spans: vec![] }
    }

    fn insert(&mut self, first: usize, last: usize) {
        self.spans.push((first, last));
    }

    fn overlaps(&self, first: usize, last: usize) -> bool {
        self.spans.iter().any(|&(start, stop)| {
            (first >= start && first <= stop) || (last >= start && last <= stop)
        })
    }
}

/// Scan state for a single line: the claimed spans and the tokens
/// produced on this line so far. The buffer is merged into the lexer's
/// result sequence once every pass has run, so comment retraction only
/// ever has to look at the current line.
pub struct LineScan<'a> {
    line: &'a str,
    line_number: usize,
    claims: ClaimSet,
    tokens: Vec<Token>,
}

impl<'a> LineScan<'a> {
    fn new(line: &'a str, line_number: usize) -> LineScan<'a> {
        LineScan {
            line,
            line_number,
            claims: ClaimSet::new(),
            tokens: vec![],
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }
}

/// A candidate span `[first, last]` is only valid when flanked by
/// whitespace, a quote character or the start/end of the line. This is
/// what stops the integer pattern from matching inside `abc123`.
fn delimited(line: &str, first: usize, last: usize) -> bool {
    if first > 0 && !DELIM_BEFORE.is_match(&line[..first]) {
        return false;
    }

    if last + 1 < line.len() && !DELIM_AFTER.is_match(&line[last + 1..]) {
        return false;
    }

    true
}

/// 1-based character column for a byte offset into the line.
fn char_column(line: &str, index: usize) -> usize {
    line[..index].chars().count() + 1
}

fn string_handler(scan: &mut LineScan, regex: &Regex) {
    let line = scan.line;
    for found in regex.find_iter(line) {
        let (first, last) = (found.start(), found.end() - 1);
        if delimited(line, first, last) {
            let column = char_column(line, first);
            let value = line[found.start() + 2..found.end() - 2].to_string();
            scan.push(MK_TOKEN!(
                TokenKind::String,
                value,
                Position {
                    line: scan.line_number,
                    column,
                }
            ));
        }
        // The span is claimed even when the boundary check fails.
        scan.claims.insert(first, last);
    }
}

fn comment_handler(scan: &mut LineScan, regex: &Regex) {
    let line = scan.line;
    for found in regex.find_iter(line) {
        let first = found.start();
        let column = char_column(line, first);

        if !scan.claims.overlaps(first, first) {
            let value = line[first + 1..].to_string();
            scan.push(MK_TOKEN!(
                TokenKind::Comment,
                value,
                Position {
                    line: scan.line_number,
                    column,
                }
            ));
        }

        // A string opened at or after the comment marker sits inside the
        // comment and must not survive as a STRING token.
        scan.tokens
            .retain(|token| token.kind != TokenKind::String || token.position.column < column);

        scan.claims.insert(first, found.end() - 1);
    }
}

fn whitespace_handler(scan: &mut LineScan, regex: &Regex) {
    let line = scan.line;
    for found in regex.find_iter(line) {
        let (first, last) = (found.start(), found.end() - 1);
        if !scan.claims.overlaps(first, last) {
            let column = char_column(line, first);
            scan.push(MK_TOKEN!(
                TokenKind::WS,
                String::new(),
                Position {
                    line: scan.line_number,
                    column,
                }
            ));
        }
        // Whitespace runs last; nothing depends on its spans being claimed.
    }
}

pub struct Lexer<R> {
    passes: Vec<LexPass>,
    tokens: Vec<Token>,
    position: Position,
    reader: R,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R) -> Lexer<R> {
        Lexer {
            passes: passes(),
            tokens: vec![],
            position: Position::start(),
            reader,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|source| Error::new(ErrorImpl::ReadError { source }, self.position.clone()))?;

        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    fn lex_line(&mut self, line: &str) {
        let mut scan = LineScan::new(line, self.position.line);
        for pass in &self.passes {
            (pass.handler)(&mut scan, &pass.regex);
        }
        self.tokens.append(&mut scan.tokens);
    }

    /// Consumes the line source to completion and returns the token
    /// sequence, with an EOL marker between lines and a single EOF
    /// marker at the end. A failed read aborts the run with the error;
    /// the caller decides whether that ends the process.
    pub fn run(mut self) -> Result<Vec<Token>, Error> {
        let mut previous_len = 0;
        let mut any_line = false;

        while let Some(line) = self.read_line()? {
            if any_line {
                self.tokens.push(MK_TOKEN!(
                    TokenKind::EOL,
                    String::new(),
                    Position {
                        line: self.position.line,
                        column: previous_len + 1,
                    }
                ));
                self.position.line += 1;
                self.position.column = 1;
            }

            self.lex_line(&line);
            previous_len = line.chars().count();
            any_line = true;
        }

        self.tokens.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            Position {
                line: self.position.line,
                column: previous_len + 1,
            }
        ));

        Ok(self.tokens)
    }
}

pub fn tokenize<R: BufRead>(input: R) -> Result<Vec<Token>, Error> {
    Lexer::new(input).run()
}
