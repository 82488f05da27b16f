//! Utility macros for the lexer.
//!
//! This module defines helper macros used throughout the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_VALUE_HANDLER!` - Creates a pass handler for tokens that keep their matched text
//! - `MK_KEYWORD_HANDLER!` - Creates a pass handler for keyword tokens with no payload
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a pass handler for recognizers whose tokens carry the matched
/// text as their value (identifiers, integers, floats).
///
/// The generated handler walks every match of the pass regex on the
/// current line, skips candidates that touch an already claimed span or
/// fail the delimiter-boundary check, and claims the span of every
/// candidate it accepts.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// LexPass {
///     kind: TokenKind::Integer,
///     regex: Regex::new(r"-?[0-9](?:[0-9]|_?[0-9])*").unwrap(),
///     handler: MK_VALUE_HANDLER!(TokenKind::Integer),
/// }
/// ```
#[macro_export]
macro_rules! MK_VALUE_HANDLER {
    ($kind:expr) => {
        |scan: &mut LineScan, regex: &Regex| {
            let line = scan.line;
            for found in regex.find_iter(line) {
                let (first, last) = (found.start(), found.end() - 1);
                if !scan.claims.overlaps(first, last) && delimited(line, first, last) {
                    let column = char_column(line, first);
                    scan.push(MK_TOKEN!(
                        $kind,
                        found.as_str().to_string(),
                        Position {
                            line: scan.line_number,
                            column,
                        }
                    ));
                    scan.claims.insert(first, last);
                }
            }
        }
    };
}

/// Creates a pass handler for keyword recognizers ("should be", "say",
/// "the answer is"). Identical gating to `MK_VALUE_HANDLER!`, but the
/// emitted token carries no value payload.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
#[macro_export]
macro_rules! MK_KEYWORD_HANDLER {
    ($kind:expr) => {
        |scan: &mut LineScan, regex: &Regex| {
            let line = scan.line;
            for found in regex.find_iter(line) {
                let (first, last) = (found.start(), found.end() - 1);
                if !scan.claims.overlaps(first, last) && delimited(line, first, last) {
                    let column = char_column(line, first);
                    scan.push(MK_TOKEN!(
                        $kind,
                        String::new(),
                        Position {
                            line: scan.line_number,
                            column,
                        }
                    ));
                    scan.claims.insert(first, last);
                }
            }
        }
    };
}
