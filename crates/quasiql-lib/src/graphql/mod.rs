//! GraphQL grammar: lexer, parser, AST and printer for executable documents.
//!
//! ```text
//! Source → lex → Vec<Token> → Parser → Document
//!                                 ↓
//!                            SyntaxError
//! ```
//!
//! Parsing is fail-fast: the first syntax error aborts the document, the way
//! the reference GraphQL implementation behaves. A document containing only
//! whitespace and comments parses to zero definitions; callers decide whether
//! that is acceptable.

pub mod ast;
pub mod lexer;
mod parser;
mod printer;
pub mod strings;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod printer_tests;

use rowan::{TextRange, TextSize};

pub use ast::{Definition, Document};
pub use printer::print;

/// Default bound on nesting of selection sets, lists, objects and types.
pub const DEFAULT_MAX_DEPTH: u32 = 512;

/// Where a source body starts inside its enclosing file.
///
/// `line` and `column` are 1-based, `offset` is a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationOffset {
    pub offset: TextSize,
    pub line: u32,
    pub column: u32,
}

impl LocationOffset {
    /// Location of byte `at` inside `text`, for a body that starts there.
    pub fn at(text: &str, at: TextSize) -> Self {
        let (line, column) = line_column(text, at);
        Self {
            offset: at,
            line,
            column,
        }
    }
}

impl Default for LocationOffset {
    fn default() -> Self {
        Self {
            offset: TextSize::from(0),
            line: 1,
            column: 1,
        }
    }
}

/// GraphQL source text with a display name (usually a file path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub body: String,
    pub name: String,
    pub location_offset: LocationOffset,
}

impl Source {
    pub fn new(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
            location_offset: LocationOffset::default(),
        }
    }

    pub fn with_location_offset(mut self, location_offset: LocationOffset) -> Self {
        self.location_offset = location_offset;
        self
    }

    /// 1-based line and column of a byte offset in the body, shifted by the location offset.
    pub fn line_column(&self, at: TextSize) -> (u32, u32) {
        let (body_line, body_column) = line_column(&self.body, at);
        let offset = self.location_offset;
        let column = if body_line == 1 {
            body_column + offset.column - 1
        } else {
            body_column
        };
        (body_line + offset.line - 1, column)
    }
}

/// 1-based line and column of a byte offset in `text`.
fn line_column(text: &str, at: TextSize) -> (u32, u32) {
    let at = usize::from(at).min(text.len());
    let before = &text.as_bytes()[..at];
    let line = before.iter().filter(|b| **b == b'\n').count() as u32 + 1;
    let line_start = before
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |pos| pos + 1);
    (line, (at - line_start) as u32 + 1)
}

/// Parser limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_depth: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The grammar parser rejected a source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Syntax Error: {message} ({name}:{line}:{column})")]
pub struct SyntaxError {
    pub message: String,
    /// Display name of the source.
    pub name: String,
    /// Offending range, relative to the source body.
    pub range: TextRange,
    pub location_offset: LocationOffset,
    pub line: u32,
    pub column: u32,
}

impl SyntaxError {
    pub(crate) fn new(source: &Source, range: TextRange, message: impl Into<String>) -> Self {
        let (line, column) = source.line_column(range.start());
        Self {
            message: message.into(),
            name: source.name.clone(),
            range,
            location_offset: source.location_offset,
            line,
            column,
        }
    }

    /// Offending range in the enclosing file.
    pub fn file_range(&self) -> TextRange {
        self.range + self.location_offset.offset
    }
}

/// Parses a GraphQL document with default limits.
pub fn parse(source: &Source) -> Result<Document, SyntaxError> {
    parse_with_options(source, ParseOptions::default())
}

pub fn parse_with_options(source: &Source, options: ParseOptions) -> Result<Document, SyntaxError> {
    let tokens = lexer::lex(&source.body);
    parser::Parser::new(&source.body, tokens, options.max_depth)
        .parse_document()
        .map_err(|err| SyntaxError::new(source, err.range, err.message))
}
