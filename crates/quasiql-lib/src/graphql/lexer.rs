//! Lexer for GraphQL documents.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! Whitespace, commas, the byte order mark and `#` comments are insignificant and skipped.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. An unterminated block string becomes a single
//! `Garbage` token running to the end of input.

use logos::{Lexer, Logos};
use rowan::TextRange;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n,\u{FEFF}]+")]
#[logos(skip(r"#[^\r\n]*", allow_greedy = true))]
pub enum TokenKind {
    #[token("!")]
    Bang,

    #[token("$")]
    Dollar,

    #[token("(")]
    ParenL,

    #[token(")")]
    ParenR,

    #[token("...")]
    Spread,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("@")]
    At,

    #[token("[")]
    BracketL,

    #[token("]")]
    BracketR,

    #[token("{")]
    BraceL,

    #[token("}")]
    BraceR,

    #[regex(r"[_A-Za-z][_0-9A-Za-z]*")]
    Name,

    #[regex(r"-?(0|[1-9][0-9]*)")]
    Int,

    /// Requires a fraction or an exponent so it never ties with `Int`.
    #[regex(r"-?(0|[1-9][0-9]*)(\.[0-9]+([eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)")]
    Float,

    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    String,

    /// Opening `"""`; the callback consumes through the closing delimiter.
    #[token(r#"""""#, lex_block_string)]
    BlockString,

    /// Coalesced run of characters the lexer could not recognize.
    Garbage,

    /// Sentinel returned by the parser past the last token.
    Eof,
}

impl TokenKind {
    /// Human-readable description used in syntax errors.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Bang => "\"!\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::ParenL => "\"(\"",
            TokenKind::ParenR => "\")\"",
            TokenKind::Spread => "\"...\"",
            TokenKind::Colon => "\":\"",
            TokenKind::Equals => "\"=\"",
            TokenKind::At => "\"@\"",
            TokenKind::BracketL => "\"[\"",
            TokenKind::BracketR => "\"]\"",
            TokenKind::BraceL => "\"{\"",
            TokenKind::BraceR => "\"}\"",
            TokenKind::Name => "Name",
            TokenKind::Int => "Int",
            TokenKind::Float => "Float",
            TokenKind::String => "String",
            TokenKind::BlockString => "BlockString",
            TokenKind::Garbage => "unexpected character",
            TokenKind::Eof => "<EOF>",
        }
    }
}

/// Consumes a block string body up to and including the closing `"""`.
///
/// `\"""` is an escaped delimiter and does not terminate the string.
fn lex_block_string(lex: &mut Lexer<TokenKind>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        if rest[i..].starts_with(br#"\""""#) {
            i += 4;
            continue;
        }
        if rest[i..].starts_with(br#"""""#) {
            lex.bump(i + 3);
            return true;
        }
        i += 1;
    }
    lex.bump(rest.len());
    false
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output to coalesce consecutive lexer errors into single `Garbage` tokens.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }

                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
