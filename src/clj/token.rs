//! Token types produced by the scanner.
//!
//! A token is a classified, positioned lexeme. Fixed-shape single-character
//! tokens carry no payload; variable-length categories (symbols, numbers,
//! strings, comments, dispatch markers, ...) record the text they were
//! scanned from.
//!
//! `Bool` and `Nil` are part of the vocabulary but the scanner never emits
//! them: `true`, `false` and `nil` lex as ordinary symbols, and promoting
//! them is a later stage's job. Keeping that classification out of the
//! scanner is deliberate layering, not an omission.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clj::position::{Pos, PosError};

/// The classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// End of input; always the last token unless an error cut the scan short.
    Eof,
    /// `'`
    Apostrophe,
    /// `@`
    AtSign,
    /// `` ` ``
    Backtick,
    /// `true`, `false`; never produced by the scanner itself.
    Bool,
    /// `\c`, `\newline`, etc.
    CharLiteral,
    /// `^`
    Circumflex,
    /// `; foobar`
    Comment,
    /// Any dispatch macro marker: `#{`, `#(`, `#_`, etc. Does not include tags.
    Dispatch,
    /// `:foo`
    Keyword,
    /// `%`, `%1`, `%&`
    LambdaArg,
    /// `{`
    LeftBrace,
    /// `[`
    LeftBracket,
    /// `(`
    LeftParen,
    /// `nil`; never produced by the scanner itself.
    Nil,
    /// Any numeric literal; may be invalid (a downstream concern).
    Number,
    /// `#` used as a tag marker; dispatch markers are separate.
    Octothorpe,
    /// `}`
    RightBrace,
    /// `]`
    RightBracket,
    /// `)`
    RightParen,
    /// String literal (Java escapes, unvalidated at this layer).
    String,
    /// `foo`
    Symbol,
    /// `~`
    Tilde,
    /// Scan failure; the text is the diagnostic and the scanner halts after it.
    Error,
}

impl TokenKind {
    /// Stable lowercase name, used in diagnostics and rendered token streams.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Apostrophe => "apostrophe",
            TokenKind::AtSign => "at-sign",
            TokenKind::Backtick => "backtick",
            TokenKind::Bool => "bool",
            TokenKind::CharLiteral => "char-literal",
            TokenKind::Circumflex => "circumflex",
            TokenKind::Comment => "comment",
            TokenKind::Dispatch => "dispatch",
            TokenKind::Keyword => "keyword",
            TokenKind::LambdaArg => "lambda-arg",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::LeftBracket => "left-bracket",
            TokenKind::LeftParen => "left-paren",
            TokenKind::Nil => "nil",
            TokenKind::Number => "number",
            TokenKind::Octothorpe => "octothorpe",
            TokenKind::RightBrace => "right-brace",
            TokenKind::RightBracket => "right-bracket",
            TokenKind::RightParen => "right-paren",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Tilde => "tilde",
            TokenKind::Error => "error",
        }
    }

    /// Whether tokens of this kind carry a meaningful text payload.
    pub fn has_text(&self) -> bool {
        matches!(
            self,
            TokenKind::Error
                | TokenKind::Bool
                | TokenKind::CharLiteral
                | TokenKind::Comment
                | TokenKind::Dispatch
                | TokenKind::Keyword
                | TokenKind::LambdaArg
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::Symbol
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexeme: kind, the position of its first rune, and its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: Pos,
    pub text: String,
}

impl Token {
    /// Convert an error token into a positioned diagnostic with the `lex` tag.
    ///
    /// Calling this on any other kind is a programming-contract violation
    /// and panics.
    pub fn as_error(&self) -> PosError {
        assert!(
            self.kind == TokenKind::Error,
            "as_error called on non-error token"
        );
        self.pos.format_error("lex", self.text.clone())
    }

    /// Whether this token terminates the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_text() {
            write!(f, "<{}@{}>({:?})", self.kind, self.pos, self.text)
        } else {
            write!(f, "<{}@{}>", self.kind, self.pos)
        }
    }
}
