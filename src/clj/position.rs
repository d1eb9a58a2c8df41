//! Source positions and positioned error values.
//!
//! Every token carries the position of its first rune. Positions are cloned
//! whenever a token captures a "start" coordinate, so later scanner movement
//! can never mutate a position that has already been handed out.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// `offset` counts bytes and is monotonically non-decreasing as scanning
/// proceeds; `line` and `col` are 1-based and count runes, with `col` reset
/// to 1 and `line` incremented on each consumed newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    /// The name of the input source (usually a file name).
    pub name: String,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl Pos {
    /// A position at the very start of the named input.
    pub fn new(name: impl Into<String>) -> Pos {
        Pos {
            name: name.into(),
            offset: 0,
            line: 1,
            col: 1,
        }
    }

    /// Build a positioned error tagged with the reporting layer's name
    /// (the scanner uses `"lex"`).
    pub fn format_error(&self, tag: impl Into<String>, message: impl Into<String>) -> PosError {
        PosError {
            tag: tag.into(),
            pos: self.clone(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.name, self.line, self.col)
    }
}

/// An error annotated with the source position it was observed at.
///
/// Renders as `<tag> error at <name>:<line>:<col>: <message>`. The tag
/// distinguishes lexical errors from other layers that reuse this helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosError {
    pub tag: String,
    pub pos: Pos,
    pub message: String,
}

impl fmt::Display for PosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error at {}: {}", self.tag, self.pos, self.message)
    }
}

impl Error for PosError {}
