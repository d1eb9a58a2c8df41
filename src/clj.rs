//! Main module for the cljfmt core library.
//!
//! Pipeline
//!
//!     source text -> lexing -> token stream -> (external parser) -> tree
//!     -> transforms (in-place rewrite) -> (external printer) -> text
//!
//! The modules mirror that flow: [`position`] and [`token`] are the leaf data
//! types shared by everything downstream, [`lexing`] produces the token
//! stream, [`ast`] is the node capability contract the transform engine
//! consumes, and [`transforms`] holds the rewrite passes. [`testing`] exposes
//! node factories so tests can build trees without a parser.

pub mod ast;
pub mod lexing;
pub mod position;
pub mod testing;
pub mod token;
pub mod transforms;
