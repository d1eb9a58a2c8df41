//! # cljfmt
//!
//! The tokenizing and tree-rewriting core of a structural Clojure formatter.
//!
//! The crate covers two surfaces:
//!
//! - A scanner that turns raw source text into a stream of positioned tokens,
//!   reproducing the Clojure reader's tokenization quirks (dispatch lookahead,
//!   sign/number ambiguity, permissive numeric tokens such as `3foo`).
//! - A transform engine that rewrites a format-preserving syntax tree (one
//!   whose leaves include explicit newline and comment nodes) to normalize
//!   whitespace and declaration order without touching program semantics.
//!
//! The grammar-level parser that consumes the token stream and the printer
//! that serializes the rewritten tree live outside this crate; they interact
//! with it only through the token type and the node capability contract in
//! [`clj::ast`].

pub mod clj;
