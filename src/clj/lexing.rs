//! Lexer
//!
//! This module turns raw Clojure source into a stream of positioned tokens.
//!
//! Scanning model
//!
//!     The scanner is a state machine with a single rune of lookahead: each
//!     state consumes zero or more runes and names the next state, and the
//!     driver loop runs states until one terminates the machine. One rune of
//!     pushback is supported so that lookahead decisions (sign vs. number,
//!     dispatch marker vs. tag) never consume past the rune that decides them.
//!
//! Concurrency
//!
//!     The scanner runs on its own thread and hands tokens over a rendezvous
//!     channel: every send blocks until the consumer takes the token, so the
//!     scanner is never more than one token ahead of its consumer and there
//!     is no buffering growth. Dropping the [`TokenStream`] mid-scan closes
//!     the channel, which unblocks and terminates the scanner thread; no
//!     scanning task outlives an abandoned consumer.
//!
//! Termination
//!
//!     Every stream ends with exactly one terminal token: end-of-input on
//!     success, or a single error token carrying a positioned diagnostic.
//!     The scanner does not resynchronize after an error.

mod scanner;
mod states;

pub use scanner::{lex, lex_reader, TokenStream};
