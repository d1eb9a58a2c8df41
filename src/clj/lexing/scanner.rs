//! Scanner mechanics: rune reading, pushback, token emission, and the
//! producer thread behind [`TokenStream`].
//!
//! The lexical grammar itself lives in the sibling `states` module; this file
//! owns the bookkeeping every state relies on: position advancement, the
//! single-rune pushback slot, the token text buffer, and the blocking handoff
//! to the consumer.

use std::io::{self, BufRead, Cursor};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;

use tracing::{debug, trace};

use crate::clj::position::Pos;
use crate::clj::token::{Token, TokenKind};

use super::states::State;

/// Start scanning an in-memory source. The scanner runs on its own thread;
/// consume tokens through the returned [`TokenStream`].
pub fn lex(name: impl Into<String>, source: impl Into<String>) -> TokenStream {
    lex_reader(name, Cursor::new(source.into().into_bytes()))
}

/// Start scanning a buffered reader.
///
/// End-of-input is the normal terminal condition; any other read failure
/// (I/O error, invalid UTF-8) aborts the machine with a terminal error token
/// rather than a panic.
pub fn lex_reader<R>(name: impl Into<String>, input: R) -> TokenStream
where
    R: BufRead + Send + 'static,
{
    let name = name.into();
    let (tokens, receiver) = mpsc::sync_channel(0);
    debug!(source = %name, "starting scanner");
    let scanner = Scanner {
        input,
        pos: Pos::new(name.clone()),
        start: Pos::new(name),
        last_pos: None,
        pending: None,
        buf: String::new(),
        tokens,
    };
    let handle = thread::spawn(move || scanner.run());
    TokenStream {
        tokens: Some(receiver),
        scanner: Some(handle),
    }
}

/// Consumer handle for a running scanner. Sole reader of the token channel.
///
/// A stream is single-use: once the terminal token has been taken the
/// iterator is exhausted. Dropping the stream early cancels the scanner.
pub struct TokenStream {
    tokens: Option<Receiver<Token>>,
    scanner: Option<thread::JoinHandle<()>>,
}

impl TokenStream {
    /// Block until the scanner hands over the next token, or return `None`
    /// once the stream has ended.
    pub fn next_token(&mut self) -> Option<Token> {
        self.tokens.as_ref()?.recv().ok()
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        // Closing the channel first unblocks a scanner parked on its send.
        drop(self.tokens.take());
        if let Some(handle) = self.scanner.take() {
            let _ = handle.join();
        }
    }
}

/// The machine stopped mid-state: the consumer hung up, or a terminal token
/// has already been handed off after a read failure.
pub(super) struct Halted;

pub(super) type NextState = Result<Option<State>, Halted>;

/// Holds the state of the scanner. A single rune of pushback is supported.
pub(super) struct Scanner<R> {
    input: R,
    /// The current position in the input.
    pos: Pos,
    /// The start position of the token being scanned.
    start: Pos,
    /// The position before the most recent read, while pushback is legal.
    last_pos: Option<Pos>,
    /// A rune returned by `back()`, re-consumed before touching the input.
    pending: Option<char>,
    /// The literal contents of the token being scanned.
    pub(super) buf: String,
    tokens: SyncSender<Token>,
}

impl<R: BufRead> Scanner<R> {
    pub(super) fn run(mut self) {
        let mut state = State::Outer;
        loop {
            match state.step(&mut self) {
                Ok(Some(next)) => state = next,
                Ok(None) => break,
                Err(Halted) => {
                    trace!("scanner halted early");
                    break;
                }
            }
        }
        // The channel closes when the sender drops here.
    }

    /// Consume one rune, advancing position and the token buffer.
    /// `Ok(None)` is end-of-input; read failures emit a terminal error token
    /// and halt the machine.
    pub(super) fn next_rune(&mut self) -> Result<Option<char>, Halted> {
        let rune = match self.pending.take() {
            Some(c) => Some(c),
            None => match read_rune(&mut self.input) {
                Ok(r) => r,
                Err(err) => {
                    let _ = self.send(Token {
                        kind: TokenKind::Error,
                        pos: self.start.clone(),
                        text: format!("error while scanning: {err}"),
                    });
                    return Err(Halted);
                }
            },
        };
        let Some(c) = rune else { return Ok(None) };
        self.last_pos = Some(self.pos.clone());
        self.pos.offset += c.len_utf8();
        self.pos.col += 1;
        if c == '\n' {
            self.pos.line += 1;
            self.pos.col = 1;
        }
        self.buf.push(c);
        Ok(Some(c))
    }

    /// Push the most recently read rune back onto the input and restore the
    /// position captured before it was read. Calling this twice in a row, or
    /// before any read, is a programming-contract violation.
    pub(super) fn back(&mut self) {
        let last = self
            .last_pos
            .take()
            .expect("back() call not preceded by a next_rune()");
        let c = self.buf.pop().expect("back() with an empty token buffer");
        self.pending = Some(c);
        self.pos = last;
    }

    /// Consume runes while `f` holds. The first rune it rejects is pushed
    /// back rather than consumed.
    pub(super) fn scan_while(&mut self, f: impl Fn(char) -> bool) -> Result<(), Halted> {
        loop {
            match self.next_rune()? {
                None => return Ok(()),
                Some(r) if !f(r) => {
                    self.back();
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    /// Emit the buffered runes as one token positioned at their start, then
    /// begin the next token at the current position. Kinds without a payload
    /// (fixed-shape tokens, end-of-input) discard the buffer and carry empty
    /// text.
    pub(super) fn emit(&mut self, kind: TokenKind) -> Result<(), Halted> {
        let mut text = std::mem::take(&mut self.buf);
        if !kind.has_text() {
            text.clear();
        }
        self.send(Token {
            kind,
            pos: self.start.clone(),
            text,
        })?;
        self.start = self.pos.clone();
        Ok(())
    }

    /// Emit a token with explicit text at the current start position without
    /// touching the buffer. Used where the token text is not the literal run
    /// of consumed runes (dispatch markers, string contents).
    pub(super) fn synth(&mut self, kind: TokenKind, text: String) -> Result<(), Halted> {
        self.send(Token {
            kind,
            pos: self.start.clone(),
            text,
        })
    }

    /// Discard the buffered runes (whitespace) and restart the token at the
    /// current position.
    pub(super) fn skip(&mut self) {
        self.start = self.pos.clone();
        self.buf.clear();
    }

    /// Emit a terminal error token and stop the machine.
    pub(super) fn error(&mut self, message: String) -> NextState {
        let _ = self.send(Token {
            kind: TokenKind::Error,
            pos: self.start.clone(),
            text: message,
        });
        Ok(None)
    }

    /// Emit the end-of-input token and stop the machine.
    pub(super) fn eof(&mut self) -> NextState {
        self.emit(TokenKind::Eof)?;
        Ok(None)
    }

    fn send(&mut self, token: Token) -> Result<(), Halted> {
        trace!(token = %token, "emit");
        self.tokens.send(token).map_err(|_| Halted)
    }
}

/// Decode one UTF-8 rune from the reader. `Ok(None)` at end of input;
/// truncated or malformed sequences are `InvalidData` errors.
fn read_rune<R: BufRead>(input: &mut R) -> io::Result<Option<char>> {
    let mut first = [0u8; 1];
    if input.read(&mut first)? == 0 {
        return Ok(None);
    }
    let b = first[0];
    let width = match b {
        0x00..=0x7f => return Ok(Some(b as char)),
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid UTF-8 in input",
            ))
        }
    };
    let mut bytes = [0u8; 4];
    bytes[0] = b;
    input.read_exact(&mut bytes[1..width])?;
    match std::str::from_utf8(&bytes[..width]) {
        Ok(s) => Ok(s.chars().next()),
        Err(_) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid UTF-8 in input",
        )),
    }
}
