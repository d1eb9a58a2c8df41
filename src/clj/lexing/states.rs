//! The lexical grammar: one method per scanner state.
//!
//! States are a closed enum dispatched by the driver loop in `scanner`; each
//! state consumes runes through the scanner's bookkeeping and names the next
//! state, or ends the machine by returning no state.

use std::io::BufRead;

use crate::clj::token::TokenKind;

use super::scanner::{NextState, Scanner};

/// A single state in the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    Outer,
    Whitespace,
    Comment,
    StringLit,
    CharLiteral,
    Keyword,
    LambdaArg,
    Dispatch,
    Number,
    Symbol,
}

impl State {
    pub(super) fn step<R: BufRead>(self, s: &mut Scanner<R>) -> NextState {
        match self {
            State::Outer => s.lex_outer(),
            State::Whitespace => s.lex_whitespace(),
            State::Comment => s.lex_comment(),
            State::StringLit => s.lex_string(),
            State::CharLiteral => s.lex_char_literal(),
            State::Keyword => s.lex_keyword(),
            State::LambdaArg => s.lex_lambda_arg(),
            State::Dispatch => s.lex_dispatch(),
            State::Number => s.lex_number(),
            State::Symbol => s.lex_symbol(),
        }
    }
}

impl<R: BufRead> Scanner<R> {
    fn lex_outer(&mut self) -> NextState {
        let Some(r) = self.next_rune()? else {
            return self.eof();
        };

        match r {
            ';' => return Ok(Some(State::Comment)),
            '"' => return Ok(Some(State::StringLit)),
            '\\' => return Ok(Some(State::CharLiteral)),
            ':' => return Ok(Some(State::Keyword)),
            '%' => return Ok(Some(State::LambdaArg)),
            '#' => return Ok(Some(State::Dispatch)),
            '+' | '-' => {
                // A sign is only a number prefix when a digit follows; peek
                // without keeping the rune so `-foo` stays one symbol.
                let Some(r2) = self.next_rune()? else {
                    self.emit(TokenKind::Symbol)?;
                    return self.eof();
                };
                self.back();
                if r2.is_ascii_digit() {
                    return Ok(Some(State::Number));
                }
                return Ok(Some(State::Symbol));
            }
            _ => {}
        }

        let single = match r {
            '\'' => Some(TokenKind::Apostrophe),
            '@' => Some(TokenKind::AtSign),
            '`' => Some(TokenKind::Backtick),
            '^' => Some(TokenKind::Circumflex),
            '{' => Some(TokenKind::LeftBrace),
            '[' => Some(TokenKind::LeftBracket),
            '(' => Some(TokenKind::LeftParen),
            '}' => Some(TokenKind::RightBrace),
            ']' => Some(TokenKind::RightBracket),
            ')' => Some(TokenKind::RightParen),
            '~' => Some(TokenKind::Tilde),
            _ => None,
        };
        if let Some(kind) = single {
            self.emit(kind)?;
            return Ok(Some(State::Outer));
        }

        if is_whitespace(r) {
            return Ok(Some(State::Whitespace));
        }
        if r.is_ascii_digit() {
            return Ok(Some(State::Number));
        }
        if is_symbol_char(r) {
            return Ok(Some(State::Symbol));
        }
        self.error(format!("unrecognized token starting with {r}"))
    }

    fn lex_whitespace(&mut self) -> NextState {
        self.scan_while(is_whitespace)?;
        self.skip();
        Ok(Some(State::Outer))
    }

    /// Consume through end of line, exclusive of the newline itself.
    fn lex_comment(&mut self) -> NextState {
        self.scan_while(|r| r != '\n')?;
        self.emit(TokenKind::Comment)?;
        Ok(Some(State::Outer))
    }

    fn lex_string(&mut self) -> NextState {
        let mut escaped = false;
        loop {
            let Some(r) = self.next_rune()? else {
                return self.error("reached EOF before string closing quote".to_string());
            };
            match r {
                '"' if !escaped => {
                    // Token text is the content between the quotes, escapes
                    // preserved raw. Quotes are ASCII, so byte slicing is safe.
                    let text = self.buf[1..self.buf.len() - 1].to_string();
                    self.synth(TokenKind::String, text)?;
                    self.skip();
                    return Ok(Some(State::Outer));
                }
                '\\' => escaped = !escaped,
                _ => escaped = false,
            }
        }
    }

    /// One rune is consumed unconditionally, even a delimiter (`\(` denotes
    /// the open-paren character); named literals like `\newline` continue
    /// through symbol-constituent runes.
    fn lex_char_literal(&mut self) -> NextState {
        if self.next_rune()?.is_none() {
            return self.error("invalid character literal".to_string());
        }
        self.scan_while(is_symbol_char)?;
        self.emit(TokenKind::CharLiteral)?;
        Ok(Some(State::Outer))
    }

    fn lex_keyword(&mut self) -> NextState {
        self.scan_while(is_symbol_char)?;
        self.emit(TokenKind::Keyword)?;
        Ok(Some(State::Outer))
    }

    fn lex_lambda_arg(&mut self) -> NextState {
        self.scan_while(is_symbol_char)?;
        self.emit(TokenKind::LambdaArg)?;
        Ok(Some(State::Outer))
    }

    /// Dispatch is tricky. `#_foo` is the ignore macro (a two-char `#_`
    /// marker), but `# _foo` and `#foo` are tags, so whitespace matters when
    /// tokenizing a dispatch marker. The rune after `#` decides and must not
    /// be consumed: for a marker it is pushed back and rescanned as its own
    /// token (`#{1}` lexes as `#{`, `{`, `1`, `}`); for a tag the octothorpe
    /// is emitted alone and the tag value lexes as an ordinary symbol.
    fn lex_dispatch(&mut self) -> NextState {
        let Some(r) = self.next_rune()? else {
            self.emit(TokenKind::Octothorpe)?;
            return self.eof();
        };
        if matches!(r, '{' | '(' | '\'' | '"' | '_') {
            let text = self.buf.clone();
            self.back();
            self.synth(TokenKind::Dispatch, text)?;
            self.skip();
            return Ok(Some(State::Outer));
        }
        self.back();
        self.emit(TokenKind::Octothorpe)?;
        Ok(Some(State::Outer))
    }

    /// Numbers consume the full symbol-constituent run, matching the Clojure
    /// compiler: `(+ 3foo)` produces the invalid number `3foo` rather than
    /// splitting into `3` and `foo`. Validity is a downstream concern.
    fn lex_number(&mut self) -> NextState {
        self.scan_while(is_symbol_char)?;
        self.emit(TokenKind::Number)?;
        Ok(Some(State::Outer))
    }

    fn lex_symbol(&mut self) -> NextState {
        self.scan_while(is_symbol_char)?;
        self.emit(TokenKind::Symbol)?;
        Ok(Some(State::Outer))
    }
}

/// The reader treats `,` as whitespace.
fn is_whitespace(r: char) -> bool {
    r.is_whitespace() || r == ','
}

/// Runes permitted inside bare identifiers, keywords, numbers-as-scanned,
/// and named character literals. A decent approximation for now.
fn is_symbol_char(r: char) -> bool {
    r.is_alphanumeric()
        || matches!(
            r,
            '*' | '+' | '!' | '-' | '_' | '?' | '/' | '.' | ':' | '$' | '=' | '>' | '<' | '&'
        )
}
