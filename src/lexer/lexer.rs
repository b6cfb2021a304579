use std::{iter::FusedIterator, rc::Rc};

use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Reported by [`Lexer::current_char`] once the cursor has left the input.
pub const SENTINEL: char = '\0';

/// Hand-written scanner over a borrowed byte buffer.
///
/// Each call to [`Lexer::next_token`] yields exactly one token and moves the
/// cursor past it. Scanning never fails: bytes that start no token come back
/// as [`TokenKind::Illegal`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a [u8],
    length: usize,
    position: usize,
    read_position: usize,
    ch: u8,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::from_bytes(source.as_bytes())
    }

    /// Input stops at the first NUL byte, which doubles as the end sentinel.
    pub fn from_bytes(source: &'a [u8]) -> Lexer<'a> {
        let length = source.iter().position(|&b| b == 0).unwrap_or(source.len());
        trace!(target: "toylang::lexer", "Creating new Lexer over {} bytes", length);

        let mut lexer = Lexer {
            source,
            length,
            position: 0,
            read_position: 0,
            ch: 0,
            finished: false,
        };

        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if let Some(kind) = TokenKind::from_punctuation(self.ch) {
            self.read_char();
            return MK_TOKEN!(kind);
        }

        match self.ch {
            ch if is_letter(ch) => {
                let ident = String::from_utf8_lossy(self.read_while(is_letter));

                match TokenKind::keyword(&ident) {
                    Some(kind) => MK_TOKEN!(kind),
                    None => MK_TOKEN!(TokenKind::Identifier, ident.into_owned()),
                }
            }
            ch if is_digit(ch) => {
                let number = String::from_utf8_lossy(self.read_while(is_digit));
                MK_TOKEN!(TokenKind::IntegerLiteral, number.into_owned())
            }
            _ if self.at_eof() => {
                self.read_char();
                MK_TOKEN!(TokenKind::EndOfInput)
            }
            ch => {
                debug!(target: "toylang::lexer", "Illegal byte {:#04x} at offset {}", ch, self.position);
                self.read_char();
                MK_TOKEN!(TokenKind::Illegal)
            }
        }
    }

    pub fn current_char(&self) -> char {
        self.ch as char
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.length
    }

    fn peek(&self) -> u8 {
        if self.read_position >= self.length {
            0
        } else {
            self.source[self.read_position]
        }
    }

    fn read_char(&mut self) {
        // Parked on the sentinel; keeps read_position <= length + 1.
        if self.read_position > self.length {
            return;
        }

        self.ch = self.peek();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Consumes the longest run of bytes matching `accept`, starting at the
    /// current byte, and leaves the cursor on the first byte after it.
    fn read_while(&mut self, accept: fn(u8) -> bool) -> &'a [u8] {
        let source = self.source;
        let start = self.position;
        while accept(self.ch) {
            self.read_char();
        }

        &source[start..self.position]
    }
}

/// Yields every token up to and including the first `EndOfInput`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Like [`tokenize`], but the first illegal byte aborts the scan.
pub fn tokenize_strict(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        lex.skip_whitespace();
        let start = lex.position;
        let offending = lex.ch;
        let token = lex.next_token();

        match token.kind {
            TokenKind::Illegal => {
                debug!(target: "toylang::lexer", "Rejecting input at offset {} in {}", start, file_name);
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token: std::ascii::escape_default(offending).to_string() },
                    Position(start as u32, Rc::clone(&file_name)),
                ));
            }
            TokenKind::EndOfInput => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
