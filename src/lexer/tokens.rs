use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,
    Identifier,
    IntegerLiteral,

    // Reserved
    Function,
    Let,
    True,
    False,
    If,
    Else,
    While,
    For,
    Return,

    Plus,         // +
    Minus,        // -
    Equals,       // =
    Bang,         // !
    Asterisk,     // *
    Slash,        // /
    Hashtag,      // #
    DoubleQuotes, // "
    Apostrophe,   // '
    LessThan,     // <
    GreaterThan,  // >
    Ampersand,    // &
    Pipe,         // |
    Comma,
    Dot,
    Semicolon,
    Colon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
}

impl TokenKind {
    /// Stable label used when printing tokens for diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "Illegal",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::Function => "Function",
            TokenKind::Let => "Let",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::For => "For",
            TokenKind::Return => "Return",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Equals => "Equals",
            TokenKind::Bang => "Bang",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Slash => "Slash",
            TokenKind::Hashtag => "Hashtag",
            TokenKind::DoubleQuotes => "DoubleQuotes",
            TokenKind::Apostrophe => "Apostrophe",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::Ampersand => "Ampersand",
            TokenKind::Pipe => "Pipe",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Colon => "Colon",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::LBracket => "LBracket",
            TokenKind::RBracket => "RBracket",
        }
    }

    /// Maps a single punctuation byte to its kind.
    pub fn from_punctuation(ch: u8) -> Option<TokenKind> {
        let kind = match ch {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'=' => TokenKind::Equals,
            b'!' => TokenKind::Bang,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'#' => TokenKind::Hashtag,
            b'"' => TokenKind::DoubleQuotes,
            b'\'' => TokenKind::Apostrophe,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b'&' => TokenKind::Ampersand,
            b'|' => TokenKind::Pipe,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            _ => return None,
        };

        Some(kind)
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        RESERVED_LOOKUP.get(ident).copied()
    }

    pub fn has_payload(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::IntegerLiteral)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scanned token. Identifiers and integer literals carry their own copy of
/// the matched text, so a token outlives the lexer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({})", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn has_payload(&self) -> bool {
        self.value.is_some()
    }
}
