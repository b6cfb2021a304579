//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a text payload

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's text, only for identifiers and integer literals
///
/// # Example
///
/// ```ignore
/// let paren = MK_TOKEN!(TokenKind::LParen);
/// let number = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        Token {
            kind: $kind,
            value: None,
        }
    };
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: Some($value),
        }
    };
}
