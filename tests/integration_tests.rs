//! Integration tests for the public lexer API.
//!
//! These drive the scanner the way an external consumer would: create a
//! lexer, pull tokens until end of input, and inspect kinds and payloads.

use toylang::{
    format_error,
    lexer::{
        lexer::{tokenize, tokenize_strict, Lexer, SENTINEL},
        tokens::{Token, TokenKind},
    },
};

fn drain(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

#[test]
fn test_manual_drain_matches_tokenize() {
    let source = "while (i < 10) { i = i + 1; } return [a, b];";

    assert_eq!(drain(source), tokenize(source));
}

#[test]
fn test_multiline_program() {
    let source = "function add(a, b) {\n\treturn a + b;\n}\n\nlet sum = add(1, 2);\nif (sum > 2) { true } else { false }\n";
    let rendered: Vec<String> = tokenize(source).iter().map(|token| token.to_string()).collect();

    assert_eq!(
        rendered.join(" "),
        "Function Identifier(add) LParen Identifier(a) Comma Identifier(b) RParen LBrace \
         Return Identifier(a) Plus Identifier(b) Semicolon RBrace \
         Let Identifier(sum) Equals Identifier(add) LParen IntegerLiteral(1) Comma IntegerLiteral(2) RParen Semicolon \
         If LParen Identifier(sum) GreaterThan IntegerLiteral(2) RParen LBrace True RBrace \
         Else LBrace False RBrace EndOfInput"
    );
}

#[test]
fn test_sentinel_loop_then_extra_call() {
    let mut lexer = Lexer::new("for x");
    let mut tokens = vec![];

    while lexer.current_char() != SENTINEL {
        tokens.push(lexer.next_token());
    }

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::For);
    assert_eq!(tokens[1].value(), Some("x"));
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn test_illegal_tokens_are_left_to_the_consumer() {
    let tokens = tokenize("a ? b");
    let illegal = tokens.iter().filter(|token| token.kind == TokenKind::Illegal).count();

    assert_eq!(illegal, 1);
    assert_eq!(tokens.len(), 4);
    assert!(tokenize_strict("a ? b", None).is_err());
}

#[test]
fn test_strict_error_rendering() {
    let source = "let a = 1;\nlet b = a ? 2;\n";
    let error = tokenize_strict(source, Some("demo.toy".to_string())).unwrap_err();

    assert_eq!(error.get_position().0, 21);

    let rendered = format_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[1], "-> demo.toy");
    assert_eq!(lines[3], "2 | let b = a ? 2;");
    assert_eq!(lines[4], "  | ----------^");
}

#[test]
fn test_lexers_on_separate_threads() {
    let source = String::from("let x = 1; let y = 2;");

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Lexer::new(&source).count()))
            .collect();

        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    assert!(counts.iter().all(|count| *count == 11));
}
