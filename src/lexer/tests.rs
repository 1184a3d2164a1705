//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer and string literals (with
//! escapes), operators, comments, span tracking and error cases.

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.basic".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "program var procedure print input if while block true false".to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Program);
    assert_eq!(tokens[1].kind, TokenKind::Var);
    assert_eq!(tokens[2].kind, TokenKind::Procedure);
    assert_eq!(tokens[3].kind, TokenKind::Print);
    assert_eq!(tokens[4].kind, TokenKind::Input);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::While);
    assert_eq!(tokens[7].kind, TokenKind::Block);
    assert_eq!(tokens[8].kind, TokenKind::True);
    assert_eq!(tokens[9].kind, TokenKind::False);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo baz_123 _underscore INT printer".to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    // Type names are plain identifiers resolved by the analyzer
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "INT");
    // Keyword prefixes do not split identifiers
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "printer");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 1000".to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "1000");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#.to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "multiple words");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""a\nb" "tab\there" "say \"hi\"" "back\\slash""#.to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "say \"hi\"");
    assert_eq!(tokens[3].value, "back\\slash");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds(":= == != ! < <= > >= + - * / : ; ,"),
        vec![
            TokenKind::Assignment,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_delimiters() {
    assert_eq!(
        kinds("{ } ( )"),
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_assignment_without_spaces() {
    assert_eq!(
        kinds("x:=1;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "var x: INT; // trailing comment\n// whole line\nprint x;".to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[5].kind, TokenKind::Print);
    assert_eq!(tokens[6].value, "x");
}

#[test]
fn test_tokenize_spans() {
    let source = "print  value;".to_string();
    let tokens = tokenize(source, Some("test.basic".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 5);
    assert_eq!(tokens[1].span.start.0, 7);
    assert_eq!(tokens[1].span.end.0, 12);
    assert_eq!(*tokens[1].span.start.1, "test.basic");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "var x: INT; x := 1 @ 2;".to_string();
    let result = tokenize(source, Some("test.basic".to_string()));

    let error = result.err().expect("expected a lexing error");
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 19);
}

#[test]
fn test_tokenize_unterminated_string() {
    let result = tokenize("print \"never closed;".to_string(), None);

    assert!(result.is_err());
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t "), vec![TokenKind::EOF]);
}
