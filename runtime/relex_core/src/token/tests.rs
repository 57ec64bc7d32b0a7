use crate::{Channel, Span, Token, TokenType};
use pretty_assertions::assert_eq;

fn sample() -> Token {
    Token::new(
        "input.txt".into(),
        TokenType(1),
        "ab".into(),
        Channel::DEFAULT,
        Span::new(2, 4),
        1,
        2,
    )
}

#[test]
fn accessors_return_parts() {
    let token = sample();
    assert_eq!(token.source_name(), "input.txt");
    assert_eq!(token.kind(), TokenType(1));
    assert_eq!(token.text(), "ab");
    assert_eq!(token.channel(), Channel::DEFAULT);
    assert_eq!(token.span(), Span::new(2, 4));
    assert_eq!(token.line(), 1);
    assert_eq!(token.column(), 2);
    assert!(!token.is_eof());
}

#[test]
fn display_is_compact() {
    assert_eq!(format!("{}", sample()), "[@2..4='ab',<1>,1:2]");
}

#[test]
fn display_escapes_layout_characters() {
    let token = Token::new(
        "input.txt".into(),
        TokenType(3),
        "a\nb\t".into(),
        Channel::HIDDEN,
        Span::new(0, 4),
        1,
        0,
    );
    assert_eq!(format!("{token}"), "[@0..4='a\\nb\\t',<3>,1:0]");
}

#[test]
fn eof_type_displays_symbolically() {
    let token = Token::new(
        "input.txt".into(),
        TokenType::EOF,
        "<EOF>".into(),
        Channel::DEFAULT,
        Span::point(7),
        2,
        0,
    );
    assert!(token.is_eof());
    assert_eq!(format!("{token}"), "[@7..7='<EOF>',<EOF>,2:0]");
}

#[test]
fn reserved_types_are_distinct() {
    assert_ne!(TokenType::EOF, TokenType::INVALID);
    assert_eq!(TokenType::default(), TokenType::INVALID);
    assert_eq!(Channel::default(), Channel::DEFAULT);
}
