//! Edge-case and error-recovery tests for the lexer, exercised as whole
//! token streams rather than unit-by-unit.

use zomlc_util::diagnostic::DiagnosticEngine;
use zomlc_util::span::BufferId;

use crate::token::TokenKind;
use crate::Lexer;

fn lex_all(source: &str) -> (Vec<TokenKind>, bool) {
    let engine = DiagnosticEngine::new();
    let kinds: Vec<TokenKind> = Lexer::new(source, BufferId::new(0), &engine)
        .map(|t| t.kind)
        .collect();
    (kinds, engine.had_any_error())
}

#[test]
fn empty_source() {
    let (kinds, had_error) = lex_all("");
    assert!(kinds.is_empty());
    assert!(!had_error);
}

#[test]
fn single_char_identifier() {
    let (kinds, _) = lex_all("x");
    assert_eq!(kinds, vec![TokenKind::Ident]);
}

#[test]
fn long_identifier() {
    let name = "a".repeat(500);
    let (kinds, had_error) = lex_all(&name);
    assert_eq!(kinds, vec![TokenKind::Ident]);
    assert!(!had_error);
}

#[test]
fn keywords_are_not_identifiers() {
    for kw in ["fun", "interface", "namespace", "satisfies", "keyof", "readonly"] {
        let (kinds, _) = lex_all(kw);
        assert_ne!(kinds, vec![TokenKind::Ident], "{kw} should not lex as a plain identifier");
    }
}

#[test]
fn numeric_literal_bases() {
    assert_eq!(lex_all("0xFFFF").0, vec![TokenKind::IntegerLiteral]);
    assert_eq!(lex_all("0b11111111").0, vec![TokenKind::IntegerLiteral]);
    assert_eq!(lex_all("0o377").0, vec![TokenKind::IntegerLiteral]);
}

#[test]
fn empty_string_literal() {
    let (kinds, had_error) = lex_all(r#""""#);
    assert_eq!(kinds, vec![TokenKind::StringLiteral]);
    assert!(!had_error);
}

#[test]
fn all_compound_operators_lex_as_single_tokens() {
    let (kinds, _) = lex_all("=== !== **= <<= >>= >>>= &&= ||= ??=");
    assert_eq!(
        kinds,
        vec![
            TokenKind::EqEqEq,
            TokenKind::NotEqEq,
            TokenKind::StarStarEq,
            TokenKind::ShlEq,
            TokenKind::ShrEq,
            TokenKind::ShruEq,
            TokenKind::AmpAmpEq,
            TokenKind::PipePipeEq,
            TokenKind::QuestionQuestionEq,
        ]
    );
}

#[test]
fn all_grouping_and_separator_punctuation() {
    let (kinds, _) = lex_all("(){}[];,");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Semi,
            TokenKind::Comma,
        ]
    );
}

#[test]
fn nested_delimiters() {
    let (kinds, had_error) = lex_all("([{}])");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::LBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::RBracket,
            TokenKind::RParen,
        ]
    );
    assert!(!had_error);
}

#[test]
fn case_sensitivity_of_keywords() {
    let (kinds, _) = lex_all("Fun fun");
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Fun]);
}

#[test]
fn boolean_and_null_literals_are_keywords() {
    let (kinds, _) = lex_all("true false null");
    assert_eq!(kinds, vec![TokenKind::True, TokenKind::False, TokenKind::Null]);
}

#[test]
fn scientific_notation_floats() {
    assert_eq!(lex_all("1e10").0, vec![TokenKind::FloatLiteral]);
    assert_eq!(lex_all("1E-10").0, vec![TokenKind::FloatLiteral]);
    assert_eq!(lex_all("1.5e+3").0, vec![TokenKind::FloatLiteral]);
}

#[test]
fn leading_zeros_are_just_a_decimal_literal() {
    let (kinds, had_error) = lex_all("007");
    assert_eq!(kinds, vec![TokenKind::IntegerLiteral]);
    assert!(!had_error);
}

#[test]
fn invalid_hex_literal_with_no_digits_reports_error() {
    let (kinds, had_error) = lex_all("0x;");
    assert_eq!(kinds, vec![TokenKind::IntegerLiteral, TokenKind::Semi]);
    assert!(had_error);
}

#[test]
fn unterminated_string_still_yields_a_token() {
    let (kinds, had_error) = lex_all("\"never closed");
    assert_eq!(kinds, vec![TokenKind::StringLiteral]);
    assert!(had_error);
}

#[test]
fn invalid_characters_each_report_and_keep_lexing() {
    let (kinds, had_error) = lex_all("$ x \u{a3} y");
    assert_eq!(
        kinds,
        vec![TokenKind::Unknown, TokenKind::Ident, TokenKind::Unknown, TokenKind::Ident]
    );
    assert!(had_error);
}

#[test]
fn consecutive_operators_lex_maximally() {
    let (kinds, _) = lex_all("a+++b");
    // `a`, `++`, `+`, `b` - maximal munch prefers `++` over two `+`s.
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::PlusPlus, TokenKind::Plus, TokenKind::Ident]
    );
}

#[test]
fn whitespace_variations_are_all_skipped() {
    let (kinds, _) = lex_all("a\t\n  \r\nb");
    assert_eq!(kinds, vec![TokenKind::Ident, TokenKind::Ident]);
}

#[test]
fn all_known_keywords_round_trip() {
    for kw in [
        "abstract", "accessor", "any", "asserts", "assert", "async", "await", "bigint",
        "boolean", "break", "case", "catch", "class", "continue", "constructor", "debugger",
        "declare", "default", "delete", "do", "else", "extends", "finally", "from", "fun",
        "get", "global", "immediate", "implements", "in", "infer", "instanceof", "interface",
        "intrinsic", "is", "keyof", "match", "module", "mutable", "namespace", "never", "new",
        "number", "object", "of", "optional", "out", "override", "package", "private",
        "protected", "public", "readonly", "require", "satisfies", "set", "static", "super",
        "switch", "symbol", "this", "throw", "try", "typeof", "undefined", "unique", "using",
        "var", "void", "with", "yield", "if", "for", "while", "return", "true", "false",
        "null", "enum", "struct", "alias", "error", "raises", "import", "export",
    ] {
        let (kinds, had_error) = lex_all(kw);
        assert_eq!(kinds.len(), 1, "{kw} should lex as exactly one token");
        assert_ne!(kinds[0], TokenKind::Ident, "{kw} should not lex as a plain identifier");
        assert!(!had_error);
    }
}
