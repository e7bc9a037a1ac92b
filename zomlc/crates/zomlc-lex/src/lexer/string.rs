//! String and template-string lexing.
//!
//! ZomLang has plain double-quoted strings (`"..."`) and backtick template
//! strings with `${ ... }` interpolations. A template string is lexed as a
//! sequence: [`TokenKind::TemplateStringStart`], then alternating
//! [`TokenKind::TemplateStringFragment`]s and interpolated expressions
//! (bracketed by [`TokenKind::TemplateInterpolationStart`]/`End`), ending in
//! [`TokenKind::TemplateStringEnd`]. While scanning an interpolation the
//! lexer is back in [`super::core::LexerMode::Normal`], so ordinary tokens -
//! including nested template strings - are produced for the embedded
//! expression.

use zomlc_util::diagnostic::DiagID;

use crate::token::{Token, TokenKind};
use crate::unicode::parse_hex_codepoint;

use super::core::{Lexer, LexerMode};

impl<'a> Lexer<'a> {
    pub(super) fn lex_string(&mut self) -> Token<'a> {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                }
                '\0' if self.cursor.is_at_end() => {
                    self.error(DiagID::LEX_UNTERMINATED_STRING, Vec::new());
                    break;
                }
                '\n' | '\r' => {
                    self.error(DiagID::LEX_UNTERMINATED_STRING, Vec::new());
                    break;
                }
                '\\' => {
                    self.cursor.advance();
                    self.consume_escape();
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
        self.make(TokenKind::StringLiteral)
    }

    pub(super) fn lex_template_start(&mut self) -> Token<'a> {
        self.cursor.advance(); // '`'
        self.mode = LexerMode::StringInterpolation;
        self.make(TokenKind::TemplateStringStart)
    }

    pub(super) fn lex_lbrace(&mut self) -> Token<'a> {
        if let Some(depth) = self.interpolation_depths.last_mut() {
            *depth += 1;
        }
        self.single(TokenKind::LBrace)
    }

    pub(super) fn lex_rbrace(&mut self) -> Token<'a> {
        if let Some(depth) = self.interpolation_depths.last().copied() {
            if depth == 0 {
                self.interpolation_depths.pop();
                self.cursor.advance();
                self.mode = LexerMode::StringInterpolation;
                return self.make(TokenKind::TemplateInterpolationEnd);
            }
            *self.interpolation_depths.last_mut().unwrap() -= 1;
        }
        self.single(TokenKind::RBrace)
    }

    /// Scan template text up to the next `${` or closing `` ` ``, called
    /// while [`LexerMode::StringInterpolation`] is active.
    pub(super) fn lex_template_fragment(&mut self) -> Token<'a> {
        loop {
            match self.cursor.current_char() {
                '`' => {
                    if self.cursor.position() == self.token_start {
                        self.cursor.advance();
                        self.mode = LexerMode::Normal;
                        return self.make(TokenKind::TemplateStringEnd);
                    }
                    return self.make(TokenKind::TemplateStringFragment);
                }
                '$' if self.cursor.peek_char(1) == '{' => {
                    if self.cursor.position() == self.token_start {
                        self.cursor.advance();
                        self.cursor.advance();
                        self.mode = LexerMode::Normal;
                        self.interpolation_depths.push(0);
                        return self.make(TokenKind::TemplateInterpolationStart);
                    }
                    return self.make(TokenKind::TemplateStringFragment);
                }
                '\0' if self.cursor.is_at_end() => {
                    self.error(DiagID::LEX_UNTERMINATED_STRING, Vec::new());
                    self.mode = LexerMode::Normal;
                    return self.make(TokenKind::TemplateStringEnd);
                }
                '\\' => {
                    self.cursor.advance();
                    self.consume_escape();
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn consume_escape(&mut self) {
        let c = self.cursor.current_char();
        match c {
            'n' | 't' | 'r' | '\\' | '"' | '\'' | '0' | '`' | '$' => {
                self.cursor.advance();
            }
            'x' => {
                self.cursor.advance();
                let start = self.cursor.position();
                for _ in 0..2 {
                    if self.cursor.current_char().is_ascii_hexdigit() {
                        self.cursor.advance();
                    }
                }
                if self.cursor.position() - start != 2 {
                    self.error(
                        DiagID::LEX_INVALID_ESCAPE_SEQUENCE,
                        vec!["x".to_string().into()],
                    );
                }
            }
            'u' => {
                self.cursor.advance();
                if self.cursor.current_char() == '{' {
                    self.cursor.advance();
                    let start = self.cursor.position();
                    while self.cursor.current_char() != '}' && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                    let hex = self.cursor.slice_from(start);
                    if parse_hex_codepoint(hex).is_none() {
                        self.error(
                            DiagID::LEX_INVALID_ESCAPE_SEQUENCE,
                            vec![format!("u{{{hex}}}").into()],
                        );
                    }
                    if self.cursor.current_char() == '}' {
                        self.cursor.advance();
                    }
                } else {
                    self.error(DiagID::LEX_INVALID_ESCAPE_SEQUENCE, vec!["u".to_string().into()]);
                }
            }
            _ => {
                self.error(DiagID::LEX_INVALID_ESCAPE_SEQUENCE, vec![c.to_string().into()]);
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use zomlc_util::diagnostic::DiagnosticEngine;
    use zomlc_util::span::BufferId;

    use super::*;

    #[test]
    fn plain_string_literal() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new(r#""hello""#, BufferId::new(0), &engine);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::StringLiteral);
        assert_eq!(tok.text, r#""hello""#);
        assert!(!engine.had_any_error());
    }

    #[test]
    fn string_with_escapes() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new(r#""a\nb\"c""#, BufferId::new(0), &engine);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::StringLiteral);
        assert!(!engine.had_any_error());
    }

    #[test]
    fn unterminated_string_reports_error() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new(r#""abc"#, BufferId::new(0), &engine);
        lexer.next_token();
        assert!(engine.had_any_error());
    }

    #[test]
    fn string_with_newline_is_unterminated() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new("\"abc\ndef\"", BufferId::new(0), &engine);
        lexer.next_token();
        assert!(engine.had_any_error());
    }

    #[test]
    fn string_with_bare_carriage_return_is_unterminated() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new("\"abc\rdef\"", BufferId::new(0), &engine);
        lexer.next_token();
        assert!(engine.had_any_error());
    }

    #[test]
    fn template_string_without_interpolation() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new("`hello`", BufferId::new(0), &engine);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringStart);
        let fragment = lexer.next_token();
        assert_eq!(fragment.kind, TokenKind::TemplateStringFragment);
        assert_eq!(fragment.text, "hello");
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringEnd);
    }

    #[test]
    fn template_string_with_interpolation() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new("`x = ${a + 1}!`", BufferId::new(0), &engine);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringStart);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringFragment); // "x = "
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateInterpolationStart);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident); // a
        assert_eq!(lexer.next_token().kind, TokenKind::Plus);
        assert_eq!(lexer.next_token().kind, TokenKind::IntegerLiteral); // 1
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateInterpolationEnd);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringFragment); // "!"
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringEnd);
    }

    #[test]
    fn nested_braces_inside_interpolation_stay_ordinary() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new("`${ {x: 1}.x }`", BufferId::new(0), &engine);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringStart);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateInterpolationStart);
        assert_eq!(lexer.next_token().kind, TokenKind::LBrace);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Colon);
        assert_eq!(lexer.next_token().kind, TokenKind::IntegerLiteral);
        assert_eq!(lexer.next_token().kind, TokenKind::RBrace);
        assert_eq!(lexer.next_token().kind, TokenKind::Dot);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateInterpolationEnd);
        assert_eq!(lexer.next_token().kind, TokenKind::TemplateStringEnd);
    }

    #[test]
    fn invalid_escape_sequence_reports_error() {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new(r#""bad \q escape""#, BufferId::new(0), &engine);
        lexer.next_token();
        assert!(engine.had_any_error());
    }
}
