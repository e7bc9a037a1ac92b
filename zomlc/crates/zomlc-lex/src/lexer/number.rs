//! Numeric literal lexing.
//!
//! Handles decimal, hex (`0x`), octal (`0o`), and binary (`0b`) integer
//! literals, and decimal float literals with an optional exponent. A `_`
//! digit separator is only legal strictly between two digits of the same
//! literal - never adjacent to a radix prefix, a decimal point, or another
//! separator, and never leading or trailing.

use zomlc_util::diagnostic::{DiagID, DiagnosticArgument};

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_number(&mut self) -> Token<'a> {
        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => return self.lex_radix_integer(16),
                'o' | 'O' => return self.lex_radix_integer(8),
                'b' | 'B' => return self.lex_radix_integer(2),
                _ => {}
            }
        }
        self.lex_decimal()
    }

    fn lex_radix_integer(&mut self, base: u32) -> Token<'a> {
        self.cursor.advance(); // '0'
        self.cursor.advance(); // 'x' / 'o' / 'b'
        let digits_start = self.cursor.position();
        self.consume_digit_run(base);
        if self.cursor.position() == digits_start {
            self.report_invalid_literal();
            self.cursor.advance();
        }
        self.make(TokenKind::IntegerLiteral)
    }

    fn lex_decimal(&mut self) -> Token<'a> {
        self.consume_digit_run(10);
        let mut is_float = false;

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance(); // '.'
            self.consume_digit_run(10);
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let sign_offset = if matches!(self.cursor.peek_char(1), '+' | '-') { 2 } else { 1 };
            if self.cursor.peek_char(sign_offset).is_ascii_digit() {
                is_float = true;
                self.cursor.advance(); // e/E
                if matches!(self.cursor.current_char(), '+' | '-') {
                    self.cursor.advance();
                }
                self.consume_digit_run(10);
            } else {
                self.report_invalid_literal();
            }
        }

        self.make(if is_float { TokenKind::FloatLiteral } else { TokenKind::IntegerLiteral })
    }

    /// Consume a run of digits in `base`, allowing `_` separators strictly
    /// between two digits. Reports and skips any misplaced separator.
    fn consume_digit_run(&mut self, base: u32) {
        let mut last_was_digit = false;
        loop {
            let c = self.cursor.current_char();
            if is_digit_in_base(c, base) {
                self.cursor.advance();
                last_was_digit = true;
            } else if c == '_' {
                let next_is_digit = is_digit_in_base(self.cursor.peek_char(1), base);
                if last_was_digit && next_is_digit {
                    self.cursor.advance();
                    last_was_digit = false;
                } else {
                    self.error(
                        DiagID::LEX_NUMERIC_SEPARATOR_MISPLACED,
                        Vec::<DiagnosticArgument>::new(),
                    );
                    self.cursor.advance();
                    last_was_digit = false;
                }
            } else {
                break;
            }
        }
    }

    fn report_invalid_literal(&self) {
        let text = self.cursor.slice_from(self.token_start).to_string();
        self.error(DiagID::LEX_INVALID_NUMERIC_LITERAL, vec![DiagnosticArgument::Str(text)]);
    }
}
