//! Comment lexing.
//!
//! Comments are always scanned here; what happens to the result depends on
//! the active [`super::core::CommentRetentionMode`] (checked by the caller
//! in `next_token`).

use zomlc_util::diagnostic::DiagID;

use crate::token::{Token, TokenKind};

use super::core::Lexer;

/// Block comments nest up to this depth before being treated as malformed,
/// guarding against pathological input driving unbounded recursion.
const MAX_COMMENT_DEPTH: u32 = 100;

impl<'a> Lexer<'a> {
    /// Scan a single `//` or `/* */` comment starting at the cursor.
    /// Assumes `self.token_start == self.cursor.position()` and the cursor
    /// is on the leading `/`.
    pub(super) fn skip_comment(&mut self) -> Option<Token<'a>> {
        match self.cursor.peek_char(1) {
            '/' => {
                self.skip_line_comment();
                Some(self.make(TokenKind::Comment))
            }
            '*' => {
                self.skip_block_comment();
                Some(self.make(TokenKind::Comment))
            }
            _ => None,
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '/'
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        let mut depth: u32 = 1;

        while depth > 0 {
            if self.cursor.is_at_end() {
                self.error(DiagID::LEX_UNTERMINATED_BLOCK_COMMENT, Vec::new());
                return;
            }
            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
                if depth > MAX_COMMENT_DEPTH {
                    self.error(DiagID::LEX_UNTERMINATED_BLOCK_COMMENT, Vec::new());
                    return;
                }
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }
    }
}
