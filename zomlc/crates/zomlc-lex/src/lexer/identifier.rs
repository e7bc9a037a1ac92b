//! Identifier and keyword lexing.

use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_identifier(&mut self) -> Token<'a> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(self.token_start);
        let kind = TokenKind::keyword_from_text(text).unwrap_or(TokenKind::Ident);
        self.make(kind)
    }
}
