//! Operator and punctuation lexing.
//!
//! Maximal-munch scanning for ZomLang's operator set: each `lex_*` method
//! consumes its leading character, then greedily extends the token while
//! the cursor keeps matching a longer operator spelling.

use crate::token::{Token, TokenKind};

use super::core::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn lex_plus(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('+') {
            self.make(TokenKind::PlusPlus)
        } else if self.cursor.match_char('=') {
            self.make(TokenKind::PlusEq)
        } else {
            self.make(TokenKind::Plus)
        }
    }

    pub(super) fn lex_minus(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('-') {
            self.make(TokenKind::MinusMinus)
        } else if self.cursor.match_char('>') {
            self.make(TokenKind::Arrow)
        } else if self.cursor.match_char('=') {
            self.make(TokenKind::MinusEq)
        } else {
            self.make(TokenKind::Minus)
        }
    }

    pub(super) fn lex_star(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::StarStarEq)
            } else {
                self.make(TokenKind::StarStar)
            }
        } else if self.cursor.match_char('=') {
            self.make(TokenKind::StarEq)
        } else {
            self.make(TokenKind::Star)
        }
    }

    pub(super) fn lex_slash(&mut self) -> Token<'a> {
        // `//` and `/*` are intercepted by comment skipping before this is
        // reached; here `/` can only start a division operator.
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::SlashEq)
        } else {
            self.make(TokenKind::Slash)
        }
    }

    pub(super) fn lex_percent(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::PercentEq)
        } else {
            self.make(TokenKind::Percent)
        }
    }

    pub(super) fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::EqEqEq)
            } else {
                self.make(TokenKind::EqEq)
            }
        } else if self.cursor.match_char('>') {
            self.make(TokenKind::FatArrow)
        } else {
            self.make(TokenKind::Eq)
        }
    }

    pub(super) fn lex_bang(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::NotEqEq)
            } else {
                self.make(TokenKind::NotEq)
            }
        } else {
            self.make(TokenKind::Bang)
        }
    }

    pub(super) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::LtEq)
        } else if self.cursor.match_char('<') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::ShlEq)
            } else {
                self.make(TokenKind::Shl)
            }
        } else {
            self.make(TokenKind::Lt)
        }
    }

    pub(super) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::GtEq)
        } else if self.cursor.match_char('>') {
            if self.cursor.match_char('>') {
                if self.cursor.match_char('=') {
                    self.make(TokenKind::ShruEq)
                } else {
                    self.make(TokenKind::Shru)
                }
            } else if self.cursor.match_char('=') {
                self.make(TokenKind::ShrEq)
            } else {
                self.make(TokenKind::Shr)
            }
        } else {
            self.make(TokenKind::Gt)
        }
    }

    pub(super) fn lex_ampersand(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::AmpAmpEq)
            } else {
                self.make(TokenKind::AmpAmp)
            }
        } else if self.cursor.match_char('=') {
            self.make(TokenKind::AmpEq)
        } else {
            self.make(TokenKind::Amp)
        }
    }

    pub(super) fn lex_pipe(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::PipePipeEq)
            } else {
                self.make(TokenKind::PipePipe)
            }
        } else if self.cursor.match_char('=') {
            self.make(TokenKind::PipeEq)
        } else {
            self.make(TokenKind::Pipe)
        }
    }

    pub(super) fn lex_caret(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make(TokenKind::CaretEq)
        } else {
            self.make(TokenKind::Caret)
        }
    }

    pub(super) fn lex_colon(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.make(TokenKind::Colon)
    }

    pub(super) fn lex_dot(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1) == '.' {
            self.cursor.advance();
            self.cursor.advance();
            self.make(TokenKind::DotDotDot)
        } else {
            self.make(TokenKind::Dot)
        }
    }

    pub(super) fn lex_question(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('?') {
            if self.cursor.match_char('=') {
                self.make(TokenKind::QuestionQuestionEq)
            } else {
                self.make(TokenKind::QuestionQuestion)
            }
        } else if self.cursor.match_char('.') {
            self.make(TokenKind::QuestionDot)
        } else {
            self.make(TokenKind::Question)
        }
    }
}
