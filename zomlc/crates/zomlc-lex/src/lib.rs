//! Lexical analysis for ZomLang.
//!
//! Turns a source buffer into a stream of [`Token`]s. The lexer is a single
//! forward pass over the text (no backtracking except when the parser
//! explicitly asks for it via [`LexerState`]), reports malformed input
//! through a shared [`zomlc_util::diagnostic::DiagnosticEngine`] rather than
//! failing outright, and keeps going past an error so one bad character
//! doesn't hide the rest of the file's diagnostics.
//!
//! The implementation is split by token family: [`cursor`] is the raw
//! character/position cursor, [`unicode`] classifies individual characters,
//! [`token`] defines the [`TokenKind`] vocabulary, and `lexer` holds one
//! module per family of `lex_*` methods (identifiers, numbers, strings,
//! operators, comments) dispatched from `lexer::core`.
//!
//! # Examples
//!
//! ```
//! use zomlc_lex::Lexer;
//! use zomlc_lex::token::TokenKind;
//! use zomlc_util::diagnostic::DiagnosticEngine;
//! use zomlc_util::span::BufferId;
//!
//! let engine = DiagnosticEngine::new();
//! let lexer = Lexer::new("fun add(a: number, b: number) -> number { a + b }", BufferId::new(0), &engine);
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.kind).collect();
//! assert_eq!(kinds.first(), Some(&TokenKind::Fun));
//! assert!(!engine.had_any_error());
//! ```

pub mod cursor;
mod lexer;
pub mod token;
pub mod unicode;

pub use lexer::{CommentRetentionMode, Lexer, LexerMode, LexerState};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod edge_cases;

#[cfg(test)]
mod properties;
