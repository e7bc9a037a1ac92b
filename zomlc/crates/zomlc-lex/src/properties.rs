//! Property-based tests over randomly generated token streams.

use proptest::prelude::*;
use zomlc_util::diagnostic::DiagnosticEngine;
use zomlc_util::span::BufferId;

use crate::token::TokenKind;
use crate::Lexer;

/// A small fixed vocabulary of individually well-formed tokens, joined by
/// single spaces so that re-lexing any one of them in isolation is
/// meaningful (no token depends on look-ahead past its own text).
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,5}".prop_map(|s| s),
        "[0-9]{1,4}".prop_map(|s| s),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(";".to_string()),
        Just("=".to_string()),
        Just("==".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("->".to_string()),
    ]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(token_strategy(), 1..12).prop_map(|tokens| tokens.join(" "))
}

fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
    let engine = DiagnosticEngine::new();
    Lexer::new(source, BufferId::new(0), &engine)
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}

proptest! {
    /// Property 1: re-lexing the text of any token in isolation produces a
    /// token of the same `TokenKind`.
    #[test]
    fn relexing_a_tokens_text_preserves_its_kind(source in source_strategy()) {
        for (kind, text) in lex_all(&source) {
            if kind == TokenKind::Eof || text.is_empty() {
                continue;
            }
            let engine = DiagnosticEngine::new();
            let mut relexed = Lexer::new(&text, BufferId::new(0), &engine);
            let first = relexed.next().expect("non-empty token text must re-lex to a token");
            prop_assert_eq!(first.kind, kind);
        }
    }

    /// Property 6: restoring a saved `LexerState` and re-lexing reproduces
    /// the same token sequence as the original lex from that point.
    #[test]
    fn restoring_lexer_state_resumes_the_same_stream(source in source_strategy()) {
        let engine = DiagnosticEngine::new();
        let mut lexer = Lexer::new(&source, BufferId::new(0), &engine);

        let mut states = Vec::new();
        let mut kinds = Vec::new();
        loop {
            states.push(lexer.get_state_for_beginning_of_token());
            let tok = lexer.next_token();
            let is_eof = tok.kind == TokenKind::Eof;
            kinds.push(tok.kind);
            if is_eof {
                break;
            }
        }

        if states.len() < 2 {
            return Ok(());
        }
        let resume_at = states.len() / 2;

        let resume_engine = DiagnosticEngine::new();
        let mut resumed = Lexer::new(&source, BufferId::new(0), &resume_engine);
        resumed.restore_state(states[resume_at]);

        let mut resumed_kinds = Vec::new();
        loop {
            let tok = resumed.next_token();
            let is_eof = tok.kind == TokenKind::Eof;
            resumed_kinds.push(tok.kind);
            if is_eof {
                break;
            }
        }

        prop_assert_eq!(&resumed_kinds[..], &kinds[resume_at..]);
    }
}
