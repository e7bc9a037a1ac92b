//! Recursive-descent parser core: token cursor, diagnostics, and
//! speculative lookahead. The actual grammar productions live in
//! `expr.rs`, `stmt.rs`, `items.rs`, `types.rs`, and `pattern.rs` as
//! `impl<'a> Parser<'a>` blocks so each production area stays in its own
//! file.

use zomlc_lex::{Lexer, LexerState, Token, TokenKind};
use zomlc_util::diagnostic::{DiagID, DiagnosticArgument, DiagnosticEngine};
use zomlc_util::span::{BufferId, SourceLoc, SourceRange};

use crate::ast::{factory, ImplementationModule, ImplementationModuleElement, SourceFile};

/// Statement-level synchronization tokens: on a parse error, `recover_to_sync_point`
/// skips forward to the next one of these (or EOF) so the rest of the file
/// can still be parsed and checked.
const STATEMENT_SYNC_TOKENS: &[TokenKind] = &[
    TokenKind::Semi,
    TokenKind::RBrace,
    TokenKind::Let,
    TokenKind::Const,
    TokenKind::Var,
    TokenKind::Fun,
    TokenKind::Struct,
    TokenKind::Enum,
    TokenKind::Class,
    TokenKind::Interface,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Return,
];

/// Captures enough state to resume parsing from here, for a speculative
/// attempt that might be abandoned.
struct Checkpoint<'a> {
    lexer_state: LexerState,
    current: Token<'a>,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    engine: &'a DiagnosticEngine,
    buffer_id: BufferId,
    current: Token<'a>,
    /// >0 while inside `speculate`; diagnostics raised through `self.report`
    /// are swallowed rather than emitted so a failed speculative attempt
    /// leaves no trace.
    suppression_depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, buffer_id: BufferId, engine: &'a DiagnosticEngine) -> Self {
        let mut lexer = Lexer::new(source, buffer_id, engine);
        let current = lexer.next_token();
        Self {
            lexer,
            engine,
            buffer_id,
            current,
            suppression_depth: 0,
        }
    }

    pub fn parse_source_file(&mut self) -> SourceFile {
        let mut elements = Vec::new();
        let mut has_module_syntax = false;

        while !self.at(TokenKind::Eof) {
            let start_kind = self.current.kind;
            let element = if self.at(TokenKind::Import) {
                has_module_syntax = true;
                ImplementationModuleElement::Import(self.parse_import_declaration())
            } else if self.at(TokenKind::Export) {
                has_module_syntax = true;
                ImplementationModuleElement::Export(self.parse_export_declaration())
            } else {
                ImplementationModuleElement::Statement(self.parse_statement())
            };
            elements.push(element);

            // Guard against productions that fail to consume anything, which
            // would otherwise spin forever on a malformed token.
            if self.current.kind == start_kind && !self.at(TokenKind::Eof) {
                self.advance();
            }
        }

        if has_module_syntax {
            let statements = elements
                .iter()
                .filter_map(|e| match e {
                    ImplementationModuleElement::Statement(s) => Some(s.clone()),
                    _ => None,
                })
                .collect();
            let module = ImplementationModule { elements };
            factory::create_source_file(statements, Some(module))
        } else {
            let statements = elements
                .into_iter()
                .map(|e| match e {
                    ImplementationModuleElement::Statement(s) => s,
                    _ => unreachable!("only Statement elements are pushed when has_module_syntax is false"),
                })
                .collect();
            factory::create_source_file(statements, None)
        }
    }

    // -- Token cursor -----------------------------------------------------

    pub(crate) fn current(&self) -> &Token<'a> {
        &self.current
    }

    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub(crate) fn current_text(&self) -> &'a str {
        self.current.text
    }

    pub(crate) fn current_range(&self) -> SourceRange {
        self.current.range
    }

    pub(crate) fn current_loc(&self) -> SourceLoc {
        self.current.range.start
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn at_end(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    /// Look one token past the current one without consuming it.
    pub(crate) fn peek(&mut self) -> Token<'a> {
        let state = self.lexer.get_state_for_beginning_of_token();
        let next = self.lexer.next_token();
        self.lexer.restore_state(state);
        next
    }

    /// Advance past the current token, returning it.
    pub(crate) fn advance(&mut self) -> Token<'a> {
        let consumed = self.current;
        self.current = self.lexer.next_token();
        consumed
    }

    /// Consume the current token if it matches `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token, reporting a diagnostic if it isn't `kind`.
    /// Returns the consumed (or, on mismatch, the still-current) token's
    /// range either way, so callers can keep building a span.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> SourceRange {
        if self.at(kind) {
            self.advance().range
        } else {
            let range = self.current_range();
            self.report(
                DiagID::PARSE_EXPECTED_TOKEN,
                range,
                vec![
                    DiagnosticArgument::Str(format!("{kind:?}")),
                    DiagnosticArgument::Str(self.describe_current()),
                ],
            );
            range
        }
    }

    fn describe_current(&self) -> String {
        if self.at(TokenKind::Eof) {
            "end of file".to_string()
        } else {
            format!("{:?} '{}'", self.current.kind, self.current.text)
        }
    }

    /// Build a range spanning from `start` to the end of the token just
    /// consumed (i.e. the current token's start, since `current` is always
    /// one token ahead of whatever was last consumed).
    pub(crate) fn range_from(&self, start: SourceLoc) -> SourceRange {
        SourceRange::new(start, self.current_loc())
    }

    pub(crate) fn dummy_range(&self) -> SourceRange {
        SourceRange::new(
            SourceLoc::new(self.buffer_id, 0),
            SourceLoc::new(self.buffer_id, 0),
        )
    }

    // -- Diagnostics --------------------------------------------------------

    pub(crate) fn report(&self, id: DiagID, range: SourceRange, args: Vec<DiagnosticArgument>) {
        if self.suppression_depth > 0 {
            return;
        }
        let mut diag = self.engine.diagnose(id, range);
        for arg in args {
            diag = diag.arg(arg);
        }
        diag.emit();
    }

    pub(crate) fn error_here(&self, id: DiagID, args: Vec<DiagnosticArgument>) {
        self.report(id, self.current_range(), args);
    }

    /// Skip tokens until a statement-level synchronization point (or EOF) is
    /// reached, so one malformed statement doesn't cascade into unrelated
    /// errors for the rest of the file.
    pub(crate) fn recover_to_sync_point(&mut self) {
        while !self.at_end() && !STATEMENT_SYNC_TOKENS.contains(&self.current_kind()) {
            self.advance();
        }
        // A closing brace belongs to whatever block is still open; leave it
        // for that block's own `expect(RBrace)` to consume. A semicolon or a
        // statement-starting keyword is safe to consume as the delimiter.
        if self.at(TokenKind::Semi) {
            self.advance();
        }
    }

    // -- Speculative lookahead -----------------------------------------

    fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            lexer_state: self.lexer.get_state_for_beginning_of_token(),
            current: self.current,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint<'a>) {
        self.lexer.restore_state(checkpoint.lexer_state);
        self.current = checkpoint.current;
    }

    /// Runs `f` with diagnostics suppressed; if it returns `None`, rewinds
    /// the parser to exactly where it started and discards anything it
    /// reported, as if it had never run.
    pub(crate) fn speculate<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.checkpoint();
        self.suppression_depth += 1;
        let result = f(self);
        self.suppression_depth -= 1;
        if result.is_none() {
            self.restore(checkpoint);
        }
        result
    }
}
