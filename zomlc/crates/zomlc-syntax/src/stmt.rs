//! Statement grammar: variable declarations, control flow, blocks, `match`,
//! and the bare-expression statement fallback.

use zomlc_lex::TokenKind;
use zomlc_util::diagnostic::{DiagID, DiagnosticArgument};

use crate::ast::*;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Top-level statement dispatcher, used both inside blocks and (via
    /// `Parser::parse_source_file`) at the top of a file.
    pub(crate) fn parse_statement(&mut self) -> Statement {
        match self.current_kind() {
            TokenKind::Fun
            | TokenKind::Async
            | TokenKind::Class
            | TokenKind::Interface
            | TokenKind::Struct
            | TokenKind::Enum
            | TokenKind::Error
            | TokenKind::Alias
            | TokenKind::Let
            | TokenKind::Const
            | TokenKind::Var => self.parse_declaration_statement(),
            TokenKind::LBrace => Statement::Block(self.parse_block()),
            TokenKind::If => Statement::If(self.parse_if_statement()),
            TokenKind::While => Statement::While(self.parse_while_statement()),
            TokenKind::For => Statement::For(self.parse_for_statement()),
            TokenKind::Return => Statement::Return(self.parse_return_statement()),
            TokenKind::Break => Statement::Break(self.parse_break_statement()),
            TokenKind::Continue => Statement::Continue(self.parse_continue_statement()),
            TokenKind::Match => Statement::Match(self.parse_match_statement()),
            TokenKind::Debugger => Statement::Debugger(self.parse_debugger_statement()),
            TokenKind::Semi => {
                let range = self.current_range();
                self.advance();
                Statement::Empty(EmptyStatement { range })
            }
            _ => Statement::Expression(self.parse_expression_statement()),
        }
    }

    pub(crate) fn parse_variable_declaration(&mut self) -> VariableDeclaration {
        let start = self.current_loc();
        let kind = match self.current_kind() {
            TokenKind::Let => VariableKind::Let,
            TokenKind::Const => VariableKind::Const,
            TokenKind::Var => VariableKind::Var,
            _ => {
                self.error_here(
                    DiagID::PARSE_EXPECTED_TOKEN,
                    vec![
                        DiagnosticArgument::Str("'let', 'const', or 'var'".to_string()),
                        DiagnosticArgument::Str(format!("{:?}", self.current_kind())),
                    ],
                );
                VariableKind::Let
            }
        };
        self.advance();
        let declarations = self.parse_declarator_list();
        self.eat(TokenKind::Semi);
        VariableDeclaration {
            kind,
            declarations,
            range: self.range_from(start),
        }
    }

    pub(crate) fn parse_block(&mut self) -> BlockStatement {
        let start = self.current_loc();
        self.expect(TokenKind::LBrace);
        let mut statements = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let before = self.current_kind();
            statements.push(self.parse_statement());
            if self.current_kind() == before && !self.at(TokenKind::RBrace) && !self.at_end() {
                // A production that failed to consume anything; force
                // progress instead of looping forever on garbage input.
                self.advance();
            }
        }
        self.expect(TokenKind::RBrace);
        BlockStatement {
            statements,
            range: self.range_from(start),
        }
    }

    fn parse_if_statement(&mut self) -> IfStatement {
        let start = self.current_loc();
        self.expect(TokenKind::If);
        self.expect(TokenKind::LParen);
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen);
        let then_statement = Box::new(self.parse_statement());
        let else_statement = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()))
        } else {
            None
        };
        IfStatement {
            condition,
            then_statement,
            else_statement,
            range: self.range_from(start),
        }
    }

    fn parse_while_statement(&mut self) -> WhileStatement {
        let start = self.current_loc();
        self.expect(TokenKind::While);
        self.expect(TokenKind::LParen);
        let condition = self.parse_expression();
        self.expect(TokenKind::RParen);
        let body = Box::new(self.parse_statement());
        WhileStatement {
            condition,
            body,
            range: self.range_from(start),
        }
    }

    /// Parses both `for (init; cond; update)` and `for (binding in/of
    /// iterable)`, disambiguating by whether an `in`/`of` token follows the
    /// binding introduced after `(`.
    fn parse_for_statement(&mut self) -> ForStatement {
        let start = self.current_loc();
        self.expect(TokenKind::For);
        self.expect(TokenKind::LParen);

        if self.at_for_of_binding() {
            // Consume the optional declaration keyword; a bare-identifier
            // header like `for (item of items)` has none.
            self.eat(TokenKind::Let);
            self.eat(TokenKind::Const);
            self.eat(TokenKind::Var);
            let binding = self.parse_binding_element();
            // `in` is a real keyword token; `of` is not reserved, so it is
            // recognized by its identifier text instead.
            let is_of = if self.at(TokenKind::Ident) && self.current_text() == "of" {
                self.advance();
                true
            } else {
                self.expect(TokenKind::In);
                false
            };
            let _ = is_of;
            let of_expression = self.parse_expression();
            self.expect(TokenKind::RParen);
            let body = Box::new(self.parse_statement());
            return ForStatement {
                initializer: None,
                condition: None,
                update: None,
                of_binding: Some(binding),
                of_expression: Some(of_expression),
                body,
                range: self.range_from(start),
            };
        }

        let initializer = if self.at(TokenKind::Semi) {
            None
        } else if matches!(self.current_kind(), TokenKind::Let | TokenKind::Const | TokenKind::Var) {
            Some(Box::new(Statement::Variable(self.parse_variable_declaration())))
        } else {
            Some(Box::new(Statement::Expression(self.parse_expression_statement())))
        };
        if initializer.is_none() {
            self.expect(TokenKind::Semi);
        }
        let condition = if self.at(TokenKind::Semi) { None } else { Some(self.parse_expression()) };
        self.expect(TokenKind::Semi);
        let update = if self.at(TokenKind::RParen) { None } else { Some(self.parse_expression()) };
        self.expect(TokenKind::RParen);
        let body = Box::new(self.parse_statement());

        ForStatement {
            initializer,
            condition,
            update,
            of_binding: None,
            of_expression: None,
            body,
            range: self.range_from(start),
        }
    }

    /// Looks for `let`/`const`/`var` (or a bare identifier/destructuring
    /// pattern) followed by `in` or the identifier `of`, which is the only
    /// shape a `for...in`/`for...of` header can take. The binding itself can
    /// span several tokens (`let [a, b]`), so this speculatively parses one
    /// and rewinds rather than relying on a fixed amount of lookahead.
    fn at_for_of_binding(&mut self) -> bool {
        if !matches!(
            self.current_kind(),
            TokenKind::Let | TokenKind::Const | TokenKind::Var | TokenKind::Ident | TokenKind::LBracket | TokenKind::LBrace
        ) {
            return false;
        }
        let mut found = false;
        self.speculate(|p| {
            if matches!(p.current_kind(), TokenKind::Let | TokenKind::Const | TokenKind::Var) {
                p.advance();
            }
            if !matches!(p.current_kind(), TokenKind::Ident | TokenKind::LBracket | TokenKind::LBrace) {
                return None::<()>;
            }
            p.parse_binding_element();
            found = p.at(TokenKind::In) || (p.at(TokenKind::Ident) && p.current_text() == "of");
            None::<()>
        });
        found
    }

    fn parse_return_statement(&mut self) -> ReturnStatement {
        let start = self.current_loc();
        self.expect(TokenKind::Return);
        let expression = if self.at(TokenKind::Semi) || self.at(TokenKind::RBrace) || self.at_end() {
            None
        } else {
            Some(self.parse_expression())
        };
        self.eat(TokenKind::Semi);
        ReturnStatement {
            expression,
            range: self.range_from(start),
        }
    }

    fn parse_break_statement(&mut self) -> BreakStatement {
        let start = self.current_loc();
        self.expect(TokenKind::Break);
        let label = if self.at(TokenKind::Ident) {
            Some(self.parse_identifier())
        } else {
            None
        };
        self.eat(TokenKind::Semi);
        BreakStatement {
            label,
            range: self.range_from(start),
        }
    }

    fn parse_continue_statement(&mut self) -> ContinueStatement {
        let start = self.current_loc();
        self.expect(TokenKind::Continue);
        let label = if self.at(TokenKind::Ident) {
            Some(self.parse_identifier())
        } else {
            None
        };
        self.eat(TokenKind::Semi);
        ContinueStatement {
            label,
            range: self.range_from(start),
        }
    }

    fn parse_debugger_statement(&mut self) -> DebuggerStatement {
        let start = self.current_loc();
        self.expect(TokenKind::Debugger);
        self.eat(TokenKind::Semi);
        DebuggerStatement {
            range: self.range_from(start),
        }
    }

    fn parse_match_statement(&mut self) -> MatchStatement {
        let start = self.current_loc();
        self.expect(TokenKind::Match);
        self.expect(TokenKind::LParen);
        let scrutinee = self.parse_expression();
        self.expect(TokenKind::RParen);
        self.expect(TokenKind::LBrace);
        let mut arms = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            arms.push(self.parse_match_arm());
            if !self.eat(TokenKind::Comma) {
                self.eat(TokenKind::Semi);
            }
        }
        self.expect(TokenKind::RBrace);
        MatchStatement {
            scrutinee,
            arms,
            range: self.range_from(start),
        }
    }

    fn parse_match_arm(&mut self) -> MatchArm {
        let pattern = self.parse_match_pattern();
        let is_default = pattern.is_none();
        let guard = if self.eat(TokenKind::When) {
            Some(self.parse_expression())
        } else {
            None
        };
        self.expect(TokenKind::FatArrow);
        let body = if self.at(TokenKind::LBrace) {
            self.parse_block()
        } else {
            let start = self.current_loc();
            let expr = self.parse_assignment_expression();
            BlockStatement {
                statements: vec![Statement::Expression(ExpressionStatement {
                    expression: expr,
                    range: self.range_from(start),
                })],
                range: self.range_from(start),
            }
        };
        MatchArm {
            pattern,
            guard,
            is_default,
            body,
        }
    }

    pub(crate) fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let start = self.current_loc();
        let expression = self.parse_expression();
        self.eat(TokenKind::Semi);
        ExpressionStatement {
            expression,
            range: self.range_from(start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zomlc_util::diagnostic::DiagnosticEngine;
    use zomlc_util::span::BufferId;

    fn parse_stmt(source: &str) -> Statement {
        let engine = DiagnosticEngine::new();
        let mut parser = Parser::new(source, BufferId::new(0), &engine);
        parser.parse_statement()
    }

    #[test]
    fn parses_let_with_initializer() {
        let stmt = parse_stmt("let x: number = 1;");
        match stmt {
            Statement::Variable(v) => {
                assert_eq!(v.kind, VariableKind::Let);
                assert_eq!(v.declarations.len(), 1);
                assert!(v.declarations[0].initializer.is_some());
            }
            other => panic!("expected variable declaration, got {other:?}"),
        }
    }

    #[test]
    fn parses_if_else_chain() {
        let stmt = parse_stmt("if (x) { return 1; } else if (y) { return 2; } else { return 3; }");
        match stmt {
            Statement::If(i) => assert!(i.else_statement.is_some()),
            other => panic!("expected if statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_classic_for_loop() {
        let stmt = parse_stmt("for (let i = 0; i < 10; i = i + 1) { x; }");
        match stmt {
            Statement::For(f) => {
                assert!(f.initializer.is_some());
                assert!(f.condition.is_some());
                assert!(f.update.is_some());
                assert!(f.of_binding.is_none());
            }
            other => panic!("expected for statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_for_of_loop() {
        let stmt = parse_stmt("for (let item of items) { use(item); }");
        match stmt {
            Statement::For(f) => {
                assert!(f.of_binding.is_some());
                assert!(f.of_expression.is_some());
            }
            other => panic!("expected for-of statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_match_with_default_arm() {
        let stmt = parse_stmt("match (x) { 1 => y, _ => z }");
        match stmt {
            Statement::Match(m) => {
                assert_eq!(m.arms.len(), 2);
                assert!(m.arms[1].is_default);
            }
            other => panic!("expected match statement, got {other:?}"),
        }
    }

    #[test]
    fn bare_expression_becomes_expression_statement() {
        let stmt = parse_stmt("foo();");
        assert!(matches!(stmt, Statement::Expression(_)));
    }
}
