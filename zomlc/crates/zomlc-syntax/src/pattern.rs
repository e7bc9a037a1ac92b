//! Binding patterns (`BindingElement`, parameter and `let`/`const`
//! destructuring) and `match` arm patterns. ZomLang's node hierarchy has no
//! standalone `Pattern` category; destructuring reuses [`BindingPattern`]
//! and a match arm's pattern position reuses the same shape.

use zomlc_lex::TokenKind;

use crate::ast::*;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// A single binding in a parameter list or `let`/`const` declarator
    /// list: a name or destructuring pattern, optional type annotation,
    /// optional initializer, and the `?`/`...` modifiers.
    pub(crate) fn parse_binding_element(&mut self) -> BindingElement {
        let start = self.current_loc();
        let is_rest = self.eat(TokenKind::DotDotDot);
        let pattern = self.parse_binding_pattern();
        let is_optional = self.eat(TokenKind::Question);
        let type_annotation = if self.eat(TokenKind::Colon) {
            Some(self.parse_type())
        } else {
            None
        };
        let initializer = if self.eat(TokenKind::Eq) {
            Some(self.parse_assignment_expression())
        } else {
            None
        };
        BindingElement {
            pattern,
            type_annotation,
            initializer,
            is_optional,
            is_rest,
            range: self.range_from(start),
        }
    }

    fn parse_binding_pattern(&mut self) -> BindingPattern {
        match self.current_kind() {
            TokenKind::LBracket => BindingPattern::Array(self.parse_binding_element_list(
                TokenKind::LBracket,
                TokenKind::RBracket,
            )),
            TokenKind::LBrace => BindingPattern::Object(self.parse_binding_element_list(
                TokenKind::LBrace,
                TokenKind::RBrace,
            )),
            _ => BindingPattern::Identifier(self.parse_identifier()),
        }
    }

    fn parse_binding_element_list(&mut self, open: TokenKind, close: TokenKind) -> Vec<BindingElement> {
        self.expect(open);
        let mut elements = Vec::new();
        while !self.at(close) && !self.at_end() {
            elements.push(self.parse_binding_element());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(close);
        elements
    }

    /// A `let`/`const`/`var` declarator list: one or more comma-separated
    /// [`BindingElement`]s, e.g. `let a = 1, b = 2;`.
    pub(crate) fn parse_declarator_list(&mut self) -> Vec<BindingElement> {
        let mut declarations = vec![self.parse_binding_element()];
        while self.eat(TokenKind::Comma) {
            declarations.push(self.parse_binding_element());
        }
        declarations
    }

    /// The pattern position of a `match` arm. Unlike a binding pattern, a
    /// match arm also allows a bare literal or identifier to compare
    /// against, so a plain expression-shaped pattern is parsed as an
    /// identifier binding only when it is a single lowercase-led name;
    /// anything else is left to the arm's `guard` expression instead.
    pub(crate) fn parse_match_pattern(&mut self) -> Option<BindingPattern> {
        if self.at(TokenKind::Default) || (self.at(TokenKind::Ident) && self.current_text() == "_") {
            self.advance();
            return None;
        }
        Some(self.parse_binding_pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zomlc_util::diagnostic::DiagnosticEngine;
    use zomlc_util::span::BufferId;

    fn parse_binding(source: &str) -> BindingElement {
        let engine = DiagnosticEngine::new();
        let mut parser = Parser::new(source, BufferId::new(0), &engine);
        parser.parse_binding_element()
    }

    #[test]
    fn parses_simple_typed_binding() {
        let binding = parse_binding("x: number");
        assert!(matches!(binding.pattern, BindingPattern::Identifier(_)));
        assert!(binding.type_annotation.is_some());
    }

    #[test]
    fn parses_rest_and_optional_modifiers() {
        let binding = parse_binding("...rest");
        assert!(binding.is_rest);

        let optional = parse_binding("x?: number");
        assert!(optional.is_optional);
    }

    #[test]
    fn parses_array_destructuring_pattern() {
        let binding = parse_binding("[a, b]");
        match binding.pattern {
            BindingPattern::Array(elements) => assert_eq!(elements.len(), 2),
            other => panic!("expected array pattern, got {other:?}"),
        }
    }

    #[test]
    fn parses_object_destructuring_pattern() {
        let binding = parse_binding("{ a, b }");
        match binding.pattern {
            BindingPattern::Object(elements) => assert_eq!(elements.len(), 2),
            other => panic!("expected object pattern, got {other:?}"),
        }
    }
}
