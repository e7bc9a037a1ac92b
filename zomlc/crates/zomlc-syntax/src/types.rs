//! Type grammar: `TypeReference`, `ArrayType`, `UnionType`,
//! `IntersectionType`, `ParenthesizedType`, `PredefinedType`, `ObjectType`,
//! `TupleType`, `ReturnType`, `FunctionType`, `OptionalType`, `TypeQuery`.

use zomlc_lex::TokenKind;
use zomlc_util::diagnostic::{DiagID, DiagnosticArgument};
use zomlc_util::symbol::Symbol;

use crate::ast::*;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Entry point for a type in annotation position (`: T`, `-> T`, a type
    /// argument, a field's declared type, ...). Parses at union level,
    /// which is the loosest type-grammar precedence.
    pub(crate) fn parse_type(&mut self) -> Type {
        self.parse_union_type()
    }

    fn parse_union_type(&mut self) -> Type {
        let start = self.current_loc();
        let first = self.parse_intersection_type();
        if !self.at(TokenKind::Pipe) {
            return first;
        }
        let mut members = vec![first];
        while self.eat(TokenKind::Pipe) {
            members.push(self.parse_intersection_type());
        }
        Type::Union(UnionType {
            members,
            range: self.range_from(start),
        })
    }

    fn parse_intersection_type(&mut self) -> Type {
        let start = self.current_loc();
        let first = self.parse_postfix_type();
        if !self.at(TokenKind::Amp) {
            return first;
        }
        let mut members = vec![first];
        while self.eat(TokenKind::Amp) {
            members.push(self.parse_postfix_type());
        }
        Type::Intersection(IntersectionType {
            members,
            range: self.range_from(start),
        })
    }

    /// Handles the postfix `[]` array suffix and `?` optional suffix, which
    /// bind tighter than union/intersection and can be chained (`T[][]`,
    /// `T?`).
    fn parse_postfix_type(&mut self) -> Type {
        let start = self.current_loc();
        let mut ty = self.parse_primary_type();
        loop {
            if self.at(TokenKind::LBracket) {
                self.advance();
                self.expect(TokenKind::RBracket);
                ty = Type::Array(ArrayType {
                    element_type: Box::new(ty),
                    range: self.range_from(start),
                });
            } else if self.at(TokenKind::Question) {
                self.advance();
                ty = Type::Optional(OptionalType {
                    inner: Box::new(ty),
                    range: self.range_from(start),
                });
            } else {
                break;
            }
        }
        ty
    }

    fn parse_primary_type(&mut self) -> Type {
        let start = self.current_loc();
        match self.current_kind() {
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type();
                self.expect(TokenKind::RParen);
                Type::Parenthesized(ParenthesizedType {
                    inner: Box::new(inner),
                    range: self.range_from(start),
                })
            }
            TokenKind::LBracket => self.parse_tuple_type(),
            TokenKind::LBrace => self.parse_object_type(),
            TokenKind::Fun => self.parse_function_type(),
            TokenKind::Typeof => {
                self.advance();
                let name = self.parse_identifier_symbol();
                Type::Query(TypeQuery {
                    expression_name: name,
                    range: self.range_from(start),
                })
            }
            TokenKind::Number => self.predefined(start, PredefinedTypeKeyword::Number),
            TokenKind::Boolean => self.predefined(start, PredefinedTypeKeyword::Boolean),
            TokenKind::Bigint => self.predefined(start, PredefinedTypeKeyword::Bigint),
            TokenKind::Symbol => self.predefined(start, PredefinedTypeKeyword::Symbol),
            TokenKind::Any => self.predefined(start, PredefinedTypeKeyword::Any),
            TokenKind::Void => self.predefined(start, PredefinedTypeKeyword::Void),
            TokenKind::Never => self.predefined(start, PredefinedTypeKeyword::Never),
            TokenKind::Undefined => self.predefined(start, PredefinedTypeKeyword::Undefined),
            TokenKind::Object => self.predefined(start, PredefinedTypeKeyword::Object),
            TokenKind::Ident => {
                // "string" is not its own keyword token; it lexes as an
                // ordinary identifier and is only a predefined type by
                // convention, the same way `number`/`boolean` are reserved
                // words but `string` is not in this keyword table.
                if self.current_text() == "string" {
                    self.predefined(start, PredefinedTypeKeyword::String)
                } else {
                    self.parse_type_reference()
                }
            }
            _ => {
                self.error_here(
                    DiagID::PARSE_UNEXPECTED_TOKEN,
                    vec![DiagnosticArgument::Str(format!("{:?}", self.current_kind()))],
                );
                if !self.at_end() {
                    self.advance();
                }
                Type::Reference(TypeReference {
                    name: Symbol::intern(""),
                    type_arguments: Vec::new(),
                    range: self.range_from(start),
                })
            }
        }
    }

    fn predefined(&mut self, start: zomlc_util::span::SourceLoc, keyword: PredefinedTypeKeyword) -> Type {
        self.advance();
        Type::Predefined(PredefinedType {
            keyword,
            range: self.range_from(start),
        })
    }

    fn parse_type_reference(&mut self) -> Type {
        let start = self.current_loc();
        let name = self.parse_identifier_symbol();
        let type_arguments = self.try_parse_type_argument_list().unwrap_or_default();
        Type::Reference(TypeReference {
            name,
            type_arguments,
            range: self.range_from(start),
        })
    }

    fn parse_tuple_type(&mut self) -> Type {
        let start = self.current_loc();
        self.expect(TokenKind::LBracket);
        let mut elements = Vec::new();
        while !self.at(TokenKind::RBracket) && !self.at_end() {
            elements.push(self.parse_type());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBracket);
        Type::Tuple(TupleType {
            elements,
            range: self.range_from(start),
        })
    }

    fn parse_object_type(&mut self) -> Type {
        let start = self.current_loc();
        self.expect(TokenKind::LBrace);
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let is_readonly = self.eat(TokenKind::Readonly);
            let name = self.parse_identifier_symbol();
            let is_optional = self.eat(TokenKind::Question);
            self.expect(TokenKind::Colon);
            let type_annotation = self.parse_type();
            members.push(ObjectTypeMember {
                name,
                type_annotation,
                is_optional,
                is_readonly,
            });
            if !self.eat(TokenKind::Semi) && !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace);
        Type::Object(ObjectType {
            members,
            range: self.range_from(start),
        })
    }

    fn parse_function_type(&mut self) -> Type {
        let start = self.current_loc();
        self.expect(TokenKind::Fun);
        let type_parameters = self.parse_type_parameter_list();
        self.expect(TokenKind::LParen);
        let mut parameters = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at_end() {
            let name = if self.at(TokenKind::Ident) {
                Some(self.parse_identifier_symbol())
            } else {
                None
            };
            if name.is_some() {
                self.expect(TokenKind::Colon);
            }
            let type_annotation = self.parse_type();
            parameters.push(FunctionTypeParameter { name, type_annotation });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen);
        self.expect(TokenKind::Arrow);
        let return_type = self.parse_return_type();
        Type::Function(FunctionType {
            type_parameters,
            parameters,
            return_type: Box::new(return_type),
            range: self.range_from(start),
        })
    }

    /// Parses a function's `-> T` or `-> T raises E` return-type clause.
    /// The caller is responsible for having already consumed the `->`.
    pub(crate) fn parse_return_type(&mut self) -> ReturnType {
        let type_ = self.parse_type();
        let error_type = if self.eat(TokenKind::Raises) {
            Some(Box::new(self.parse_type()))
        } else {
            None
        };
        ReturnType {
            type_: Box::new(type_),
            error_type,
        }
    }

    pub(crate) fn parse_type_parameter_list(&mut self) -> Vec<TypeParameter> {
        if !self.eat(TokenKind::Lt) {
            return Vec::new();
        }
        let mut params = Vec::new();
        while !self.at(TokenKind::Gt) && !self.at_end() {
            params.push(self.parse_type_parameter());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Gt);
        params
    }

    fn parse_type_parameter(&mut self) -> TypeParameter {
        let start = self.current_loc();
        let ident = self.parse_identifier();
        let constraint = if self.eat(TokenKind::Extends) {
            Some(self.parse_type())
        } else {
            None
        };
        let default = if self.eat(TokenKind::Eq) {
            Some(self.parse_type())
        } else {
            None
        };
        TypeParameter {
            name: ident,
            constraint,
            default,
            range: self.range_from(start),
        }
    }

    /// Parses a `<T, U, ...>` type-argument list if one is actually there.
    /// Used both for definite type-argument positions (after a type
    /// reference's name) and, wrapped in `speculate`, for the call-site
    /// `<...>`-vs-less-than ambiguity.
    pub(crate) fn try_parse_type_argument_list(&mut self) -> Option<Vec<Type>> {
        if !self.at(TokenKind::Lt) {
            return None;
        }
        self.speculate(|p| {
            p.advance();
            let mut args = Vec::new();
            if !p.at(TokenKind::Gt) {
                loop {
                    if !p.looks_like_type_start() {
                        return None;
                    }
                    args.push(p.parse_type());
                    if !p.eat(TokenKind::Comma) {
                        break;
                    }
                }
            }
            if p.eat(TokenKind::Gt) {
                Some(args)
            } else {
                None
            }
        })
    }

    /// Conservative check for whether the current token can begin a type,
    /// used to abandon a speculative type-argument-list parse quickly
    /// instead of running full recursive descent down a dead end.
    fn looks_like_type_start(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Ident
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Fun
                | TokenKind::Typeof
                | TokenKind::Number
                | TokenKind::Boolean
                | TokenKind::Bigint
                | TokenKind::Symbol
                | TokenKind::Any
                | TokenKind::Void
                | TokenKind::Never
                | TokenKind::Undefined
                | TokenKind::Object
        )
    }

    pub(crate) fn parse_identifier(&mut self) -> Identifier {
        let range = self.current_range();
        let name = if self.at(TokenKind::Ident) {
            let text = self.current_text();
            self.advance();
            Symbol::intern(text)
        } else {
            self.error_here(
                DiagID::PARSE_EXPECTED_TOKEN,
                vec![
                    DiagnosticArgument::Str("identifier".to_string()),
                    DiagnosticArgument::Str(format!("{:?}", self.current_kind())),
                ],
            );
            Symbol::intern("")
        };
        Identifier { name, range }
    }

    pub(crate) fn parse_identifier_symbol(&mut self) -> Symbol {
        self.parse_identifier().name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zomlc_util::diagnostic::DiagnosticEngine;
    use zomlc_util::span::BufferId;

    fn parse_type_str(source: &str) -> Type {
        let engine = DiagnosticEngine::new();
        let mut parser = Parser::new(source, BufferId::new(0), &engine);
        parser.parse_type()
    }

    #[test]
    fn parses_predefined_and_array_type() {
        let ty = parse_type_str("number[]");
        match ty {
            Type::Array(arr) => assert!(matches!(*arr.element_type, Type::Predefined(_))),
            other => panic!("expected array type, got {other:?}"),
        }
    }

    #[test]
    fn parses_union_of_reference_types() {
        let ty = parse_type_str("Foo | Bar | Baz");
        match ty {
            Type::Union(u) => assert_eq!(u.members.len(), 3),
            other => panic!("expected union type, got {other:?}"),
        }
    }

    #[test]
    fn parses_generic_type_reference() {
        let ty = parse_type_str("Map<string, number>");
        match ty {
            Type::Reference(r) => assert_eq!(r.type_arguments.len(), 2),
            other => panic!("expected type reference, got {other:?}"),
        }
    }

    #[test]
    fn parses_optional_type_suffix() {
        let ty = parse_type_str("string?");
        assert!(matches!(ty, Type::Optional(_)));
    }

    #[test]
    fn parses_function_type_with_raises_clause() {
        let ty = parse_type_str("fun(x: number) -> number raises ParseError");
        match ty {
            Type::Function(f) => {
                assert_eq!(f.parameters.len(), 1);
                assert!(f.return_type.error_type.is_some());
            }
            other => panic!("expected function type, got {other:?}"),
        }
    }
}
