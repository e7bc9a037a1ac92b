//! Top-level declarations: functions, classes, interfaces, structs, enums,
//! error types, aliases, and module-level import/export wrappers.

use zomlc_lex::TokenKind;
use zomlc_util::diagnostic::{DiagID, DiagnosticArgument};

use crate::ast::*;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_parameter_list(&mut self) -> Vec<BindingElement> {
        self.expect(TokenKind::LParen);
        let mut params = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at_end() {
            params.push(self.parse_binding_element());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen);
        params
    }

    pub(crate) fn parse_function_declaration(&mut self) -> FunctionDeclaration {
        let start = self.current_loc();
        let is_async = self.eat(TokenKind::Async);
        self.expect(TokenKind::Fun);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameter_list();
        let parameters = self.parse_parameter_list();
        let return_type = if self.eat(TokenKind::Arrow) {
            Some(self.parse_return_type())
        } else {
            None
        };
        let body = if self.at(TokenKind::LBrace) {
            Some(self.parse_block())
        } else {
            self.expect(TokenKind::Semi);
            None
        };
        FunctionDeclaration {
            name,
            type_parameters,
            parameters,
            return_type,
            body,
            is_async,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    pub(crate) fn parse_class_declaration(&mut self) -> ClassDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Class);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameter_list();
        let extends = if self.eat(TokenKind::Extends) {
            Some(self.parse_type())
        } else {
            None
        };
        let mut implements = Vec::new();
        if self.eat(TokenKind::Implements) {
            loop {
                implements.push(self.parse_type());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::LBrace);
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            members.push(self.parse_class_member());
        }
        self.expect(TokenKind::RBrace);
        ClassDeclaration {
            name,
            type_parameters,
            extends,
            implements,
            members,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    fn parse_class_member(&mut self) -> ClassMember {
        let start = self.current_loc();
        let is_static = self.eat(TokenKind::Static);
        let is_readonly = self.eat(TokenKind::Readonly);
        let name = self.parse_identifier_symbol();

        if self.at(TokenKind::LParen) || self.at(TokenKind::Lt) {
            let type_parameters = self.parse_type_parameter_list();
            let parameters = self.parse_parameter_list();
            let return_type = if self.eat(TokenKind::Arrow) {
                Some(self.parse_return_type())
            } else {
                None
            };
            let body = self.parse_block();
            let method = FunctionExpression {
                name: None,
                type_parameters,
                parameters,
                return_type,
                body,
                is_async: false,
                range: self.range_from(start),
            };
            ClassMember {
                name,
                type_annotation: None,
                is_static,
                is_readonly,
                method_body: Some(method),
            }
        } else {
            self.expect(TokenKind::Colon);
            let type_annotation = self.parse_type();
            self.eat(TokenKind::Semi);
            ClassMember {
                name,
                type_annotation: Some(type_annotation),
                is_static,
                is_readonly,
                method_body: None,
            }
        }
    }

    pub(crate) fn parse_interface_declaration(&mut self) -> InterfaceDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Interface);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameter_list();
        let mut extends = Vec::new();
        if self.eat(TokenKind::Extends) {
            loop {
                extends.push(self.parse_type());
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::LBrace);
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let name = self.parse_identifier_symbol();
            let is_optional = self.eat(TokenKind::Question);
            self.expect(TokenKind::Colon);
            let type_annotation = self.parse_type();
            members.push(InterfaceMember {
                name,
                type_annotation,
                is_optional,
            });
            if !self.eat(TokenKind::Semi) && !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace);
        InterfaceDeclaration {
            name,
            type_parameters,
            extends,
            members,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    pub(crate) fn parse_struct_declaration(&mut self) -> StructDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Struct);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameter_list();
        self.expect(TokenKind::LBrace);
        let fields = self.parse_field_list();
        self.expect(TokenKind::RBrace);
        StructDeclaration {
            name,
            type_parameters,
            fields,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    pub(crate) fn parse_error_declaration(&mut self) -> ErrorDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Error);
        let name = self.parse_identifier();
        self.expect(TokenKind::LBrace);
        let fields = self.parse_field_list();
        self.expect(TokenKind::RBrace);
        ErrorDeclaration {
            name,
            fields,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    fn parse_field_list(&mut self) -> Vec<StructField> {
        let mut fields = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let name = self.parse_identifier_symbol();
            let is_optional = self.eat(TokenKind::Question);
            self.expect(TokenKind::Colon);
            let type_annotation = self.parse_type();
            fields.push(StructField {
                name,
                type_annotation,
                is_optional,
            });
            if !self.eat(TokenKind::Comma) && !self.eat(TokenKind::Semi) {
                break;
            }
        }
        fields
    }

    pub(crate) fn parse_enum_declaration(&mut self) -> EnumDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Enum);
        let name = self.parse_identifier();
        self.expect(TokenKind::LBrace);
        let mut members = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let member_name = self.parse_identifier_symbol();
            let data = if self.eat(TokenKind::LParen) {
                let mut types = Vec::new();
                while !self.at(TokenKind::RParen) && !self.at_end() {
                    types.push(self.parse_type());
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(TokenKind::RParen);
                EnumMemberData::Tuple(types)
            } else {
                EnumMemberData::Unit
            };
            members.push(EnumMember { name: member_name, data });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace);
        EnumDeclaration {
            name,
            members,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    pub(crate) fn parse_alias_declaration(&mut self) -> AliasDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Alias);
        let name = self.parse_identifier();
        let type_parameters = self.parse_type_parameter_list();
        self.expect(TokenKind::Eq);
        let aliased_type = self.parse_type();
        self.expect(TokenKind::Semi);
        AliasDeclaration {
            name,
            type_parameters,
            aliased_type,
            is_exported: false,
            range: self.range_from(start),
        }
    }

    pub(crate) fn parse_import_declaration(&mut self) -> ImportDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Import);
        self.expect(TokenKind::LBrace);
        let mut bindings = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            bindings.push(self.parse_identifier());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace);
        self.expect(TokenKind::From);
        let path = self.parse_module_path();
        self.eat(TokenKind::Semi);
        ImportDeclaration {
            path,
            bindings,
            range: self.range_from(start),
        }
    }

    fn parse_module_path(&mut self) -> ModulePath {
        if self.at(TokenKind::StringLiteral) {
            let text = self.current_text();
            self.advance();
            ModulePath(text.trim_matches('"').to_string())
        } else {
            self.error_here(
                DiagID::PARSE_EXPECTED_TOKEN,
                vec![
                    DiagnosticArgument::Str("module path string".to_string()),
                    DiagnosticArgument::Str(format!("{:?}", self.current_kind())),
                ],
            );
            ModulePath(String::new())
        }
    }

    pub(crate) fn parse_export_declaration(&mut self) -> ExportDeclaration {
        let start = self.current_loc();
        self.expect(TokenKind::Export);
        let mut declaration = self.parse_declaration_statement();
        mark_exported(&mut declaration);
        ExportDeclaration {
            declaration: Box::new(declaration),
            range: self.range_from(start),
        }
    }

    /// Dispatches to one of the declaration-keyword parsers; shared between
    /// plain top-level declarations and `export`-wrapped ones.
    pub(crate) fn parse_declaration_statement(&mut self) -> Statement {
        match self.current_kind() {
            TokenKind::Fun | TokenKind::Async => Statement::Function(self.parse_function_declaration()),
            TokenKind::Class => Statement::Class(self.parse_class_declaration()),
            TokenKind::Interface => Statement::Interface(self.parse_interface_declaration()),
            TokenKind::Struct => Statement::Struct(self.parse_struct_declaration()),
            TokenKind::Enum => Statement::Enum(self.parse_enum_declaration()),
            TokenKind::Error => Statement::Error(self.parse_error_declaration()),
            TokenKind::Alias => Statement::Alias(self.parse_alias_declaration()),
            TokenKind::Let | TokenKind::Const | TokenKind::Var => Statement::Variable(self.parse_variable_declaration()),
            _ => {
                self.error_here(
                    DiagID::PARSE_UNEXPECTED_TOKEN,
                    vec![DiagnosticArgument::Str(format!("{:?}", self.current_kind()))],
                );
                self.recover_to_sync_point();
                Statement::Empty(EmptyStatement {
                    range: self.dummy_range(),
                })
            }
        }
    }
}

fn mark_exported(statement: &mut Statement) {
    match statement {
        Statement::Function(d) => d.is_exported = true,
        Statement::Class(d) => d.is_exported = true,
        Statement::Interface(d) => d.is_exported = true,
        Statement::Struct(d) => d.is_exported = true,
        Statement::Enum(d) => d.is_exported = true,
        Statement::Error(d) => d.is_exported = true,
        Statement::Alias(d) => d.is_exported = true,
        _ => {}
    }
}
