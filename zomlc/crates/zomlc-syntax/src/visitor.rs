//! Tree-walking visitor over the AST.
//!
//! Rust has no node inheritance, so the hierarchy described by the node
//! definitions (`PrefixUnaryExpression -> UpdateExpression -> UnaryExpression
//! -> Expression`, and so on) is expressed here as explicit default-method
//! forwarding: a concrete `visit_*` method's default body calls the
//! `visit_*` method of its syntactic supertype, the way `syn::visit::Visit`
//! forwards unhandled node kinds to a shared default. Override any method to
//! intercept that kind and its children; the default keeps walking.

use crate::ast::*;

pub trait Visitor: Sized {
    fn visit_source_file(&mut self, node: &SourceFile) {
        walk_source_file(self, node);
    }

    fn visit_statement(&mut self, node: &Statement) {
        walk_statement(self, node);
    }

    fn visit_expression(&mut self, node: &Expression) {
        walk_expression(self, node);
    }

    fn visit_type(&mut self, node: &Type) {
        walk_type(self, node);
    }

    // -- Expression hierarchy -------------------------------------------
    //
    // PrimaryExpression -> MemberExpression -> LeftHandSideExpression
    // -> UnaryExpression -> Expression, with UpdateExpression forwarding
    // into UnaryExpression as a sibling of the main chain. Each level
    // defaults to its parent; override the level you care about.

    fn visit_primary_expression(&mut self, node: &Expression) {
        self.visit_member_expression(node);
    }

    fn visit_member_expression(&mut self, node: &Expression) {
        self.visit_left_hand_side_expression(node);
    }

    fn visit_left_hand_side_expression(&mut self, node: &Expression) {
        self.visit_unary_expression(node);
    }

    fn visit_unary_expression(&mut self, node: &Expression) {
        self.visit_expression_default(node);
    }

    fn visit_update_expression(&mut self, node: &Expression) {
        self.visit_unary_expression(node);
    }

    fn visit_cast_expression(&mut self, node: &Expression) {
        self.visit_unary_expression(node);
    }

    /// Fallback terminal for the expression hierarchy; walks the node's
    /// children without imposing any supertype behavior.
    fn visit_expression_default(&mut self, node: &Expression) {
        walk_expression_children(self, node);
    }

    fn visit_identifier(&mut self, node: &Identifier) {
        let _ = node;
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) {
        let _ = node;
    }

    fn visit_integer_literal(&mut self, node: &IntegerLiteral) {
        let _ = node;
    }

    fn visit_float_literal(&mut self, node: &FloatLiteral) {
        let _ = node;
    }

    fn visit_boolean_literal(&mut self, node: &BooleanLiteral) {
        let _ = node;
    }

    fn visit_null_literal(&mut self, node: &NullLiteral) {
        let _ = node;
    }

    // -- Statement hierarchy ---------------------------------------------

    fn visit_declaration(&mut self, node: &Statement) {
        self.visit_statement_default(node);
    }

    fn visit_statement_default(&mut self, node: &Statement) {
        walk_statement_children(self, node);
    }

    fn visit_type_parameter(&mut self, node: &TypeParameter) {
        if let Some(constraint) = &node.constraint {
            self.visit_type(constraint);
        }
        if let Some(default) = &node.default {
            self.visit_type(default);
        }
    }

    fn visit_binding_element(&mut self, node: &BindingElement) {
        if let Some(ty) = &node.type_annotation {
            self.visit_type(ty);
        }
        if let Some(init) = &node.initializer {
            self.visit_expression(init);
        }
    }
}

pub fn walk_source_file<V: Visitor>(visitor: &mut V, node: &SourceFile) {
    for stmt in &node.statements {
        visitor.visit_statement(stmt);
    }
    if let Some(module) = &node.module {
        for element in &module.elements {
            match element {
                ImplementationModuleElement::Import(_) => {}
                ImplementationModuleElement::Export(export) => {
                    visitor.visit_statement(&export.declaration);
                }
                ImplementationModuleElement::Statement(stmt) => {
                    visitor.visit_statement(stmt);
                }
            }
        }
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, node: &Statement) {
    match node {
        Statement::Variable(_)
        | Statement::Function(_)
        | Statement::Class(_)
        | Statement::Interface(_)
        | Statement::Struct(_)
        | Statement::Enum(_)
        | Statement::Error(_)
        | Statement::Alias(_) => visitor.visit_declaration(node),
        _ => visitor.visit_statement_default(node),
    }
}

pub fn walk_statement_children<V: Visitor>(visitor: &mut V, node: &Statement) {
    match node {
        Statement::Variable(decl) => {
            for binding in &decl.declarations {
                visitor.visit_binding_element(binding);
            }
        }
        Statement::Function(decl) => {
            for tp in &decl.type_parameters {
                visitor.visit_type_parameter(tp);
            }
            for param in &decl.parameters {
                visitor.visit_binding_element(param);
            }
            if let Some(body) = &decl.body {
                visitor.visit_statement(&Statement::Block(body.clone()));
            }
        }
        Statement::Class(decl) => {
            if let Some(extends) = &decl.extends {
                visitor.visit_type(extends);
            }
            for ty in &decl.implements {
                visitor.visit_type(ty);
            }
        }
        Statement::Interface(decl) => {
            for ty in &decl.extends {
                visitor.visit_type(ty);
            }
            for member in &decl.members {
                visitor.visit_type(&member.type_annotation);
            }
        }
        Statement::Struct(decl) => {
            for field in &decl.fields {
                visitor.visit_type(&field.type_annotation);
            }
        }
        Statement::Enum(_) | Statement::Error(_) => {}
        Statement::Alias(decl) => {
            visitor.visit_type(&decl.aliased_type);
        }
        Statement::Block(block) => {
            for stmt in &block.statements {
                visitor.visit_statement(stmt);
            }
        }
        Statement::Expression(stmt) => {
            visitor.visit_expression(&stmt.expression);
        }
        Statement::If(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.then_statement);
            if let Some(else_stmt) = &stmt.else_statement {
                visitor.visit_statement(else_stmt);
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.body);
        }
        Statement::Return(stmt) => {
            if let Some(expr) = &stmt.expression {
                visitor.visit_expression(expr);
            }
        }
        Statement::Empty(_) | Statement::Break(_) | Statement::Continue(_) | Statement::Debugger(_) => {}
        Statement::For(stmt) => {
            if let Some(init) = &stmt.initializer {
                visitor.visit_statement(init);
            }
            if let Some(cond) = &stmt.condition {
                visitor.visit_expression(cond);
            }
            if let Some(update) = &stmt.update {
                visitor.visit_expression(update);
            }
            if let Some(binding) = &stmt.of_binding {
                visitor.visit_binding_element(binding);
            }
            if let Some(of_expr) = &stmt.of_expression {
                visitor.visit_expression(of_expr);
            }
            visitor.visit_statement(&stmt.body);
        }
        Statement::Match(stmt) => {
            visitor.visit_expression(&stmt.scrutinee);
            for arm in &stmt.arms {
                if let Some(guard) = &arm.guard {
                    visitor.visit_expression(guard);
                }
                for arm_stmt in &arm.body.statements {
                    visitor.visit_statement(arm_stmt);
                }
            }
        }
    }
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, node: &Expression) {
    match node {
        Expression::Identifier(_)
        | Expression::Parenthesized(_)
        | Expression::StringLiteral(_)
        | Expression::IntegerLiteral(_)
        | Expression::FloatLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::Function(_)
        | Expression::ArrayLiteral(_)
        | Expression::ObjectLiteral(_)
        | Expression::Template(_) => visitor.visit_primary_expression(node),

        Expression::PropertyAccess(_) | Expression::ElementAccess(_) => {
            visitor.visit_member_expression(node)
        }

        Expression::New(_) | Expression::Call(_) => visitor.visit_left_hand_side_expression(node),

        Expression::PrefixUnary(_) | Expression::PostfixUnary(_) => {
            visitor.visit_update_expression(node)
        }

        Expression::As(_) | Expression::ForcedAs(_) | Expression::ConditionalAs(_) => {
            visitor.visit_cast_expression(node)
        }

        Expression::Void(_) | Expression::TypeOf(_) | Expression::Await(_) => {
            visitor.visit_unary_expression(node)
        }

        Expression::Binary(_)
        | Expression::Assignment(_)
        | Expression::Conditional(_)
        | Expression::Optional(_) => visitor.visit_expression_default(node),
    }
}

pub fn walk_expression_children<V: Visitor>(visitor: &mut V, node: &Expression) {
    match node {
        Expression::Identifier(n) => visitor.visit_identifier(n),
        Expression::Parenthesized(n) => visitor.visit_expression(&n.expression),
        Expression::StringLiteral(n) => visitor.visit_string_literal(n),
        Expression::IntegerLiteral(n) => visitor.visit_integer_literal(n),
        Expression::FloatLiteral(n) => visitor.visit_float_literal(n),
        Expression::BooleanLiteral(n) => visitor.visit_boolean_literal(n),
        Expression::NullLiteral(n) => visitor.visit_null_literal(n),
        Expression::Function(n) => {
            for tp in &n.type_parameters {
                visitor.visit_type_parameter(tp);
            }
            for param in &n.parameters {
                visitor.visit_binding_element(param);
            }
            for stmt in &n.body.statements {
                visitor.visit_statement(stmt);
            }
        }
        Expression::ArrayLiteral(n) => {
            for elem in &n.elements {
                visitor.visit_expression(elem);
            }
        }
        Expression::ObjectLiteral(n) => {
            for prop in &n.properties {
                visitor.visit_expression(&prop.value);
            }
        }
        Expression::Template(n) => {
            for expr in &n.expressions {
                visitor.visit_expression(expr);
            }
        }
        Expression::PropertyAccess(n) => {
            visitor.visit_expression(&n.expression);
            visitor.visit_identifier(&n.name);
        }
        Expression::ElementAccess(n) => {
            visitor.visit_expression(&n.expression);
            visitor.visit_expression(&n.argument);
        }
        Expression::New(n) => {
            visitor.visit_expression(&n.callee);
            if let Some(type_args) = &n.type_arguments {
                for ty in type_args {
                    visitor.visit_type(ty);
                }
            }
            for arg in &n.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::Call(n) => {
            visitor.visit_expression(&n.callee);
            if let Some(type_args) = &n.type_arguments {
                for ty in type_args {
                    visitor.visit_type(ty);
                }
            }
            for arg in &n.arguments {
                visitor.visit_expression(arg);
            }
        }
        Expression::PrefixUnary(n) => visitor.visit_expression(&n.operand),
        Expression::PostfixUnary(n) => visitor.visit_expression(&n.operand),
        Expression::As(n) => {
            visitor.visit_expression(&n.expression);
            visitor.visit_type(&n.target_type);
        }
        Expression::ForcedAs(n) => {
            visitor.visit_expression(&n.expression);
            visitor.visit_type(&n.target_type);
        }
        Expression::ConditionalAs(n) => {
            visitor.visit_expression(&n.expression);
            visitor.visit_type(&n.target_type);
        }
        Expression::Void(n) => visitor.visit_expression(&n.operand),
        Expression::TypeOf(n) => visitor.visit_expression(&n.operand),
        Expression::Await(n) => visitor.visit_expression(&n.operand),
        Expression::Binary(n) => {
            visitor.visit_expression(&n.left);
            visitor.visit_expression(&n.right);
        }
        Expression::Assignment(n) => {
            visitor.visit_expression(&n.target);
            visitor.visit_expression(&n.value);
        }
        Expression::Conditional(n) => {
            visitor.visit_expression(&n.condition);
            visitor.visit_expression(&n.when_true);
            visitor.visit_expression(&n.when_false);
        }
        Expression::Optional(n) => visitor.visit_expression(&n.expression),
    }
}

pub fn walk_type<V: Visitor>(visitor: &mut V, node: &Type) {
    match node {
        Type::Reference(n) => {
            for arg in &n.type_arguments {
                visitor.visit_type(arg);
            }
        }
        Type::Array(n) => visitor.visit_type(&n.element_type),
        Type::Union(n) => {
            for member in &n.members {
                visitor.visit_type(member);
            }
        }
        Type::Intersection(n) => {
            for member in &n.members {
                visitor.visit_type(member);
            }
        }
        Type::Parenthesized(n) => visitor.visit_type(&n.inner),
        Type::Predefined(_) | Type::Query(_) => {}
        Type::Object(n) => {
            for member in &n.members {
                visitor.visit_type(&member.type_annotation);
            }
        }
        Type::Tuple(n) => {
            for elem in &n.elements {
                visitor.visit_type(elem);
            }
        }
        Type::Function(n) => {
            for tp in &n.type_parameters {
                visitor.visit_type_parameter(tp);
            }
            for param in &n.parameters {
                visitor.visit_type(&param.type_annotation);
            }
            visitor.visit_type(&n.return_type.type_);
            if let Some(err) = &n.return_type.error_type {
                visitor.visit_type(err);
            }
        }
        Type::Optional(n) => visitor.visit_type(&n.inner),
    }
}
