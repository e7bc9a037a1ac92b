//! Structural AST dump for snapshot testing.
//!
//! `ASTDumper` walks a tree with [`Visitor`] and renders node kinds and
//! spans as it goes; it never re-parses or re-derives anything from source
//! text, so it is safe to run on a tree built from a speculative or
//! recovered parse.

use std::fmt::Write as _;

use zomlc_util::span::SourceRange;

use crate::ast::*;
use crate::visitor::Visitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Json,
    Text,
    Xml,
}

pub struct ASTDumper {
    format: DumpFormat,
    depth: usize,
    out: String,
}

impl ASTDumper {
    pub fn new(format: DumpFormat) -> Self {
        Self {
            format,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn dump_source_file(source_file: &SourceFile, format: DumpFormat) -> String {
        let mut dumper = Self::new(format);
        dumper.visit_source_file(source_file);
        dumper.finish()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn emit(&mut self, kind: SyntaxKind, range: SourceRange) {
        match self.format {
            DumpFormat::Text => {
                let _ = writeln!(
                    self.out,
                    "{:indent$}{:?} [{}..{})",
                    "",
                    kind,
                    range.start.offset,
                    range.end.offset,
                    indent = self.depth * 2
                );
            }
            DumpFormat::Json => {
                let _ = writeln!(
                    self.out,
                    "{:indent$}{{\"kind\":\"{:?}\",\"start\":{},\"end\":{}}}",
                    "",
                    kind,
                    range.start.offset,
                    range.end.offset,
                    indent = self.depth * 2
                );
            }
            DumpFormat::Xml => {
                let _ = writeln!(
                    self.out,
                    "{:indent$}<{:?} start=\"{}\" end=\"{}\"/>",
                    "",
                    kind,
                    range.start.offset,
                    range.end.offset,
                    indent = self.depth * 2
                );
            }
        }
    }

    fn nested<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl Visitor for ASTDumper {
    fn visit_expression_default(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_primary_expression(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_member_expression(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_left_hand_side_expression(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_update_expression(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_cast_expression(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_unary_expression(&mut self, node: &Expression) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_expression_children(d, node));
    }

    fn visit_statement_default(&mut self, node: &Statement) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_statement_children(d, node));
    }

    fn visit_declaration(&mut self, node: &Statement) {
        self.emit(node.kind(), node.range());
        self.nested(|d| crate::visitor::walk_statement_children(d, node));
    }

    fn visit_type(&mut self, node: &Type) {
        let range = match node {
            Type::Reference(n) => n.range,
            Type::Array(n) => n.range,
            Type::Union(n) => n.range,
            Type::Intersection(n) => n.range,
            Type::Parenthesized(n) => n.range,
            Type::Predefined(n) => n.range,
            Type::Object(n) => n.range,
            Type::Tuple(n) => n.range,
            Type::Function(n) => n.range,
            Type::Optional(n) => n.range,
            Type::Query(n) => n.range,
        };
        self.emit(node.kind(), range);
        self.nested(|d| crate::visitor::walk_type(d, node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Identifier {
        Identifier {
            name: zomlc_util::symbol::Symbol::intern(name),
            range: SourceRange::DUMMY,
        }
    }

    #[test]
    fn text_dump_lists_every_visited_node() {
        let source_file = SourceFile {
            statements: vec![Statement::Expression(ExpressionStatement {
                expression: Expression::Binary(BinaryExpression {
                    left: Box::new(Expression::Identifier(ident("a"))),
                    operator: BinaryOperator::Add,
                    right: Box::new(Expression::Identifier(ident("b"))),
                    range: SourceRange::DUMMY,
                }),
                range: SourceRange::DUMMY,
            })],
            module: None,
        };

        let dump = ASTDumper::dump_source_file(&source_file, DumpFormat::Text);
        assert!(dump.contains("ExpressionStatement"));
        assert!(dump.contains("BinaryExpression"));
    }

    #[test]
    fn json_and_xml_formats_differ_in_shape() {
        let source_file = SourceFile {
            statements: vec![Statement::Empty(EmptyStatement { range: SourceRange::DUMMY })],
            module: None,
        };

        let json = ASTDumper::dump_source_file(&source_file, DumpFormat::Json);
        let xml = ASTDumper::dump_source_file(&source_file, DumpFormat::Xml);
        assert!(json.contains("\"kind\""));
        assert!(xml.contains("<EmptyStatement"));
    }
}
