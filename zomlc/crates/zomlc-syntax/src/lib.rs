//! Abstract syntax tree and recursive-descent parser for ZomLang.
//!
//! [`ast`] defines the node hierarchy and [`SyntaxKind`](ast::SyntaxKind)
//! discriminator; [`visitor`] gives callers a hierarchical-dispatch
//! [`Visitor`](visitor::Visitor) over it; [`dumper`] is a `Visitor`
//! implementation that renders a tree for snapshot testing. The grammar
//! itself is split by production area - [`expr`], [`stmt`], [`items`],
//! [`types`], [`pattern`] - each contributing `impl<'a> Parser<'a>` methods
//! to the cursor defined in [`parser`].
//!
//! # Examples
//!
//! ```
//! use zomlc_syntax::Parser;
//! use zomlc_util::diagnostic::DiagnosticEngine;
//! use zomlc_util::span::BufferId;
//!
//! let engine = DiagnosticEngine::new();
//! let mut parser = Parser::new("fun add(a: number, b: number) -> number { return a + b; }", BufferId::new(0), &engine);
//! let source_file = parser.parse_source_file();
//! assert_eq!(source_file.statements.len(), 1);
//! assert!(!engine.had_any_error());
//! ```

pub mod ast;
pub mod dumper;
mod expr;
mod items;
pub mod operator;
mod parser;
mod pattern;
mod stmt;
mod types;
pub mod visitor;

pub use parser::Parser;

#[cfg(test)]
mod edge_cases;

#[cfg(test)]
mod properties;
