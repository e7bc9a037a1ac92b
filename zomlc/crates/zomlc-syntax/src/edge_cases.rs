//! Integration tests exercising full-file parses end to end, beyond the
//! per-production-area unit tests in each grammar module.

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::Parser;
    use zomlc_util::diagnostic::DiagnosticEngine;
    use zomlc_util::span::BufferId;

    fn parse_file(source: &str) -> (SourceFile, DiagnosticEngine) {
        let engine = DiagnosticEngine::new();
        let source_file = {
            let mut parser = Parser::new(source, BufferId::new(0), &engine);
            parser.parse_source_file()
        };
        (source_file, engine)
    }

    #[test]
    fn empty_source_parses_to_no_statements() {
        let (file, engine) = parse_file("");
        assert!(file.statements.is_empty());
        assert!(!engine.had_any_error());
    }

    #[test]
    fn whitespace_and_comments_only() {
        let (file, engine) = parse_file("   \n\t  // just a comment\n  ");
        assert!(file.statements.is_empty());
        assert!(!engine.had_any_error());
    }

    #[test]
    fn parses_full_function_with_control_flow() {
        let source = r#"
            fun fib(n: number) -> number {
                if (n <= 1) {
                    return n;
                }
                return fib(n - 1) + fib(n - 2);
            }
        "#;
        let (file, engine) = parse_file(source);
        assert_eq!(file.statements.len(), 1);
        assert!(matches!(file.statements[0], Statement::Function(_)));
        assert!(!engine.had_any_error());
    }

    #[test]
    fn parses_struct_enum_and_error_declarations_together() {
        let source = r#"
            struct Point { x: number, y: number }
            enum Shape { Circle(number), Square(number) }
            error ParseFailure { message: string }
        "#;
        let (file, engine) = parse_file(source);
        assert_eq!(file.statements.len(), 3);
        assert!(matches!(file.statements[0], Statement::Struct(_)));
        assert!(matches!(file.statements[1], Statement::Enum(_)));
        assert!(matches!(file.statements[2], Statement::Error(_)));
        assert!(!engine.had_any_error());
    }

    #[test]
    fn parses_module_with_import_and_export() {
        let source = r#"
            import { helper } from "./util";
            export fun entry() -> number {
                return helper();
            }
        "#;
        let (file, engine) = parse_file(source);
        let module = file.module.expect("expected module syntax to be detected");
        assert_eq!(module.elements.len(), 2);
        assert!(matches!(module.elements[0], ImplementationModuleElement::Import(_)));
        assert!(matches!(module.elements[1], ImplementationModuleElement::Export(_)));
        assert!(!engine.had_any_error());
    }

    #[test]
    fn parses_function_with_raises_clause_and_match_body() {
        let source = r#"
            fun parse(input: string) -> number raises ParseFailure {
                match (input) {
                    "zero" => 0,
                    _ => 1,
                }
            }
        "#;
        let (file, engine) = parse_file(source);
        match &file.statements[0] {
            Statement::Function(f) => {
                let ret = f.return_type.as_ref().expect("expected return type");
                assert!(ret.error_type.is_some());
            }
            other => panic!("expected function declaration, got {other:?}"),
        }
        assert!(!engine.had_any_error());
    }

    #[test]
    fn parses_for_loop_over_array_literal_elements() {
        let source = r#"
            fun sum(values: number[]) -> number {
                let total = 0;
                for (let v of values) {
                    total = total + v;
                }
                return total;
            }
        "#;
        let (file, engine) = parse_file(source);
        assert_eq!(file.statements.len(), 1);
        assert!(!engine.had_any_error());
    }

    #[test]
    fn malformed_statement_recovers_and_keeps_parsing_the_rest_of_the_file() {
        let source = r#"
            let x: = ;
            fun ok() -> number {
                return 1;
            }
        "#;
        let (file, engine) = parse_file(source);
        // The broken `let` still yields a (possibly malformed) statement, and
        // parsing resumes in time to also produce the valid function after it.
        assert!(file.statements.iter().any(|s| matches!(s, Statement::Function(_))));
        assert!(engine.had_any_error());
    }

    #[test]
    fn parses_generic_class_implementing_an_interface() {
        let source = r#"
            interface Comparable<T> { compareTo: T; }
            class Box<T> implements Comparable<T> {
                value: T;
            }
        "#;
        let (file, engine) = parse_file(source);
        assert_eq!(file.statements.len(), 2);
        match &file.statements[1] {
            Statement::Class(c) => {
                assert_eq!(c.type_parameters.len(), 1);
                assert_eq!(c.implements.len(), 1);
            }
            other => panic!("expected class declaration, got {other:?}"),
        }
        assert!(!engine.had_any_error());
    }

    #[test]
    fn parses_template_expression_with_interpolation() {
        let source = r#"
            fun greet(name: string) -> string {
                return `Hello, ${name}!`;
            }
        "#;
        let (file, engine) = parse_file(source);
        assert_eq!(file.statements.len(), 1);
        assert!(!engine.had_any_error());
    }
}
