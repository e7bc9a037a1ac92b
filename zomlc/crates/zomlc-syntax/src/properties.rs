//! Property-based tests over randomly generated expression trees.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use zomlc_util::diagnostic::DiagnosticEngine;
use zomlc_util::span::BufferId;

use crate::ast::{BinaryOperator, Expression, Statement};
use crate::Parser;

fn precedence(op: &str) -> u8 {
    match op {
        "+" | "-" => 1,
        "*" => 2,
        _ => 0,
    }
}

fn apply(op: &str, a: i64, b: i64) -> i64 {
    match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        _ => unreachable!("generator only emits +, -, *"),
    }
}

/// A reference precedence-climbing evaluator, independent of the parser,
/// used as the oracle for property 9.
fn reference_eval(operands: &[i64], ops: &[&str]) -> i64 {
    let mut values = vec![operands[0]];
    let mut operators: Vec<&str> = Vec::new();
    for (i, op) in ops.iter().enumerate() {
        while let Some(top) = operators.last() {
            if precedence(top) >= precedence(op) {
                let b = values.pop().unwrap();
                let a = values.pop().unwrap();
                let top = operators.pop().unwrap();
                values.push(apply(top, a, b));
            } else {
                break;
            }
        }
        operators.push(op);
        values.push(operands[i + 1]);
    }
    while let Some(top) = operators.pop() {
        let b = values.pop().unwrap();
        let a = values.pop().unwrap();
        values.push(apply(top, a, b));
    }
    values[0]
}

fn eval_ast(expr: &Expression) -> i64 {
    match expr {
        Expression::IntegerLiteral(n) => n.value,
        Expression::Parenthesized(p) => eval_ast(&p.expression),
        Expression::Binary(b) => {
            let l = eval_ast(&b.left);
            let r = eval_ast(&b.right);
            match b.operator {
                BinaryOperator::Add => l + r,
                BinaryOperator::Subtract => l - r,
                BinaryOperator::Multiply => l * r,
                other => unreachable!("generator only emits Add/Subtract/Multiply, got {other:?}"),
            }
        }
        other => unreachable!("generator only produces integer/binary expressions, got {other:?}"),
    }
}

/// Property 3: a node's children's ranges, in traversal order, are disjoint
/// and ordered, and each child range is contained in the parent's range.
fn ranges_well_formed(expr: &Expression) -> bool {
    match expr {
        Expression::Binary(b) => {
            let parent = b.range;
            let left = b.left.range();
            let right = b.right.range();
            left.start.offset >= parent.start.offset
                && right.end.offset <= parent.end.offset
                && left.end.offset <= right.start.offset
                && ranges_well_formed(&b.left)
                && ranges_well_formed(&b.right)
        }
        Expression::Parenthesized(p) => ranges_well_formed(&p.expression),
        _ => true,
    }
}

#[quickcheck]
fn precedence_climbing_matches_reference_evaluator(operands: Vec<u8>, op_picks: Vec<u8>) -> TestResult {
    if operands.is_empty() || operands.len() > 8 {
        return TestResult::discard();
    }
    let operands: Vec<i64> = operands.iter().map(|b| (*b % 9 + 1) as i64).collect();
    let op_syms = ["+", "-", "*"];

    let mut source = operands[0].to_string();
    let mut chosen_ops: Vec<&str> = Vec::new();
    for i in 1..operands.len() {
        let op = op_syms[(op_picks.get(i - 1).copied().unwrap_or(0) as usize) % op_syms.len()];
        chosen_ops.push(op);
        source.push(' ');
        source.push_str(op);
        source.push(' ');
        source.push_str(&operands[i].to_string());
    }
    source.push(';');

    let expected = reference_eval(&operands, &chosen_ops);

    let engine = DiagnosticEngine::new();
    let mut parser = Parser::new(&source, BufferId::new(0), &engine);
    let file = parser.parse_source_file();
    if engine.had_any_error() || file.statements.len() != 1 {
        return TestResult::failed();
    }
    let expr = match &file.statements[0] {
        Statement::Expression(e) => &e.expression,
        _ => return TestResult::failed(),
    };

    if !ranges_well_formed(expr) {
        return TestResult::failed();
    }
    TestResult::from_bool(eval_ast(expr) == expected)
}
