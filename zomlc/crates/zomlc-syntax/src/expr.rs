//! Expression grammar: precedence-climbing binary/assignment parsing over a
//! primary-expression core covering literals, identifiers, `fun` expressions,
//! array/object literals, and template strings.

use zomlc_lex::TokenKind;
use zomlc_util::diagnostic::{DiagID, DiagnosticArgument};
use zomlc_util::symbol::Symbol;

use crate::ast::*;
use crate::operator::{self, OperatorAssociativity, OperatorPrecedence, OperatorType};
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Entry point for an expression in statement/argument/initializer
    /// position. Includes the comma operator, so a caller that must stop at
    /// a bare comma (argument lists, array/object elements) should call
    /// `parse_assignment_expression` directly instead.
    pub(crate) fn parse_expression(&mut self) -> Expression {
        let mut expr = self.parse_assignment_expression();
        while self.at(TokenKind::Comma) {
            let start = expr.range().start;
            self.advance();
            let right = self.parse_assignment_expression();
            expr = Expression::Binary(BinaryExpression {
                left: Box::new(expr),
                operator: BinaryOperator::Comma,
                right: Box::new(right),
                range: self.range_from(start),
            });
        }
        expr
    }

    pub(crate) fn parse_assignment_expression(&mut self) -> Expression {
        if self.at(TokenKind::Fun) || (self.at(TokenKind::Async) && self.peek().kind == TokenKind::Fun) {
            return self.parse_function_expression();
        }

        let left = self.parse_conditional_expression();
        if let Some(op) = assignment_operator(self.current_kind()) {
            let start = left.range().start;
            self.advance();
            let value = self.parse_assignment_expression();
            return Expression::Assignment(AssignmentExpression {
                target: Box::new(left),
                operator: op,
                value: Box::new(value),
                range: self.range_from(start),
            });
        }
        left
    }

    fn parse_conditional_expression(&mut self) -> Expression {
        let start = self.current_loc();
        let condition = self.parse_binary_expression(OperatorPrecedence::NullishCoalescing);
        if !self.eat(TokenKind::Question) {
            return condition;
        }
        let when_true = self.parse_assignment_expression();
        self.expect(TokenKind::Colon);
        let when_false = self.parse_assignment_expression();
        Expression::Conditional(ConditionalExpression {
            condition: Box::new(condition),
            when_true: Box::new(when_true),
            when_false: Box::new(when_false),
            range: self.range_from(start),
        })
    }

    /// Precedence-climbing loop driven by `operator::binary_operator`. Stops
    /// at any operator whose precedence is below `min_precedence`.
    fn parse_binary_expression(&mut self, min_precedence: OperatorPrecedence) -> Expression {
        let mut left = self.parse_cast_expression();
        loop {
            let Some(op) = operator::binary_operator(self.current_kind()) else {
                break;
            };
            if op.kind != OperatorType::Binary || op.precedence < min_precedence {
                break;
            }
            let Some(binary_op) = binary_operator_kind(self.current_kind()) else {
                break;
            };
            let start = left.range().start;
            self.advance();
            let next_min = if op.associativity == OperatorAssociativity::Right {
                op.precedence
            } else {
                bump(op.precedence)
            };
            let right = self.parse_binary_expression(next_min);
            left = Expression::Binary(BinaryExpression {
                left: Box::new(left),
                operator: binary_op,
                right: Box::new(right),
                range: self.range_from(start),
            });
        }
        left
    }

    /// `as` / `as!` / `as?` bind looser than unary but tighter than binary
    /// operators, so `a + b as T` casts only `b`.
    fn parse_cast_expression(&mut self) -> Expression {
        let start = self.current_loc();
        let mut expr = self.parse_unary_expression();
        loop {
            if self.eat(TokenKind::As) {
                if self.eat(TokenKind::Bang) {
                    let target_type = self.parse_type();
                    expr = Expression::ForcedAs(ForcedAsExpression {
                        expression: Box::new(expr),
                        target_type,
                        range: self.range_from(start),
                    });
                } else if self.eat(TokenKind::Question) {
                    let target_type = self.parse_type();
                    expr = Expression::ConditionalAs(ConditionalAsExpression {
                        expression: Box::new(expr),
                        target_type,
                        range: self.range_from(start),
                    });
                } else {
                    let target_type = self.parse_type();
                    expr = Expression::As(AsExpression {
                        expression: Box::new(expr),
                        target_type,
                        range: self.range_from(start),
                    });
                }
            } else {
                break;
            }
        }
        expr
    }

    fn parse_unary_expression(&mut self) -> Expression {
        let start = self.current_loc();
        match self.current_kind() {
            TokenKind::Void => {
                self.advance();
                Expression::Void(VoidExpression {
                    operand: Box::new(self.parse_unary_expression()),
                    range: self.range_from(start),
                })
            }
            TokenKind::Typeof => {
                self.advance();
                Expression::TypeOf(TypeOfExpression {
                    operand: Box::new(self.parse_unary_expression()),
                    range: self.range_from(start),
                })
            }
            TokenKind::Await => {
                self.advance();
                Expression::Await(AwaitExpression {
                    operand: Box::new(self.parse_unary_expression()),
                    range: self.range_from(start),
                })
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Bang | TokenKind::Tilde
            | TokenKind::PlusPlus | TokenKind::MinusMinus => {
                let op = prefix_unary_operator_kind(self.current_kind());
                self.advance();
                let operand = self.parse_unary_expression();
                Expression::PrefixUnary(PrefixUnaryExpression {
                    operator: op,
                    operand: Box::new(operand),
                    range: self.range_from(start),
                })
            }
            _ => self.parse_postfix_expression(),
        }
    }

    fn parse_postfix_expression(&mut self) -> Expression {
        let start = self.current_loc();
        let expr = self.parse_left_hand_side_expression();
        match self.current_kind() {
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                let op = prefix_unary_operator_kind(self.current_kind());
                self.advance();
                Expression::PostfixUnary(PostfixUnaryExpression {
                    operator: op,
                    operand: Box::new(expr),
                    range: self.range_from(start),
                })
            }
            _ => expr,
        }
    }

    /// `new`/call/member-access chain: the shared suffix grammar for
    /// property access, element access, calls (with the speculative
    /// `<...>`-vs-less-than type-argument-list lookahead), and optional
    /// chaining links.
    fn parse_left_hand_side_expression(&mut self) -> Expression {
        let start = self.current_loc();
        let mut expr = if self.at(TokenKind::New) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };

        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let name = self.parse_identifier();
                    expr = Expression::PropertyAccess(PropertyAccessExpression {
                        expression: Box::new(expr),
                        name,
                        is_optional: false,
                        range: self.range_from(start),
                    });
                }
                TokenKind::QuestionDot => {
                    self.advance();
                    if self.at(TokenKind::LParen) {
                        let (arguments, type_arguments) = self.parse_call_arguments();
                        expr = Expression::Call(CallExpression {
                            callee: Box::new(expr),
                            type_arguments,
                            arguments,
                            is_optional: true,
                            range: self.range_from(start),
                        });
                    } else if self.at(TokenKind::LBracket) {
                        self.advance();
                        let argument = self.parse_expression();
                        self.expect(TokenKind::RBracket);
                        expr = Expression::ElementAccess(ElementAccessExpression {
                            expression: Box::new(expr),
                            argument: Box::new(argument),
                            range: self.range_from(start),
                        });
                    } else {
                        let name = self.parse_identifier();
                        expr = Expression::PropertyAccess(PropertyAccessExpression {
                            expression: Box::new(expr),
                            name,
                            is_optional: true,
                            range: self.range_from(start),
                        });
                    }
                    expr = Expression::Optional(OptionalExpression {
                        expression: Box::new(expr),
                        range: self.range_from(start),
                    });
                }
                TokenKind::LBracket => {
                    self.advance();
                    let argument = self.parse_expression();
                    self.expect(TokenKind::RBracket);
                    expr = Expression::ElementAccess(ElementAccessExpression {
                        expression: Box::new(expr),
                        argument: Box::new(argument),
                        range: self.range_from(start),
                    });
                }
                TokenKind::LParen => {
                    let (arguments, type_arguments) = self.parse_call_arguments();
                    expr = Expression::Call(CallExpression {
                        callee: Box::new(expr),
                        type_arguments,
                        arguments,
                        is_optional: false,
                        range: self.range_from(start),
                    });
                }
                TokenKind::Lt => {
                    // Only worth trying if a call immediately follows the
                    // type-argument list; otherwise this is just `<`.
                    let Some(type_arguments) = self.try_parse_type_argument_list() else {
                        break;
                    };
                    if !self.at(TokenKind::LParen) {
                        break;
                    }
                    let (arguments, _) = self.parse_call_arguments();
                    expr = Expression::Call(CallExpression {
                        callee: Box::new(expr),
                        type_arguments: Some(type_arguments),
                        arguments,
                        is_optional: false,
                        range: self.range_from(start),
                    });
                }
                _ => break,
            }
        }
        expr
    }

    fn parse_new_expression(&mut self) -> Expression {
        let start = self.current_loc();
        self.expect(TokenKind::New);
        let callee = self.parse_left_hand_side_expression_no_call();
        let type_arguments = self.try_parse_type_argument_list();
        let arguments = if self.at(TokenKind::LParen) {
            self.parse_call_arguments().0
        } else {
            Vec::new()
        };
        Expression::New(NewExpression {
            callee: Box::new(callee),
            type_arguments,
            arguments,
            range: self.range_from(start),
        })
    }

    /// The callee position of a `new` expression parses member-access links
    /// but stops before consuming a call's `(...)`, since that argument list
    /// belongs to the `new` itself.
    fn parse_left_hand_side_expression_no_call(&mut self) -> Expression {
        let start = self.current_loc();
        let mut expr = if self.at(TokenKind::New) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let name = self.parse_identifier();
                    expr = Expression::PropertyAccess(PropertyAccessExpression {
                        expression: Box::new(expr),
                        name,
                        is_optional: false,
                        range: self.range_from(start),
                    });
                }
                TokenKind::LBracket => {
                    self.advance();
                    let argument = self.parse_expression();
                    self.expect(TokenKind::RBracket);
                    expr = Expression::ElementAccess(ElementAccessExpression {
                        expression: Box::new(expr),
                        argument: Box::new(argument),
                        range: self.range_from(start),
                    });
                }
                _ => break,
            }
        }
        expr
    }

    fn parse_call_arguments(&mut self) -> (Vec<Expression>, Option<Vec<Type>>) {
        self.expect(TokenKind::LParen);
        let mut arguments = Vec::new();
        while !self.at(TokenKind::RParen) && !self.at_end() {
            arguments.push(self.parse_assignment_expression());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen);
        (arguments, None)
    }

    fn parse_primary_expression(&mut self) -> Expression {
        let start = self.current_loc();
        match self.current_kind() {
            TokenKind::IntegerLiteral => {
                let text = self.current_text();
                let value = parse_integer_literal(text);
                self.advance();
                Expression::IntegerLiteral(IntegerLiteral {
                    value,
                    range: self.range_from(start),
                })
            }
            TokenKind::FloatLiteral => {
                let text = self.current_text();
                let value = parse_float_literal(text);
                self.advance();
                Expression::FloatLiteral(FloatLiteral {
                    value,
                    range: self.range_from(start),
                })
            }
            TokenKind::StringLiteral => {
                let text = self.current_text();
                let value = Symbol::intern(&unescape_string_literal(text));
                self.advance();
                Expression::StringLiteral(StringLiteral {
                    value,
                    range: self.range_from(start),
                })
            }
            TokenKind::True => {
                self.advance();
                Expression::BooleanLiteral(BooleanLiteral {
                    value: true,
                    range: self.range_from(start),
                })
            }
            TokenKind::False => {
                self.advance();
                Expression::BooleanLiteral(BooleanLiteral {
                    value: false,
                    range: self.range_from(start),
                })
            }
            TokenKind::Null => {
                self.advance();
                Expression::NullLiteral(NullLiteral {
                    range: self.range_from(start),
                })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen);
                Expression::Parenthesized(ParenthesizedExpression {
                    expression: Box::new(inner),
                    range: self.range_from(start),
                })
            }
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_object_literal(),
            TokenKind::TemplateStringStart => self.parse_template_expression(),
            TokenKind::Fun | TokenKind::Async => self.parse_function_expression(),
            TokenKind::Ident | TokenKind::This | TokenKind::Super => {
                let name = Symbol::intern(self.current_text());
                let range = self.current_range();
                self.advance();
                Expression::Identifier(Identifier { name, range })
            }
            _ => {
                self.error_here(
                    DiagID::PARSE_UNEXPECTED_TOKEN,
                    vec![DiagnosticArgument::Str(format!("{:?}", self.current_kind()))],
                );
                let range = self.current_range();
                if !self.at_end() {
                    self.advance();
                }
                Expression::Identifier(Identifier {
                    name: Symbol::intern(""),
                    range,
                })
            }
        }
    }

    fn parse_array_literal(&mut self) -> Expression {
        let start = self.current_loc();
        self.expect(TokenKind::LBracket);
        let mut elements = Vec::new();
        while !self.at(TokenKind::RBracket) && !self.at_end() {
            elements.push(self.parse_assignment_expression());
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBracket);
        Expression::ArrayLiteral(ArrayLiteralExpression {
            elements,
            range: self.range_from(start),
        })
    }

    fn parse_object_literal(&mut self) -> Expression {
        let start = self.current_loc();
        self.expect(TokenKind::LBrace);
        let mut properties = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_end() {
            let name = self.parse_identifier_symbol();
            let (value, is_shorthand) = if self.eat(TokenKind::Colon) {
                (self.parse_assignment_expression(), false)
            } else {
                (
                    Expression::Identifier(Identifier {
                        name,
                        range: self.current_range(),
                    }),
                    true,
                )
            };
            properties.push(ObjectProperty {
                name,
                value,
                is_shorthand,
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBrace);
        Expression::ObjectLiteral(ObjectLiteralExpression {
            properties,
            range: self.range_from(start),
        })
    }

    /// A backtick template: the opening `TemplateStringStart`, alternating
    /// fragments/interpolations, closed by `TemplateStringEnd`.
    fn parse_template_expression(&mut self) -> Expression {
        let start = self.current_loc();
        self.expect(TokenKind::TemplateStringStart);
        let mut quasis = Vec::new();
        let mut expressions = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::TemplateStringFragment => {
                    quasis.push(Symbol::intern(self.current_text()));
                    self.advance();
                }
                TokenKind::TemplateInterpolationStart => {
                    self.advance();
                    expressions.push(self.parse_expression());
                    self.expect(TokenKind::TemplateInterpolationEnd);
                }
                TokenKind::TemplateStringEnd | TokenKind::Eof => break,
                _ => break,
            }
        }
        self.eat(TokenKind::TemplateStringEnd);
        Expression::Template(TemplateExpression {
            quasis,
            expressions,
            range: self.range_from(start),
        })
    }

    fn parse_function_expression(&mut self) -> Expression {
        let start = self.current_loc();
        let is_async = self.eat(TokenKind::Async);
        self.expect(TokenKind::Fun);
        let name = if self.at(TokenKind::Ident) {
            Some(self.parse_identifier())
        } else {
            None
        };
        let type_parameters = self.parse_type_parameter_list();
        let parameters = self.parse_parameter_list();
        let return_type = if self.eat(TokenKind::Arrow) {
            Some(self.parse_return_type())
        } else {
            None
        };
        let body = self.parse_block();
        Expression::Function(FunctionExpression {
            name,
            type_parameters,
            parameters,
            return_type,
            body,
            is_async,
            range: self.range_from(start),
        })
    }
}

fn bump(precedence: OperatorPrecedence) -> OperatorPrecedence {
    match precedence {
        OperatorPrecedence::Lowest => OperatorPrecedence::Comma,
        OperatorPrecedence::Comma => OperatorPrecedence::Assignment,
        OperatorPrecedence::Assignment => OperatorPrecedence::Conditional,
        OperatorPrecedence::Conditional => OperatorPrecedence::NullishCoalescing,
        OperatorPrecedence::NullishCoalescing => OperatorPrecedence::LogicalOr,
        OperatorPrecedence::LogicalOr => OperatorPrecedence::LogicalAnd,
        OperatorPrecedence::LogicalAnd => OperatorPrecedence::BitwiseOr,
        OperatorPrecedence::BitwiseOr => OperatorPrecedence::BitwiseXor,
        OperatorPrecedence::BitwiseXor => OperatorPrecedence::BitwiseAnd,
        OperatorPrecedence::BitwiseAnd => OperatorPrecedence::Equality,
        OperatorPrecedence::Equality => OperatorPrecedence::Relational,
        OperatorPrecedence::Relational => OperatorPrecedence::Shift,
        OperatorPrecedence::Shift => OperatorPrecedence::Additive,
        OperatorPrecedence::Additive => OperatorPrecedence::Multiplicative,
        OperatorPrecedence::Multiplicative => OperatorPrecedence::Exponentiation,
        OperatorPrecedence::Exponentiation => OperatorPrecedence::Unary,
        OperatorPrecedence::Unary => OperatorPrecedence::Postfix,
        OperatorPrecedence::Postfix => OperatorPrecedence::Primary,
        OperatorPrecedence::Primary => OperatorPrecedence::Primary,
    }
}

fn binary_operator_kind(kind: TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Subtract,
        TokenKind::Star => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::Percent => BinaryOperator::Modulo,
        TokenKind::StarStar => BinaryOperator::Exponent,
        TokenKind::EqEq => BinaryOperator::Equal,
        TokenKind::EqEqEq => BinaryOperator::StrictEqual,
        TokenKind::NotEq => BinaryOperator::NotEqual,
        TokenKind::NotEqEq => BinaryOperator::StrictNotEqual,
        TokenKind::Lt => BinaryOperator::LessThan,
        TokenKind::Gt => BinaryOperator::GreaterThan,
        TokenKind::LtEq => BinaryOperator::LessThanEqual,
        TokenKind::GtEq => BinaryOperator::GreaterThanEqual,
        TokenKind::AmpAmp => BinaryOperator::LogicalAnd,
        TokenKind::PipePipe => BinaryOperator::LogicalOr,
        TokenKind::QuestionQuestion => BinaryOperator::NullishCoalescing,
        TokenKind::Amp => BinaryOperator::BitwiseAnd,
        TokenKind::Pipe => BinaryOperator::BitwiseOr,
        TokenKind::Caret => BinaryOperator::BitwiseXor,
        TokenKind::Shl => BinaryOperator::ShiftLeft,
        TokenKind::Shr => BinaryOperator::ShiftRight,
        TokenKind::Shru => BinaryOperator::ShiftRightUnsigned,
        TokenKind::Instanceof => BinaryOperator::Instanceof,
        TokenKind::In => BinaryOperator::In,
        _ => return None,
    })
}

fn assignment_operator(kind: TokenKind) -> Option<AssignmentOperator> {
    Some(match kind {
        TokenKind::Eq => AssignmentOperator::Assign,
        TokenKind::PlusEq => AssignmentOperator::AddAssign,
        TokenKind::MinusEq => AssignmentOperator::SubtractAssign,
        TokenKind::StarEq => AssignmentOperator::MultiplyAssign,
        TokenKind::SlashEq => AssignmentOperator::DivideAssign,
        TokenKind::PercentEq => AssignmentOperator::ModuloAssign,
        TokenKind::StarStarEq => AssignmentOperator::ExponentAssign,
        TokenKind::AmpEq => AssignmentOperator::BitwiseAndAssign,
        TokenKind::PipeEq => AssignmentOperator::BitwiseOrAssign,
        TokenKind::CaretEq => AssignmentOperator::BitwiseXorAssign,
        TokenKind::ShlEq => AssignmentOperator::ShiftLeftAssign,
        TokenKind::ShrEq => AssignmentOperator::ShiftRightAssign,
        TokenKind::ShruEq => AssignmentOperator::ShiftRightUnsignedAssign,
        TokenKind::AmpAmpEq => AssignmentOperator::LogicalAndAssign,
        TokenKind::PipePipeEq => AssignmentOperator::LogicalOrAssign,
        TokenKind::QuestionQuestionEq => AssignmentOperator::NullishCoalescingAssign,
        _ => return None,
    })
}

fn prefix_unary_operator_kind(kind: TokenKind) -> UnaryOperator {
    match kind {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Minus => UnaryOperator::Minus,
        TokenKind::Bang => UnaryOperator::LogicalNot,
        TokenKind::Tilde => UnaryOperator::BitwiseNot,
        TokenKind::PlusPlus => UnaryOperator::Increment,
        TokenKind::MinusMinus => UnaryOperator::Decrement,
        other => unreachable!("{other:?} is not a unary operator token"),
    }
}

/// Parses an integer literal's raw source text (`42`, `0x2a`, `0b101010`,
/// `1_000`) into its value, stripping digit separators and radix prefixes.
fn parse_integer_literal(text: &str) -> i64 {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    if let Some(rest) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        i64::from_str_radix(rest, 16).unwrap_or(0)
    } else if let Some(rest) = cleaned.strip_prefix("0o").or_else(|| cleaned.strip_prefix("0O")) {
        i64::from_str_radix(rest, 8).unwrap_or(0)
    } else if let Some(rest) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        i64::from_str_radix(rest, 2).unwrap_or(0)
    } else {
        cleaned.parse().unwrap_or(0)
    }
}

fn parse_float_literal(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Strips the surrounding quotes from a string literal's raw source text and
/// resolves the escape sequences the lexer accepted without decoding.
fn unescape_string_literal(text: &str) -> String {
    let inner = text.strip_prefix('"').and_then(|s| s.strip_suffix('"')).unwrap_or(text);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if let Ok(code) = u32::from_str_radix(&hex, 16) {
                    if let Some(ch) = char::from_u32(code) {
                        out.push(ch);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
