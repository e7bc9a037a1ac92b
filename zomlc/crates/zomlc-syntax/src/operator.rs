//! Operator metadata: precedence, associativity, and the token-to-operator
//! table the parser's precedence-climbing loop is driven by.

use zomlc_lex::TokenKind;

/// Binding strength of an operator, lowest to highest.
///
/// The numeric value is what the Pratt loop in `expr.rs` compares against;
/// higher always binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Lowest = 0,
    Comma = 1,
    Assignment = 2,
    Conditional = 3,
    NullishCoalescing = 4,
    LogicalOr = 5,
    LogicalAnd = 6,
    BitwiseOr = 7,
    BitwiseXor = 8,
    BitwiseAnd = 9,
    Equality = 10,
    Relational = 11,
    Shift = 12,
    Additive = 13,
    Multiplicative = 14,
    Exponentiation = 15,
    Unary = 16,
    Postfix = 17,
    Primary = 18,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorAssociativity {
    Left,
    Right,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorType {
    Binary,
    Unary,
    Assignment,
    Update,
}

/// A single operator's full metadata, looked up by its token.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    pub symbol: &'static str,
    pub kind: OperatorType,
    pub precedence: OperatorPrecedence,
    pub associativity: OperatorAssociativity,
}

macro_rules! op_table {
    ($($tok:ident => ($symbol:literal, $kind:ident, $prec:ident, $assoc:ident)),* $(,)?) => {
        /// Looks up the operator descriptor for a token, if it is one of the
        /// recognized binary/assignment operator tokens.
        pub fn binary_operator(kind: TokenKind) -> Option<Operator> {
            match kind {
                $(TokenKind::$tok => Some(Operator {
                    symbol: $symbol,
                    kind: OperatorType::$kind,
                    precedence: OperatorPrecedence::$prec,
                    associativity: OperatorAssociativity::$assoc,
                }),)*
                _ => None,
            }
        }
    };
}

op_table! {
    Comma => (",", Binary, Comma, Left),

    Eq => ("=", Assignment, Assignment, Right),
    PlusEq => ("+=", Assignment, Assignment, Right),
    MinusEq => ("-=", Assignment, Assignment, Right),
    StarEq => ("*=", Assignment, Assignment, Right),
    SlashEq => ("/=", Assignment, Assignment, Right),
    PercentEq => ("%=", Assignment, Assignment, Right),
    StarStarEq => ("**=", Assignment, Assignment, Right),
    AmpEq => ("&=", Assignment, Assignment, Right),
    PipeEq => ("|=", Assignment, Assignment, Right),
    CaretEq => ("^=", Assignment, Assignment, Right),
    ShlEq => ("<<=", Assignment, Assignment, Right),
    ShrEq => (">>=", Assignment, Assignment, Right),
    ShruEq => (">>>=", Assignment, Assignment, Right),
    AmpAmpEq => ("&&=", Assignment, Assignment, Right),
    PipePipeEq => ("||=", Assignment, Assignment, Right),
    QuestionQuestionEq => ("??=", Assignment, Assignment, Right),

    Question => ("?", Binary, Conditional, Right),

    QuestionQuestion => ("??", Binary, NullishCoalescing, Left),
    PipePipe => ("||", Binary, LogicalOr, Left),
    AmpAmp => ("&&", Binary, LogicalAnd, Left),
    Pipe => ("|", Binary, BitwiseOr, Left),
    Caret => ("^", Binary, BitwiseXor, Left),
    Amp => ("&", Binary, BitwiseAnd, Left),

    EqEq => ("==", Binary, Equality, Left),
    EqEqEq => ("===", Binary, Equality, Left),
    NotEq => ("!=", Binary, Equality, Left),
    NotEqEq => ("!==", Binary, Equality, Left),

    Lt => ("<", Binary, Relational, Left),
    Gt => (">", Binary, Relational, Left),
    LtEq => ("<=", Binary, Relational, Left),
    GtEq => (">=", Binary, Relational, Left),
    Instanceof => ("instanceof", Binary, Relational, Left),
    In => ("in", Binary, Relational, Left),

    Shl => ("<<", Binary, Shift, Left),
    Shr => (">>", Binary, Shift, Left),
    Shru => (">>>", Binary, Shift, Left),

    Plus => ("+", Binary, Additive, Left),
    Minus => ("-", Binary, Additive, Left),

    Star => ("*", Binary, Multiplicative, Left),
    Slash => ("/", Binary, Multiplicative, Left),
    Percent => ("%", Binary, Multiplicative, Left),

    StarStar => ("**", Binary, Exponentiation, Right),
}

/// Looks up the operator descriptor for a prefix-position unary token.
pub fn prefix_unary_operator(kind: TokenKind) -> Option<Operator> {
    let (symbol, op_kind) = match kind {
        TokenKind::Plus => ("+", OperatorType::Unary),
        TokenKind::Minus => ("-", OperatorType::Unary),
        TokenKind::Bang => ("!", OperatorType::Unary),
        TokenKind::Tilde => ("~", OperatorType::Unary),
        TokenKind::PlusPlus => ("++", OperatorType::Update),
        TokenKind::MinusMinus => ("--", OperatorType::Update),
        _ => return None,
    };
    Some(Operator {
        symbol,
        kind: op_kind,
        precedence: OperatorPrecedence::Unary,
        associativity: OperatorAssociativity::Right,
    })
}

/// Looks up the operator descriptor for a postfix-position unary token.
pub fn postfix_unary_operator(kind: TokenKind) -> Option<Operator> {
    let symbol = match kind {
        TokenKind::PlusPlus => "++",
        TokenKind::MinusMinus => "--",
        _ => return None,
    };
    Some(Operator {
        symbol,
        kind: OperatorType::Update,
        precedence: OperatorPrecedence::Postfix,
        associativity: OperatorAssociativity::None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponentiation_binds_tighter_than_multiplicative_and_is_right_assoc() {
        let star_star = binary_operator(TokenKind::StarStar).unwrap();
        let star = binary_operator(TokenKind::Star).unwrap();
        assert!(star_star.precedence > star.precedence);
        assert_eq!(star_star.associativity, OperatorAssociativity::Right);
    }

    #[test]
    fn assignment_is_lower_precedence_than_conditional() {
        let eq = binary_operator(TokenKind::Eq).unwrap();
        let question = binary_operator(TokenKind::Question).unwrap();
        assert!(eq.precedence < question.precedence);
    }

    #[test]
    fn non_operator_token_has_no_entry() {
        assert!(binary_operator(TokenKind::LBrace).is_none());
    }
}
