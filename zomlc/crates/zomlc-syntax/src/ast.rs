//! AST node definitions for ZomLang source files.
//!
//! Every node carries a [`SourceRange`] spanning exactly its own syntax, not
//! including leading/trailing trivia, and is tagged with a [`SyntaxKind`] so
//! callers can switch on node identity without downcasting.

use zomlc_util::span::SourceRange;
use zomlc_util::symbol::Symbol;

use crate::operator::{OperatorAssociativity, OperatorPrecedence, OperatorType};

/// Discriminator for every concrete node kind in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Identifier,
    ParenthesizedExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    NewExpression,
    CallExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    AssignmentExpression,
    ConditionalExpression,
    OptionalExpression,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    NullLiteral,
    AsExpression,
    ForcedAsExpression,
    ConditionalAsExpression,
    VoidExpression,
    TypeOfExpression,
    AwaitExpression,
    FunctionExpression,
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    TemplateExpression,

    TypeParameter,
    BindingElement,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    BlockStatement,
    ExpressionStatement,
    IfStatement,
    WhileStatement,
    ReturnStatement,
    EmptyStatement,
    ForStatement,
    BreakStatement,
    ContinueStatement,
    MatchStatement,
    DebuggerStatement,
    InterfaceDeclaration,
    StructDeclaration,
    EnumDeclaration,
    ErrorDeclaration,
    AliasDeclaration,

    TypeReference,
    ArrayType,
    UnionType,
    IntersectionType,
    ParenthesizedType,
    PredefinedType,
    ObjectType,
    TupleType,
    ReturnType,
    FunctionType,
    OptionalType,
    TypeQuery,

    SourceFile,
    ImplementationModule,
    ImportDeclaration,
    ExportDeclaration,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Expression {
    // PrimaryExpression leaves
    Identifier(Identifier),
    Parenthesized(ParenthesizedExpression),
    StringLiteral(StringLiteral),
    IntegerLiteral(IntegerLiteral),
    FloatLiteral(FloatLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    Function(FunctionExpression),
    ArrayLiteral(ArrayLiteralExpression),
    ObjectLiteral(ObjectLiteralExpression),
    Template(TemplateExpression),

    // MemberExpression
    PropertyAccess(PropertyAccessExpression),
    ElementAccess(ElementAccessExpression),

    // LeftHandSideExpression
    New(NewExpression),
    Call(CallExpression),

    // UpdateExpression
    PrefixUnary(PrefixUnaryExpression),
    PostfixUnary(PostfixUnaryExpression),

    // CastExpression
    As(AsExpression),
    ForcedAs(ForcedAsExpression),
    ConditionalAs(ConditionalAsExpression),

    // other UnaryExpression forms
    Void(VoidExpression),
    TypeOf(TypeOfExpression),
    Await(AwaitExpression),

    // top-level Expression forms
    Binary(BinaryExpression),
    Assignment(AssignmentExpression),
    Conditional(ConditionalExpression),
    Optional(OptionalExpression),
}

impl Expression {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Expression::Identifier(_) => SyntaxKind::Identifier,
            Expression::Parenthesized(_) => SyntaxKind::ParenthesizedExpression,
            Expression::StringLiteral(_) => SyntaxKind::StringLiteral,
            Expression::IntegerLiteral(_) => SyntaxKind::IntegerLiteral,
            Expression::FloatLiteral(_) => SyntaxKind::FloatLiteral,
            Expression::BooleanLiteral(_) => SyntaxKind::BooleanLiteral,
            Expression::NullLiteral(_) => SyntaxKind::NullLiteral,
            Expression::Function(_) => SyntaxKind::FunctionExpression,
            Expression::ArrayLiteral(_) => SyntaxKind::ArrayLiteralExpression,
            Expression::ObjectLiteral(_) => SyntaxKind::ObjectLiteralExpression,
            Expression::Template(_) => SyntaxKind::TemplateExpression,
            Expression::PropertyAccess(_) => SyntaxKind::PropertyAccessExpression,
            Expression::ElementAccess(_) => SyntaxKind::ElementAccessExpression,
            Expression::New(_) => SyntaxKind::NewExpression,
            Expression::Call(_) => SyntaxKind::CallExpression,
            Expression::PrefixUnary(_) => SyntaxKind::PrefixUnaryExpression,
            Expression::PostfixUnary(_) => SyntaxKind::PostfixUnaryExpression,
            Expression::As(_) => SyntaxKind::AsExpression,
            Expression::ForcedAs(_) => SyntaxKind::ForcedAsExpression,
            Expression::ConditionalAs(_) => SyntaxKind::ConditionalAsExpression,
            Expression::Void(_) => SyntaxKind::VoidExpression,
            Expression::TypeOf(_) => SyntaxKind::TypeOfExpression,
            Expression::Await(_) => SyntaxKind::AwaitExpression,
            Expression::Binary(_) => SyntaxKind::BinaryExpression,
            Expression::Assignment(_) => SyntaxKind::AssignmentExpression,
            Expression::Conditional(_) => SyntaxKind::ConditionalExpression,
            Expression::Optional(_) => SyntaxKind::OptionalExpression,
        }
    }

    pub fn range(&self) -> SourceRange {
        match self {
            Expression::Identifier(n) => n.range,
            Expression::Parenthesized(n) => n.range,
            Expression::StringLiteral(n) => n.range,
            Expression::IntegerLiteral(n) => n.range,
            Expression::FloatLiteral(n) => n.range,
            Expression::BooleanLiteral(n) => n.range,
            Expression::NullLiteral(n) => n.range,
            Expression::Function(n) => n.range,
            Expression::ArrayLiteral(n) => n.range,
            Expression::ObjectLiteral(n) => n.range,
            Expression::Template(n) => n.range,
            Expression::PropertyAccess(n) => n.range,
            Expression::ElementAccess(n) => n.range,
            Expression::New(n) => n.range,
            Expression::Call(n) => n.range,
            Expression::PrefixUnary(n) => n.range,
            Expression::PostfixUnary(n) => n.range,
            Expression::As(n) => n.range,
            Expression::ForcedAs(n) => n.range,
            Expression::ConditionalAs(n) => n.range,
            Expression::Void(n) => n.range,
            Expression::TypeOf(n) => n.range,
            Expression::Await(n) => n.range,
            Expression::Binary(n) => n.range,
            Expression::Assignment(n) => n.range,
            Expression::Conditional(n) => n.range,
            Expression::Optional(n) => n.range,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Identifier {
    pub name: Symbol,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub value: Symbol,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub value: i64,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct FloatLiteral {
    pub value: f64,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub value: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct NullLiteral {
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct FunctionExpression {
    pub name: Option<Identifier>,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<BindingElement>,
    pub return_type: Option<ReturnType>,
    pub body: BlockStatement,
    pub is_async: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ArrayLiteralExpression {
    pub elements: Vec<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ObjectLiteralExpression {
    pub properties: Vec<ObjectProperty>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ObjectProperty {
    pub name: Symbol,
    pub value: Expression,
    pub is_shorthand: bool,
}

/// A backtick-delimited template literal: a sequence of literal text spans
/// interleaved with interpolated expressions.
#[derive(Debug, Clone)]
pub struct TemplateExpression {
    pub quasis: Vec<Symbol>,
    pub expressions: Vec<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct PropertyAccessExpression {
    pub expression: Box<Expression>,
    pub name: Identifier,
    pub is_optional: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ElementAccessExpression {
    pub expression: Box<Expression>,
    pub argument: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub type_arguments: Option<Vec<Type>>,
    pub arguments: Vec<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub type_arguments: Option<Vec<Type>>,
    pub arguments: Vec<Expression>,
    pub is_optional: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    LogicalNot,
    BitwiseNot,
    Increment,
    Decrement,
}

#[derive(Debug, Clone)]
pub struct PrefixUnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct PostfixUnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

/// The `as T` form: a non-throwing, best-effort type assertion.
#[derive(Debug, Clone)]
pub struct AsExpression {
    pub expression: Box<Expression>,
    pub target_type: Type,
    pub range: SourceRange,
}

/// The `as! T` form: an assertion that panics at runtime if it does not hold.
#[derive(Debug, Clone)]
pub struct ForcedAsExpression {
    pub expression: Box<Expression>,
    pub target_type: Type,
    pub range: SourceRange,
}

/// The `as? T` form: yields `T | null`.
#[derive(Debug, Clone)]
pub struct ConditionalAsExpression {
    pub expression: Box<Expression>,
    pub target_type: Type,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct VoidExpression {
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct TypeOfExpression {
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct AwaitExpression {
    pub operand: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// The comma sequencing operator: `a, b` evaluates both and yields `b`.
    Comma,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    Equal,
    StrictEqual,
    NotEqual,
    StrictNotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    LogicalAnd,
    LogicalOr,
    NullishCoalescing,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    Instanceof,
    In,
}

#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    ExponentAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    ShiftRightUnsignedAssign,
    LogicalAndAssign,
    LogicalOrAssign,
    NullishCoalescingAssign,
}

#[derive(Debug, Clone)]
pub struct AssignmentExpression {
    pub target: Box<Expression>,
    pub operator: AssignmentOperator,
    pub value: Box<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpression {
    pub condition: Box<Expression>,
    pub when_true: Box<Expression>,
    pub when_false: Box<Expression>,
    pub range: SourceRange,
}

/// An optional-chaining suffix expression, e.g. `a?.b`, distinct from the
/// plain `is_optional` flag on individual member/call links so a whole chain
/// can short-circuit to `null` at the first optional link.
#[derive(Debug, Clone)]
pub struct OptionalExpression {
    pub expression: Box<Expression>,
    pub range: SourceRange,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Statement {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Struct(StructDeclaration),
    Enum(EnumDeclaration),
    Error(ErrorDeclaration),
    Alias(AliasDeclaration),
    Block(BlockStatement),
    Expression(ExpressionStatement),
    If(IfStatement),
    While(WhileStatement),
    Return(ReturnStatement),
    Empty(EmptyStatement),
    For(ForStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Match(MatchStatement),
    Debugger(DebuggerStatement),
}

impl Statement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Statement::Variable(_) => SyntaxKind::VariableDeclaration,
            Statement::Function(_) => SyntaxKind::FunctionDeclaration,
            Statement::Class(_) => SyntaxKind::ClassDeclaration,
            Statement::Interface(_) => SyntaxKind::InterfaceDeclaration,
            Statement::Struct(_) => SyntaxKind::StructDeclaration,
            Statement::Enum(_) => SyntaxKind::EnumDeclaration,
            Statement::Error(_) => SyntaxKind::ErrorDeclaration,
            Statement::Alias(_) => SyntaxKind::AliasDeclaration,
            Statement::Block(_) => SyntaxKind::BlockStatement,
            Statement::Expression(_) => SyntaxKind::ExpressionStatement,
            Statement::If(_) => SyntaxKind::IfStatement,
            Statement::While(_) => SyntaxKind::WhileStatement,
            Statement::Return(_) => SyntaxKind::ReturnStatement,
            Statement::Empty(_) => SyntaxKind::EmptyStatement,
            Statement::For(_) => SyntaxKind::ForStatement,
            Statement::Break(_) => SyntaxKind::BreakStatement,
            Statement::Continue(_) => SyntaxKind::ContinueStatement,
            Statement::Match(_) => SyntaxKind::MatchStatement,
            Statement::Debugger(_) => SyntaxKind::DebuggerStatement,
        }
    }

    pub fn range(&self) -> SourceRange {
        match self {
            Statement::Variable(n) => n.range,
            Statement::Function(n) => n.range,
            Statement::Class(n) => n.range,
            Statement::Interface(n) => n.range,
            Statement::Struct(n) => n.range,
            Statement::Enum(n) => n.range,
            Statement::Error(n) => n.range,
            Statement::Alias(n) => n.range,
            Statement::Block(n) => n.range,
            Statement::Expression(n) => n.range,
            Statement::If(n) => n.range,
            Statement::While(n) => n.range,
            Statement::Return(n) => n.range,
            Statement::Empty(n) => n.range,
            Statement::For(n) => n.range,
            Statement::Break(n) => n.range,
            Statement::Continue(n) => n.range,
            Statement::Match(n) => n.range,
            Statement::Debugger(n) => n.range,
        }
    }
}

/// Declaration keyword used to introduce a binding, mirroring the original
/// surface syntax (`var` is permitted but discouraged at the semantic layer,
/// out of scope here).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone)]
pub struct TypeParameter {
    pub name: Identifier,
    pub constraint: Option<Type>,
    pub default: Option<Type>,
    pub range: SourceRange,
}

/// A single name (or destructuring pattern) bound by a parameter list or a
/// `let`/`const` declaration.
#[derive(Debug, Clone)]
pub struct BindingElement {
    pub pattern: BindingPattern,
    pub type_annotation: Option<Type>,
    pub initializer: Option<Expression>,
    pub is_optional: bool,
    pub is_rest: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub enum BindingPattern {
    Identifier(Identifier),
    Array(Vec<BindingElement>),
    Object(Vec<BindingElement>),
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<BindingElement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<BindingElement>,
    pub return_type: Option<ReturnType>,
    pub body: Option<BlockStatement>,
    pub is_async: bool,
    pub is_exported: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ClassMember {
    pub name: Symbol,
    pub type_annotation: Option<Type>,
    pub is_static: bool,
    pub is_readonly: bool,
    pub method_body: Option<FunctionExpression>,
}

#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Option<Type>,
    pub implements: Vec<Type>,
    pub members: Vec<ClassMember>,
    pub is_exported: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct InterfaceMember {
    pub name: Symbol,
    pub type_annotation: Type,
    pub is_optional: bool,
}

#[derive(Debug, Clone)]
pub struct InterfaceDeclaration {
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Vec<Type>,
    pub members: Vec<InterfaceMember>,
    pub is_exported: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct StructField {
    pub name: Symbol,
    pub type_annotation: Type,
    pub is_optional: bool,
}

#[derive(Debug, Clone)]
pub struct StructDeclaration {
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub fields: Vec<StructField>,
    pub is_exported: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub enum EnumMemberData {
    Unit,
    Tuple(Vec<Type>),
}

#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: Symbol,
    pub data: EnumMemberData,
}

#[derive(Debug, Clone)]
pub struct EnumDeclaration {
    pub name: Identifier,
    pub members: Vec<EnumMember>,
    pub is_exported: bool,
    pub range: SourceRange,
}

/// A named error kind declared with `error Name { fields }`, usable in a
/// function's `raises` clause.
#[derive(Debug, Clone)]
pub struct ErrorDeclaration {
    pub name: Identifier,
    pub fields: Vec<StructField>,
    pub is_exported: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct AliasDeclaration {
    pub name: Identifier,
    pub type_parameters: Vec<TypeParameter>,
    pub aliased_type: Type,
    pub is_exported: bool,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_statement: Box<Statement>,
    pub else_statement: Option<Box<Statement>>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct EmptyStatement {
    pub range: SourceRange,
}

/// Covers both `for (init; cond; update)` and `for (binding in/of iterable)`
/// forms; the latter leaves `condition`/`update` empty and populates
/// `of_binding`.
#[derive(Debug, Clone)]
pub struct ForStatement {
    pub initializer: Option<Box<Statement>>,
    pub condition: Option<Expression>,
    pub update: Option<Expression>,
    pub of_binding: Option<BindingElement>,
    pub of_expression: Option<Expression>,
    pub body: Box<Statement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct BreakStatement {
    pub label: Option<Identifier>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
    pub range: SourceRange,
}

/// A single arm of a `match` statement; `pattern` reuses [`BindingPattern`]
/// for destructuring arms and falls back to a literal/identifier match via
/// `guard` for value comparisons.
#[derive(Debug, Clone)]
pub struct MatchArm {
    pub pattern: Option<BindingPattern>,
    pub guard: Option<Expression>,
    pub is_default: bool,
    pub body: BlockStatement,
}

#[derive(Debug, Clone)]
pub struct MatchStatement {
    pub scrutinee: Expression,
    pub arms: Vec<MatchArm>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct DebuggerStatement {
    pub range: SourceRange,
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Type {
    Reference(TypeReference),
    Array(ArrayType),
    Union(UnionType),
    Intersection(IntersectionType),
    Parenthesized(ParenthesizedType),
    Predefined(PredefinedType),
    Object(ObjectType),
    Tuple(TupleType),
    Function(FunctionType),
    Optional(OptionalType),
    Query(TypeQuery),
}

impl Type {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Type::Reference(_) => SyntaxKind::TypeReference,
            Type::Array(_) => SyntaxKind::ArrayType,
            Type::Union(_) => SyntaxKind::UnionType,
            Type::Intersection(_) => SyntaxKind::IntersectionType,
            Type::Parenthesized(_) => SyntaxKind::ParenthesizedType,
            Type::Predefined(_) => SyntaxKind::PredefinedType,
            Type::Object(_) => SyntaxKind::ObjectType,
            Type::Tuple(_) => SyntaxKind::TupleType,
            Type::Function(_) => SyntaxKind::FunctionType,
            Type::Optional(_) => SyntaxKind::OptionalType,
            Type::Query(_) => SyntaxKind::TypeQuery,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypeReference {
    pub name: Symbol,
    pub type_arguments: Vec<Type>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ArrayType {
    pub element_type: Box<Type>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct UnionType {
    pub members: Vec<Type>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct IntersectionType {
    pub members: Vec<Type>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ParenthesizedType {
    pub inner: Box<Type>,
    pub range: SourceRange,
}

/// A built-in named type: `number`, `boolean`, `string`, `any`, `void`,
/// `never`, `undefined`, `object`, `bigint`, `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedTypeKeyword {
    Number,
    Boolean,
    String,
    Any,
    Void,
    Never,
    Undefined,
    Object,
    Bigint,
    Symbol,
}

#[derive(Debug, Clone)]
pub struct PredefinedType {
    pub keyword: PredefinedTypeKeyword,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ObjectTypeMember {
    pub name: Symbol,
    pub type_annotation: Type,
    pub is_optional: bool,
    pub is_readonly: bool,
}

#[derive(Debug, Clone)]
pub struct ObjectType {
    pub members: Vec<ObjectTypeMember>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct TupleType {
    pub elements: Vec<Type>,
    pub range: SourceRange,
}

/// A function's return type together with an optional `raises E` error
/// type; plain `-> T` leaves `error_type` as `None`.
#[derive(Debug, Clone)]
pub struct ReturnType {
    pub type_: Box<Type>,
    pub error_type: Option<Box<Type>>,
}

#[derive(Debug, Clone)]
pub struct FunctionTypeParameter {
    pub name: Option<Symbol>,
    pub type_annotation: Type,
}

#[derive(Debug, Clone)]
pub struct FunctionType {
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<FunctionTypeParameter>,
    pub return_type: Box<ReturnType>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct OptionalType {
    pub inner: Box<Type>,
    pub range: SourceRange,
}

/// The `typeof expr` type-position query.
#[derive(Debug, Clone)]
pub struct TypeQuery {
    pub expression_name: Symbol,
    pub range: SourceRange,
}

// ---------------------------------------------------------------------------
// Module-level nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ModulePath(pub String);

#[derive(Debug, Clone)]
pub struct ImportDeclaration {
    pub path: ModulePath,
    pub bindings: Vec<Identifier>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub struct ExportDeclaration {
    pub declaration: Box<Statement>,
    pub range: SourceRange,
}

#[derive(Debug, Clone)]
pub enum ImplementationModuleElement {
    Import(ImportDeclaration),
    Export(ExportDeclaration),
    Statement(Statement),
}

#[derive(Debug, Clone)]
pub struct ImplementationModule {
    pub elements: Vec<ImplementationModuleElement>,
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub statements: Vec<Statement>,
    pub module: Option<ImplementationModule>,
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

pub mod factory {
    use super::*;

    pub fn create_source_file(statements: Vec<Statement>, module: Option<ImplementationModule>) -> SourceFile {
        SourceFile { statements, module }
    }

    pub fn create_node_list<T>(items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().collect()
    }
}

// Re-export operator metadata alongside the node definitions so callers can
// `use zomlc_syntax::ast::*` and get both in one shot.
pub use crate::operator::{Operator, OperatorAssociativity as Associativity};
