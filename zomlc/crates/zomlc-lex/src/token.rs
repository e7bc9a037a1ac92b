//! Token kinds produced by the lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it was
//! scanned from and the [`SourceRange`] it occupies. Keeping the raw text
//! around (rather than only a symbol) lets the parser report diagnostics
//! using exactly what the user typed, and lets numeric/string literals defer
//! their semantic value to whoever actually needs it.

use zomlc_util::span::SourceRange;
use zomlc_util::symbol::Symbol;

/// The kind of a single lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // --- Keywords (one variant per reserved word in the known-symbol table) ---
    Abstract,
    Accessor,
    Any,
    As,
    Asserts,
    Assert,
    Async,
    Await,
    Bigint,
    Boolean,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Constructor,
    Debugger,
    Declare,
    Default,
    Delete,
    Do,
    Else,
    Extends,
    Finally,
    From,
    Fun,
    Get,
    Global,
    Immediate,
    Implements,
    In,
    Infer,
    Instanceof,
    Interface,
    Intrinsic,
    Is,
    Keyof,
    Let,
    Match,
    Module,
    Mutable,
    Namespace,
    Never,
    New,
    Number,
    Object,
    Of,
    Optional,
    Out,
    Override,
    Package,
    Private,
    Protected,
    Public,
    Readonly,
    Require,
    Satisfies,
    Set,
    Static,
    Super,
    Switch,
    Symbol,
    This,
    Throw,
    Try,
    Typeof,
    Undefined,
    Unique,
    Using,
    Var,
    Void,
    When,
    With,
    Yield,
    If,
    For,
    While,
    Return,
    True,
    False,
    Null,
    Enum,
    Struct,
    Alias,
    Error,
    Raises,
    Import,
    Export,

    // --- Identifiers and literals ---
    /// An identifier that is not one of the reserved words above.
    Ident,
    /// An integer literal, e.g. `42`, `0x2a`, `0b101010`, `1_000`.
    IntegerLiteral,
    /// A floating-point literal, e.g. `3.14`, `1.`, `2e10`.
    FloatLiteral,
    /// A plain (non-template) string literal, e.g. `"hello"`.
    StringLiteral,
    /// The literal text of a template string between interpolations, e.g.
    /// the `` `hello ` `` in `` `hello ${name}!` ``.
    TemplateStringFragment,
    /// The `` ` `` or `` } `` that opens a template-string fragment.
    TemplateStringStart,
    /// The `${` that opens an interpolated expression inside a template.
    TemplateInterpolationStart,
    /// The `}` that closes an interpolated expression and resumes template
    /// text scanning.
    TemplateInterpolationEnd,
    /// The closing `` ` `` of a template string.
    TemplateStringEnd,

    // --- Punctuators and operators ---
    Arrow,       // ->
    FatArrow,    // =>
    Colon,       // :
    Dot,         // .
    DotDotDot,   // ...
    Lt,          // <
    Gt,          // >
    LtEq,        // <=
    GtEq,        // >=
    EqEq,        // ==
    EqEqEq,      // ===
    NotEq,       // !=
    NotEqEq,     // !==
    Plus,        // +
    Minus,       // -
    Star,        // *
    Slash,       // /
    Percent,     // %
    StarStar,    // **
    PlusPlus,    // ++
    MinusMinus,  // --
    Shl,         // <<
    Shr,         // >>
    Shru,        // >>>
    Amp,         // &
    Pipe,        // |
    Caret,       // ^
    Tilde,       // ~
    AmpAmp,      // &&
    PipePipe,    // ||
    QuestionQuestion, // ??
    QuestionDot, // ?.
    Eq,          // =
    PlusEq,      // +=
    MinusEq,     // -=
    StarEq,      // *=
    SlashEq,     // /=
    PercentEq,   // %=
    StarStarEq,  // **=
    ShlEq,       // <<=
    ShrEq,       // >>=
    ShruEq,      // >>>=
    AmpEq,       // &=
    PipeEq,      // |=
    CaretEq,     // ^=
    AmpAmpEq,    // &&=
    PipePipeEq,  // ||=
    QuestionQuestionEq, // ??=
    At,          // @
    Hash,        // #
    Backtick,    // `
    Question,    // ?
    Bang,        // !

    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
    RBracket,  // ]
    Semi,      // ;
    Comma,     // ,

    /// A retained comment token, only produced when the lexer's comment
    /// retention mode asks for comments to come back as tokens.
    Comment,
    /// End of input.
    Eof,
    /// A character (or run of characters) that could not be tokenized.
    Unknown,
}

impl TokenKind {
    /// Look up the keyword token kind for an exactly-matched identifier
    /// string, if any. Returns `None` for ordinary identifiers.
    pub fn keyword_from_text(text: &str) -> Option<TokenKind> {
        use TokenKind::*;
        Some(match text {
            "abstract" => Abstract,
            "accessor" => Accessor,
            "any" => Any,
            "as" => As,
            "asserts" => Asserts,
            "assert" => Assert,
            "async" => Async,
            "await" => Await,
            "bigint" => Bigint,
            "boolean" => Boolean,
            "break" => Break,
            "case" => Case,
            "catch" => Catch,
            "class" => Class,
            "const" => Const,
            "continue" => Continue,
            "constructor" => Constructor,
            "debugger" => Debugger,
            "declare" => Declare,
            "default" => Default,
            "delete" => Delete,
            "do" => Do,
            "else" => Else,
            "extends" => Extends,
            "finally" => Finally,
            "from" => From,
            "fun" => Fun,
            "get" => Get,
            "global" => Global,
            "immediate" => Immediate,
            "implements" => Implements,
            "in" => In,
            "infer" => Infer,
            "instanceof" => Instanceof,
            "interface" => Interface,
            "intrinsic" => Intrinsic,
            "is" => Is,
            "keyof" => Keyof,
            "let" => Let,
            "match" => Match,
            "module" => Module,
            "mutable" => Mutable,
            "namespace" => Namespace,
            "never" => Never,
            "new" => New,
            "number" => Number,
            "object" => Object,
            "of" => Of,
            "optional" => Optional,
            "out" => Out,
            "override" => Override,
            "package" => Package,
            "private" => Private,
            "protected" => Protected,
            "public" => Public,
            "readonly" => Readonly,
            "require" => Require,
            "satisfies" => Satisfies,
            "set" => Set,
            "static" => Static,
            "super" => Super,
            "switch" => Switch,
            "symbol" => Symbol,
            "this" => This,
            "throw" => Throw,
            "try" => Try,
            "typeof" => Typeof,
            "undefined" => Undefined,
            "unique" => Unique,
            "using" => Using,
            "var" => Var,
            "void" => Void,
            "when" => When,
            "with" => With,
            "yield" => Yield,
            "if" => If,
            "for" => For,
            "while" => While,
            "return" => Return,
            "true" => True,
            "false" => False,
            "null" => Null,
            "enum" => Enum,
            "struct" => Struct,
            "alias" => Alias,
            "error" => Error,
            "raises" => Raises,
            "import" => Import,
            "export" => Export,
            _ => return None,
        })
    }

    /// Returns true for punctuation that never itself opens a longer token
    /// (used by the parser to tell "real" operators from grouping marks).
    pub fn is_grouping(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Semi
                | TokenKind::Comma
        )
    }
}

/// A single lexical token: its kind, the exact source slice it spans, and
/// its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: SourceRange,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, range: SourceRange) -> Self {
        Self { kind, text, range }
    }

    /// Intern this token's text as a symbol. Cheap for keywords (hits the
    /// pre-reserved table), hashes for everything else.
    pub fn as_symbol(&self) -> Symbol {
        Symbol::intern_known(self.text)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
