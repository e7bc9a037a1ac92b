//! Diagnostic identifiers and their message templates.
//!
//! Every diagnostic the front end can emit has a stable [`DiagID`], grouped
//! into ranges by the compiler phase that raises it. Downstream phases
//! (semantic analysis, code generation) are out of scope for this crate but
//! reserve their ranges here so ids never collide as the compiler grows.
//!
//! # Examples
//!
//! ```
//! use zomlc_util::diagnostic::{DiagID, DiagSeverity};
//!
//! assert_eq!(DiagID::LEX_UNEXPECTED_CHAR.severity(), DiagSeverity::Error);
//! assert!(DiagID::LEX_UNEXPECTED_CHAR.as_u32() >= 2000);
//! ```

use super::DiagSeverity;

/// Start of the "common" id range: diagnostics not specific to a single
/// phase (I/O failures, internal invariants).
pub const COMMON_BASE: u32 = 1000;
/// Start of the lexer/parser id range.
pub const PARSE_BASE: u32 = 2000;
/// Start of the semantic-analysis id range (reserved; unused by this crate).
pub const SEMANTIC_BASE: u32 = 3000;
/// Start of the code-generation id range (reserved; unused by this crate).
pub const CODEGEN_BASE: u32 = 4000;

/// A stable identifier for one kind of diagnostic message.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::DiagID;
///
/// let id = DiagID::PARSE_EXPECTED_TOKEN;
/// assert_eq!(id.message_template(), "expected {0}, found {1}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagID(u32);

macro_rules! diag_ids {
    ($($konst:ident = $num:expr, $severity:expr, $template:expr;)+) => {
        impl DiagID {
            $(
                #[doc = concat!("`", stringify!($konst), "`: ", $template)]
                pub const $konst: DiagID = DiagID($num);
            )+

            /// Look up the message template for this id. Arguments are
            /// substituted positionally by [`super::format_diagnostic_message`].
            pub const fn message_template(&self) -> &'static str {
                match self.0 {
                    $($num => $template,)+
                    _ => "unknown diagnostic",
                }
            }

            /// The default severity for this diagnostic id.
            pub const fn severity(&self) -> DiagSeverity {
                match self.0 {
                    $($num => $severity,)+
                    _ => DiagSeverity::Error,
                }
            }
        }
    };
}

diag_ids! {
    IO_FILE_NOT_FOUND = 1001, DiagSeverity::Fatal, "could not open source file '{0}'";
    IO_FILE_NOT_UTF8 = 1002, DiagSeverity::Fatal, "source file '{0}' is not valid UTF-8";
    INTERNAL_INVARIANT_VIOLATED = 1003, DiagSeverity::Fatal, "internal compiler error: {0}";
    IO_MODULE_NOT_FOUND = 1004, DiagSeverity::Error, "cannot find module '{0}'";
    IO_MODULE_CYCLE = 1005, DiagSeverity::Error, "dependency cycle detected while resolving module '{0}'";

    LEX_UNEXPECTED_CHAR = 2001, DiagSeverity::Error, "unexpected character '{0}'";
    LEX_UNTERMINATED_STRING = 2002, DiagSeverity::Error, "unterminated string literal";
    LEX_UNTERMINATED_BLOCK_COMMENT = 2003, DiagSeverity::Error, "unterminated block comment";
    LEX_INVALID_NUMERIC_LITERAL = 2004, DiagSeverity::Error, "invalid numeric literal '{0}'";
    LEX_INVALID_ESCAPE_SEQUENCE = 2005, DiagSeverity::Error, "unknown escape sequence '\\{0}'";
    LEX_NUMERIC_SEPARATOR_MISPLACED = 2006, DiagSeverity::Error, "numeric separator '_' must be between digits";

    PARSE_UNEXPECTED_TOKEN = 2101, DiagSeverity::Error, "unexpected token {0}";
    PARSE_EXPECTED_TOKEN = 2102, DiagSeverity::Error, "expected {0}, found {1}";
    PARSE_UNEXPECTED_EOF = 2103, DiagSeverity::Error, "unexpected end of file, expected {0}";
    PARSE_DUPLICATE_MODIFIER = 2104, DiagSeverity::Error, "duplicate modifier '{0}'";
    PARSE_INVALID_LHS_ASSIGNMENT = 2105, DiagSeverity::Error, "invalid left-hand side in assignment";
    PARSE_TRAILING_COMMA_NOT_ALLOWED = 2106, DiagSeverity::Error, "trailing comma not allowed here";
    PARSE_EMPTY_RAISES_CLAUSE = 2107, DiagSeverity::Error, "'raises' clause requires at least one error type";
    PARSE_RESERVED_WORD_AS_IDENTIFIER = 2108, DiagSeverity::Error, "'{0}' is a reserved word and cannot be used as an identifier";

    PARSE_UNUSED_IMPORT_REMARK = 2201, DiagSeverity::Remark, "import '{0}' does not appear to be used";
}


impl DiagID {
    /// Raw numeric value, useful for sorting or external reporting (e.g.
    /// `--explain <id>`-style tooling).
    #[inline]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DiagID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Z{:04}", self.0)
    }
}
