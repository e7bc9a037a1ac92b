//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same string appears multiple times in the compiler, which matters
//! most for the lexer's keyword table and the parser's repeated identifier lookups.
//!
//! # Overview
//!
//! The symbol interning system provides:
//!
//! - **Memory efficiency**: Each unique string is stored only once
//! - **Fast comparison**: Symbol comparison is O(1) via index comparison
//! - **Thread safety**: Safe to use across multiple threads concurrently
//! - **Stable handles**: Symbols remain valid for the program lifetime
//!
//! # Thread Safety
//!
//! The symbol interner is fully thread-safe (`Sync + Send`). Multiple threads can
//! intern strings concurrently without blocking each other, thanks to DashMap's
//! lock-free design — this matters because the driver parses independent buffers
//! in parallel.
//!
//! # Examples
//!
//! ```
//! use zomlc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);
//! assert_ne!(s1, s3);
//! ```
//!
//! Using known keywords:
//!
//! ```
//! use zomlc_util::symbol::{Symbol, KW_FUN, KW_VAR};
//!
//! assert_eq!(KW_FUN.as_str(), "fun");
//! assert_eq!(KW_VAR.as_str(), "var");
//! assert!(KW_FUN.is_known());
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling.
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values.
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity). Returns 0.0 if capacity is 0.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Calculate the hit rate (hits / (hits + misses)). Returns 0.0 if empty.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Symbol - An interned string identifier.
///
/// A Symbol is a compact (4-byte) handle to a string stored in a global string
/// table. Source identifiers, keyword texts, and interpolated template-string
/// fragments are all interned through this type.
///
/// # Examples
///
/// ```
/// use zomlc_util::symbol::Symbol;
///
/// let keyword = Symbol::intern("fun");
/// let name = Symbol::intern("main");
///
/// assert_eq!(keyword.as_str(), "fun");
/// assert_eq!(name.as_str(), "main");
/// assert_eq!(keyword, Symbol::intern("fun"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

/// Reserved symbol indices for known symbols (keywords and literal words).
///
/// All symbols with index < this value are pre-defined at startup and
/// correspond to ZomLang keywords or the `true`/`false`/`null`/`undefined`
/// literal words.
const RESERVED_SYMBOLS_END: u32 = 128;

macro_rules! known_symbols {
    ($($konst:ident => $idx:expr => $text:expr),+ $(,)?) => {
        $(
            #[doc = concat!("Known symbol for `", $text, "`")]
            pub const $konst: Symbol = Symbol { index: $idx };
        )+

        /// All known keyword/literal-word strings, indexed exactly as their constants.
        pub(crate) const KNOWN_SYMBOL_STRINGS: &[&str] = &[$($text),+];

        impl Symbol {
            /// Intern a known ZomLang keyword or literal word, returning its
            /// predefined symbol without hashing. Falls back to ordinary
            /// interning for anything not in the keyword table.
            ///
            /// # Examples
            ///
            /// ```
            /// use zomlc_util::symbol::{Symbol, KW_FUN};
            ///
            /// assert_eq!(Symbol::intern_known("fun"), KW_FUN);
            /// assert!(!Symbol::intern_known("not_a_keyword").is_known());
            /// ```
            pub fn intern_known(string: &str) -> Self {
                match string {
                    $($text => $konst,)+
                    _ => Self::intern(string),
                }
            }
        }
    };
}

known_symbols! {
    KW_ABSTRACT => 0 => "abstract",
    KW_ACCESSOR => 1 => "accessor",
    KW_ANY => 2 => "any",
    KW_ASSERTS => 3 => "asserts",
    KW_ASSERT => 4 => "assert",
    KW_ASYNC => 5 => "async",
    KW_AWAIT => 6 => "await",
    KW_BIGINT => 7 => "bigint",
    KW_BOOLEAN => 8 => "boolean",
    KW_BREAK => 9 => "break",
    KW_CASE => 10 => "case",
    KW_CATCH => 11 => "catch",
    KW_CLASS => 12 => "class",
    KW_CONTINUE => 13 => "continue",
    KW_CONSTRUCTOR => 14 => "constructor",
    KW_DEBUGGER => 15 => "debugger",
    KW_DECLARE => 16 => "declare",
    KW_DEFAULT => 17 => "default",
    KW_DELETE => 18 => "delete",
    KW_DO => 19 => "do",
    KW_ELSE => 20 => "else",
    KW_EXTENDS => 21 => "extends",
    KW_FINALLY => 22 => "finally",
    KW_FROM => 23 => "from",
    KW_FUN => 24 => "fun",
    KW_GET => 25 => "get",
    KW_GLOBAL => 26 => "global",
    KW_IMMEDIATE => 27 => "immediate",
    KW_IMPLEMENTS => 28 => "implements",
    KW_IN => 29 => "in",
    KW_INFER => 30 => "infer",
    KW_INSTANCEOF => 31 => "instanceof",
    KW_INTERFACE => 32 => "interface",
    KW_INTRINSIC => 33 => "intrinsic",
    KW_IS => 34 => "is",
    KW_KEYOF => 35 => "keyof",
    KW_MATCH => 36 => "match",
    KW_MODULE => 37 => "module",
    KW_MUTABLE => 38 => "mutable",
    KW_NAMESPACE => 39 => "namespace",
    KW_NEVER => 40 => "never",
    KW_NEW => 41 => "new",
    KW_NUMBER => 42 => "number",
    KW_OBJECT => 43 => "object",
    KW_OF => 44 => "of",
    KW_OPTIONAL => 45 => "optional",
    KW_OUT => 46 => "out",
    KW_OVERRIDE => 47 => "override",
    KW_PACKAGE => 48 => "package",
    KW_PRIVATE => 49 => "private",
    KW_PROTECTED => 50 => "protected",
    KW_PUBLIC => 51 => "public",
    KW_READONLY => 52 => "readonly",
    KW_REQUIRE => 53 => "require",
    KW_SATISFIES => 54 => "satisfies",
    KW_SET => 55 => "set",
    KW_STATIC => 56 => "static",
    KW_SUPER => 57 => "super",
    KW_SWITCH => 58 => "switch",
    KW_SYMBOL => 59 => "symbol",
    KW_THIS => 60 => "this",
    KW_THROW => 61 => "throw",
    KW_TRY => 62 => "try",
    KW_TYPEOF => 63 => "typeof",
    KW_UNDEFINED => 64 => "undefined",
    KW_UNIQUE => 65 => "unique",
    KW_USING => 66 => "using",
    KW_VAR => 67 => "var",
    KW_VOID => 68 => "void",
    KW_WITH => 69 => "with",
    KW_YIELD => 70 => "yield",
    KW_IF => 71 => "if",
    KW_FOR => 72 => "for",
    KW_WHILE => 73 => "while",
    KW_RETURN => 74 => "return",
    KW_TRUE => 75 => "true",
    KW_FALSE => 76 => "false",
    KW_NULL => 77 => "null",
    KW_ENUM => 78 => "enum",
    KW_STRUCT => 79 => "struct",
    KW_ALIAS => 80 => "alias",
    KW_ERROR => 81 => "error",
    KW_RAISES => 82 => "raises",
    KW_IMPORT => 83 => "import",
    KW_EXPORT => 84 => "export",
}

impl Symbol {
    /// The maximum index value for a symbol.
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use zomlc_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("fun");
    /// assert_eq!(Symbol::intern("fun"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use zomlc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Compare the symbol's string with a `&str` without allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use zomlc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert!(sym.eq_str("hello"));
    /// assert!(!sym.eq_str("world"));
    /// ```
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (a pre-interned keyword or
    /// literal word).
    ///
    /// # Examples
    ///
    /// ```
    /// use zomlc_util::symbol::{Symbol, KW_FUN};
    ///
    /// assert!(KW_FUN.is_known());
    /// assert!(!Symbol::intern("my_variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value. Useful for serialization or debugging.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Get statistics about the string interner for profiling.
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static_assertions::assert_impl_all!(Symbol: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_symbol_intern() {
        let s1 = Symbol::intern("hello");
        let s2 = Symbol::intern("hello");
        let s3 = Symbol::intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.as_str(), "hello");
        assert_eq!(s3.as_str(), "world");
    }

    #[test]
    fn test_symbol_display() {
        let s = Symbol::intern("test");
        assert_eq!(format!("{}", s), "test");
        assert_eq!(format!("{:?}", s), "Symbol(test)");
    }

    #[test]
    fn test_known_keywords() {
        assert_eq!(KW_FUN.as_str(), "fun");
        assert_eq!(KW_VAR.as_str(), "var");
        assert_eq!(KW_INTERFACE.as_str(), "interface");
        assert_eq!(KW_RAISES.as_str(), "raises");
        assert!(KW_FUN.is_known());
        assert!(KW_ELSE.is_known());
    }

    #[test]
    fn test_intern_known() {
        assert_eq!(Symbol::intern_known("fun"), KW_FUN);
        let unknown = Symbol::intern_known("not_a_keyword");
        assert_eq!(unknown.as_str(), "not_a_keyword");
        assert!(!unknown.is_known());
    }

    #[test]
    fn test_concurrent_intern() {
        let handles: Vec<_> = (0..10)
            .map(|i| thread::spawn(move || Symbol::intern(&format!("thread_{}", i))))
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for i in 0..results.len() {
            for j in (i + 1)..results.len() {
                assert_ne!(results[i], results[j]);
            }
        }
    }

    #[test]
    fn test_unicode_strings() {
        for s in ["你好", "世界", "🦀"] {
            assert_eq!(Symbol::intern(s).as_str(), s);
        }
    }
}
