//! zomlc-util - Core Utilities and Foundation Types
//!
//! This crate provides the fundamental types shared by every stage of the
//! ZomLang compiler front end: symbol interning, source location tracking,
//! and the diagnostic engine. Everything above it (the lexer, the syntax
//! crate, the driver) builds on top of these types rather than rolling its
//! own.
//!
//! # String interning
//!
//! Source identifiers, keyword spellings, and string-literal fragments are
//! repeated constantly while lexing and parsing. Interning them through
//! [`symbol::Symbol`] turns string comparison into a single `u32` comparison
//! and means each distinct spelling is stored exactly once for the lifetime
//! of the process.
//!
//! Properties of the interning function `I: Strings -> Symbol`:
//! - `I(s1) == I(s2)` iff `s1 == s2` (injective on distinct strings)
//! - comparison and hashing on the result are O(1)
//!
//! The table is global and thread-safe (backed by `DashMap`), since the
//! driver lexes and parses independent source buffers in parallel.
//!
//! # Source locations
//!
//! [`span`] models buffers, byte-offset ranges, and the line/column
//! projection used when rendering diagnostics, including the virtual-file
//! overlays used for synthesized or `#line`-remapped spans.
//!
//! # Diagnostics
//!
//! [`diagnostic`] implements the compiler's error-reporting pipeline: typed
//! diagnostic IDs partitioned by compiler phase, a severity scale from
//! `Note` to `Fatal`, and a scoped in-flight builder that emits on drop.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use index_vec::{Idx, IndexVec};
pub use rustc_hash::{FxHashMap, FxHashSet};
pub use symbol::Symbol;
