//! Diagnostic module - error and warning reporting infrastructure.
//!
//! The [`DiagnosticEngine`] is the single point every later compiler stage
//! goes through to report a problem. It owns no source text itself - it
//! borrows a [`crate::span::SourceManager`] when rendering - and fans out
//! finished [`Diagnostic`]s to one or more [`DiagnosticConsumer`]s.
//!
//! # Examples
//!
//! ```
//! use zomlc_util::diagnostic::{DiagnosticEngine, DiagID};
//! use zomlc_util::span::SourceRange;
//!
//! let engine = DiagnosticEngine::new();
//! engine
//!     .diagnose(DiagID::LEX_UNEXPECTED_CHAR, SourceRange::DUMMY)
//!     .arg("$")
//!     .emit();
//!
//! assert!(engine.had_any_error());
//! assert_eq!(engine.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::span::{SourceManager, SourceRange};

pub use builder::{format_diagnostic_message, DiagnosticArgument, FixIt, InFlightDiagnostic};
pub use codes::{DiagID, CODEGEN_BASE, COMMON_BASE, PARSE_BASE, SEMANTIC_BASE};
pub use level::{ColorConfig, DiagSeverity, LabelStyle};

/// A fully-built diagnostic ready to be handed to a [`DiagnosticConsumer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which diagnostic this is.
    pub id: DiagID,
    /// Effective severity (defaults to `id.severity()`, may be overridden).
    pub severity: DiagSeverity,
    /// The primary source range this diagnostic points at.
    pub range: SourceRange,
    /// Secondary ranges, e.g. "previous definition here".
    pub extra_ranges: Vec<SourceRange>,
    /// Positional arguments substituted into the message template.
    pub args: Vec<DiagnosticArgument>,
    /// Attached child notes.
    pub notes: Vec<Diagnostic>,
    /// Suggested fixes.
    pub fix_its: Vec<FixIt>,
}

impl Diagnostic {
    /// Render this diagnostic's message (without location info).
    pub fn message(&self) -> String {
        format_diagnostic_message(self.id.message_template(), &self.args)
    }
}

/// Receives finished diagnostics from a [`DiagnosticEngine`].
///
/// Implementations decide how to present a diagnostic: write colored text
/// to a terminal, collect into a `Vec` for a test harness, serialize as
/// JSON for editor tooling, etc.
pub trait DiagnosticConsumer: Send {
    /// Handle one diagnostic. `source_manager` is provided so the consumer
    /// can render snippets; it is `None` for synthesized diagnostics with no
    /// backing source (e.g. a CLI argument error).
    fn consume(&mut self, diagnostic: &Diagnostic, source_manager: Option<&SourceManager>);
}

/// Writes diagnostics to the console as human-readable, optionally colored
/// text, in the rustc-like `path:line:col: severity: message` style.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::{ColorConfig, ConsolingDiagnosticConsumer, Diagnostic, DiagnosticConsumer, DiagID, DiagSeverity};
/// use zomlc_util::span::SourceRange;
///
/// let mut consumer = ConsolingDiagnosticConsumer::new(ColorConfig::Never);
/// let diagnostic = Diagnostic {
///     id: DiagID::LEX_UNTERMINATED_STRING,
///     severity: DiagSeverity::Error,
///     range: SourceRange::DUMMY,
///     extra_ranges: Vec::new(),
///     args: Vec::new(),
///     notes: Vec::new(),
///     fix_its: Vec::new(),
/// };
/// consumer.consume(&diagnostic, None);
/// ```
pub struct ConsolingDiagnosticConsumer {
    color: ColorConfig,
}

impl ConsolingDiagnosticConsumer {
    /// Create a new consumer with the given color policy.
    pub fn new(color: ColorConfig) -> Self {
        Self { color }
    }

    fn render(&self, diagnostic: &Diagnostic, source_manager: Option<&SourceManager>, is_tty: bool) -> String {
        let use_color = self.color.use_color(is_tty);
        let severity = diagnostic.severity;
        let message = diagnostic.message();

        let header = if let Some(sm) = source_manager {
            if let (Some(name), Some(loc)) = (
                sm.buffer_name(diagnostic.range.buffer_id()),
                sm.line_and_column(diagnostic.range),
            ) {
                format!("{}:{}:{}: ", name, loc.line, loc.column)
            } else {
                String::new()
            }
        } else {
            String::new()
        };

        let severity_str = if use_color {
            format!("\x1b[1;{}m{}\x1b[0m", severity.color_code(), severity)
        } else {
            severity.to_string()
        };

        let mut out = format!("{header}{severity_str}: {message}");

        if let Some(sm) = source_manager {
            if let Some(snippet) = sm.render_snippet(diagnostic.range) {
                out.push('\n');
                out.push_str(&snippet);
            }
        }

        for note in &diagnostic.notes {
            out.push('\n');
            out.push_str(&self.render(note, source_manager, is_tty));
        }

        out
    }
}

impl DiagnosticConsumer for ConsolingDiagnosticConsumer {
    fn consume(&mut self, diagnostic: &Diagnostic, source_manager: Option<&SourceManager>) {
        let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
        eprintln!("{}", self.render(diagnostic, source_manager, is_tty));
    }
}

/// Collects diagnostics into memory instead of printing them, for tests
/// and tooling that wants to inspect compiler output programmatically.
#[derive(Default)]
pub struct CollectingDiagnosticConsumer {
    /// Diagnostics received so far, in emission order.
    pub collected: Vec<Diagnostic>,
}

impl DiagnosticConsumer for CollectingDiagnosticConsumer {
    fn consume(&mut self, diagnostic: &Diagnostic, _source_manager: Option<&SourceManager>) {
        self.collected.push(diagnostic.clone());
    }
}

/// The compiler's central diagnostic-reporting facility.
///
/// Thread-safe: the driver parses multiple source files concurrently with
/// `rayon`, and every parser shares one engine. Consumers and accumulated
/// diagnostics are held behind a [`parking_lot::Mutex`]; the "did we see an
/// error" flag is a lock-free [`AtomicBool`] so hot-path checks (e.g.
/// "should the driver bail before codegen") don't contend with emission.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::{DiagnosticEngine, DiagID};
/// use zomlc_util::span::SourceRange;
///
/// let engine = DiagnosticEngine::new();
/// engine.diagnose(DiagID::PARSE_UNEXPECTED_EOF, SourceRange::DUMMY)
///     .arg("';'")
///     .emit();
/// assert_eq!(engine.diagnostics().len(), 1);
/// assert!(engine.had_any_error());
/// ```
pub struct DiagnosticEngine {
    diagnostics: Mutex<Vec<Diagnostic>>,
    consumers: Mutex<Vec<Box<dyn DiagnosticConsumer>>>,
    had_any_error: AtomicBool,
    error_count: AtomicUsize,
    warning_count: AtomicUsize,
}

impl DiagnosticEngine {
    /// Create a new engine with no consumers attached.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            consumers: Mutex::new(Vec::new()),
            had_any_error: AtomicBool::new(false),
            error_count: AtomicUsize::new(0),
            warning_count: AtomicUsize::new(0),
        }
    }

    /// Register a consumer that will be notified of every diagnostic
    /// emitted from this point on.
    pub fn add_consumer(&self, consumer: Box<dyn DiagnosticConsumer>) {
        self.consumers.lock().push(consumer);
    }

    /// Begin building a diagnostic at the default severity for `id`.
    pub fn diagnose(&self, id: DiagID, range: SourceRange) -> InFlightDiagnostic<'_> {
        InFlightDiagnostic::new(self, id, range)
    }

    /// Finalize and dispatch a diagnostic. Called by [`InFlightDiagnostic`]
    /// on drop; exposed directly for callers that already have a built
    /// [`Diagnostic`] (e.g. replaying a serialized diagnostic).
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.record_counts(&diagnostic);
        self.trace(&diagnostic);

        for consumer in self.consumers.lock().iter_mut() {
            consumer.consume(&diagnostic, None);
        }

        self.diagnostics.lock().push(diagnostic);
    }

    /// Finalize and dispatch a diagnostic, giving consumers access to a
    /// [`SourceManager`] so they can render snippets.
    pub fn emit_with_source(&self, diagnostic: Diagnostic, source_manager: &SourceManager) {
        self.record_counts(&diagnostic);
        self.trace(&diagnostic);

        for consumer in self.consumers.lock().iter_mut() {
            consumer.consume(&diagnostic, Some(source_manager));
        }

        self.diagnostics.lock().push(diagnostic);
    }

    fn record_counts(&self, diagnostic: &Diagnostic) {
        if diagnostic.severity.is_error_or_worse() {
            self.had_any_error.store(true, Ordering::Relaxed);
            self.error_count.fetch_add(1, Ordering::Relaxed);
        } else if diagnostic.severity == DiagSeverity::Warning {
            self.warning_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Forward to the `tracing` subscriber at a level matching severity, so
    /// every diagnostic also shows up in structured compiler logs even when
    /// no `DiagnosticConsumer` is registered.
    fn trace(&self, diagnostic: &Diagnostic) {
        let id = diagnostic.id.as_u32();
        let message = diagnostic.message();
        match diagnostic.severity {
            DiagSeverity::Fatal | DiagSeverity::Error => {
                tracing::error!(diag_id = id, "{message}")
            }
            DiagSeverity::Warning | DiagSeverity::Remark => {
                tracing::warn!(diag_id = id, "{message}")
            }
            DiagSeverity::Note => tracing::debug!(diag_id = id, "{message}"),
        }
    }

    /// Returns true if any diagnostic at `Error` or `Fatal` severity has
    /// been emitted so far.
    #[inline]
    pub fn had_any_error(&self) -> bool {
        self.had_any_error.load(Ordering::Relaxed)
    }

    /// Number of `Error`/`Fatal` diagnostics emitted so far.
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Number of `Warning` diagnostics emitted so far.
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count.load(Ordering::Relaxed)
    }

    /// All diagnostics emitted so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Discard all accumulated diagnostics and reset the counters. Used
    /// between independent compilations sharing one engine (e.g. in an
    /// incremental/watch mode driver).
    pub fn clear(&self) {
        self.diagnostics.lock().clear();
        self.had_any_error.store(false, Ordering::Relaxed);
        self.error_count.store(0, Ordering::Relaxed);
        self.warning_count.store(0, Ordering::Relaxed);
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_is_clean() {
        let engine = DiagnosticEngine::new();
        assert!(!engine.had_any_error());
        assert_eq!(engine.error_count(), 0);
        assert_eq!(engine.diagnostics().len(), 0);
    }

    #[test]
    fn test_emit_error_sets_had_any_error() {
        let engine = DiagnosticEngine::new();
        engine
            .diagnose(DiagID::LEX_UNEXPECTED_CHAR, SourceRange::DUMMY)
            .arg("@")
            .emit();
        assert!(engine.had_any_error());
        assert_eq!(engine.error_count(), 1);
        assert_eq!(engine.warning_count(), 0);
    }

    #[test]
    fn test_emit_remark_does_not_set_had_any_error() {
        let engine = DiagnosticEngine::new();
        engine
            .diagnose(DiagID::PARSE_UNUSED_IMPORT_REMARK, SourceRange::DUMMY)
            .arg("foo")
            .emit();
        assert!(!engine.had_any_error());
        assert_eq!(engine.error_count(), 0);
    }

    #[test]
    fn test_clear_resets_counts() {
        let engine = DiagnosticEngine::new();
        engine
            .diagnose(DiagID::LEX_UNEXPECTED_CHAR, SourceRange::DUMMY)
            .emit();
        engine.clear();
        assert!(!engine.had_any_error());
        assert_eq!(engine.diagnostics().len(), 0);
    }

    #[test]
    fn test_collecting_consumer_receives_diagnostics() {
        let engine = DiagnosticEngine::new();
        let collector = Box::new(CollectingDiagnosticConsumer::default());
        engine.add_consumer(collector);
        engine
            .diagnose(DiagID::LEX_UNTERMINATED_STRING, SourceRange::DUMMY)
            .emit();
        assert_eq!(engine.diagnostics().len(), 1);
    }

    #[test]
    fn test_diagnostic_message_rendering() {
        let diagnostic = Diagnostic {
            id: DiagID::PARSE_EXPECTED_TOKEN,
            severity: DiagSeverity::Error,
            range: SourceRange::DUMMY,
            extra_ranges: Vec::new(),
            args: vec!["')'".into(), "'}'".into()],
            notes: Vec::new(),
            fix_its: Vec::new(),
        };
        assert_eq!(diagnostic.message(), "expected ')', found '}'");
    }
}
