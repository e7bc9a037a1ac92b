//! Diagnostic argument formatting, fix-its, and the scoped in-flight
//! diagnostic builder.

use crate::span::SourceRange;

use super::{DiagID, Diagnostic, DiagnosticEngine};

/// A positional argument substituted into a [`DiagID::message_template`].
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::DiagnosticArgument;
///
/// let arg: DiagnosticArgument = "let".into();
/// assert_eq!(arg.to_display_string(), "let");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticArgument {
    /// A string argument - most commonly the spelling of a token.
    Str(String),
    /// An integer argument, e.g. an arity or a numeric literal's value.
    Int(i64),
}

impl DiagnosticArgument {
    /// Render this argument the way it should appear in a formatted message.
    pub fn to_display_string(&self) -> String {
        match self {
            DiagnosticArgument::Str(s) => s.clone(),
            DiagnosticArgument::Int(i) => i.to_string(),
        }
    }
}

impl From<&str> for DiagnosticArgument {
    fn from(s: &str) -> Self {
        DiagnosticArgument::Str(s.to_string())
    }
}

impl From<String> for DiagnosticArgument {
    fn from(s: String) -> Self {
        DiagnosticArgument::Str(s)
    }
}

impl From<i64> for DiagnosticArgument {
    fn from(i: i64) -> Self {
        DiagnosticArgument::Int(i)
    }
}

/// A suggested source edit attached to a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixIt {
    /// The range of source text to replace.
    pub range: SourceRange,
    /// The text to replace it with (empty string means "delete").
    pub replacement: String,
}

/// Substitute `{0}`, `{1}`, ... placeholders in `template` with `args`,
/// rendered in order.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::{format_diagnostic_message, DiagnosticArgument};
///
/// let args: Vec<DiagnosticArgument> = vec!["')'".into(), "'}'".into()];
/// let msg = format_diagnostic_message("expected {0}, found {1}", &args);
/// assert_eq!(msg, "expected ')', found '}'");
/// ```
pub fn format_diagnostic_message(template: &str, args: &[DiagnosticArgument]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '{' {
            if let Some(end) = template[i + 1..].find('}') {
                let idx_str = &template[i + 1..i + 1 + end];
                if let Ok(idx) = idx_str.parse::<usize>() {
                    if let Some(arg) = args.get(idx) {
                        out.push_str(&arg.to_display_string());
                    } else {
                        out.push_str(&template[i..=i + 1 + end]);
                    }
                    for _ in 0..=end {
                        chars.next();
                    }
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// A diagnostic under construction, scoped to the block it was created in.
///
/// Emits the diagnostic to its [`DiagnosticEngine`] when dropped, unless
/// [`Self::cancel`] was called or the stack is unwinding from a panic - a
/// panicking speculative parse shouldn't leave half-built diagnostics
/// behind.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::{DiagnosticEngine, DiagID};
/// use zomlc_util::span::SourceRange;
///
/// let engine = DiagnosticEngine::new();
/// engine.diagnose(DiagID::PARSE_UNEXPECTED_TOKEN, SourceRange::DUMMY)
///     .arg("')'")
///     .emit();
/// assert!(engine.had_any_error());
/// ```
#[must_use = "diagnostics are only emitted when dropped or explicitly emitted"]
pub struct InFlightDiagnostic<'a> {
    engine: &'a DiagnosticEngine,
    diagnostic: Option<Diagnostic>,
    cancelled: bool,
}

impl<'a> InFlightDiagnostic<'a> {
    pub(super) fn new(engine: &'a DiagnosticEngine, id: DiagID, range: SourceRange) -> Self {
        Self {
            engine,
            diagnostic: Some(Diagnostic {
                id,
                severity: id.severity(),
                range,
                extra_ranges: Vec::new(),
                args: Vec::new(),
                notes: Vec::new(),
                fix_its: Vec::new(),
            }),
            cancelled: false,
        }
    }

    /// Override the default severity for this one diagnostic.
    pub fn severity(mut self, severity: super::DiagSeverity) -> Self {
        if let Some(d) = &mut self.diagnostic {
            d.severity = severity;
        }
        self
    }

    /// Append a positional message argument.
    pub fn arg(mut self, arg: impl Into<DiagnosticArgument>) -> Self {
        if let Some(d) = &mut self.diagnostic {
            d.args.push(arg.into());
        }
        self
    }

    /// Attach an additional (secondary) source range, e.g. "previous
    /// definition here".
    pub fn range(mut self, range: SourceRange) -> Self {
        if let Some(d) = &mut self.diagnostic {
            d.extra_ranges.push(range);
        }
        self
    }

    /// Attach a child note diagnostic.
    pub fn note(mut self, id: DiagID, range: SourceRange, args: Vec<DiagnosticArgument>) -> Self {
        if let Some(d) = &mut self.diagnostic {
            d.notes.push(Diagnostic {
                id,
                severity: super::DiagSeverity::Note,
                range,
                extra_ranges: Vec::new(),
                args,
                notes: Vec::new(),
                fix_its: Vec::new(),
            });
        }
        self
    }

    /// Attach a suggested fix.
    pub fn fix_it(mut self, range: SourceRange, replacement: impl Into<String>) -> Self {
        if let Some(d) = &mut self.diagnostic {
            d.fix_its.push(FixIt {
                range,
                replacement: replacement.into(),
            });
        }
        self
    }

    /// Discard this diagnostic instead of emitting it.
    pub fn cancel(mut self) {
        self.cancelled = true;
    }

    /// Emit immediately rather than waiting for drop. Equivalent to letting
    /// the value go out of scope, but makes the intent explicit at call
    /// sites that build a diagnostic across several statements.
    pub fn emit(self) {
        drop(self);
    }
}

impl Drop for InFlightDiagnostic<'_> {
    fn drop(&mut self) {
        if self.cancelled || std::thread::panicking() {
            return;
        }
        if let Some(diagnostic) = self.diagnostic.take() {
            self.engine.emit(diagnostic);
        }
    }
}
