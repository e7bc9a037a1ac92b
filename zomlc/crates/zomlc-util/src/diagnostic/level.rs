//! Diagnostic severity levels and label/color styles for terminal rendering.
//!
//! # Examples
//!
//! ```
//! use zomlc_util::diagnostic::{DiagSeverity, LabelStyle};
//!
//! assert!(DiagSeverity::Error.is_error_or_worse());
//! assert!(!DiagSeverity::Warning.is_error_or_worse());
//!
//! assert_eq!(LabelStyle::Primary.as_str(), "^");
//! assert_eq!(LabelStyle::Secondary.as_str(), "-");
//! ```

use std::fmt;

/// How serious a diagnostic is, ordered from least to most severe.
///
/// The ordering matters: [`super::DiagnosticEngine::emit`] latches
/// `had_any_error` once it sees anything `>= DiagSeverity::Error`.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::DiagSeverity;
///
/// assert!(DiagSeverity::Error > DiagSeverity::Warning);
/// assert!(DiagSeverity::Fatal > DiagSeverity::Error);
/// assert_eq!(format!("{}", DiagSeverity::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagSeverity {
    /// Supplementary context attached to another diagnostic.
    Note,
    /// Style or best-practice observation; never fails compilation.
    Remark,
    /// Problem that doesn't by itself stop compilation.
    Warning,
    /// Problem that prevents a successful compilation.
    Error,
    /// Error severe enough the compiler cannot continue at all (e.g. a
    /// source file could not be read).
    Fatal,
}

impl DiagSeverity {
    /// Returns true if a diagnostic at this severity should count toward
    /// "compilation failed".
    #[inline]
    pub const fn is_error_or_worse(&self) -> bool {
        matches!(self, DiagSeverity::Error | DiagSeverity::Fatal)
    }

    /// ANSI color code used by [`super::ConsolingDiagnosticConsumer`].
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            DiagSeverity::Note => "36",    // Cyan
            DiagSeverity::Remark => "34",  // Blue
            DiagSeverity::Warning => "33", // Yellow
            DiagSeverity::Error => "31",   // Red
            DiagSeverity::Fatal => "35",   // Magenta
        }
    }
}

impl fmt::Display for DiagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagSeverity::Note => "note",
            DiagSeverity::Remark => "remark",
            DiagSeverity::Warning => "warning",
            DiagSeverity::Error => "error",
            DiagSeverity::Fatal => "fatal error",
        };
        write!(f, "{s}")
    }
}

/// Style for span labels in multi-span diagnostics.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::LabelStyle;
///
/// assert_eq!(LabelStyle::Primary.underline_char(), '^');
/// assert_eq!(LabelStyle::Secondary.underline_char(), '-');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// The main location of the issue; rendered with `^`.
    Primary,
    /// Related context location; rendered with `-`.
    Secondary,
}

impl LabelStyle {
    /// Underline character for this style.
    #[inline]
    pub const fn underline_char(&self) -> char {
        match self {
            LabelStyle::Primary => '^',
            LabelStyle::Secondary => '-',
        }
    }

    /// String form of [`Self::underline_char`].
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LabelStyle::Primary => "^",
            LabelStyle::Secondary => "-",
        }
    }

    /// Returns true if this is the primary label.
    #[inline]
    pub const fn is_primary(&self) -> bool {
        matches!(self, LabelStyle::Primary)
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Color configuration for diagnostic rendering.
///
/// # Examples
///
/// ```
/// use zomlc_util::diagnostic::ColorConfig;
///
/// assert!(ColorConfig::Always.use_color(false));
/// assert!(!ColorConfig::Never.use_color(true));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorConfig {
    /// Automatically detect terminal color support.
    #[default]
    Auto,
    /// Always use colors, even when not writing to a terminal.
    Always,
    /// Never use colors.
    Never,
}

impl ColorConfig {
    /// Returns true if colors should be used given whether stdout/stderr is
    /// a terminal.
    pub const fn use_color(&self, is_tty: bool) -> bool {
        match self {
            ColorConfig::Auto => is_tty,
            ColorConfig::Always => true,
            ColorConfig::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(DiagSeverity::Note < DiagSeverity::Remark);
        assert!(DiagSeverity::Remark < DiagSeverity::Warning);
        assert!(DiagSeverity::Warning < DiagSeverity::Error);
        assert!(DiagSeverity::Error < DiagSeverity::Fatal);
    }

    #[test]
    fn test_is_error_or_worse() {
        assert!(!DiagSeverity::Warning.is_error_or_worse());
        assert!(DiagSeverity::Error.is_error_or_worse());
        assert!(DiagSeverity::Fatal.is_error_or_worse());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", DiagSeverity::Note), "note");
        assert_eq!(format!("{}", DiagSeverity::Fatal), "fatal error");
    }

    #[test]
    fn test_label_style() {
        assert_eq!(LabelStyle::Primary.underline_char(), '^');
        assert_eq!(LabelStyle::Secondary.as_str(), "-");
        assert!(LabelStyle::Primary.is_primary());
    }

    #[test]
    fn test_color_config() {
        assert!(ColorConfig::Always.use_color(true));
        assert!(ColorConfig::Always.use_color(false));
        assert!(ColorConfig::Auto.use_color(true));
        assert!(!ColorConfig::Auto.use_color(false));
        assert!(!ColorConfig::Never.use_color(true));
        assert_eq!(ColorConfig::default(), ColorConfig::Auto);
    }
}
