//! Diagnostic collection
//!
//! Every anomaly the analyzer finds is appended here and analysis keeps
//! going, so a single run reports every independent defect.

use std::fmt;

use crate::common::Span;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    // Names and declarations
    UndeclaredIdentifier,
    DuplicateDeclaration,
    NotCallable,
    InvalidVariableType,
    InvalidArraySize,

    // Operators and conditions
    InvalidOperandType,
    NonBooleanCondition,

    // Assignment
    TypeMismatchAssignment,
    InvalidAssignmentTarget,

    // Indexing
    InvalidIndexType,
    InvalidIndexTarget,
    IndexOutOfBounds,

    // Calls
    ArityMismatch,
    ArgumentTypeMismatch,

    // Returns
    ReturnTypeMismatch,
    MissingReturnValue,
    UnexpectedReturnValue,
    MissingReturn,
}

impl DiagnosticKind {
    /// Stable, searchable error code
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::UndeclaredIdentifier => "E0101",
            DiagnosticKind::DuplicateDeclaration => "E0102",
            DiagnosticKind::NotCallable => "E0103",
            DiagnosticKind::InvalidVariableType => "E0104",
            DiagnosticKind::InvalidArraySize => "E0105",
            DiagnosticKind::InvalidOperandType => "E0201",
            DiagnosticKind::NonBooleanCondition => "E0202",
            DiagnosticKind::TypeMismatchAssignment => "E0301",
            DiagnosticKind::InvalidAssignmentTarget => "E0302",
            DiagnosticKind::InvalidIndexType => "E0401",
            DiagnosticKind::InvalidIndexTarget => "E0402",
            DiagnosticKind::IndexOutOfBounds => "E0403",
            DiagnosticKind::ArityMismatch => "E0501",
            DiagnosticKind::ArgumentTypeMismatch => "E0502",
            DiagnosticKind::ReturnTypeMismatch => "E0601",
            DiagnosticKind::MissingReturnValue => "E0602",
            DiagnosticKind::UnexpectedReturnValue => "E0603",
            DiagnosticKind::MissingReturn => "E0604",
        }
    }

    /// Short headline used when rendering
    pub fn title(self) -> &'static str {
        match self {
            DiagnosticKind::UndeclaredIdentifier => "undeclared identifier",
            DiagnosticKind::DuplicateDeclaration => "duplicate declaration",
            DiagnosticKind::NotCallable => "called object is not a function",
            DiagnosticKind::InvalidVariableType => "invalid type for a variable",
            DiagnosticKind::InvalidArraySize => "invalid array size",
            DiagnosticKind::InvalidOperandType => "invalid operand types",
            DiagnosticKind::NonBooleanCondition => "condition is not boolean",
            DiagnosticKind::TypeMismatchAssignment => "mismatched types in assignment",
            DiagnosticKind::InvalidAssignmentTarget => "invalid assignment target",
            DiagnosticKind::InvalidIndexType => "array index is not an integer",
            DiagnosticKind::InvalidIndexTarget => "subscripted value is not an array",
            DiagnosticKind::IndexOutOfBounds => "array index out of bounds",
            DiagnosticKind::ArityMismatch => "wrong number of arguments",
            DiagnosticKind::ArgumentTypeMismatch => "mismatched argument type",
            DiagnosticKind::ReturnTypeMismatch => "mismatched return type",
            DiagnosticKind::MissingReturnValue => "missing return value",
            DiagnosticKind::UnexpectedReturnValue => "unexpected return value",
            DiagnosticKind::MissingReturn => "missing return",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single reported semantic defect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub span: Span,
    pub message: String,
    /// Secondary location, e.g. the earlier declaration of a duplicate
    pub related: Option<(Span, String)>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}: {}",
            self.severity,
            self.kind.code(),
            self.span,
            self.message
        )
    }
}

/// Append-only list of diagnostics for one analysis run
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    limit: Option<usize>,
    suppressed: usize,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` diagnostics; later ones are only counted
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn report(&mut self, kind: DiagnosticKind, span: Span, message: impl Into<String>) {
        self.push(Diagnostic {
            severity: Severity::Error,
            kind,
            span,
            message: message.into(),
            related: None,
        });
    }

    pub fn report_with_related(
        &mut self,
        kind: DiagnosticKind,
        span: Span,
        message: impl Into<String>,
        related_span: Span,
        related_message: impl Into<String>,
    ) {
        self.push(Diagnostic {
            severity: Severity::Error,
            kind,
            span,
            message: message.into(),
            related: Some((related_span, related_message.into())),
        });
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(kind = %diagnostic.kind, span = %diagnostic.span, "diagnostic");
        if self.limit.is_some_and(|limit| self.diagnostics.len() >= limit) {
            self.suppressed += 1;
            return;
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Errors reported, including any dropped by the limit
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
            + self.suppressed
    }

    /// Diagnostics dropped because the limit was reached
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// All stored diagnostics, in the order they were reported
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
