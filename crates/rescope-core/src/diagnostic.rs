//! Diagnostic taxonomy shared by the language-specific analysis crates.
//!
//! Indexing and rewriting never abort for logical issues in the input program:
//! anomalies are captured as [`Diagnostic`] records and returned (or logged via
//! `tracing` when a caller asks for debug output) rather than raised. Only a
//! failure at the parser layer is allowed to propagate as an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// The kind of logical anomaly recorded during indexing, selection, or rewrite.
///
/// These are not exceptions: every variant here describes something the core
/// continues past, using best-effort resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// A use resolved to nothing in any enclosing scope (likely a builtin or
    /// a name undefined at static analysis time).
    UnresolvedName,
    /// `nonlocal` with no enclosing binding, or a name declared both
    /// `global` and `nonlocal` in the same scope.
    InvalidDeclaration,
    /// No binding matched the caller's selection rules; the rewrite is a
    /// no-op and the input is returned unchanged.
    SelectionEmpty,
    /// Advisory-only: the requested rename risks a keyword collision,
    /// builtin shadowing, or a same-scope clash with an existing name.
    CollisionRisk,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticKind::UnresolvedName => "unresolved_name",
            DiagnosticKind::InvalidDeclaration => "invalid_declaration",
            DiagnosticKind::SelectionEmpty => "selection_empty",
            DiagnosticKind::CollisionRisk => "collision_risk",
        };
        write!(f, "{}", s)
    }
}

/// A single structured diagnostic record.
///
/// `span` is `None` for diagnostics that describe a whole-program condition
/// (e.g. an empty selection) rather than a specific source location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn unresolved_name(name: &str, span: Span) -> Self {
        Diagnostic::new(
            DiagnosticKind::UnresolvedName,
            format!("'{}' did not resolve to any enclosing binding", name),
        )
        .with_span(span)
    }

    pub fn invalid_declaration(message: impl Into<String>, span: Span) -> Self {
        Diagnostic::new(DiagnosticKind::InvalidDeclaration, message).with_span(span)
    }

    pub fn selection_empty(target: &str) -> Self {
        Diagnostic::new(
            DiagnosticKind::SelectionEmpty,
            format!("no binding named '{}' matched the selection rules", target),
        )
    }

    pub fn collision_risk(message: impl Into<String>) -> Self {
        Diagnostic::new(DiagnosticKind::CollisionRisk, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
