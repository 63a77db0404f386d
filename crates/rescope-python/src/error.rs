//! Crate-local error type.
//!
//! The only failure path that is allowed to unwind out of
//! `rename`/`binding_info`/`safety_check` is a parse failure. Everything
//! else — unresolved names, invalid `nonlocal`, empty selections, collision
//! risk — is recorded as a [`rescope_core::diagnostic::Diagnostic`] and
//! returned as data.

use thiserror::Error;

/// Errors that can propagate out of the core entry points.
#[derive(Debug, Error)]
pub enum RescopeError {
    /// The source text did not parse as Python.
    #[error("failed to parse source: {0}")]
    Parse(String),
}

pub type RescopeResult<T> = Result<T, RescopeError>;
