//! Output types for the three public entry points.
//!
//! Kept separate from `types.rs` since these describe *results*, not the
//! analysis model a caller never sees directly.

use serde::{Deserialize, Serialize};

use rescope_core::diagnostic::Diagnostic;

use crate::types::BindingKey;

/// Result of [`crate::rename`]: the rewritten source plus every diagnostic
/// raised while producing it. An empty `diagnostics` list does not imply
/// the rename did anything — check `source != original` for that, or look
/// for a `SelectionEmpty` diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// One binding reported by [`crate::binding_info`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingSummary {
    pub key: BindingKey,
    pub scope_kind: String,
    pub scope_name: String,
    pub def_count: usize,
    pub use_count: usize,
}

/// Result of [`crate::binding_info`]: every binding named `target`,
/// anywhere in the module, with no filtering applied — a read-only survey
/// a caller can use to decide what `Rules` to pass to `rename`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingInfoReport {
    pub bindings: Vec<BindingSummary>,
    pub total_uses: usize,
    pub total_defs: usize,
}

/// Result of [`crate::safety_check`]: whether the selected rename is free
/// of keyword/builtin/same-scope collisions, and the advisory diagnostics
/// explaining any that were found.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SafetyReport {
    pub is_safe: bool,
    pub issues: Vec<Diagnostic>,
}
