//! Scope-aware symbol renaming for Python source.
//!
//! Three pure entry points, each building a fresh analysis from scratch:
//!
//! - [`rename`] rewrites every occurrence of a selected binding.
//! - [`binding_info`] reports every binding named `target`, unfiltered.
//! - [`safety_check`] flags keyword/builtin/same-scope collisions a rename
//!   would introduce, without performing it.
//!
//! Nothing here mutates shared state and nothing is cached between calls —
//! see `indexer`, `selection`, and `rewrite` for the three-stage pipeline
//! each of these functions runs internally.

pub mod error;
pub mod indexer;
pub mod report;
pub mod rewrite;
pub mod selection;
pub mod types;
pub mod validation;

use rescope_core::diagnostic::Diagnostic;

pub use error::{RescopeError, RescopeResult};
pub use report::{BindingInfoReport, BindingSummary, RenameOutcome, SafetyReport};
pub use types::{Binding, BindingKey, Index, Rules, Scope, ScopeFilter, ScopeId, ScopeKind};

fn parse(source: &str) -> RescopeResult<ruff_python_ast::ModModule> {
    ruff_python_parser::parse_module(source)
        .map(|parsed| parsed.into_syntax())
        .map_err(|err| RescopeError::Parse(err.to_string()))
}

/// Rewrite every occurrence of the binding(s) selected by `rules` from
/// `target` to `replacement`, returning the new source and any diagnostics
/// accumulated while indexing and rewriting.
///
/// Only a parse failure propagates as `Err`; everything else — unresolved
/// names, invalid `nonlocal`, an empty selection — comes back as data in
/// `RenameOutcome::diagnostics`.
pub fn rename(
    source: &str,
    target: &str,
    replacement: &str,
    rules: &Rules,
) -> RescopeResult<RenameOutcome> {
    let module = parse(source)?;
    let (index, mut diagnostics) = indexer::build_index(&module);

    if rules.debug {
        tracing::debug!(
            scopes = index.scopes.len(),
            bindings = index.node_to_binding.len(),
            "index built"
        );
    }

    let selected = selection::select(&index, target, rules);
    if rules.debug {
        tracing::debug!(selected = selected.len(), "selection resolved");
    }

    let result = rewrite::rewrite(source, &index, target, &selected, replacement);
    diagnostics.extend(result.diagnostics);

    Ok(RenameOutcome {
        source: result.source,
        diagnostics,
    })
}

/// Report every binding named `target`, in every scope, with no selection
/// filtering applied — a read-only survey a caller uses to decide what
/// `Rules` to pass to [`rename`].
pub fn binding_info(source: &str, target: &str) -> RescopeResult<BindingInfoReport> {
    let module = parse(source)?;
    let (index, _diagnostics) = indexer::build_index(&module);

    let mut bindings = Vec::new();
    for (key, scope) in index.all_bindings() {
        if key.name != target {
            continue;
        }
        let def_count = scope
            .locals
            .get(&key.name)
            .map(|b| b.def_spans.len())
            .unwrap_or(0);
        let total = index
            .node_to_binding
            .values()
            .filter(|resolved| **resolved == key)
            .count();
        bindings.push(BindingSummary {
            key,
            scope_kind: scope.kind.to_string(),
            scope_name: scope.name.clone(),
            def_count,
            use_count: total.saturating_sub(def_count),
        });
    }

    let total_defs: usize = bindings.iter().map(|b| b.def_count).sum();
    let total_uses: usize = bindings.iter().map(|b| b.use_count).sum();

    Ok(BindingInfoReport {
        bindings,
        total_uses,
        total_defs,
    })
}

/// Check whether renaming the binding(s) `rules` selects from `target` to
/// `replacement` risks a keyword collision, a builtin shadow, or a
/// same-scope clash with an existing name. Performs no rewrite.
pub fn safety_check(
    source: &str,
    target: &str,
    replacement: &str,
    rules: &Rules,
) -> RescopeResult<SafetyReport> {
    let module = parse(source)?;
    let (index, _diagnostics) = indexer::build_index(&module);
    let selected = selection::select(&index, target, rules);

    let mut issues = Vec::new();

    if validation::is_python_keyword(replacement) {
        issues.push(Diagnostic::collision_risk(format!(
            "'{replacement}' is a Python keyword"
        )));
    }
    if validation::is_python_builtin(replacement) {
        issues.push(Diagnostic::collision_risk(format!(
            "'{replacement}' shadows a builtin name"
        )));
    }

    for key in &selected {
        let scope = index.scope(key.scope_id);
        let clashes = scope
            .locals
            .keys()
            .any(|name| name == replacement && name != &key.name);
        if clashes {
            issues.push(Diagnostic::collision_risk(format!(
                "'{replacement}' is already bound in {} scope '{}'",
                scope.kind, scope.name
            )));
        }
    }

    Ok(SafetyReport {
        is_safe: issues.is_empty(),
        issues,
    })
}
