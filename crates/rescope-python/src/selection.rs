//! Selection Engine.
//!
//! Turns an indexed module plus caller-supplied [`Rules`] into the concrete
//! set of [`BindingKey`]s that a rename/safety-check operation should act
//! on. Never looks at text, only at the scope tree `indexer` already built.

use std::collections::BTreeSet;

use crate::types::{BindingKey, Index, Rules, ScopeFilter, ScopeKind};

/// Resolve `rules` against `index` for bindings named `target`.
///
/// An `anchor_binding_key` short-circuits everything else: if set, it is
/// returned alone, regardless of whether
/// it actually appears in `index` — an anchor naming a binding that doesn't
/// exist in this module simply selects nothing once the caller filters
/// against `index.scope_for`.
pub fn select(index: &Index, target: &str, rules: &Rules) -> BTreeSet<BindingKey> {
    if let Some(anchor) = &rules.anchor_binding_key {
        return BTreeSet::from([anchor.clone()]);
    }

    index
        .all_bindings()
        .filter(|(key, _)| key.name == target)
        .filter(|(key, scope)| matches_scope_filter(index, key, scope.kind, rules.scope_filter))
        .filter(|(key, _)| matches_target_functions(index, key, rules))
        .map(|(key, _)| key)
        .collect()
}

fn matches_scope_filter(
    index: &Index,
    key: &BindingKey,
    kind: ScopeKind,
    filter: ScopeFilter,
) -> bool {
    match filter {
        ScopeFilter::Local => kind.is_function_like() || kind == ScopeKind::Comprehension,
        ScopeFilter::Class => kind == ScopeKind::Class,
        ScopeFilter::Global => key.scope_id == crate::types::ScopeId::MODULE,
        ScopeFilter::Nonlocal => {
            // This exact binding is the resolved owner of at least one
            // `nonlocal` declaration pointing at it — not merely co-resident
            // in a scope that happens to declare some other name `nonlocal`.
            index.nonlocal_names.contains_key(key)
        }
        ScopeFilter::Unset => true,
    }
}

fn matches_target_functions(index: &Index, key: &BindingKey, rules: &Rules) -> bool {
    if rules.target_functions.is_empty() {
        return true;
    }
    let mut cursor = Some(key.scope_id);
    while let Some(id) = cursor {
        let scope = index.scope(id);
        if scope.kind.is_function_like() && rules.target_functions.iter().any(|n| n == &scope.name) {
            return true;
        }
        cursor = index.enclosing_function_like(id);
    }
    false
}
