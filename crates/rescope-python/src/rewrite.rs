//! Rewrite Engine.
//!
//! Turns a selected set of bindings into a sorted, non-overlapping list of
//! `(TextRange, String)` edits and splices them into the original source.
//! Never re-serializes the AST, so every byte that isn't part of a renamed
//! identifier survives untouched — whitespace, comments, string contents,
//! all of it.

use std::collections::BTreeSet;

use ruff_text_size::TextRange;

use rescope_core::diagnostic::Diagnostic;

use crate::types::{BindingKey, Index};

/// Outcome of a single rewrite pass: the new source plus any diagnostics
/// raised while assembling it (currently just `SelectionEmpty`).
pub struct RewriteResult {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrite every reference to a binding in `selected` to `replacement`.
///
/// Three edit sources are merged:
/// - every `node_to_binding` entry whose resolved key is selected — this
///   already covers definitions, reads, and formal parameters, since the
///   indexer registers parameter `arg` nodes in `node_to_binding` directly
///   at indexing time;
/// - `global`/`nonlocal` declaration name-lists naming a selected binding,
///   which are not themselves visited by `node_to_binding` since a
///   declaration is neither a def nor a use;
/// - except-handler `as` names are *not* listed separately here because the
///   indexer already records them as ordinary definitions in
///   `node_to_binding`; `Index::except_names` exists purely for
///   `binding_info` reporting.
pub fn rewrite(
    source: &str,
    index: &Index,
    target: &str,
    selected: &BTreeSet<BindingKey>,
    replacement: &str,
) -> RewriteResult {
    let mut diagnostics = Vec::new();
    if selected.is_empty() {
        diagnostics.push(Diagnostic::selection_empty(target));
        return RewriteResult {
            source: source.to_string(),
            diagnostics,
        };
    }

    let mut edits: Vec<(TextRange, String)> = Vec::new();

    for (range, key) in &index.node_to_binding {
        if selected.contains(key) {
            edits.push((*range, replacement.to_string()));
        }
    }
    collect_declaration_edits(&index.global_names, selected, replacement, &mut edits);
    collect_declaration_edits(&index.nonlocal_names, selected, replacement, &mut edits);

    let rewritten = splice(source, edits);
    RewriteResult {
        source: rewritten,
        diagnostics,
    }
}

fn collect_declaration_edits(
    decl_names: &std::collections::HashMap<BindingKey, std::collections::HashSet<TextRange>>,
    selected: &BTreeSet<BindingKey>,
    replacement: &str,
    edits: &mut Vec<(TextRange, String)>,
) {
    for (key, ranges) in decl_names {
        if selected.contains(key) {
            for range in ranges {
                edits.push((*range, replacement.to_string()));
            }
        }
    }
}

/// Apply a set of possibly-unsorted edits to `source`, producing the
/// rewritten text. Edits are sorted by start offset; an edit that would
/// overlap the cursor left behind by a previous one is dropped rather than
/// applied twice over the same span (defensive — selection and declaration
/// edits are constructed to be disjoint by the indexer's own invariants).
fn splice(source: &str, mut edits: Vec<(TextRange, String)>) -> String {
    edits.sort_by_key(|(range, _)| range.start());

    let mut out = String::with_capacity(source.len());
    let mut cursor: usize = 0;
    for (range, text) in edits {
        let start = u32::from(range.start()) as usize;
        let end = u32::from(range.end()) as usize;
        if start < cursor {
            continue;
        }
        out.push_str(&source[cursor..start]);
        out.push_str(&text);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}
