//! Property-based tests for behavior that should hold across any input.
//!
//! Full `Arbitrary` generation of syntactically valid Python is its own
//! project; instead these properties draw from a small fixed corpus of
//! programs exercising the scope kinds the indexer models (module, function,
//! class, lambda, comprehension, nested/nonlocal) and quickcheck only the
//! axis that is cheap to vary freely: which snippet, and which identifier.

use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use rescope_python::{indexer, rename, selection, BindingKey, Rules, ScopeFilter};

const CORPUS: &[&str] = &[
    "x = 1\nprint(x)",
    "def f(a, b):\n    return a + b",
    "def outer():\n    x = 1\n    def inner():\n        nonlocal x\n        x += 1\n    inner()\n    return x",
    "class C:\n    attr = 1\n    def m(self):\n        return self.attr",
    "result = [i * 2 for i in range(10) if i % 2 == 0]",
    "f = lambda x, y=1: x + y",
    "for i in range(3):\n    print(i)\nprint(i)",
    "try:\n    risky()\nexcept ValueError as e:\n    print(e)\nexcept Exception as e:\n    print(e)",
    "import os\nimport sys as system\nprint(os.path, system.argv)",
    "def g():\n    global counter\n    counter = counter + 1",
];

const NAMES: &[&str] = &["x", "y", "i", "attr", "counter", "e", "a", "total", "value"];

#[derive(Debug, Clone, Copy)]
struct SnippetPick(usize);

impl Arbitrary for SnippetPick {
    fn arbitrary(g: &mut Gen) -> Self {
        let idx = usize::arbitrary(g) % CORPUS.len();
        SnippetPick(idx)
    }
}

#[derive(Debug, Clone, Copy)]
struct NamePick(usize);

impl Arbitrary for NamePick {
    fn arbitrary(g: &mut Gen) -> Self {
        let idx = usize::arbitrary(g) % NAMES.len();
        NamePick(idx)
    }
}

/// Round-trip identity: renaming a name to itself is a no-op, for every
/// scope filter, because the selected set's text never differs from what's
/// already there.
#[quickcheck]
fn round_trip_identity(snippet: SnippetPick, name: NamePick) -> bool {
    let source = CORPUS[snippet.0];
    let target = NAMES[name.0];
    let outcome = rename(source, target, target, &Rules::default())
        .expect("corpus snippets always parse");
    outcome.source == source
}

/// Total identifier-node count is invariant under rename: only the text of
/// selected nodes changes, never how many nodes the index maps.
#[quickcheck]
fn total_node_count_preserved(snippet: SnippetPick, name: NamePick) -> bool {
    let source = CORPUS[snippet.0];
    let target = NAMES[name.0];
    let before_count = {
        let module = ruff_python_parser::parse_module(source)
            .expect("corpus snippets always parse")
            .into_syntax();
        let (index, _) = indexer::build_index(&module);
        index.node_to_binding.len()
    };

    let rules = Rules::default();
    let outcome = rename(source, target, "zzz_renamed_zzz", &rules).expect("parses");

    let after_count = {
        let module = ruff_python_parser::parse_module(&outcome.source)
            .expect("rewritten output must still parse")
            .into_syntax();
        let (index, _) = indexer::build_index(&module);
        index.node_to_binding.len()
    };

    before_count == after_count
}

/// Scope disjointness: renaming never touches an identifier whose resolved
/// binding is not in the selected set, even when it shares the target's
/// textual name.
#[quickcheck]
fn scope_disjointness(snippet: SnippetPick, name: NamePick) -> bool {
    let source = CORPUS[snippet.0];
    let target = NAMES[name.0];
    // A restrictive filter (rather than `Unset`, which would select every
    // same-named binding anywhere) is what actually exercises disjointness:
    // it leaves module/class-level bindings of the same name unselected
    // while a function/lambda/comprehension-local one is renamed.
    let rules = Rules {
        scope_filter: ScopeFilter::Local,
        ..Default::default()
    };

    let module = ruff_python_parser::parse_module(source)
        .expect("corpus snippets always parse")
        .into_syntax();
    let (index, _) = indexer::build_index(&module);
    let selected: BTreeSet<BindingKey> = selection::select(&index, target, &rules);

    let outcome = rename(source, target, "zzz_renamed_zzz", &rules).expect("parses");
    if selected.is_empty() {
        return outcome.source == source;
    }

    let new_module = ruff_python_parser::parse_module(&outcome.source)
        .expect("rewritten output must still parse")
        .into_syntax();
    let (new_index, _) = indexer::build_index(&new_module);

    // Every binding that was NOT selected and is not itself the replacement
    // name must still be reachable with its old name in the new source.
    let unrelated_original_count = index
        .node_to_binding
        .values()
        .filter(|k| k.name == target && !selected.contains(k))
        .count();
    let unrelated_new_count = new_index
        .node_to_binding
        .values()
        .filter(|k| k.name == target)
        .count();
    unrelated_original_count == unrelated_new_count
}

/// Anchor idempotence: re-running a rename with the same anchor against its
/// own output is a no-op, since nothing named `replacement` remains to pick
/// up a second anchor-targeted rewrite once the first has already run (the
/// anchor scope id is carried through because span-splice never restructures
/// scopes).
#[test]
fn idempotence_under_anchor() {
    let source = "def outer():\n    total = 0\n    def inner():\n        nonlocal total\n        total += 1\n    inner()\n    return total";
    let module = ruff_python_parser::parse_module(source)
        .expect("parses")
        .into_syntax();
    let (index, _) = indexer::build_index(&module);
    let outer_scope = index
        .scopes
        .iter()
        .find(|s| s.name == "outer")
        .expect("outer scope exists");
    let anchor = BindingKey::new(outer_scope.id, "total");

    let rules = Rules {
        anchor_binding_key: Some(anchor.clone()),
        ..Default::default()
    };

    let once = rename(source, "total", "accum", &rules).expect("rename ok");
    let twice = rename(&once.source, "accum", "accum", &rules).expect("rename ok");
    assert_eq!(once.source, twice.source);
}
