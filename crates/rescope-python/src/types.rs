//! Core data types for scope-aware Python renaming: scopes, bindings, the
//! index they live in, and the rules a caller supplies to select a rename
//! target.
//!
//! These mirror the data model in the specification's §3 one-to-one:
//! `Scope`, `Binding`, `BindingKey`, `Index`. Nothing here performs analysis;
//! see `indexer` for the traversal that populates an `Index` and `selection`
//! for the engine that reads one.

use std::collections::{HashMap, HashSet};

use ruff_text_size::TextRange;
use serde::{Deserialize, Serialize};

/// Stable integer identity for a scope, assigned in creation order during
/// indexing. Index 0 is always the module scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const MODULE: ScopeId = ScopeId(0);
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}

/// The kind of lexical region a `Scope` represents.
///
/// Class scopes are the one kind that does not participate in the
/// free-variable (enclosing-function) lookup chain for nested functions —
/// see `Index::resolve_read` in `indexer.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    Module,
    Function,
    Class,
    Lambda,
    Comprehension,
}

impl ScopeKind {
    /// Function and Lambda scopes are "function-like": they can own a
    /// `nonlocal` binding and are the containment unit for `target_functions`.
    pub fn is_function_like(self) -> bool {
        matches!(self, ScopeKind::Function | ScopeKind::Lambda)
    }
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScopeKind::Module => "module",
            ScopeKind::Function => "function",
            ScopeKind::Class => "class",
            ScopeKind::Lambda => "lambda",
            ScopeKind::Comprehension => "comprehension",
        };
        write!(f, "{s}")
    }
}

/// The identity of a single semantic binding: the scope that owns it plus
/// the name bound there. Two different names in the same scope are always
/// distinct bindings; the same name in two different scopes is also always
/// distinct, even under textual shadowing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BindingKey {
    pub scope_id: ScopeId,
    pub name: String,
}

impl BindingKey {
    pub fn new(scope_id: ScopeId, name: impl Into<String>) -> Self {
        BindingKey {
            scope_id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for BindingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{}", self.scope_id, self.name)
    }
}

/// A single semantic name-binding: the set of AST spans that assign it.
///
/// Definition sites are recorded as spans rather than owned AST nodes —
/// the index never owns the tree it was built from, it only borrows it for
/// the duration of indexing and keeps stable byte ranges afterward.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    pub def_spans: Vec<TextRange>,
}

/// A lexical region owning a local binding table.
///
/// `node` is kept as an `AnyNodeRef` span rather than a lifetime-bound
/// reference so `Scope` can outlive the borrow used to build it; only the
/// range is read back (for `target_functions` containment checks).
#[derive(Debug, Clone)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    pub parent: Option<ScopeId>,
    /// Diagnostic name: function/class name, `<listcomp>`, `<setcomp>`,
    /// `<dictcomp>`, `<genexpr>`, `<lambda>`, or `<module>`.
    pub name: String,
    pub locals: HashMap<String, Binding>,
    pub globals_decl: HashSet<String>,
    pub nonlocals_decl: HashSet<String>,
    /// Byte range of the defining construct (`def`/`class`/`lambda`/
    /// comprehension/module), used for `target_functions` containment.
    pub span: TextRange,
}

impl Scope {
    pub fn new(id: ScopeId, kind: ScopeKind, name: impl Into<String>, parent: Option<ScopeId>, span: TextRange) -> Self {
        Scope {
            id,
            kind,
            parent,
            name: name.into(),
            locals: HashMap::new(),
            globals_decl: HashSet::new(),
            nonlocals_decl: HashSet::new(),
            span,
        }
    }

    pub fn key(&self, name: &str) -> BindingKey {
        BindingKey::new(self.id, name)
    }
}

/// Result of the indexing pass: the authoritative semantic model over one
/// parsed module. Immutable once built (§5 — the rewriter only reads it).
#[derive(Debug, Clone, Default)]
pub struct Index {
    pub scopes: Vec<Scope>,
    /// AST node identity (by span, since ruff nodes don't carry a stable
    /// arena handle of their own) → resolved binding.
    pub node_to_binding: HashMap<TextRange, BindingKey>,
    pub except_names: HashMap<BindingKey, HashSet<TextRange>>,
    pub global_names: HashMap<BindingKey, HashSet<TextRange>>,
    pub nonlocal_names: HashMap<BindingKey, HashSet<TextRange>>,
}

impl Index {
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    pub fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0 as usize]
    }

    /// All `(BindingKey, &Scope)` pairs across the whole index, in scope
    /// creation order then binding-table iteration order. Used by the
    /// Selection Engine when no anchor is supplied.
    pub fn all_bindings(&self) -> impl Iterator<Item = (BindingKey, &Scope)> {
        self.scopes.iter().flat_map(|scope| {
            scope
                .locals
                .keys()
                .map(move |name| (scope.key(name), scope))
        })
    }

    /// The scope that owns a `BindingKey`. Kept as a lookup rather than a
    /// stored reverse map since `scope_id` already identifies the scope
    /// directly.
    pub fn scope_for(&self, key: &BindingKey) -> Option<&Scope> {
        self.scopes
            .get(key.scope_id.0 as usize)
            .filter(|s| s.locals.contains_key(&key.name))
    }

    /// Nearest enclosing function-like scope of a given scope (not
    /// including itself), used for `target_functions` containment.
    pub fn enclosing_function_like(&self, mut scope_id: ScopeId) -> Option<ScopeId> {
        while let Some(parent_id) = self.scope(scope_id).parent {
            if self.scope(parent_id).kind.is_function_like() {
                return Some(parent_id);
            }
            scope_id = parent_id;
        }
        None
    }
}

/// How a caller restricts which scopes are eligible for selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeFilter {
    Local,
    Class,
    Global,
    Nonlocal,
    #[default]
    Unset,
}

/// Caller-supplied selection rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub scope_filter: ScopeFilter,
    /// Ordered set of function names; empty means no restriction. Kept as
    /// a `Vec` (order is diagnostic-only, never semantic) rather than a
    /// `HashSet` to keep a caller-facing ordering guarantee.
    #[serde(default)]
    pub target_functions: Vec<String>,
    #[serde(default)]
    pub anchor_binding_key: Option<BindingKey>,
    #[serde(default)]
    pub debug: bool,
}
