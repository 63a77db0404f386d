//! Scope & Binding Indexer.
//!
//! A single depth-first traversal over a parsed module that produces an
//! [`Index`]: the scope tree, every binding's definition sites, the
//! node → binding resolution map, and the `global`/`nonlocal`/except-handler
//! declaration maps. This is the bulk of the engineering in this crate — the
//! largest component by far, not selection or rewriting.
//!
//! AST node identity is modeled by byte range rather than by pointer or
//! arena handle, since a tree owned by someone else can't carry a stable
//! handle of this index's own making: every node ruff hands us has a
//! distinct `TextRange`, so a range is a perfectly good stable key for
//! `node_to_binding` without the index needing to borrow the tree past the
//! traversal.

use std::collections::HashMap;

use ruff_python_ast::{
    Alias, Expr, ExprContext, Identifier, ModModule, Parameter, ParameterWithDefault, Parameters,
    Stmt,
};
use ruff_text_size::{Ranged, TextRange};

use rescope_core::diagnostic::Diagnostic;
use rescope_core::span::Span;

use crate::types::{BindingKey, Index, Scope, ScopeId, ScopeKind};

fn core_span(range: TextRange) -> Span {
    Span::new(u32::from(range.start()) as u64, u32::from(range.end()) as u64)
}

/// Build the [`Index`] for a parsed module, returning any diagnostics
/// accumulated along the way (unresolved names, invalid declarations).
pub fn build_index(module: &ModModule) -> (Index, Vec<Diagnostic>) {
    let mut indexer = Indexer::new(module.range());
    indexer.walk_body(&module.body);
    (indexer.index, indexer.diagnostics)
}

struct Indexer {
    index: Index,
    current: ScopeId,
    diagnostics: Vec<Diagnostic>,
    /// Cache of the owner scope computed when a `nonlocal` declaration was
    /// first seen, so later reads/assignments of the same name in the same
    /// scope are routed consistently even as more bindings are discovered.
    nonlocal_owner: HashMap<(ScopeId, String), ScopeId>,
}

impl Indexer {
    fn new(module_span: TextRange) -> Self {
        let mut index = Index::default();
        index.scopes.push(Scope::new(
            ScopeId::MODULE,
            ScopeKind::Module,
            "<module>",
            None,
            module_span,
        ));
        Indexer {
            index,
            current: ScopeId::MODULE,
            diagnostics: Vec::new(),
            nonlocal_owner: HashMap::new(),
        }
    }

    // ------------------------------------------------------------------
    // Scope management
    // ------------------------------------------------------------------

    fn enter_scope(&mut self, kind: ScopeKind, name: String, span: TextRange) -> ScopeId {
        let parent = Some(self.current);
        let id = ScopeId(self.index.scopes.len() as u32);
        tracing::trace!(scope = id.0, ?kind, %name, "entering scope");
        self.index.scopes.push(Scope::new(id, kind, name, parent, span));
        self.current = id;
        id
    }

    fn exit_scope(&mut self, prev: ScopeId) {
        tracing::trace!(scope = self.current.0, "exiting scope");
        self.current = prev;
    }

    // ------------------------------------------------------------------
    // Binding creation: owner-scope resolution
    // ------------------------------------------------------------------

    /// Resolve the owner scope of an assignment to `name` occurring in
    /// `scope_id`: `global`-declared names own at module scope,
    /// `nonlocal`-declared names own at whichever enclosing function first
    /// bound them, everything else owns in place.
    fn assignment_owner(&mut self, name: &str, scope_id: ScopeId) -> ScopeId {
        let scope = self.index.scope(scope_id);
        if scope.globals_decl.contains(name) {
            return ScopeId::MODULE;
        }
        if scope.nonlocals_decl.contains(name) {
            return self
                .nonlocal_owner
                .get(&(scope_id, name.to_string()))
                .copied()
                .unwrap_or(scope_id);
        }
        scope_id
    }

    /// Record a definition of `name` at `range`, in the scope selected by
    /// `assignment_owner`. Returns the resulting binding key.
    fn define(&mut self, name: &str, range: TextRange, scope_id: ScopeId) -> BindingKey {
        let owner = self.assignment_owner(name, scope_id);
        self.define_in_scope(name, range, owner)
    }

    /// Like [`Self::define`] but bypasses `global`/`nonlocal` owner
    /// resolution — used for the walrus operator, which always binds in the
    /// nearest enclosing non-comprehension scope regardless of any `global`/
    /// `nonlocal` declaration active there.
    fn define_in_scope(&mut self, name: &str, range: TextRange, owner: ScopeId) -> BindingKey {
        self.index
            .scope_mut(owner)
            .locals
            .entry(name.to_string())
            .or_default()
            .def_spans
            .push(range);
        let key = BindingKey::new(owner, name.to_string());
        tracing::trace!(%key, "binding created");
        self.index.node_to_binding.insert(range, key.clone());
        key
    }

    /// Move an existing local binding of `name` in `scope_id` (created by
    /// assignments that lexically preceded a `global`/`nonlocal`
    /// declaration) into `owner`. The declaration wins retroactively: every
    /// prior assignment is treated as if it had always targeted `owner`.
    fn promote_existing_local(&mut self, scope_id: ScopeId, name: &str, owner: ScopeId) {
        if scope_id == owner {
            return;
        }
        let Some(binding) = self.index.scope_mut(scope_id).locals.remove(name) else {
            return;
        };
        let old_key = BindingKey::new(scope_id, name.to_string());
        let new_key = BindingKey::new(owner, name.to_string());
        for v in self.index.node_to_binding.values_mut() {
            if *v == old_key {
                *v = new_key.clone();
            }
        }
        self.index
            .scope_mut(owner)
            .locals
            .entry(name.to_string())
            .or_default()
            .def_spans
            .extend(binding.def_spans);
    }

    // ------------------------------------------------------------------
    // Use resolution: LEGB lookup for a read
    // ------------------------------------------------------------------

    fn use_name(&mut self, name: &str, range: TextRange, scope_id: ScopeId) {
        match self.resolve_read(name, scope_id) {
            Some(key) => {
                self.index.node_to_binding.insert(range, key);
            }
            None => self
                .diagnostics
                .push(Diagnostic::unresolved_name(name, core_span(range))),
        }
    }

    fn resolve_read(&mut self, name: &str, scope_id: ScopeId) -> Option<BindingKey> {
        let scope = self.index.scope(scope_id);

        if scope.globals_decl.contains(name) {
            // A `global` declaration creates the module-level binding on
            // demand if nothing has assigned it yet.
            if !self.index.scope(ScopeId::MODULE).locals.contains_key(name) {
                self.index
                    .scope_mut(ScopeId::MODULE)
                    .locals
                    .entry(name.to_string())
                    .or_default();
            }
            return Some(BindingKey::new(ScopeId::MODULE, name.to_string()));
        }

        if scope.nonlocals_decl.contains(name) {
            return self
                .nonlocal_owner
                .get(&(scope_id, name.to_string()))
                .cloned()
                .map(|owner| BindingKey::new(owner, name.to_string()));
        }

        if scope.locals.contains_key(name) {
            return Some(scope.key(name));
        }

        if scope.kind == ScopeKind::Class {
            // Class scope is not in the free-variable chain: skip straight
            // to module scope rather than walking enclosing functions.
            return self.resolve_in_module(name);
        }

        let mut cursor = scope.parent;
        while let Some(parent_id) = cursor {
            let parent = self.index.scope(parent_id);
            if parent.kind != ScopeKind::Class && parent.locals.contains_key(name) {
                return Some(parent.key(name));
            }
            cursor = parent.parent;
        }

        self.resolve_in_module(name)
    }

    fn resolve_in_module(&self, name: &str) -> Option<BindingKey> {
        if self.index.scope(ScopeId::MODULE).locals.contains_key(name) {
            Some(BindingKey::new(ScopeId::MODULE, name.to_string()))
        } else {
            None
        }
    }

    /// Nearest enclosing scope (including `scope_id` itself) that is not a
    /// Comprehension scope — the walrus-operator target rule.
    fn nearest_non_comprehension(&self, mut scope_id: ScopeId) -> ScopeId {
        loop {
            let scope = self.index.scope(scope_id);
            if scope.kind != ScopeKind::Comprehension {
                return scope_id;
            }
            match scope.parent {
                Some(parent) => scope_id = parent,
                None => return scope_id,
            }
        }
    }

    // ------------------------------------------------------------------
    // global / nonlocal declarations
    // ------------------------------------------------------------------

    fn declare_global(&mut self, names: &[Identifier]) {
        let scope_id = self.current;
        for ident in names {
            let name = ident.as_str();
            if self.index.scope(scope_id).nonlocals_decl.contains(name) {
                self.diagnostics.push(Diagnostic::invalid_declaration(
                    format!("'{name}' declared both global and nonlocal"),
                    core_span(ident.range()),
                ));
                continue;
            }
            self.index
                .scope_mut(scope_id)
                .globals_decl
                .insert(name.to_string());
            self.promote_existing_local(scope_id, name, ScopeId::MODULE);
            let key = BindingKey::new(ScopeId::MODULE, name.to_string());
            self.index
                .global_names
                .entry(key)
                .or_default()
                .insert(ident.range());
        }
    }

    fn declare_nonlocal(&mut self, names: &[Identifier]) {
        let scope_id = self.current;
        for ident in names {
            let name = ident.as_str();
            if self.index.scope(scope_id).globals_decl.contains(name) {
                self.diagnostics.push(Diagnostic::invalid_declaration(
                    format!("'{name}' declared both global and nonlocal"),
                    core_span(ident.range()),
                ));
                continue;
            }
            self.index
                .scope_mut(scope_id)
                .nonlocals_decl
                .insert(name.to_string());

            let owner = self.find_function_like_owner_with_local(scope_id, name).unwrap_or_else(|| {
                self.diagnostics.push(Diagnostic::invalid_declaration(
                    format!("nonlocal '{name}' has no binding in any enclosing function"),
                    core_span(ident.range()),
                ));
                scope_id
            });
            self.nonlocal_owner.insert((scope_id, name.to_string()), owner);
            self.promote_existing_local(scope_id, name, owner);
            let key = BindingKey::new(owner, name.to_string());
            self.index
                .nonlocal_names
                .entry(key)
                .or_default()
                .insert(ident.range());
        }
    }

    fn find_function_like_owner_with_local(&self, scope_id: ScopeId, name: &str) -> Option<ScopeId> {
        let mut cursor = self.index.scope(scope_id).parent;
        while let Some(parent_id) = cursor {
            let parent = self.index.scope(parent_id);
            if parent.kind.is_function_like() && parent.locals.contains_key(name) {
                return Some(parent_id);
            }
            cursor = parent.parent;
        }
        None
    }

    // ------------------------------------------------------------------
    // Statement traversal
    // ------------------------------------------------------------------

    fn walk_body(&mut self, body: &[Stmt]) {
        for stmt in body {
            self.walk_stmt(stmt);
        }
    }

    fn walk_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FunctionDef(f) => {
                self.define(f.name.as_str(), f.name.range(), self.current);
                for dec in &f.decorator_list {
                    self.walk_expr(&dec.expression);
                }
                self.walk_parameters_defaults_and_annotations(&f.parameters);
                if let Some(returns) = &f.returns {
                    self.walk_expr(returns);
                }
                let prev = self.current;
                let scope_name = f.name.as_str().to_string();
                self.enter_scope(ScopeKind::Function, scope_name, f.range());
                self.bind_parameters(&f.parameters);
                self.walk_body(&f.body);
                self.exit_scope(prev);
            }
            Stmt::ClassDef(c) => {
                self.define(c.name.as_str(), c.name.range(), self.current);
                for dec in &c.decorator_list {
                    self.walk_expr(&dec.expression);
                }
                if let Some(args) = &c.arguments {
                    for arg in &args.args {
                        self.walk_expr(arg);
                    }
                    for kw in &args.keywords {
                        self.walk_expr(&kw.value);
                    }
                }
                let prev = self.current;
                let scope_name = c.name.as_str().to_string();
                self.enter_scope(ScopeKind::Class, scope_name, c.range());
                self.walk_body(&c.body);
                self.exit_scope(prev);
            }
            Stmt::Return(r) => {
                if let Some(v) = &r.value {
                    self.walk_expr(v);
                }
            }
            Stmt::Delete(d) => {
                for t in &d.targets {
                    self.walk_expr(t);
                }
            }
            Stmt::Assign(a) => {
                // Targets are recorded before the value is walked, so a
                // self-referential first binding in a fresh scope (`x = x +
                // 1` inside a function that has no outer-scope `x`) resolves
                // its RHS read to the newly-created local, not whatever the
                // enclosing scope happens to bind — matching the order the
                // original tool records assignment targets before descending
                // into the rest of the statement.
                for t in &a.targets {
                    self.walk_expr(t);
                }
                self.walk_expr(&a.value);
            }
            Stmt::AugAssign(a) => {
                self.walk_expr(&a.target);
                self.walk_expr(&a.value);
            }
            Stmt::AnnAssign(a) => {
                self.walk_expr(&a.target);
                self.walk_expr(&a.annotation);
                if let Some(v) = &a.value {
                    self.walk_expr(v);
                }
            }
            Stmt::For(f) => {
                self.walk_expr(&f.target);
                self.walk_expr(&f.iter);
                self.walk_body(&f.body);
                self.walk_body(&f.orelse);
            }
            Stmt::While(w) => {
                self.walk_expr(&w.test);
                self.walk_body(&w.body);
                self.walk_body(&w.orelse);
            }
            Stmt::If(i) => {
                self.walk_expr(&i.test);
                self.walk_body(&i.body);
                for clause in &i.elif_else_clauses {
                    if let Some(test) = &clause.test {
                        self.walk_expr(test);
                    }
                    self.walk_body(&clause.body);
                }
            }
            Stmt::With(w) => {
                for item in &w.items {
                    if let Some(vars) = &item.optional_vars {
                        self.walk_expr(vars);
                    }
                    self.walk_expr(&item.context_expr);
                }
                self.walk_body(&w.body);
            }
            Stmt::Match(m) => {
                // Structural pattern matching capture bindings are not
                // modeled: this indexer targets assignment, `for`, `with`,
                // function/lambda parameters, comprehensions, imports, and
                // except handlers, not `case` patterns. Subject and
                // guard/body expressions still get normal treatment.
                self.walk_expr(&m.subject);
                for case in &m.cases {
                    if let Some(guard) = &case.guard {
                        self.walk_expr(guard);
                    }
                    self.walk_body(&case.body);
                }
            }
            Stmt::Raise(r) => {
                if let Some(exc) = &r.exc {
                    self.walk_expr(exc);
                }
                if let Some(cause) = &r.cause {
                    self.walk_expr(cause);
                }
            }
            Stmt::Try(t) => {
                self.walk_body(&t.body);
                for handler in &t.handlers {
                    let ruff_python_ast::ExceptHandler::ExceptHandler(h) = handler;
                    if let Some(ty) = &h.type_ {
                        self.walk_expr(ty);
                    }
                    if let Some(name) = &h.name {
                        let key = self.define(name.as_str(), name.range(), self.current);
                        self.index
                            .except_names
                            .entry(key)
                            .or_default()
                            .insert(handler.range());
                    }
                    self.walk_body(&h.body);
                }
                self.walk_body(&t.orelse);
                self.walk_body(&t.finalbody);
            }
            Stmt::Assert(a) => {
                self.walk_expr(&a.test);
                if let Some(msg) = &a.msg {
                    self.walk_expr(msg);
                }
            }
            Stmt::Import(imp) => {
                for alias in &imp.names {
                    self.bind_import_alias(alias, None);
                }
            }
            Stmt::ImportFrom(imp) => {
                for alias in &imp.names {
                    self.bind_import_alias(alias, Some(imp.range()));
                }
            }
            Stmt::Global(g) => self.declare_global(&g.names),
            Stmt::Nonlocal(n) => self.declare_nonlocal(&n.names),
            Stmt::Expr(e) => self.walk_expr(&e.value),
            Stmt::Pass(_) | Stmt::Break(_) | Stmt::Continue(_) => {}
            Stmt::TypeAlias(alias) => {
                self.define(
                    type_alias_name(&alias.name),
                    alias.name.range(),
                    self.current,
                );
                self.walk_expr(&alias.value);
            }
            Stmt::IpyEscapeCommand(_) => {}
        }
    }

    fn bind_import_alias(&mut self, alias: &Alias, _from_stmt: Option<TextRange>) {
        if alias.name.as_str() == "*" {
            return;
        }
        let local_name = match &alias.asname {
            Some(asname) => asname.as_str().to_string(),
            None => alias
                .name
                .as_str()
                .split('.')
                .next()
                .unwrap_or(alias.name.as_str())
                .to_string(),
        };
        let range = alias.asname.as_ref().map(|a| a.range()).unwrap_or_else(|| alias.name.range());
        self.define(&local_name, range, self.current);
    }

    // ------------------------------------------------------------------
    // Expression traversal
    // ------------------------------------------------------------------

    fn walk_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Name(name) => match name.ctx {
                ExprContext::Store => {
                    self.define(name.id.as_str(), name.range(), self.current);
                }
                ExprContext::Load | ExprContext::Del => {
                    self.use_name(name.id.as_str(), name.range(), self.current);
                }
                ExprContext::Invalid => {}
            },
            Expr::BoolOp(e) => {
                for v in &e.values {
                    self.walk_expr(v);
                }
            }
            Expr::Named(e) => {
                // Walrus: target binds in the nearest enclosing non-comprehension scope.
                self.walk_expr(&e.value);
                if let Expr::Name(name) = e.target.as_ref() {
                    let owner = self.nearest_non_comprehension(self.current);
                    let key = self.define_in_scope(name.id.as_str(), name.range(), owner);
                    let _ = key;
                } else {
                    self.walk_expr(&e.target);
                }
            }
            Expr::BinOp(e) => {
                self.walk_expr(&e.left);
                self.walk_expr(&e.right);
            }
            Expr::UnaryOp(e) => self.walk_expr(&e.operand),
            Expr::Lambda(e) => {
                if let Some(params) = &e.parameters {
                    self.walk_parameters_defaults_and_annotations(params);
                }
                let prev = self.current;
                self.enter_scope(ScopeKind::Lambda, "<lambda>".to_string(), e.range());
                if let Some(params) = &e.parameters {
                    self.bind_parameters(params);
                }
                self.walk_expr(&e.body);
                self.exit_scope(prev);
            }
            Expr::If(e) => {
                self.walk_expr(&e.test);
                self.walk_expr(&e.body);
                self.walk_expr(&e.orelse);
            }
            Expr::Dict(e) => {
                for item in &e.items {
                    if let Some(k) = &item.key {
                        self.walk_expr(k);
                    }
                    self.walk_expr(&item.value);
                }
            }
            Expr::Set(e) => {
                for v in &e.elts {
                    self.walk_expr(v);
                }
            }
            Expr::ListComp(e) => {
                self.walk_comprehension_expr("<listcomp>", &[e.elt.as_ref()], &e.generators)
            }
            Expr::SetComp(e) => {
                self.walk_comprehension_expr("<setcomp>", &[e.elt.as_ref()], &e.generators)
            }
            Expr::DictComp(e) => self.walk_comprehension_expr(
                "<dictcomp>",
                &[e.key.as_ref(), e.value.as_ref()],
                &e.generators,
            ),
            Expr::Generator(e) => {
                self.walk_comprehension_expr("<genexpr>", &[e.elt.as_ref()], &e.generators)
            }
            Expr::Await(e) => self.walk_expr(&e.value),
            Expr::Yield(e) => {
                if let Some(v) = &e.value {
                    self.walk_expr(v);
                }
            }
            Expr::YieldFrom(e) => self.walk_expr(&e.value),
            Expr::Compare(e) => {
                self.walk_expr(&e.left);
                for c in e.comparators.iter() {
                    self.walk_expr(c);
                }
            }
            Expr::Call(e) => {
                self.walk_expr(&e.func);
                for arg in &e.arguments.args {
                    self.walk_expr(arg);
                }
                for kw in &e.arguments.keywords {
                    // kw.arg is a syntactic key (`name=`), not a binding use.
                    self.walk_expr(&kw.value);
                }
            }
            Expr::FString(e) => {
                for part in e.value.elements() {
                    if let ruff_python_ast::FStringElement::Expression(expr_elem) = part {
                        self.walk_expr(&expr_elem.expression);
                    }
                }
            }
            Expr::StringLiteral(_)
            | Expr::BytesLiteral(_)
            | Expr::NumberLiteral(_)
            | Expr::BooleanLiteral(_)
            | Expr::NoneLiteral(_)
            | Expr::EllipsisLiteral(_) => {}
            Expr::Attribute(e) => {
                // Only the object expression is visited; `attr` is not a
                // `Name` node and attribute renaming is out of scope.
                self.walk_expr(&e.value);
            }
            Expr::Subscript(e) => {
                self.walk_expr(&e.value);
                self.walk_expr(&e.slice);
            }
            Expr::Starred(e) => self.walk_expr(&e.value),
            Expr::List(e) => {
                for v in &e.elts {
                    self.walk_expr(v);
                }
            }
            Expr::Tuple(e) => {
                for v in &e.elts {
                    self.walk_expr(v);
                }
            }
            Expr::Slice(e) => {
                if let Some(l) = &e.lower {
                    self.walk_expr(l);
                }
                if let Some(u) = &e.upper {
                    self.walk_expr(u);
                }
                if let Some(s) = &e.step {
                    self.walk_expr(s);
                }
            }
            Expr::IpyEscapeCommand(_) => {}
        }
    }

    /// Desugars `[elt for target in iter if ...]`-style comprehensions.
    /// The first generator's `iter` is evaluated in the *enclosing* scope
    /// (standard Python semantics); everything else — later generators'
    /// `iter`, every `target`, every `if`, and the result expression(s) —
    /// is evaluated inside the fresh comprehension scope.
    fn walk_comprehension_expr(
        &mut self,
        kind_name: &str,
        results: &[&Expr],
        generators: &[ruff_python_ast::Comprehension],
    ) {
        if let Some(first) = generators.first() {
            self.walk_expr(&first.iter);
        }
        let prev = self.current;
        let kind_name = kind_name.to_string();
        let span = generators
            .first()
            .map(|g| g.range())
            .unwrap_or_else(|| results.first().map(|r| r.range()).unwrap_or_default());
        self.enter_scope(ScopeKind::Comprehension, kind_name, span);
        for (i, gen) in generators.iter().enumerate() {
            if i > 0 {
                self.walk_expr(&gen.iter);
            }
            self.walk_expr(&gen.target);
            for if_expr in &gen.ifs {
                self.walk_expr(if_expr);
            }
        }
        for result in results {
            self.walk_expr(result);
        }
        self.exit_scope(prev);
    }

    fn walk_parameters_defaults_and_annotations(&mut self, parameters: &Parameters) {
        let walk_one = |me: &mut Self, p: &ParameterWithDefault| {
            if let Some(ann) = &p.parameter.annotation {
                me.walk_expr(ann);
            }
            if let Some(default) = &p.default {
                me.walk_expr(default);
            }
        };
        for p in &parameters.posonlyargs {
            walk_one(self, p);
        }
        for p in &parameters.args {
            walk_one(self, p);
        }
        for p in &parameters.kwonlyargs {
            walk_one(self, p);
        }
        if let Some(vararg) = &parameters.vararg {
            self.walk_parameter_annotation(vararg);
        }
        if let Some(kwarg) = &parameters.kwarg {
            self.walk_parameter_annotation(kwarg);
        }
    }

    fn walk_parameter_annotation(&mut self, param: &Parameter) {
        if let Some(ann) = &param.annotation {
            self.walk_expr(ann);
        }
    }

    /// Binds every formal parameter in the now-current (function/lambda)
    /// scope. Parameter `arg` nodes are registered directly in
    /// `node_to_binding` here, always, at indexing time — so rewriting never
    /// needs a scope-membership guess to find a parameter's own name node.
    fn bind_parameters(&mut self, parameters: &Parameters) {
        for p in &parameters.posonlyargs {
            self.define(p.parameter.name.as_str(), p.parameter.name.range(), self.current);
        }
        for p in &parameters.args {
            self.define(p.parameter.name.as_str(), p.parameter.name.range(), self.current);
        }
        for p in &parameters.kwonlyargs {
            self.define(p.parameter.name.as_str(), p.parameter.name.range(), self.current);
        }
        if let Some(vararg) = &parameters.vararg {
            self.define(vararg.name.as_str(), vararg.name.range(), self.current);
        }
        if let Some(kwarg) = &parameters.kwarg {
            self.define(kwarg.name.as_str(), kwarg.name.range(), self.current);
        }
    }
}

fn type_alias_name(expr: &Expr) -> &str {
    match expr {
        Expr::Name(n) => n.id.as_str(),
        _ => "<type_alias>",
    }
}
