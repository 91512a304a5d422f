use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Index of a scope inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, which always exists.
    pub const GLOBAL: Self = Self(0);
}

#[derive(Debug, Default)]
struct Scope {
    values: HashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Variable bindings, organized as a chain of lexical scopes.
///
/// Scopes live in an arena addressed by [`ScopeId`]; each records its own
/// name-to-value map and the id of its enclosing scope. Lookups and
/// assignments start at a given scope and walk outward through parents.
/// Scopes are pushed and popped in stack order.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Opens a new innermost scope enclosed by `parent`.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { values: HashMap::new(),
                                 parent: Some(parent) });
        tracing::trace!(scope = id.0, parent = parent.0, "pushed scope");
        id
    }

    /// Closes `scope` and every scope opened after it. The global scope is
    /// never removed.
    pub fn pop_scope(&mut self, scope: ScopeId) {
        let keep = scope.0.max(1);
        self.scopes.truncate(keep);
        tracing::trace!(scope = scope.0, "popped scope");
    }

    /// Number of scopes currently open, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Creates or overwrites a binding directly in `scope`.
    ///
    /// Never fails. Redefining a name in the same scope replaces its value.
    pub fn define(&mut self, scope: ScopeId, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scopes.get_mut(scope.0) {
            scope.values.insert(name.into(), value);
        }
    }

    /// Looks up `name`, starting at `scope` and walking outward.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if no scope in the chain binds the
    /// name.
    pub fn get(&self, scope: ScopeId, name: &Token) -> EvalResult<Value> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let Some(scope) = self.scopes.get(id.0) else {
                break;
            };
            if let Some(value) = scope.values.get(&name.lexeme) {
                return Ok(value.clone());
            }
            current = scope.parent;
        }

        Err(RuntimeError::UndefinedVariable { name: name.clone() })
    }

    /// Overwrites the nearest existing binding of `name`, starting at `scope`
    /// and walking outward. Never creates a binding.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if no scope in the chain binds the
    /// name.
    pub fn assign(&mut self, scope: ScopeId, name: &Token, value: Value) -> EvalResult<()> {
        let mut current = Some(scope);

        while let Some(id) = current {
            let Some(scope) = self.scopes.get_mut(id.0) else {
                break;
            };
            if let Some(slot) = scope.values.get_mut(&name.lexeme) {
                *slot = value;
                return Ok(());
            }
            current = scope.parent;
        }

        Err(RuntimeError::UndefinedVariable { name: name.clone() })
    }
}
