//! Type environment with lexically scoped bindings.
//!
//! [`TypeEnv`] manages an owned stack of scope frames. Each frame maps
//! names — value identifiers and type names share one namespace — to a
//! [`Type`]. A frame is pushed on block entry and popped on block exit,
//! never shared across sibling blocks.

use std::collections::HashMap;

use crate::ty::Type;

// ══════════════════════════════════════════════════════════════════════════════
// Scope
// ══════════════════════════════════════════════════════════════════════════════

/// A single scope frame, owning the bindings of one syntactic block.
#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, Type>,
}

// ══════════════════════════════════════════════════════════════════════════════
// TypeEnv
// ══════════════════════════════════════════════════════════════════════════════

/// A stack of scope frames for name resolution.
#[derive(Debug)]
pub struct TypeEnv {
    scopes: Vec<Scope>,
}

impl TypeEnv {
    /// Create an environment whose root frame holds the built-in
    /// primitive type names.
    pub fn new() -> Self {
        let mut root = Scope::default();
        root.bindings.insert("i32".to_string(), Type::I32);
        root.bindings.insert("f32".to_string(), Type::F32);
        root.bindings.insert("bool".to_string(), Type::Bool);
        root.bindings.insert("string".to_string(), Type::String);
        Self { scopes: vec![root] }
    }

    /// Push a new scope frame onto the stack.
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::default());
    }

    /// Pop the top scope frame, discarding its bindings.
    pub fn pop_scope(&mut self) {
        debug_assert!(self.scopes.len() > 1, "cannot pop the root scope");
        self.scopes.pop();
    }

    /// Insert a binding into the current (innermost) frame and return the
    /// bound type. Rebinding an existing name in the same frame simply
    /// replaces it; only type declarations guard against duplicates, via
    /// [`TypeEnv::is_defined`].
    pub fn define(&mut self, name: &str, ty: Type) -> Type {
        let scope = self.scopes.last_mut().expect("no scope");
        scope.bindings.insert(name.to_string(), ty.clone());
        ty
    }

    /// Look up a binding by name, searching from innermost to outermost
    /// frame. `None` is not an error by itself; callers decide.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        for scope in self.scopes.iter().rev() {
            if let Some(ty) = scope.bindings.get(name) {
                return Some(ty);
            }
        }
        None
    }

    /// Check whether a name is bound in the **current** frame only.
    ///
    /// Duplicate-type detection is per-frame, so a nested scope may
    /// shadow an outer type name.
    pub fn is_defined(&self, name: &str) -> bool {
        self.scopes
            .last()
            .is_some_and(|s| s.bindings.contains_key(name))
    }
}

impl Default for TypeEnv {
    fn default() -> Self {
        Self::new()
    }
}
