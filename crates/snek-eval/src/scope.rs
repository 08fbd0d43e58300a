//! Lexical scope: parent-linked name→value and name→type environments.
//!
//! Generalized from the `Vec<Scope>`-stack `Env` in `cadenza-eval/src/env.rs`
//! into an `Rc`-linked parent chain, because spec.md requires scopes to
//! outlive the frame that created them (a module's scope is cached and
//! handed out to every importer; a closure's captured scope must stay alive
//! for as long as the `Func` value does) — a design a flat stack can't
//! express without cloning the whole environment per closure.

use crate::types::Type;
use crate::value::Value;
use snek_syntax::InternedString;
use rustc_hash::FxHashMap;
use std::cell::RefCell;

struct Binding<T> {
    value: T,
    exported: bool,
}

/// One lexical frame. `bind_*` only ever inserts into this frame; lookup
/// walks parents. Never mutated once a child scope has been created from it
/// in module/closure contexts, though nothing here enforces that statically.
#[derive(Default)]
pub struct Scope {
    parent: Option<std::rc::Rc<Scope>>,
    variables: RefCell<FxHashMap<InternedString, Binding<Value>>>,
    types: RefCell<FxHashMap<InternedString, Binding<Type>>>,
}

impl Scope {
    pub fn root() -> Self {
        Scope::default()
    }

    pub fn child(parent: std::rc::Rc<Scope>) -> Self {
        Scope {
            parent: Some(parent),
            variables: RefCell::new(FxHashMap::default()),
            types: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn lookup_variable(&self, name: InternedString) -> Option<Value> {
        if let Some(binding) = self.variables.borrow().get(&name) {
            return Some(binding.value.clone());
        }
        self.parent.as_ref().and_then(|p| p.lookup_variable(name))
    }

    pub fn lookup_type(&self, name: InternedString) -> Option<Type> {
        if let Some(binding) = self.types.borrow().get(&name) {
            return Some(binding.value.clone());
        }
        self.parent.as_ref().and_then(|p| p.lookup_type(name))
    }

    /// Fails (returns `false`) if `name` is already bound **in this frame**;
    /// shadowing a parent binding is allowed.
    pub fn bind_variable(&self, name: InternedString, value: Value, export: bool) -> bool {
        let mut vars = self.variables.borrow_mut();
        if vars.contains_key(&name) {
            return false;
        }
        vars.insert(name, Binding { value, exported: export });
        true
    }

    pub fn bind_type(&self, name: InternedString, ty: Type, export: bool) -> bool {
        let mut types = self.types.borrow_mut();
        if types.contains_key(&name) {
            return false;
        }
        types.insert(name, Binding { value: ty, exported: export });
        true
    }

    pub fn iter_exports_variables(&self) -> Vec<(InternedString, Value)> {
        self.variables
            .borrow()
            .iter()
            .filter(|(_, b)| b.exported)
            .map(|(name, b)| (*name, b.value.clone()))
            .collect()
    }

    pub fn iter_exports_types(&self) -> Vec<(InternedString, Type)> {
        self.types
            .borrow()
            .iter()
            .filter(|(_, b)| b.exported)
            .map(|(name, b)| (*name, b.value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn child_lookup_sees_parent_bindings() {
        let parent = Rc::new(Scope::root());
        parent.bind_variable("x".into(), Value::Int(1), false);
        let child = Scope::child(parent.clone());
        assert_eq!(child.lookup_variable("x".into()), Some(Value::Int(1)));
    }

    #[test]
    fn shadowing_a_child_never_overwrites_the_parent() {
        let parent = Rc::new(Scope::root());
        parent.bind_variable("x".into(), Value::Int(1), false);
        let child = Scope::child(parent.clone());
        assert!(child.bind_variable("x".into(), Value::Int(2), false));
        assert_eq!(parent.lookup_variable("x".into()), Some(Value::Int(1)));
        assert_eq!(child.lookup_variable("x".into()), Some(Value::Int(2)));
    }

    #[test]
    fn rebinding_in_the_same_frame_fails() {
        let scope = Scope::root();
        assert!(scope.bind_variable("x".into(), Value::Int(1), false));
        assert!(!scope.bind_variable("x".into(), Value::Int(2), false));
    }

    #[test]
    fn only_current_frame_exports_are_listed() {
        let parent = Rc::new(Scope::root());
        parent.bind_variable("a".into(), Value::Int(1), true);
        let child = Scope::child(parent.clone());
        child.bind_variable("b".into(), Value::Int(2), true);
        let exports = child.iter_exports_variables();
        assert_eq!(exports.len(), 1);
        assert_eq!(exports[0].0, InternedString::from("b"));
    }
}
