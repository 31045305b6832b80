use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interner::Symbol;
use crate::value::Value;

/// A lexically nested mapping of names to values.
///
/// Lookup walks outward through the parent chain; definition always writes to
/// the innermost environment.  Environments are shared (`Rc`) because every
/// closure keeps the one in effect at its definition site alive.
#[derive(Debug)]
pub struct Env {
    parent: Option<Rc<Env>>,
    bindings: RefCell<HashMap<Symbol, Value>>,
}

impl Env {
    pub fn new() -> Rc<Env> {
        Rc::new(Env {
            parent: None,
            bindings: RefCell::new(HashMap::new()),
        })
    }

    pub fn with_parent(parent: Rc<Env>) -> Rc<Env> {
        Rc::new(Env {
            parent: Some(parent),
            bindings: RefCell::new(HashMap::new()),
        })
    }

    /// Bind `sym` in this environment.  Rebinding a name replaces the old
    /// value; outer bindings of the same name are shadowed, not touched.
    pub fn set(&self, sym: &Symbol, val: Value) {
        self.bindings.borrow_mut().insert(sym.clone(), val);
    }

    pub fn get(&self, sym: &Symbol) -> Option<Value> {
        match self.bindings.borrow().get(sym) {
            Some(v) => Some(v.clone()),
            None => self.parent.as_ref().and_then(|p| p.get(sym)),
        }
    }
}
