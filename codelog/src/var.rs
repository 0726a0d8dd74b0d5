//! Script variable store.
//!
//! Holds one [`Variable`] per name for the lifetime of a run.  Iteration
//! follows the order in which names were first defined; overwriting a
//! variable keeps its original slot.

use crate::script::value::{infer, strip_quotes, VarType};

/// A variable created by a `set` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    /// Value with one layer of surrounding quotes removed.
    pub value: String,
    /// Type inferred from the raw, still-quoted text.
    pub ty: VarType,
}

/// Ordered name → [`Variable`] store.
#[derive(Debug, Default)]
pub struct VarStore {
    vars: Vec<Variable>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) a variable from the raw text of a `set` line.
    ///
    /// The stored value has one layer of matching quotes stripped, but the
    /// type is inferred from `raw` as written, so `set x "5"` is a `str`.
    pub fn set(&mut self, name: impl Into<String>, raw: &str) {
        let var = Variable {
            name: name.into(),
            value: strip_quotes(raw).to_owned(),
            ty: infer(raw),
        };
        if let Some(slot) = self.vars.iter_mut().find(|v| v.name == var.name) {
            *slot = var;
        } else {
            self.vars.push(var);
        }
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.iter().find(|v| v.name == name)
    }

    /// Returns `true` if the variable is set.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over all variables in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
