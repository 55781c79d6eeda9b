//! Define-once binding environment for the tour.

use crate::error::ScriptError;
use primer_values::Value;

/// Flat binding table in definition order.
///
/// Bindings are immutable after definition. The tour has no scopes and
/// no reassignment, so a single ordered table is enough; `define`
/// always appends and rejects a name that already exists.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: Vec<(String, Value)>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a binding. Errors if `name` is already bound.
    pub fn define(&mut self, name: &str, value: Value) -> Result<(), ScriptError> {
        if self.get(name).is_some() {
            return Err(ScriptError::Redeclared(name.to_string()));
        }
        self.bindings.push((name.to_string(), value));
        Ok(())
    }

    /// Look up a binding by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Binding names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
