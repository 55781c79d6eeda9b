//! Declared-type annotations.
//!
//! [`Ty`] is the semantic type written on the left-hand side of a
//! declaration. It is distinct from [`TypeTag`](crate::TypeTag), the
//! runtime tag of a value: a union annotation admits values with more
//! than one runtime tag, and a [`Ty::Named`] annotation is a reference
//! into an alias table resolved at check time.

use crate::error::ValueError;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Alias chains longer than this are treated as cycles.
const MAX_ALIAS_DEPTH: usize = 32;

/// A declared type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ty {
    // ── Primitives ──
    Number,
    Text,
    Bool,
    BigInt,
    Symbol,

    // ── Composites ──
    /// `A | B` — admits a value that either side admits.
    Union(Box<Ty>, Box<Ty>),
    /// A reference to a declared alias, resolved through [`Aliases`].
    Named(String),
}

impl Ty {
    /// Convenience constructor for `A | B`.
    pub fn union(a: Ty, b: Ty) -> Ty {
        Ty::Union(Box::new(a), Box::new(b))
    }

    /// Whether this annotation admits `value`, resolving named aliases
    /// through `aliases`.
    ///
    /// Errors on an unknown alias name and on alias chains deeper than
    /// the depth limit (a cycle).
    pub fn admits(&self, value: &Value, aliases: &Aliases) -> Result<bool, ValueError> {
        self.admits_at_depth(value, aliases, 0)
    }

    fn admits_at_depth(
        &self,
        value: &Value,
        aliases: &Aliases,
        depth: usize,
    ) -> Result<bool, ValueError> {
        match self {
            Ty::Number => Ok(matches!(value, Value::Number(_))),
            Ty::Text => Ok(matches!(value, Value::Text(_))),
            Ty::Bool => Ok(matches!(value, Value::Bool(_))),
            Ty::BigInt => Ok(matches!(value, Value::BigInt(_))),
            Ty::Symbol => Ok(matches!(value, Value::Symbol(_))),
            Ty::Union(a, b) => Ok(a.admits_at_depth(value, aliases, depth)?
                || b.admits_at_depth(value, aliases, depth)?),
            Ty::Named(name) => {
                if depth >= MAX_ALIAS_DEPTH {
                    return Err(ValueError::AliasCycle(name.clone()));
                }
                let target = aliases
                    .resolve(name)
                    .ok_or_else(|| ValueError::UnknownTypeName(name.clone()))?;
                target.admits_at_depth(value, aliases, depth + 1)
            }
        }
    }
}

/// Renders the annotation the way it would be written: `number`,
/// `number | string`, `Age`.
impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Number => f.write_str("number"),
            Ty::Text => f.write_str("string"),
            Ty::Bool => f.write_str("boolean"),
            Ty::BigInt => f.write_str("bigint"),
            Ty::Symbol => f.write_str("symbol"),
            Ty::Union(a, b) => write!(f, "{a} | {b}"),
            Ty::Named(name) => f.write_str(name),
        }
    }
}

/// Declared type aliases, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Aliases {
    entries: Vec<(String, Ty)>,
}

impl Aliases {
    /// Create an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` as an alias for `ty`. Errors if `name` is
    /// already declared.
    pub fn define(&mut self, name: impl Into<String>, ty: Ty) -> Result<(), ValueError> {
        let name = name.into();
        if self.resolve(&name).is_some() {
            return Err(ValueError::DuplicateAlias(name));
        }
        self.entries.push((name, ty));
        Ok(())
    }

    /// Look up the target of `name`, one level deep.
    pub fn resolve(&self, name: &str) -> Option<&Ty> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ty)| ty)
    }
}
