//! The runtime value enum and its type tags.
//!
//! [`Value`] is the dynamic representation a running tour works with.
//! [`TypeTag`] is what the console prints next to a value: the
//! `typeof`-style tag, one per variant.

use crate::symbol::Symbol;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// A runtime value.
///
/// Serializes externally tagged with the same tag strings as
/// [`TypeTag`], e.g. `{"number": 4.0}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// IEEE-754 double, the ecosystem's `number`.
    #[serde(rename = "number")]
    Number(f64),
    /// UTF-8 text.
    #[serde(rename = "string")]
    Text(String),
    /// `true` or `false`.
    #[serde(rename = "boolean")]
    Bool(bool),
    /// Arbitrary-precision integer, serialized as its decimal digits.
    #[serde(rename = "bigint", serialize_with = "bigint_as_decimal")]
    BigInt(BigInt),
    /// Unique opaque token, serialized as its label only
    /// (the identity is process-local).
    #[serde(rename = "symbol")]
    Symbol(Symbol),
}

impl Value {
    /// The runtime type tag of this value.
    pub fn type_of(&self) -> TypeTag {
        match self {
            Value::Number(_) => TypeTag::Number,
            Value::Text(_) => TypeTag::Text,
            Value::Bool(_) => TypeTag::Bool,
            Value::BigInt(_) => TypeTag::BigInt,
            Value::Symbol(_) => TypeTag::Symbol,
        }
    }
}

/// Console rendering: integral numbers print without a fraction part
/// (`4`, not `4.0`), text prints verbatim with no quotes, bigints as
/// plain digits, symbols as `Symbol(label)`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}

fn bigint_as_decimal<S: Serializer>(n: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&n.to_string())
}

/// Runtime type tag: the `typeof` vocabulary of the source ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "boolean")]
    Bool,
    #[serde(rename = "bigint")]
    BigInt,
    #[serde(rename = "symbol")]
    Symbol,
}

impl TypeTag {
    /// The tag string exactly as the console prints it.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Number => "number",
            TypeTag::Text => "string",
            TypeTag::Bool => "boolean",
            TypeTag::BigInt => "bigint",
            TypeTag::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
