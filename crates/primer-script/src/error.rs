//! Tour runner error types.

use primer_values::{Ty, TypeTag, ValueError};
use thiserror::Error;

/// Errors that can occur while running a tour.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A binding name was declared twice.
    #[error("variable already declared: {0}")]
    Redeclared(String),

    /// A print statement named a variable with no binding.
    #[error("undefined variable: {0}")]
    Undefined(String),

    /// A declaration's annotation does not admit its value.
    #[error("declaration `{name}`: {declared} does not admit a {actual} value")]
    TypeMismatch {
        name: String,
        declared: Ty,
        actual: TypeTag,
    },

    /// A value operation or alias resolution failed.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The output sink failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
