//! Runtime value model for the primer tour.
//!
//! This crate defines the dynamic values the tour demonstrates
//! (numbers, text, booleans, arbitrary-precision integers, and symbols)
//! together with their runtime type tags, the declared-type annotations
//! with unions and aliases, and the explicit addition policy that
//! replaces the source ecosystem's implicit `number + string` coercion.

mod error;
mod ops;
mod symbol;
mod ty;
mod value;

pub use error::ValueError;
pub use ops::{add, number_to_text};
pub use symbol::Symbol;
pub use ty::{Aliases, Ty};
pub use value::{TypeTag, Value};

/// Result type used throughout the value model.
pub type Result<T> = std::result::Result<T, ValueError>;
