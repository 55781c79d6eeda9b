//! The primer tour: a linear sequence of typed declarations and prints.
//!
//! The tour executes statements in file order, top to bottom, with no
//! branching. Each statement declares a named, typed, immutable binding
//! or prints a bound value next to its runtime type tag. Output goes
//! through any [`std::io::Write`], so the binary and the tests share
//! one code path.

mod env;
mod error;
mod script;

pub use env::Environment;
pub use error::ScriptError;
pub use script::{run, run_tour, standard_aliases, tour, Decl, Step, GREETING};

/// Result type used throughout the tour runner.
pub type Result<T> = std::result::Result<T, ScriptError>;
