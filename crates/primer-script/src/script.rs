//! Statement model, canonical tour, and runner.

use crate::env::Environment;
use crate::error::ScriptError;
use num_bigint::BigInt;
use primer_values::{add, Aliases, Symbol, Ty, Value};
use std::io::Write;

/// The line printed before the declarations.
pub const GREETING: &str = "A quick tour of primitive values.";

/// One statement of a tour.
#[derive(Debug)]
pub enum Step {
    /// Print a line verbatim.
    Say(String),
    /// Bind a typed value.
    Declare(Decl),
    /// Print a bound value and its runtime type tag.
    Inspect(String),
}

/// A named, annotated, immutable binding.
#[derive(Debug)]
pub struct Decl {
    pub name: String,
    pub ty: Ty,
    pub value: Value,
}

impl Decl {
    /// Create a declaration.
    pub fn new(name: impl Into<String>, ty: Ty, value: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
        }
    }
}

/// The alias declarations the canonical tour is checked against:
/// `Age` for `number`.
pub fn standard_aliases() -> Result<Aliases, ScriptError> {
    let mut aliases = Aliases::new();
    aliases.define("Age", Ty::Number)?;
    Ok(aliases)
}

/// The canonical tour, one statement per line of the demonstration.
///
/// `d` is computed up front with the same [`add`] any embedder would
/// call; for the pinned literals here that cannot fail, but the
/// construction goes through the fallible path rather than around it.
/// `age` is declared through the `Age` alias and never printed.
pub fn tour() -> Result<Vec<Step>, ScriptError> {
    let a = Value::Number(4.0);
    let b = Value::Text("Surendra".to_string());
    let d = add(&a, &b)?;

    Ok(vec![
        Step::Say(GREETING.to_string()),
        Step::Declare(Decl::new("a", Ty::Number, a)),
        Step::Inspect("a".to_string()),
        Step::Declare(Decl::new("b", Ty::Text, b)),
        Step::Inspect("b".to_string()),
        Step::Declare(Decl::new("d", Ty::union(Ty::Number, Ty::Text), d)),
        Step::Inspect("d".to_string()),
        Step::Declare(Decl::new("isTypeScriptGood", Ty::Bool, Value::Bool(true))),
        Step::Inspect("isTypeScriptGood".to_string()),
        Step::Declare(Decl::new(
            "mySalary",
            Ty::BigInt,
            Value::BigInt(BigInt::from(1_000_000_000_000_000_000_i64)),
        )),
        Step::Inspect("mySalary".to_string()),
        Step::Declare(Decl::new("x", Ty::Symbol, Value::Symbol(Symbol::new("x")))),
        Step::Inspect("x".to_string()),
        Step::Declare(Decl::new("age", Ty::Named("Age".to_string()), Value::Number(30.0))),
    ])
}

/// Run `steps` in order against a fresh environment, writing output
/// lines to `out`.
///
/// A declaration is checked against its annotation before it binds; an
/// inspect writes one line, the value's rendering and its tag separated
/// by a single space. Returns the final environment so callers can
/// examine the bindings.
pub fn run<W: Write>(
    steps: Vec<Step>,
    aliases: &Aliases,
    out: &mut W,
) -> Result<Environment, ScriptError> {
    let mut env = Environment::new();
    for step in steps {
        match step {
            Step::Say(line) => writeln!(out, "{line}")?,
            Step::Declare(decl) => {
                if !decl.ty.admits(&decl.value, aliases)? {
                    return Err(ScriptError::TypeMismatch {
                        name: decl.name,
                        declared: decl.ty,
                        actual: decl.value.type_of(),
                    });
                }
                env.define(&decl.name, decl.value)?;
            }
            Step::Inspect(name) => {
                let value = env
                    .get(&name)
                    .ok_or_else(|| ScriptError::Undefined(name.clone()))?;
                writeln!(out, "{} {}", value, value.type_of())?;
            }
        }
    }
    Ok(env)
}

/// Run the canonical tour against `out`.
pub fn run_tour<W: Write>(out: &mut W) -> Result<Environment, ScriptError> {
    let aliases = standard_aliases()?;
    run(tour()?, &aliases, out)
}
