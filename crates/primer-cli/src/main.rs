//! The `primer` binary.
//!
//! No flags, no environment variables: the only external interface is
//! standard output. Errors go to standard error with a nonzero exit.

use primer_script::ScriptError;
use std::io::{self, Write};
use std::process::ExitCode;

fn run<W: Write>(out: &mut W) -> Result<(), ScriptError> {
    primer_script::run_tour(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("primer: {err}");
            ExitCode::FAILURE
        }
    }
}
