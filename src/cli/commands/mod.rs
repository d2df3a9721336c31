//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module and returns the exit code
//! the process should terminate with.

pub mod config;
pub mod gcd;
pub mod sum;

use serde::Serialize;

use crate::console::Console;
use crate::io::{Envelope, ExitCode};

/// Print a JSON envelope as one line and return its exit code.
pub(crate) fn emit_envelope<C: Console, T: Serialize>(
    console: &mut C,
    envelope: &Envelope<T>,
) -> ExitCode {
    let json = match envelope.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            return ExitCode::GeneralError;
        }
    };
    if let Err(e) = console.print_line(&json) {
        eprintln!("Error: {e}");
        return ExitCode::GeneralError;
    }
    ExitCode::from_code(envelope.exit_code)
}
