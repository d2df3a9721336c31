//! GCD command.

use crate::console::{Console, StreamConsole};
use crate::gcd;
use crate::io::{Envelope, ExitCode, OutputFormat};

use super::emit_envelope;

/// Run the GCD Calculator on stdin/stdout.
pub fn run(format: OutputFormat) -> ExitCode {
    let mut console = StreamConsole::stdio().with_prompts(!format.is_json());
    execute(&mut console, format)
}

pub fn execute<C: Console>(console: &mut C, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Text => match gcd::run(console) {
            Ok(_) => ExitCode::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                e.exit_code()
            }
        },
        OutputFormat::Json => {
            let envelope = match gcd::read_and_compute(console) {
                Ok(report) => Envelope::success(report, report.to_string()),
                Err(e) => Envelope::error(e.result_code(), e.exit_code(), e.to_string()),
            };
            emit_envelope(console, &envelope.with_command("gcd"))
        }
    }
}
