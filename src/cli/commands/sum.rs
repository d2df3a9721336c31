//! Sum command.

use crate::config::SumConfig;
use crate::console::{Console, StreamConsole};
use crate::io::{Envelope, ExitCode, OutputFormat};
use crate::sum::{self, SumOutcome};

use super::emit_envelope;

/// JSON value for a total. JSON has no infinity, so an overflowed sum is
/// written as the same string the text output shows.
fn total_value(total: f64, precision: Option<usize>) -> serde_json::Value {
    if total.is_finite() {
        serde_json::Value::from(total)
    } else {
        serde_json::Value::String(sum::format_total(total, precision))
    }
}

/// Run the Sum Calculator on stdin/stdout.
pub fn run(config: &SumConfig, format: OutputFormat) -> ExitCode {
    let mut console = StreamConsole::stdio().with_prompts(!format.is_json());
    execute(&mut console, config, format)
}

pub fn execute<C: Console>(console: &mut C, config: &SumConfig, format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Text => match sum::run(console, config) {
            Ok(_) => ExitCode::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                e.exit_code()
            }
        },
        OutputFormat::Json => {
            let envelope = match sum::read_and_sum(console, config) {
                Ok(outcome @ SumOutcome::Total { count, total }) => Envelope::success(
                    serde_json::json!({ "count": count, "sum": total_value(total, config.precision) }),
                    outcome.render(config.precision),
                ),
                Ok(SumOutcome::Empty) => Envelope::empty(sum::EMPTY_MESSAGE),
                Err(e) => Envelope::error(e.result_code(), e.exit_code(), e.to_string()),
            };
            emit_envelope(console, &envelope.with_command("sum"))
        }
    }
}
