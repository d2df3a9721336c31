//! Sum Calculator.
//!
//! Reads one line of whitespace-separated real numbers and prints how many
//! were parsed and their sum, or `Numbers were not entered.` when none were.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SumConfig;
use crate::console::Console;
use crate::io::{ExitCode, ResultCode};

pub const PROMPT: &str = "Enter numbers in one line separated by spaces:";
pub const EMPTY_MESSAGE: &str = "Numbers were not entered.";

/// What to do with a token that is not a finite real number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    /// Stop at the first unparsable token; the rest of the line is ignored
    #[default]
    Stop,
    /// Skip unparsable tokens and keep going
    Skip,
}

#[derive(Error, Debug)]
pub enum SumError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SumError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::GeneralError
    }

    pub fn result_code(&self) -> ResultCode {
        ResultCode::IoError
    }
}

/// Parse a token as a finite `f64`.
///
/// `inf`, `NaN` and literals that overflow to infinity are not numbers here.
fn parse_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numbers parsed from `line`, left to right, according to `policy`.
pub fn parse_numbers(line: &str, policy: TokenPolicy) -> Vec<f64> {
    let mut numbers = Vec::new();
    for token in line.split_whitespace() {
        match parse_token(token) {
            Some(value) => numbers.push(value),
            None if policy == TokenPolicy::Stop => {
                tracing::debug!("[sum] stopping at non-numeric token '{token}'");
                break;
            }
            None => tracing::debug!("[sum] skipping non-numeric token '{token}'"),
        }
    }
    numbers
}

/// Result of summing one input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SumOutcome {
    /// No numbers were parsed
    Empty,
    Total { count: usize, total: f64 },
}

impl SumOutcome {
    pub fn from_numbers(numbers: &[f64]) -> Self {
        if numbers.is_empty() {
            return SumOutcome::Empty;
        }
        SumOutcome::Total {
            count: numbers.len(),
            total: numbers.iter().sum(),
        }
    }

    /// Output line for this outcome.
    ///
    /// `precision = None` prints the shortest decimal that round-trips to the
    /// same `f64`; `Some(n)` prints exactly `n` decimals.
    pub fn render(&self, precision: Option<usize>) -> String {
        match *self {
            SumOutcome::Empty => EMPTY_MESSAGE.to_string(),
            SumOutcome::Total { count, total } => {
                format!("Sum of {count} numbers: {}", format_total(total, precision))
            }
        }
    }
}

pub fn format_total(total: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{total:.digits$}"),
        None => format!("{total}"),
    }
}

/// Sum the numbers found in `line`.
pub fn sum_line(line: &str, policy: TokenPolicy) -> SumOutcome {
    SumOutcome::from_numbers(&parse_numbers(line, policy))
}

/// Prompt for one line and sum it without printing the result.
///
/// End of input is treated as an empty line.
pub fn read_and_sum<C: Console>(console: &mut C, config: &SumConfig) -> Result<SumOutcome, SumError> {
    console.prompt(&format!("{PROMPT}\n"))?;
    let line = console.read_line()?.unwrap_or_default();
    let outcome = sum_line(&line, config.on_invalid_token);
    tracing::debug!("[sum] outcome: {outcome:?}");
    Ok(outcome)
}

/// Run the interactive Sum Calculator and print the result line.
pub fn run<C: Console>(console: &mut C, config: &SumConfig) -> Result<SumOutcome, SumError> {
    let outcome = read_and_sum(console, config)?;
    console.print_line(&outcome.render(config.precision))?;
    Ok(outcome)
}
