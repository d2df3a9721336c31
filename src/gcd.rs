//! GCD Calculator.
//!
//! Reads two integers, computes their greatest common divisor with the
//! Euclidean algorithm and prints `GCD(<a>,<b>) = <result>`.
//!
//! Zero operands never reach the modulus step: `GCD(a, 0) = |a|`,
//! `GCD(0, b) = |b|`, and `GCD(0, 0)` is rejected because every integer
//! divides zero.

use std::fmt;

use thiserror::Error;

use crate::console::Console;
use crate::io::{ExitCode, ResultCode};

pub const FIRST_PROMPT: &str = "Enter first number: ";
pub const SECOND_PROMPT: &str = "Enter second number: ";

/// Which operand a read error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("first"),
            Operand::Second => f.write_str("second"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GcdError {
    #[error("{position} number is not an integer: '{token}'")]
    MalformedInput { position: Operand, token: String },

    #[error("{position} number was not entered")]
    MissingInput { position: Operand },

    #[error("GCD(0,0) is undefined: every integer divides zero")]
    DivisorZero,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GcdError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GcdError::Io(_) => ExitCode::GeneralError,
            _ => ExitCode::InvalidInput,
        }
    }

    pub fn result_code(&self) -> ResultCode {
        match self {
            GcdError::MalformedInput { .. } => ResultCode::MalformedInput,
            GcdError::MissingInput { .. } => ResultCode::MissingInput,
            GcdError::DivisorZero => ResultCode::DivisorZero,
            GcdError::Io(_) => ResultCode::IoError,
        }
    }
}

/// Greatest common divisor of `a` and `b`, computed on absolute values.
///
/// The result is unsigned so `|i64::MIN|` stays representable.
pub fn gcd(a: i64, b: i64) -> Result<u64, GcdError> {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());

    match (a, b) {
        (0, 0) => return Err(GcdError::DivisorZero),
        (x, 0) | (0, x) => return Ok(x),
        _ => {}
    }

    if a < b {
        std::mem::swap(&mut a, &mut b);
    }
    while a % b != 0 {
        a %= b;
        std::mem::swap(&mut a, &mut b);
    }
    Ok(b)
}

/// Computed result together with the operands as the user entered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GcdReport {
    pub first: i64,
    pub second: i64,
    pub divisor: u64,
}

impl GcdReport {
    pub fn compute(first: i64, second: i64) -> Result<Self, GcdError> {
        Ok(Self {
            first,
            second,
            divisor: gcd(first, second)?,
        })
    }
}

impl fmt::Display for GcdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GCD({},{}) = {}", self.first, self.second, self.divisor)
    }
}

fn read_operand<C: Console>(console: &mut C, position: Operand) -> Result<i64, GcdError> {
    let token = console
        .read_token()?
        .ok_or(GcdError::MissingInput { position })?;
    token
        .parse::<i64>()
        .map_err(|_| GcdError::MalformedInput { position, token })
}

/// Prompt for both operands and compute their GCD without printing it.
pub fn read_and_compute<C: Console>(console: &mut C) -> Result<GcdReport, GcdError> {
    console.prompt(FIRST_PROMPT)?;
    let first = read_operand(console, Operand::First)?;

    console.prompt(SECOND_PROMPT)?;
    let second = read_operand(console, Operand::Second)?;

    tracing::debug!("[gcd] operands: {first}, {second}");
    let report = GcdReport::compute(first, second)?;
    tracing::debug!("[gcd] result: {}", report.divisor);
    Ok(report)
}

/// Run the interactive GCD Calculator and print the result line.
pub fn run<C: Console>(console: &mut C) -> Result<GcdReport, GcdError> {
    let report = read_and_compute(console)?;
    console.print_line(&report.to_string())?;
    Ok(report)
}
