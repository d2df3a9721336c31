//! Process exit codes shared by every command.

/// Exit status reported to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Normal completion, including the "no numbers" branch of `sum`
    Success = 0,
    /// I/O failure or anything not covered below
    GeneralError = 1,
    /// Malformed, missing or mathematically invalid input
    InvalidInput = 2,
    /// Settings could not be loaded
    ConfigError = 3,
}

impl ExitCode {
    /// Map a raw code back; unknown values become [`ExitCode::GeneralError`].
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ExitCode::Success,
            2 => ExitCode::InvalidInput,
            3 => ExitCode::ConfigError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as u8 as i32
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}
