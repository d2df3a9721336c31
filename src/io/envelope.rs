//! JSON output envelope used by `--json`.
//!
//! Every command prints exactly one envelope on stdout in JSON mode, so a
//! caller can pipe the result without scraping the human-readable line.

use serde::Serialize;

use super::ExitCode;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Computation produced a result
    Success,
    /// Input held nothing to compute with (not an error)
    Empty,
    /// Operation failed
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    EmptyInput,
    MalformedInput,
    MissingInput,
    DivisorZero,
    IoError,
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Operation outcome
    pub status: Status,

    /// Machine-readable result code
    pub code: ResultCode,

    /// Unix exit code the process terminates with
    pub exit_code: u8,

    /// Human-readable message, identical to the text-mode output line
    pub message: String,

    /// Result payload (null on error and on empty input)
    pub data: Option<T>,

    /// Response metadata
    pub meta: Meta,
}

/// Response metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    /// Schema version (semver)
    pub schema_version: String,

    /// Command that produced the envelope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: None,
        }
    }
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.into(),
            message: message.into(),
            data: Some(data),
            meta: Meta::default(),
        }
    }

    /// Create an envelope for input that held nothing to compute.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            status: Status::Empty,
            code: ResultCode::EmptyInput,
            exit_code: ExitCode::Success.into(),
            message: message.into(),
            data: None,
            meta: Meta::default(),
        }
    }

    /// Create an error envelope.
    pub fn error(code: ResultCode, exit_code: ExitCode, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            code,
            exit_code: exit_code.into(),
            message: message.into(),
            data: None,
            meta: Meta::default(),
        }
    }

    /// Set the producing command in metadata.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.meta.command = Some(command.into());
        self
    }

    /// Serialize to compact JSON (one line).
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let envelope = Envelope::success(6u64, "GCD(12,18) = 6").with_command("gcd");

        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.code, ResultCode::Ok);
        assert_eq!(envelope.exit_code, 0);
        assert_eq!(envelope.meta.command.as_deref(), Some("gcd"));
        assert_eq!(envelope.data, Some(6));
    }

    #[test]
    fn test_empty_envelope_still_exits_zero() {
        let envelope: Envelope<()> = Envelope::empty("Numbers were not entered.");

        assert_eq!(envelope.status, Status::Empty);
        assert_eq!(envelope.code, ResultCode::EmptyInput);
        assert_eq!(envelope.exit_code, 0);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_error_envelope() {
        let envelope: Envelope<()> = Envelope::error(
            ResultCode::DivisorZero,
            ExitCode::InvalidInput,
            "GCD(0,0) is undefined",
        );

        assert_eq!(envelope.status, Status::Error);
        assert_eq!(envelope.code, ResultCode::DivisorZero);
        assert_eq!(envelope.exit_code, 2);
    }

    #[test]
    fn test_json_serialization() {
        let envelope = Envelope::success(serde_json::json!({ "count": 3 }), "Sum of 3 numbers: 7.5")
            .with_command("sum");

        let json = envelope.to_json().unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"code\":\"OK\""));
        assert!(json.contains("\"schema_version\":\"1.0.0\""));
        assert!(json.contains("\"command\":\"sum\""));
        assert!(!json.contains('\n'));
    }
}
