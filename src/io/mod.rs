//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Text and JSON output selection
//! - The JSON result envelope
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;
pub mod format;

pub use envelope::{Envelope, Meta, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;
pub use format::OutputFormat;
