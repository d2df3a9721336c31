//! Config command - display the effective settings.

use crate::config::Settings;
use crate::io::ExitCode;

/// Print the merged settings as TOML.
pub fn run_config(settings: &Settings) -> ExitCode {
    match settings.to_toml() {
        Ok(toml_str) => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error displaying config: {e}");
            ExitCode::GeneralError
        }
    }
}
