pub mod cli;
pub mod config;
pub mod console;
pub mod gcd;
pub mod io;
pub mod logging;
pub mod sum;

pub use config::Settings;
pub use console::{Console, StreamConsole};
pub use gcd::{GcdError, GcdReport, gcd};
pub use io::{ExitCode, OutputFormat};
pub use sum::{SumOutcome, TokenPolicy, sum_line};
