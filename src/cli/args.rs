//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Interactive GCD and sum calculators
#[derive(Parser, Debug)]
#[command(
    name = "numcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive GCD and sum calculators",
    long_about = "Compute the greatest common divisor of two integers, or the sum of a line of real numbers.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  numcalc gcd\n  echo '12 18' | numcalc gcd\n  echo '1.5 2.5 3' | numcalc sum\n  echo '4 abc 6' | numcalc --json sum"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true, env = "NUMCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print one JSON envelope instead of prompts and a text line
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Greatest common divisor of two integers
    #[command(about = "Read two integers and print their greatest common divisor")]
    Gcd,

    /// Sum of one line of real numbers
    #[command(about = "Read one line of numbers and print their count and sum")]
    Sum,

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}

impl Commands {
    pub fn name(self) -> &'static str {
        match self {
            Commands::Gcd => "gcd",
            Commands::Sum => "sum",
            Commands::Config => "config",
        }
    }
}
