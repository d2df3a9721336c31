use anyhow::Context;
use clap::Parser;

use numcalc::Settings;
use numcalc::cli::commands;
use numcalc::cli::{Cli, Commands};
use numcalc::io::{ExitCode, OutputFormat};

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    Settings::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("failed to load settings from {}", path.display()),
        None => "failed to load settings".to_string(),
    })
}

fn main() {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            std::process::exit(i32::from(ExitCode::ConfigError));
        }
    };

    numcalc::logging::init_with_config(&settings.logging);
    tracing::debug!("[cli] command: {}", cli.command.name());

    let format = OutputFormat::from_json_flag(cli.json);
    let code = match cli.command {
        Commands::Gcd => commands::gcd::run(format),
        Commands::Sum => commands::sum::run(&settings.sum, format),
        Commands::Config => commands::config::run_config(&settings),
    };

    std::process::exit(i32::from(code));
}
