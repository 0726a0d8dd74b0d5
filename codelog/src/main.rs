use std::process::ExitCode;

use anyhow::Context;
use codelog::cli;
use codelog::clock::SystemClock;
use codelog::config::{Settings, LOG_ENV};
use codelog::error::RunError;
use codelog::runner::run_file;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse_args();
    let settings = Settings::from_args(&args);
    init_logging(settings.log_level);

    match try_main(&settings) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("codelog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(settings: &Settings) -> anyhow::Result<ExitCode> {
    let stdout = std::io::stdout();
    match run_file(settings, &SystemClock, stdout.lock()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // The fixed extension message goes to stdout like any script output.
        Err(e @ RunError::UnsupportedExtension(_)) => {
            println!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).with_context(|| format!("running {}", settings.script.display())),
    }
}

/// Install the stderr log subscriber.  The filter comes from `CODELOG_LOG`,
/// then `RUST_LOG`, then `default_level`.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
