// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use http_helper::{AppError, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    commands::validate_args(args)?;

    // Load config first to fail early if there's an issue
    let config = Config::load()?;

    // The guard must be kept alive until exit so file logs are flushed
    let (log_file_path, _guard) = logging::setup_logging(args, &config)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.save_config {
        return commands::handle_save_config_command(args, &config);
    }

    if args.list_config {
        return commands::handle_list_config_command(&config);
    }

    commands::handle_request_command(args, &config)
}
