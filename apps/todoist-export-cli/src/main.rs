//! Todoist exporter - write Todoist data to CSV files

use clap::Parser;
use std::process::ExitCode;
use todoist_export_cli::logging::{self, LogConfig};
use todoist_export_cli::{run, Cli};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&LogConfig::from_flags(cli.verbose, cli.json_logs)) {
        eprintln!("WARN: {e}");
    }

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
