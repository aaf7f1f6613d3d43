//! Command-line entry point: loads settings, seeds the in-memory stores and
//! dispatches one remote system operation.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use system_manager::inbound::cli::{self, Cli, CliError};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run().await {
        Ok(rendered) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "remote system command failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String, CliError> {
    let cli = Cli::parse();
    let settings = cli::load_settings()?;
    let outcome = cli::run(&cli, &settings).await?;
    Ok(outcome.render())
}
