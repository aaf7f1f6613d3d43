//! Command-line adapter for remote system operations.
//!
//! Argument parsing is declared with `clap`; [`execute`] maps a parsed
//! [`Command`] onto the [`RemoteSystemCommand`] port so the behaviour can be
//! exercised without spawning a process.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use ortho_config::OrthoConfig;
use serde_json::Value;
use thiserror::Error;

use crate::config::ManagerSettings;
use crate::domain::ports::RemoteSystemCommand;
use crate::domain::{SystemManager, SystemManagerError, UserId};
use crate::outbound::memory::{FixtureLoadError, FixtureSnapshot};

/// Errors reported by the command-line adapter.
#[derive(Debug, Error)]
pub enum CliError {
    /// The dispatcher reported a failure.
    #[error(transparent)]
    Manager(#[from] SystemManagerError),
    /// Fixture loading failed.
    #[error(transparent)]
    Fixtures(#[from] FixtureLoadError),
    /// Settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// The `--payload` argument is not a JSON array.
    #[error("payload must be a JSON array: {message}")]
    InvalidPayload {
        /// Description of the payload error.
        message: String,
    },
}

/// Access-controlled dispatcher for remote systems.
#[derive(Debug, Parser)]
#[command(name = "system-manager", version, about)]
pub struct Cli {
    /// JSON fixtures seeding the in-memory stores; overrides the
    /// `SYSTEM_MANAGER_FIXTURES_PATH` setting.
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Remote system operations.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start a remote system and print its records.
    Start(ReadArgs),
    /// Stop a remote system and print its records.
    Stop(ReadArgs),
    /// Register a remote system from a JSON array payload.
    Add(AddArgs),
    /// Remove a remote system.
    Delete(DeleteArgs),
}

/// Arguments shared by `start` and `stop`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ReadArgs {
    /// Acting user identifier.
    #[arg(long)]
    pub user: String,
    /// Remote system identifier; omitted means `null`.
    #[arg(long)]
    pub system: Option<String>,
}

/// Arguments for `add`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct AddArgs {
    /// Acting user identifier.
    #[arg(long)]
    pub user: String,
    /// JSON array describing the remote system, e.g. `["777", "tres"]`.
    #[arg(long)]
    pub payload: String,
}

/// Arguments for `delete`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct DeleteArgs {
    /// Requesting user identifier; accepted but not used for the removal.
    #[arg(long)]
    pub user: Option<String>,
    /// Remote system identifier.
    #[arg(long)]
    pub system: String,
}

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Records returned by `start` or `stop`.
    Records(Vec<Value>),
    /// `add` or `delete` completed.
    Done,
}

impl CommandOutcome {
    /// Single-line rendering written to stdout.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use system_manager::inbound::cli::CommandOutcome;
    ///
    /// let outcome = CommandOutcome::Records(vec![json!("uno"), json!("dos")]);
    /// assert_eq!(outcome.render(), r#"["uno","dos"]"#);
    /// assert_eq!(CommandOutcome::Done.render(), "ok");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Records(records) => Value::Array(records.clone()).to_string(),
            Self::Done => "ok".to_owned(),
        }
    }
}

/// Parse a `--payload` argument into its items.
pub fn parse_payload(raw: &str) -> Result<Vec<Value>, CliError> {
    match serde_json::from_str(raw) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(CliError::InvalidPayload {
            message: format!("found {other}"),
        }),
        Err(err) => Err(CliError::InvalidPayload {
            message: err.to_string(),
        }),
    }
}

/// Run `command` against the dispatcher port.
pub async fn execute(
    command: &Command,
    manager: &dyn RemoteSystemCommand,
) -> Result<CommandOutcome, CliError> {
    let outcome = match command {
        Command::Start(args) => CommandOutcome::Records(
            manager
                .start_remote_system(&UserId::new(args.user.as_str()), args.system.as_deref())
                .await?,
        ),
        Command::Stop(args) => CommandOutcome::Records(
            manager
                .stop_remote_system(&UserId::new(args.user.as_str()), args.system.as_deref())
                .await?,
        ),
        Command::Add(args) => {
            let payload = parse_payload(&args.payload)?;
            manager
                .add_remote_system(&UserId::new(args.user.as_str()), payload)
                .await?;
            CommandOutcome::Done
        }
        Command::Delete(args) => {
            let requested_by = args.user.as_deref().map(UserId::new);
            manager
                .delete_remote_system(requested_by.as_ref(), &args.system)
                .await?;
            CommandOutcome::Done
        }
    };
    Ok(outcome)
}

/// Load settings from the environment and configuration files.
///
/// The command line belongs to clap, so only the program name is handed to
/// the settings loader.
pub fn load_settings() -> Result<ManagerSettings, CliError> {
    ManagerSettings::load_from_iter([OsString::from("system-manager")]).map_err(|err| {
        CliError::Config {
            message: err.to_string(),
        }
    })
}

/// Build the dispatcher over in-memory stores and run the parsed command.
///
/// The `--fixtures` flag wins over the configured fixtures path; without
/// either, both stores start empty.
pub async fn run(cli: &Cli, settings: &ManagerSettings) -> Result<CommandOutcome, CliError> {
    let fixtures = cli.fixtures.as_deref().or_else(|| settings.fixtures_path());
    let snapshot = match fixtures {
        Some(path) => FixtureSnapshot::from_file(path)?,
        None => FixtureSnapshot::default(),
    };
    let (authenticator, data_provider) = snapshot.into_adapters();
    let manager = SystemManager::new(Arc::new(authenticator), Arc::new(data_provider))
        .with_service_account(settings.service_account());
    execute(&cli.command, &manager).await
}
