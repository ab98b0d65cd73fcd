use config::Environment;
use error_stack::ResultExt;
use thiserror::Error;
use tracing::{info, instrument, Instrument};

use crate::adapters::api::user_api_client::UserApiClient;
use crate::adapters::config::app_config::{AppConfig, EnvironmentVariables};
use crate::adapters::sheets::user_sheet_reader::UserSheetReader;
use crate::application::preview_users_routine::PreviewUsersRoutine;
use crate::application::sync_users_routine::SyncUsersRoutine;
use crate::ports::routine::Routine;

pub const USAGE: &str = "usage: sheet-sync [sync|preview]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Read the sheet and upload every user.
    Sync,
    /// Read the sheet and only log what would be uploaded.
    Preview,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command: {details}")]
    InvalidCommand { details: String },
    #[error("Invalid configuration")]
    Configuration,
    #[error("Command execution failed")]
    ExecutionFailed,
}

pub struct CliAdapter {
    config: AppConfig,
}

impl std::fmt::Debug for CliAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliAdapter")
            .field("config", &self.config)
            .finish()
    }
}

impl CliAdapter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Logs what was found in the environment, then validates it.
    pub fn from_environment(source: Environment) -> error_stack::Result<Self, CommandError> {
        let variables =
            EnvironmentVariables::load(source).change_context(CommandError::Configuration)?;
        variables.log_summary();

        let config =
            AppConfig::from_variables(&variables).change_context(CommandError::Configuration)?;
        Ok(Self::new(config))
    }

    /// `args[0]` is the program name; no subcommand means `sync`.
    pub fn parse_args(args: &[String]) -> Result<Command, CommandError> {
        match args.get(1).map(|s| s.as_str()) {
            None | Some("sync") => Ok(Command::Sync),
            Some("preview") => Ok(Command::Preview),
            Some(other) => Err(CommandError::InvalidCommand {
                details: format!("unknown subcommand '{}', {}", other, USAGE),
            }),
        }
    }

    pub fn routine(&self, command: Command) -> Box<dyn Routine> {
        let reader = UserSheetReader::new(self.config.sheets.clone());
        match command {
            Command::Sync => Box::new(SyncUsersRoutine::new(
                reader,
                UserApiClient::new(self.config.api.clone()),
            )),
            Command::Preview => Box::new(PreviewUsersRoutine::new(reader)),
        }
    }

    #[instrument(skip(self))]
    pub async fn run(&self, command: Command) -> error_stack::Result<(), CommandError> {
        let routine = self.routine(command);
        info!("Running {}", routine.name());

        routine
            .run()
            .instrument(tracing::span!(
                tracing::Level::INFO,
                "routine",
                routine = routine.name()
            ))
            .await
            .change_context(CommandError::ExecutionFailed)
    }
}
