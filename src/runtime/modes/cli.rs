//! CLI mode

use crate::cli::Commands;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::runtime::lifetime::startup::pre_startup;
use crate::system::logging::LogTarget;

/// Run one CLI command
pub async fn run_cli(config_path: Option<&str>, command: Commands) -> Result<(), CliError> {
    let context = pre_startup(config_path, LogTarget::Configured)
        .map_err(|e| CliError::ConfigError(format!("{:#}", e)))?;
    run_cli_command(&context.config, command).await
}
